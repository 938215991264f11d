use crate::colour::{colours, Colour};
use crate::font::FontFamily;
use crate::units::{Mm, Pt};

/// The enumerated visual templates a resume can be rendered with
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Template {
    #[default]
    Traditional,
    Modern,
    Creative,
    Executive,
}

impl Template {
    /// Parse a template name as submitted by the caller. Unknown, empty, or
    /// differently-cased names silently select [Template::Traditional]; a
    /// permissive default, not an error condition
    pub fn from_name(name: &str) -> Template {
        match name.trim() {
            "traditional" => Template::Traditional,
            "modern" => Template::Modern,
            "creative" => Template::Creative,
            "executive" => Template::Executive,
            other => {
                log::debug!("unrecognized template {other:?}, using traditional");
                Template::Traditional
            }
        }
    }

    /// Look this template up in the static style table. Each template maps
    /// to exactly one [StyleDescriptor]; all per-template differences in the
    /// rendered output are data in this table, not separate code paths
    pub fn style(self) -> StyleDescriptor {
        match self {
            Template::Traditional => StyleDescriptor {
                header_family: FontFamily::Times,
                header_size: Pt(14.0),
                body_family: FontFamily::Times,
                body_size: Pt(12.0),
                accent: Colour::new_rgb_bytes(0, 0, 0),
                decoration: Decoration::FullPageTint {
                    fill: colours::PAGE_TINT,
                },
            },
            Template::Modern => StyleDescriptor {
                header_family: FontFamily::Helvetica,
                header_size: Pt(14.0),
                body_family: FontFamily::Helvetica,
                body_size: Pt(12.0),
                accent: Colour::new_rgb_bytes(44, 62, 80),
                decoration: Decoration::LeftSidebar {
                    width: Mm(60.0),
                    fill: Colour::new_rgb_bytes(44, 62, 80),
                    label: DecorationLabel {
                        text: "Modern Template",
                        size: Pt(16.0),
                        from_top: Mm(37.0),
                    },
                },
            },
            Template::Creative => StyleDescriptor {
                header_family: FontFamily::Helvetica,
                header_size: Pt(14.0),
                body_family: FontFamily::Helvetica,
                body_size: Pt(12.0),
                accent: Colour::new_rgb_bytes(255, 99, 71),
                decoration: Decoration::TopBanner {
                    height: Mm(30.0),
                    fill: Colour::new_rgb_bytes(255, 99, 71),
                    label: DecorationLabel {
                        text: "Creative Template",
                        size: Pt(18.0),
                        from_top: Mm(17.0),
                    },
                },
            },
            Template::Executive => StyleDescriptor {
                header_family: FontFamily::Helvetica,
                header_size: Pt(14.0),
                body_family: FontFamily::Helvetica,
                body_size: Pt(12.0),
                accent: Colour::new_rgb_bytes(52, 73, 94),
                decoration: Decoration::ThinLeftBar {
                    width: Mm(8.0),
                    fill: Colour::new_rgb_bytes(52, 73, 94),
                    label: DecorationLabel {
                        text: "Executive Template",
                        size: Pt(16.0),
                        from_top: Mm(27.0),
                    },
                },
            },
        }
    }
}

/// Resolve a template identifier submitted by the caller straight to its
/// style descriptor
pub fn resolve(template_name: &str) -> StyleDescriptor {
    Template::from_name(template_name).style()
}

/// Everything that differs between templates: fonts, accent colour, and the
/// per-page background decoration. Exactly one descriptor is active for the
/// duration of one render
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub header_family: FontFamily,
    pub header_size: Pt,
    pub body_family: FontFamily,
    pub body_size: Pt,
    /// Section headings are drawn in this colour
    pub accent: Colour,
    pub decoration: Decoration,
}

/// The template-specific background shape, redrawn identically on every
/// physical page of the document
#[derive(Debug, Clone, PartialEq)]
pub enum Decoration {
    /// Fill the entire page with a light neutral background
    FullPageTint { fill: Colour },
    /// Fill a fixed-width vertical band on the left edge
    LeftSidebar {
        width: Mm,
        fill: Colour,
        label: DecorationLabel,
    },
    /// Fill a fixed-height horizontal band along the top edge
    TopBanner {
        height: Mm,
        fill: Colour,
        label: DecorationLabel,
    },
    /// Fill a narrow vertical band on the left edge
    ThinLeftBar {
        width: Mm,
        fill: Colour,
        label: DecorationLabel,
    },
}

/// A short white label drawn over a decoration band in the style's bold
/// header face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationLabel {
    pub text: &'static str,
    pub size: Pt,
    /// Distance of the label baseline below the top edge of the page
    pub from_top: Mm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_names_resolve_to_their_template() {
        assert_eq!(Template::from_name("traditional"), Template::Traditional);
        assert_eq!(Template::from_name("modern"), Template::Modern);
        assert_eq!(Template::from_name("creative"), Template::Creative);
        assert_eq!(Template::from_name("executive"), Template::Executive);
    }

    #[test]
    fn unknown_names_fall_back_to_traditional() {
        assert_eq!(Template::from_name(""), Template::Traditional);
        assert_eq!(Template::from_name("brutalist"), Template::Traditional);
        assert_eq!(Template::from_name("MODERN"), Template::Traditional);
    }

    #[test]
    fn each_template_carries_its_decoration_kind() {
        assert!(matches!(
            Template::Traditional.style().decoration,
            Decoration::FullPageTint { .. }
        ));
        assert!(matches!(
            Template::Modern.style().decoration,
            Decoration::LeftSidebar { .. }
        ));
        assert!(matches!(
            Template::Creative.style().decoration,
            Decoration::TopBanner { .. }
        ));
        assert!(matches!(
            Template::Executive.style().decoration,
            Decoration::ThinLeftBar { .. }
        ));
    }

    #[test]
    fn resolve_is_a_pure_lookup() {
        assert_eq!(resolve("modern"), Template::Modern.style());
        assert_eq!(resolve("nonsense"), Template::Traditional.style());
    }

    #[test]
    fn modern_sidebar_geometry_matches_the_style_table() {
        match Template::Modern.style().decoration {
            Decoration::LeftSidebar { width, fill, label } => {
                assert_eq!(width, Mm(60.0));
                assert_eq!(fill, Colour::new_rgb_bytes(44, 62, 80));
                assert_eq!(label.text, "Modern Template");
            }
            other => panic!("expected a left sidebar, got {other:?}"),
        }
    }
}
