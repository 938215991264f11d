use id_arena::{Arena, Id};
use log::debug;

use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::{Font, FontFace};
use crate::info::Info;
use crate::layout::{self, Margins};
use crate::page::{Page, RectLayout, SpanFont, SpanLayout};
use crate::pagesize;
use crate::record::ResumeRecord;
use crate::rect::Rect;
use crate::style::{Decoration, DecorationLabel, StyleDescriptor, Template};
use crate::units::{Mm, Pt};
use crate::PdfError;

/// The organization branding rendered into every page footer
const COMPANY_NAME: &str = "Deltatechstore LLC";
const COMPANY_SLOGAN: &str = "Innovating Your Career Journey";

const NO_SKILLS: &str = "No skills provided";
const NO_PROJECTS: &str = "No projects provided";
const NO_ACTIVITIES: &str = "No clubs or activities provided";
const NO_AWARDS: &str = "No awards or achievements provided";

/// Height of one body text line; the unit the space-estimation heuristics
/// count in
const BODY_LINE: Mm = Mm(5.0);
/// Line height for skills, education, and section heading lines
const WIDE_LINE: Mm = Mm(6.0);
/// Line height for the two identity lines at the top of page 1
const IDENTITY_LINE: Mm = Mm(8.0);
/// A heading this close to the bottom page edge moves to a fresh page
/// instead of starting a section it cannot fit any lines of
const HEADING_FLOOR: Mm = Mm(37.0);

/// Render `record` with the named template and serialize the finished
/// document to PDF bytes. This is the whole caller-facing flow: the
/// (excluded) form layer hands over a validated record plus a template name
/// and receives bytes it can persist or stream as it sees fit.
///
/// Each call constructs its own renderer, so concurrent callers never share
/// layout state.
pub fn render_resume(record: &ResumeRecord, template: &str) -> Result<Vec<u8>, PdfError> {
    let doc = ResumeRenderer::new(Template::from_name(template)).render(record);
    let mut bytes = Vec::new();
    doc.write(&mut bytes)?;
    Ok(bytes)
}

/// The document font handles one render works with, resolved once from the
/// active style
struct StyleFonts {
    header_bold: Id<Font>,
    body: Id<Font>,
    body_bold: Id<Font>,
    body_italic: Id<Font>,
    /// Times italic regardless of template; only the footer brand line uses it
    footer: Id<Font>,
}

/// Lays a [ResumeRecord] out into a paginated [Document] in a fixed section
/// order, breaking to fresh pages as content demands and redrawing the
/// template decoration and footer on every page.
///
/// A renderer is single-use: construct one per render, call [render](Self::render),
/// and the finished document comes back. Nothing is shared between instances,
/// which keeps concurrent renders (one per web request, say) fully isolated.
pub struct ResumeRenderer {
    doc: Document,
    style: StyleDescriptor,
    fonts: StyleFonts,
    page: Page,
    /// Vertical write position on the current page, in page space measured
    /// up from the bottom edge. Every content-emitting operation moves it
    /// down; every page break resets it to the top margin
    cursor: Pt,
    /// Current fill colour for flowed text. Headings flip this to the accent
    /// colour while they draw and hand black back afterwards
    text_colour: Colour,
}

impl ResumeRenderer {
    pub fn new(template: Template) -> ResumeRenderer {
        let style = template.style();
        let mut doc = Document::default();
        let mut interned: Vec<(FontFace, Id<Font>)> = Vec::new();

        let fonts = StyleFonts {
            header_bold: intern_font(&mut doc, &mut interned, style.header_family.bold()),
            body: intern_font(&mut doc, &mut interned, style.body_family.regular()),
            body_bold: intern_font(&mut doc, &mut interned, style.body_family.bold()),
            body_italic: intern_font(&mut doc, &mut interned, style.body_family.italic()),
            footer: intern_font(&mut doc, &mut interned, FontFace::TimesItalic),
        };

        let page = decorated_page(&style, &fonts, &doc.fonts);
        let cursor = page.content_box.y2;

        ResumeRenderer {
            doc,
            style,
            fonts,
            page,
            cursor,
            text_colour: colours::BLACK,
        }
    }

    /// Render the full document: identity block, then the fixed section
    /// sequence Summary, Education, Skills, Projects, Clubs & Activities,
    /// Awards. Consumes the renderer; the returned [Document] is final
    pub fn render(mut self, record: &ResumeRecord) -> Document {
        debug!("rendering resume for {}", record.display_name());

        self.identity_block(record);
        self.summary_section(record);
        self.education_section(record);
        self.skills_section(record);
        self.projects_section(record);
        self.activities_section(record);
        self.awards_section(record);

        let ResumeRenderer { mut doc, page, .. } = self;
        doc.add_page(page);
        doc.set_info(
            Info::new()
                .title(format!("{}'s Resume", record.display_name()))
                .author(record.display_name())
                .subject("Resume")
                .producer(COMPANY_NAME)
                .clone(),
        );
        debug!("rendered {} page(s)", doc.page_count());
        doc
    }

    /// Centered name and contact lines. These sit at the top of page 1 and
    /// are never space-checked
    fn identity_block(&mut self, record: &ResumeRecord) {
        self.centered_line(
            record.display_name(),
            self.fonts.body_bold,
            Pt(24.0),
            IDENTITY_LINE.into(),
        );
        let contact = format!("{} | {}", record.display_email(), record.display_phone());
        self.centered_line(
            &contact,
            self.fonts.body,
            self.style.body_size,
            IDENTITY_LINE.into(),
        );
        self.gap(Mm(8.0));
    }

    fn summary_section(&mut self, record: &ResumeRecord) {
        self.section_heading("Summary");
        self.ensure_space(4);
        self.paragraph(
            record.display_summary(),
            self.fonts.body,
            self.style.body_size,
            BODY_LINE.into(),
        );
        self.gap(Mm(6.0));
    }

    fn education_section(&mut self, record: &ResumeRecord) {
        self.section_heading("Education");
        self.ensure_space(4);
        let degree = format!(
            "{} ({})",
            record.display_degree(),
            record.display_grad_year()
        );
        self.paragraph(&degree, self.fonts.body, self.style.body_size, WIDE_LINE.into());
        self.paragraph(
            record.display_university(),
            self.fonts.body,
            self.style.body_size,
            WIDE_LINE.into(),
        );
        self.gap(Mm(6.0));
    }

    fn skills_section(&mut self, record: &ResumeRecord) {
        self.section_heading("Skills");
        self.ensure_space(4);
        self.joined_list(&record.skills, NO_SKILLS);
        self.gap(Mm(6.0));
    }

    fn projects_section(&mut self, record: &ResumeRecord) {
        self.section_heading("Projects");
        if record.projects.is_empty() {
            self.paragraph(NO_PROJECTS, self.fonts.body, Pt(11.0), BODY_LINE.into());
            self.gap(Mm(4.0));
            return;
        }
        for project in &record.projects {
            self.ensure_space(6);
            self.paragraph(
                project.display_title(),
                self.fonts.body_bold,
                Pt(11.0),
                BODY_LINE.into(),
            );
            self.paragraph(&project.description, self.fonts.body, Pt(11.0), BODY_LINE.into());
            self.gap(Mm(6.0));
        }
    }

    fn activities_section(&mut self, record: &ResumeRecord) {
        self.section_heading("Clubs & Extracurricular Activities");
        if record.activities.is_empty() {
            self.paragraph(NO_ACTIVITIES, self.fonts.body, Pt(11.0), BODY_LINE.into());
            self.gap(Mm(4.0));
            return;
        }
        for activity in &record.activities {
            self.ensure_space(6);
            self.paragraph(
                activity.display_name(),
                self.fonts.body_bold,
                Pt(11.0),
                BODY_LINE.into(),
            );
            let role = format!("Role: {}", activity.role);
            self.paragraph(&role, self.fonts.body_italic, Pt(11.0), BODY_LINE.into());
            self.paragraph(&activity.description, self.fonts.body, Pt(11.0), BODY_LINE.into());
            self.gap(Mm(4.0));
        }
    }

    fn awards_section(&mut self, record: &ResumeRecord) {
        self.section_heading("Awards & Achievements");
        self.ensure_space(4);
        if record.awards.is_empty() {
            self.paragraph(NO_AWARDS, self.fonts.body, Pt(11.0), BODY_LINE.into());
        } else {
            // duplicates render as-is, in input order
            for award in &record.awards {
                let line = format!("- {}", award);
                self.paragraph(&line, self.fonts.body, Pt(11.0), BODY_LINE.into());
            }
        }
        self.gap(Mm(8.0));
    }

    /// Draw a section heading in the style's bold header face and accent
    /// colour. A heading too close to the bottom edge starts a fresh page
    /// first. Every heading draw ends by resetting the text colour to body
    /// black; the accent must never survive past the heading itself
    fn section_heading(&mut self, title: &str) {
        if self.cursor < HEADING_FLOOR.into() {
            self.page_break();
        }
        self.text_colour = self.style.accent;
        self.emit_line(title, self.fonts.header_bold, self.style.header_size, WIDE_LINE.into());
        self.gap(Mm(1.0));
        self.text_colour = colours::BLACK;
    }

    /// Heuristic pre-check called before a section body and before each
    /// repeated entry: if fewer than `min_lines` body lines fit above the
    /// bottom margin, break to a fresh page now rather than mid-entry. This
    /// is an estimate, not a measurement; [paragraph](Self::paragraph) still
    /// guards every line it emits
    fn ensure_space(&mut self, min_lines: usize) {
        let remaining = self.cursor - self.page.content_box.y1;
        let required = Pt::from(BODY_LINE) * min_lines as f32;
        if remaining < required {
            self.page_break();
        }
    }

    /// Wrap `text` to the content width and emit every resulting line,
    /// breaking to new pages as needed; a paragraph of any length renders
    /// without ever writing below the bottom margin
    fn paragraph(&mut self, text: &str, font_id: Id<Font>, size: Pt, line_height: Pt) {
        let width = self.page.content_box.width();
        let lines = layout::wrap_text(text, &self.doc.fonts[font_id], size, width);
        for line in lines {
            self.emit_line(&line, font_id, size, line_height);
        }
    }

    /// Render `items` joined into a single prefixed line, or the placeholder
    /// when the list is empty
    fn joined_list(&mut self, items: &[String], placeholder: &str) {
        let line = if items.is_empty() {
            placeholder.to_string()
        } else {
            format!("- {}", items.join(", "))
        };
        self.paragraph(&line, self.fonts.body, self.style.body_size, WIDE_LINE.into());
    }

    /// Emit one pre-wrapped line at the cursor, left-aligned to the content
    /// box. Breaks to a new page first when the line would cross the bottom
    /// margin
    fn emit_line(&mut self, text: &str, font_id: Id<Font>, size: Pt, line_height: Pt) {
        if self.cursor - line_height < self.page.content_box.y1 {
            self.page_break();
        }
        let ascent = self.doc.fonts[font_id].ascent(size);
        self.page.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont { id: font_id, size },
            colour: self.text_colour,
            coords: (self.page.content_box.x1, self.cursor - ascent),
        });
        self.cursor -= line_height;
    }

    /// Emit one line centered within the content box. No bottom-margin
    /// check; only the identity block uses this, at the top of page 1
    fn centered_line(&mut self, text: &str, font_id: Id<Font>, size: Pt, line_height: Pt) {
        let (width, ascent) = {
            let font = &self.doc.fonts[font_id];
            (layout::width_of_text(text, font, size), font.ascent(size))
        };
        let x = self.page.content_box.x1 + (self.page.content_box.width() - width) / 2.0;
        self.page.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont { id: font_id, size },
            colour: self.text_colour,
            coords: (x, self.cursor - ascent),
        });
        self.cursor -= line_height;
    }

    /// Advance the cursor by a fixed vertical gap. May leave the cursor past
    /// the bottom margin; the next emitting operation breaks the page then
    fn gap(&mut self, height: Mm) {
        self.cursor -= height.into();
    }

    /// Finish the current page into the document and start a fresh one with
    /// its decoration and footer already drawn, cursor back at the top
    /// margin
    fn page_break(&mut self) {
        let finished = std::mem::replace(
            &mut self.page,
            decorated_page(&self.style, &self.fonts, &self.doc.fonts),
        );
        self.doc.add_page(finished);
        self.cursor = self.page.content_box.y2;
        debug!("page break: starting page {}", self.doc.page_count() + 1);
    }
}

fn intern_font(
    doc: &mut Document,
    interned: &mut Vec<(FontFace, Id<Font>)>,
    face: FontFace,
) -> Id<Font> {
    if let Some(&(_, id)) = interned.iter().find(|(f, _)| *f == face) {
        return id;
    }
    let id = doc.add_font(Font::builtin(face));
    interned.push((face, id));
    id
}

fn page_margins() -> Margins {
    Margins::trbl(
        Mm(25.0).into(),
        Mm(25.0).into(),
        Mm(20.0).into(),
        Mm(25.0).into(),
    )
}

/// Allocate a fresh A4 page with the style's decoration and the brand
/// footer already in place. Called for page 1 and for every page break, so
/// each physical page carries its decoration exactly once
fn decorated_page(style: &StyleDescriptor, fonts: &StyleFonts, arena: &Arena<Font>) -> Page {
    let mut page = Page::new(pagesize::A4, Some(page_margins()));
    draw_decoration(&mut page, style, fonts);
    draw_footer(&mut page, fonts, arena);
    page
}

fn draw_decoration(page: &mut Page, style: &StyleDescriptor, fonts: &StyleFonts) {
    match &style.decoration {
        Decoration::FullPageTint { fill } => {
            page.add_rect(RectLayout {
                rect: page.media_box,
                fill: *fill,
            });
        }
        Decoration::LeftSidebar { width, fill, label }
        | Decoration::ThinLeftBar { width, fill, label } => {
            page.add_rect(RectLayout {
                rect: Rect {
                    x1: Pt(0.0),
                    y1: Pt(0.0),
                    x2: (*width).into(),
                    y2: page.media_box.y2,
                },
                fill: *fill,
            });
            draw_label(page, fonts, label);
        }
        Decoration::TopBanner { height, fill, label } => {
            page.add_rect(RectLayout {
                rect: Rect {
                    x1: Pt(0.0),
                    y1: page.media_box.y2 - (*height).into(),
                    x2: page.media_box.x2,
                    y2: page.media_box.y2,
                },
                fill: *fill,
            });
            draw_label(page, fonts, label);
        }
    }
}

fn draw_label(page: &mut Page, fonts: &StyleFonts, label: &DecorationLabel) {
    page.add_span(SpanLayout {
        text: label.text.to_string(),
        font: SpanFont {
            id: fonts.header_bold,
            size: label.size,
        },
        colour: colours::WHITE,
        coords: (
            Mm(10.0).into(),
            page.media_box.y2 - label.from_top.into(),
        ),
    });
}

/// The fixed per-page footer overlay: brand name and slogan, right-aligned
/// near the bottom edge in muted grey italic. Independent of template and
/// outside the cursor-tracked content flow
fn draw_footer(page: &mut Page, fonts: &StyleFonts, arena: &Arena<Font>) {
    let size = Pt(8.0);
    let font = &arena[fonts.footer];
    let right = page.content_box.x2;
    for (text, from_bottom) in [(COMPANY_NAME, Mm(20.0)), (COMPANY_SLOGAN, Mm(15.0))] {
        let width = layout::width_of_text(text, font, size);
        page.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id: fonts.footer,
                size,
            },
            colour: colours::FOOTER_GREY,
            coords: (right - width, from_bottom.into()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageContents;

    fn span_texts(page: &Page) -> Vec<&str> {
        page.contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(span) => Some(span.text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn heading_near_the_bottom_breaks_first() {
        let mut renderer = ResumeRenderer::new(Template::Traditional);
        renderer.cursor = Pt::from(Mm(30.0));
        renderer.section_heading("Projects");
        assert_eq!(renderer.doc.page_count(), 1);
        // heading landed on the fresh page, near the top margin
        assert!(span_texts(&renderer.page).contains(&"Projects"));
        assert!(renderer.cursor > Pt::from(Mm(200.0)));
    }

    #[test]
    fn heading_resets_the_text_colour() {
        let mut renderer = ResumeRenderer::new(Template::Creative);
        renderer.section_heading("Summary");
        assert_eq!(renderer.text_colour, colours::BLACK);
        // the heading span itself used the accent colour
        let heading = renderer
            .page
            .contents
            .iter()
            .find_map(|c| match c {
                PageContents::Text(span) if span.text == "Summary" => Some(span),
                _ => None,
            })
            .expect("heading span exists");
        assert_eq!(heading.colour, Template::Creative.style().accent);
    }

    #[test]
    fn ensure_space_breaks_when_too_little_room_remains() {
        let mut renderer = ResumeRenderer::new(Template::Traditional);
        renderer.cursor = renderer.page.content_box.y1 + Pt::from(Mm(10.0));
        renderer.ensure_space(6);
        assert_eq!(renderer.doc.page_count(), 1);

        let mut renderer = ResumeRenderer::new(Template::Traditional);
        renderer.cursor = renderer.page.content_box.y1 + Pt::from(Mm(100.0));
        renderer.ensure_space(6);
        assert_eq!(renderer.doc.page_count(), 0);
    }

    #[test]
    fn long_paragraphs_flow_onto_new_pages_without_clipping() {
        let mut renderer = ResumeRenderer::new(Template::Traditional);
        let text = lipsum::lipsum(1200);
        renderer.paragraph(&text, renderer.fonts.body, Pt(12.0), BODY_LINE.into());
        // far more text than one page holds, so at least one break happened
        assert!(renderer.doc.page_count() >= 1);

        let bottom = renderer.page.content_box.y1;
        for page in renderer.doc.page_order.iter().map(|id| &renderer.doc.pages[*id]) {
            for content in &page.contents {
                if let PageContents::Text(span) = content {
                    if span.colour == colours::FOOTER_GREY {
                        continue;
                    }
                    assert!(span.coords.1 >= bottom);
                }
            }
        }
    }

    #[test]
    fn joined_list_formats_items_and_placeholder() {
        let mut renderer = ResumeRenderer::new(Template::Traditional);
        renderer.joined_list(&["Rust".to_string(), "Git".to_string()], NO_SKILLS);
        assert!(span_texts(&renderer.page).contains(&"- Rust, Git"));

        let mut renderer = ResumeRenderer::new(Template::Traditional);
        renderer.joined_list(&[], NO_SKILLS);
        assert!(span_texts(&renderer.page).contains(&NO_SKILLS));
    }
}
