use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::Id;
use pdf_writer::{Name, Pdf};

/// One of the PDF standard-14 Type1 faces used by the resume styles. These
/// faces are resolved by every conforming PDF reader, so no font program is
/// embedded in the generated document; the crate only needs the AFM glyph
/// metrics below to measure and wrap text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontFace {
    TimesRoman,
    TimesBold,
    TimesItalic,
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
}

impl FontFace {
    /// The PostScript BaseFont name written into the PDF font dictionary
    pub fn base_name(self) -> &'static str {
        match self {
            FontFace::TimesRoman => "Times-Roman",
            FontFace::TimesBold => "Times-Bold",
            FontFace::TimesItalic => "Times-Italic",
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
            FontFace::HelveticaOblique => "Helvetica-Oblique",
        }
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            FontFace::TimesRoman => &TIMES_ROMAN_WIDTHS,
            FontFace::TimesBold => &TIMES_BOLD_WIDTHS,
            FontFace::TimesItalic => &TIMES_ITALIC_WIDTHS,
            FontFace::Helvetica | FontFace::HelveticaOblique => &HELVETICA_WIDTHS,
            FontFace::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Advance width of `ch` in 1/1000s of the font size. Characters outside
    /// the printable ASCII range are approximated with the width of 'o',
    /// which keeps wrapping estimates sane for the odd accented character
    pub(crate) fn char_width(self, ch: char) -> u16 {
        let widths = self.widths();
        match ch as u32 {
            0x20..=0x7e => widths[ch as usize - 0x20],
            _ => widths['o' as usize - 0x20],
        }
    }

    /// Distance from the baseline to the top of the face, in 1/1000s of the
    /// font size
    fn ascender(self) -> i16 {
        match self {
            FontFace::TimesRoman | FontFace::TimesItalic => 683,
            FontFace::TimesBold => 676,
            FontFace::Helvetica | FontFace::HelveticaBold | FontFace::HelveticaOblique => 718,
        }
    }

    /// Distance from the baseline to the bottom of the face, in 1/1000s of
    /// the font size. Negative, as the descender reaches below the baseline
    fn descender(self) -> i16 {
        match self {
            FontFace::TimesRoman => -217,
            FontFace::TimesBold | FontFace::TimesItalic => -205,
            FontFace::Helvetica | FontFace::HelveticaBold | FontFace::HelveticaOblique => -207,
        }
    }
}

/// The two font families the resume styles draw from, each resolving to a
/// regular, bold, and italic standard-14 face
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FontFamily {
    Times,
    Helvetica,
}

impl FontFamily {
    pub fn regular(self) -> FontFace {
        match self {
            FontFamily::Times => FontFace::TimesRoman,
            FontFamily::Helvetica => FontFace::Helvetica,
        }
    }

    pub fn bold(self) -> FontFace {
        match self {
            FontFamily::Times => FontFace::TimesBold,
            FontFamily::Helvetica => FontFace::HelveticaBold,
        }
    }

    pub fn italic(self) -> FontFace {
        match self {
            FontFamily::Times => FontFace::TimesItalic,
            FontFamily::Helvetica => FontFace::HelveticaOblique,
        }
    }
}

/// A font resource held by a [Document](crate::Document). Fonts are referred
/// to throughout the crate by their arena [Id] within the document; pages
/// reference them as `/F<index>` in their resource dictionaries
pub struct Font {
    pub face: FontFace,
}

impl Font {
    /// Create a font resource for one of the built-in standard-14 faces
    pub fn builtin(face: FontFace) -> Font {
        Font { face }
    }

    /// Calculate the ascent (distance from the baseline to the top of the font)
    /// for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        size * (self.face.ascender() as f32 / 1000.0)
    }

    /// Calculate the descent (distance from the baseline to the bottom of the
    /// font) for the given font size. Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        size * (self.face.descender() as f32 / 1000.0)
    }

    /// Advance width of a single character at the given font size
    pub fn char_width(&self, ch: char, size: Pt) -> Pt {
        size * (self.face.char_width(ch) as f32 / 1000.0)
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        let font_id = refs.gen(RefType::Font(font_index));

        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.face.base_name().as_bytes()));
        font.encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

// AFM advance widths for the printable ASCII range (0x20..=0x7e), in
// 1/1000s of the font size, straight from the Adobe core font metrics.

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, // ' '..')'
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // '*'..'3'
    556, 556, 556, 556, 556, 556, 278, 278, 584, 584, // '4'..'='
    584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, // '>'..'G'
    722, 278, 500, 667, 556, 833, 722, 778, 667, 778, // 'H'..'Q'
    722, 667, 611, 722, 667, 944, 667, 667, 611, 278, // 'R'..'['
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556, // '\\'..'e'
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 'f'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, // 'p'..'y'
    500, 334, 260, 334, 584,                          // 'z'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, // ' '..')'
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // '*'..'3'
    556, 556, 556, 556, 556, 556, 333, 333, 584, 584, // '4'..'='
    584, 611, 975, 722, 722, 722, 722, 667, 611, 778, // '>'..'G'
    722, 278, 556, 722, 611, 833, 722, 778, 667, 778, // 'H'..'Q'
    722, 667, 611, 722, 667, 944, 667, 667, 611, 333, // 'R'..'['
    278, 333, 584, 556, 333, 556, 611, 556, 611, 556, // '\\'..'e'
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 'f'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, // 'p'..'y'
    500, 389, 280, 389, 584,                          // 'z'..'~'
];

#[rustfmt::skip]
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, // ' '..')'
    500, 564, 250, 333, 250, 278, 500, 500, 500, 500, // '*'..'3'
    500, 500, 500, 500, 500, 500, 278, 278, 564, 564, // '4'..'='
    564, 444, 921, 722, 667, 667, 722, 611, 556, 722, // '>'..'G'
    722, 333, 389, 722, 611, 889, 722, 722, 556, 722, // 'H'..'Q'
    667, 556, 611, 722, 722, 944, 722, 722, 611, 333, // 'R'..'['
    278, 333, 469, 500, 333, 444, 500, 444, 500, 444, // '\\'..'e'
    333, 500, 500, 278, 278, 500, 278, 778, 500, 500, // 'f'..'o'
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, // 'p'..'y'
    444, 480, 200, 480, 541,                          // 'z'..'~'
];

#[rustfmt::skip]
const TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, // ' '..')'
    500, 570, 250, 333, 250, 278, 500, 500, 500, 500, // '*'..'3'
    500, 500, 500, 500, 500, 500, 333, 333, 570, 570, // '4'..'='
    570, 500, 930, 722, 667, 722, 722, 667, 611, 778, // '>'..'G'
    778, 389, 500, 778, 667, 944, 722, 778, 611, 778, // 'H'..'Q'
    722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, // 'R'..'['
    278, 333, 581, 500, 333, 500, 556, 444, 556, 444, // '\\'..'e'
    333, 500, 556, 278, 333, 556, 278, 833, 556, 500, // 'f'..'o'
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, // 'p'..'y'
    444, 394, 220, 394, 520,                          // 'z'..'~'
];

#[rustfmt::skip]
const TIMES_ITALIC_WIDTHS: [u16; 95] = [
    250, 333, 420, 500, 500, 833, 778, 214, 333, 333, // ' '..')'
    500, 675, 250, 333, 250, 278, 500, 500, 500, 500, // '*'..'3'
    500, 500, 500, 500, 500, 500, 333, 333, 675, 675, // '4'..'='
    675, 500, 920, 611, 611, 667, 722, 611, 611, 722, // '>'..'G'
    722, 333, 444, 667, 556, 833, 667, 722, 611, 722, // 'H'..'Q'
    611, 500, 556, 722, 611, 833, 611, 556, 556, 389, // 'R'..'['
    278, 389, 422, 500, 333, 500, 500, 444, 500, 444, // '\\'..'e'
    278, 500, 500, 278, 278, 444, 278, 722, 500, 500, // 'f'..'o'
    500, 500, 389, 389, 278, 500, 444, 667, 444, 444, // 'p'..'y'
    389, 400, 275, 400, 541,                          // 'z'..'~'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_resolve_to_faces() {
        assert_eq!(FontFamily::Times.regular(), FontFace::TimesRoman);
        assert_eq!(FontFamily::Times.bold(), FontFace::TimesBold);
        assert_eq!(FontFamily::Helvetica.italic(), FontFace::HelveticaOblique);
        assert_eq!(FontFace::HelveticaBold.base_name(), "Helvetica-Bold");
    }

    #[test]
    fn widths_scale_with_size() {
        let font = Font::builtin(FontFace::Helvetica);
        // 'i' is narrower than 'm' in any proportional face
        assert!(font.char_width('i', Pt(12.0)) < font.char_width('m', Pt(12.0)));
        // doubling the size doubles the advance
        let single = font.char_width('a', Pt(10.0));
        let double = font.char_width('a', Pt(20.0));
        assert!((double.0 - single.0 * 2.0).abs() < 1e-4);
    }

    #[test]
    fn non_ascii_falls_back_to_an_estimate() {
        let font = Font::builtin(FontFace::TimesRoman);
        assert_eq!(
            font.char_width('é', Pt(12.0)),
            font.char_width('o', Pt(12.0))
        );
    }

    #[test]
    fn metrics_are_sensible() {
        let font = Font::builtin(FontFace::TimesRoman);
        assert!(font.ascent(Pt(12.0)) > Pt(0.0));
        assert!(font.descent(Pt(12.0)) < Pt(0.0));
    }
}
