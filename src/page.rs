use crate::colour::Colour;
use crate::font::Font;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf};
use std::io::Write;

/// A font selection for a single span of text: which document font, at what size
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A single positioned run of text on a page
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    /// Baseline coordinates of the first glyph, in page space
    pub coords: (Pt, Pt),
}

/// A filled rectangle. Page decorations (tints, sidebars, banners, bars)
/// are emitted as these
#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub rect: Rect,
    pub fill: Colour,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    Rect(RectLayout),
}

/// A single page of the document. Content items are rendered in insertion
/// order, so anything meant to sit behind the text (decorations) must be
/// added before the text that overlaps it
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where flowed content can live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out content
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_default();
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(span));
    }

    pub fn add_rect(&mut self, rect: RectLayout) {
        self.contents.push(PageContents::Rect(rect));
    }

    #[allow(clippy::write_with_newline)]
    fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        if self.contents.is_empty() {
            return Ok(Vec::default());
        }

        let mut content: Vec<u8> = Vec::default();

        for page_content in self.contents.iter() {
            match page_content {
                PageContents::Text(span) => {
                    write!(&mut content, "q\n")?;
                    write!(
                        &mut content,
                        "/F{} {} Tf\n",
                        span.font.id.index(),
                        span.font.size
                    )?;
                    write_fill_colour(&mut content, span.colour)?;
                    write!(&mut content, "BT\n")?;
                    write!(&mut content, "{} {} Td\n", span.coords.0, span.coords.1)?;
                    write_pdf_string(&mut content, &span.text)?;
                    write!(&mut content, " Tj\n")?;
                    write!(&mut content, "ET\n")?;
                    write!(&mut content, "Q\n")?;
                }
                PageContents::Rect(rect) => {
                    write!(&mut content, "q\n")?;
                    write_fill_colour(&mut content, rect.fill)?;
                    write!(
                        &mut content,
                        "{} {} {} {} re\nf\n",
                        rect.rect.x1,
                        rect.rect.y1,
                        rect.rect.width(),
                        rect.rect.height()
                    )?;
                    write!(&mut content, "Q\n")?;
                }
            }
        }

        Ok(content)
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<Font>,
        writer: &mut Pdf,
    ) -> Result<(), std::io::Error> {
        let id = refs.get(RefType::Page(page_index)).unwrap();
        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(refs.get(RefType::PageTree).unwrap());

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (i, _) in fonts.iter() {
            resource_fonts.pair(
                Name(format!("F{}", i.index()).as_bytes()),
                refs.get(RefType::Font(i.index())).unwrap(),
            );
        }
        resource_fonts.finish();
        resources.finish();

        let content_id = refs.gen(RefType::ContentForPage(page_index));
        page.contents(content_id);
        page.finish();

        let rendered = self.render()?;
        writer.stream(content_id, rendered.as_slice());

        Ok(())
    }
}

fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => writeln!(content, "{} {} {} rg", r, g, b),
        Colour::Grey { g } => writeln!(content, "{} g", g),
    }
}

/// Writes `text` as a parenthesized PDF string literal. The standard-14
/// faces are written with WinAnsiEncoding, so characters up to U+00FF pass
/// through as single bytes and anything beyond is substituted with '?'
fn write_pdf_string(content: &mut Vec<u8>, text: &str) -> Result<(), std::io::Error> {
    content.push(b'(');
    for ch in text.chars() {
        match ch {
            '(' | ')' | '\\' => {
                content.push(b'\\');
                content.push(ch as u8);
            }
            '\n' | '\r' | '\t' => content.push(b' '),
            _ if (ch as u32) <= 0xff => content.push(ch as u8),
            _ => content.push(b'?'),
        }
    }
    content.push(b')');
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontFace;
    use crate::units::Mm;

    #[test]
    fn content_box_sits_within_margins() {
        let page = Page::new(
            crate::pagesize::A4,
            Some(Margins::trbl(
                Mm(25.0).into(),
                Mm(25.0).into(),
                Mm(20.0).into(),
                Mm(25.0).into(),
            )),
        );
        assert_eq!(page.content_box.x1, Pt::from(Mm(25.0)));
        assert_eq!(page.content_box.y1, Pt::from(Mm(20.0)));
        assert!(page.content_box.x2 < page.media_box.x2);
        assert!(page.content_box.y2 < page.media_box.y2);
    }

    #[test]
    fn renders_rects_and_spans_in_insertion_order() {
        let mut fonts: Arena<Font> = Arena::new();
        let font = fonts.alloc(Font::builtin(FontFace::Helvetica));

        let mut page = Page::new(crate::pagesize::A4, None);
        page.add_rect(RectLayout {
            rect: page.media_box,
            fill: crate::colours::PAGE_TINT,
        });
        page.add_span(SpanLayout {
            text: "He(llo) \\ world".to_string(),
            font: SpanFont {
                id: font,
                size: Pt(12.0),
            },
            colour: crate::colours::BLACK,
            coords: (Pt(10.0), Pt(700.0)),
        });

        let content = page.render().unwrap();
        let content = String::from_utf8_lossy(&content);
        let rect_at = content.find("re\nf").unwrap();
        let text_at = content.find("Tj").unwrap();
        assert!(rect_at < text_at);
        assert!(content.contains("(He\\(llo\\) \\\\ world)"));
    }
}
