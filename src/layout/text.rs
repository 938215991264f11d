use crate::font::Font;
use crate::units::Pt;

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Pt {
    text.chars().map(|ch| font.char_width(ch, size)).sum()
}

/// Wraps `text` into lines no wider than `max_width` at the given font and
/// size. Wrapping happens at whitespace; a word too long for a whole line is
/// split at the exact character so a line never exceeds the width. Tabs are
/// expanded to spaces and `\r\n` / `\r` are normalized to `\n` first; each
/// embedded newline forces a line break, so blank input paragraphs survive
/// as empty lines.
///
/// The caller is responsible for placing the returned lines on one or more
/// pages—this function knows nothing about vertical space.
pub fn wrap_text(text: &str, font: &Font, size: Pt, max_width: Pt) -> Vec<String> {
    const TABSIZE: usize = 4;

    // replace tabs with spaces
    let text = text.replace('\t', &" ".repeat(TABSIZE));
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");

    let space_width = font.char_width(' ', size);
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = Pt(0.0);

        for word in paragraph.split_whitespace() {
            let word_width = width_of_text(word, font, size);
            let separator = if line.is_empty() { Pt(0.0) } else { space_width };

            if line_width + separator + word_width <= max_width {
                if !line.is_empty() {
                    line.push(' ');
                    line_width += space_width;
                }
                line.push_str(word);
                line_width += word_width;
                continue;
            }

            // the word does not fit on the current line
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = Pt(0.0);
            }

            if word_width <= max_width {
                line.push_str(word);
                line_width = word_width;
            } else {
                // the word alone overflows a whole line; split it at the
                // exact character
                for ch in word.chars() {
                    let advance = font.char_width(ch, size);
                    if line_width + advance > max_width && !line.is_empty() {
                        lines.push(std::mem::take(&mut line));
                        line_width = Pt(0.0);
                    }
                    line.push(ch);
                    line_width += advance;
                }
            }
        }

        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontFace;

    fn helvetica() -> Font {
        Font::builtin(FontFace::Helvetica)
    }

    #[test]
    fn short_text_stays_on_one_line() {
        let font = helvetica();
        let lines = wrap_text("hello world", &font, Pt(12.0), Pt(500.0));
        assert_eq!(lines, vec!["hello world".to_string()]);
    }

    #[test]
    fn no_line_exceeds_the_maximum_width() {
        let font = helvetica();
        let size = Pt(12.0);
        let max_width = Pt(120.0);
        let lines = wrap_text(
            "The quick brown fox jumps over the lazy dog, again and again and again.",
            &font,
            size,
            max_width,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(width_of_text(line, &font, size) <= max_width);
        }
    }

    #[test]
    fn wraps_at_whitespace_keeping_words_intact() {
        let font = helvetica();
        let lines = wrap_text("alpha beta gamma delta", &font, Pt(12.0), Pt(80.0));
        for line in &lines {
            for word in line.split_whitespace() {
                assert!(["alpha", "beta", "gamma", "delta"].contains(&word));
            }
        }
    }

    #[test]
    fn splits_overlong_words_at_the_character() {
        let font = helvetica();
        let size = Pt(12.0);
        let max_width = Pt(60.0);
        let lines = wrap_text("abcdefghijklmnopqrstuvwxyz0123456789", &font, size, max_width);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(width_of_text(line, &font, size) <= max_width);
        }
        // nothing was dropped
        let rejoined: String = lines.concat();
        assert_eq!(rejoined, "abcdefghijklmnopqrstuvwxyz0123456789");
    }

    #[test]
    fn embedded_newlines_force_breaks() {
        let font = helvetica();
        let lines = wrap_text("one\n\ntwo", &font, Pt(12.0), Pt(500.0));
        assert_eq!(
            lines,
            vec!["one".to_string(), String::new(), "two".to_string()]
        );
    }

    #[test]
    fn empty_text_produces_a_single_empty_line() {
        let font = helvetica();
        let lines = wrap_text("", &font, Pt(12.0), Pt(500.0));
        assert_eq!(lines, vec![String::new()]);
    }
}
