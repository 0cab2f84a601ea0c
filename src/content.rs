//! Content stream rendering for laid out text.

use crate::font::Font;
use crate::page::{SpanFont, SpanLayout};
use id_arena::Arena;
use std::io::Write;

/// Renders text spans to a PDF content stream, switching fonts only when a span's
/// font differs from the one before it. Text is written as hex strings in the
/// font's single-byte encoding.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_text_spans(
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    let Some(first) = spans.first() else {
        return Ok(content);
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    write_font(&mut content, current_font)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write_font(&mut content, current_font)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0 .0, span.coords.1 .0)?;
        write!(content, "<")?;
        for byte in fonts[current_font.id].encode(&span.text) {
            write!(content, "{byte:02x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn write_font(content: &mut Vec<u8>, font: SpanFont) -> Result<(), std::io::Error> {
    write!(content, "/F{} {} Tf\n", font.id.index(), font.size.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pt;

    #[test]
    fn switches_fonts_only_when_needed() {
        let mut fonts = Arena::new();
        let regular = fonts.alloc(Font::Helvetica);
        let bold = fonts.alloc(Font::HelveticaBold);
        let span = |text: &str, id, y| SpanLayout {
            text: text.to_string(),
            font: SpanFont { id, size: Pt(11.0) },
            coords: (Pt(40.0), Pt(y)),
        };

        let spans = vec![
            span("Hi", bold, 750.0),
            span("a", regular, 736.0),
            span("b", regular, 724.0),
        ];
        let rendered = render_text_spans(&spans, &fonts).unwrap();
        let rendered = String::from_utf8(rendered).unwrap();

        assert_eq!(rendered.matches(" Tf\n").count(), 2);
        assert!(rendered.starts_with("q\n/F1 11 Tf\nBT\n40 750 Td\n<4869> Tj\nET\n"));
        assert!(rendered.contains("/F0 11 Tf\nBT\n40 736 Td\n<61> Tj\n"));
        assert!(rendered.ends_with("Q\n"));
    }

    #[test]
    fn nothing_to_render() {
        let fonts = Arena::new();
        assert!(render_text_spans(&[], &fonts).unwrap().is_empty());
    }
}
