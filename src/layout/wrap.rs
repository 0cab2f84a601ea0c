use crate::font::{Font, TextMeasurer};
use crate::units::Pt;
use crate::PDFError;
use log::debug;

/// Greedily splits text into lines no wider than `max_width`, breaking only at whitespace.
///
/// Words are accumulated onto the current line for as long as the measured width of
/// `line + " " + word` does not exceed `max_width`; a candidate that exactly fits stays on
/// the line. Runs of whitespace collapse to a single space. A word that is wider than
/// `max_width` on its own is never split or truncated: it is placed on a line by itself
/// and left to overhang.
///
/// At least one line is always returned. Empty or whitespace-only text produces a single
/// empty line. The only failure is the measurer failing.
pub fn wrap_text<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    font: Font,
    size: Pt,
    max_width: Pt,
) -> Result<Vec<String>, PDFError> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            start_line(measurer, &mut current, word, font, size, max_width)?;
            continue;
        }

        let candidate = format!("{current} {word}");
        if measurer.width_of_text(&candidate, font, size)? > max_width {
            lines.push(std::mem::take(&mut current));
            start_line(measurer, &mut current, word, font, size, max_width)?;
        } else {
            current = candidate;
        }
    }

    lines.push(current);
    Ok(lines)
}

fn start_line<M: TextMeasurer + ?Sized>(
    measurer: &M,
    line: &mut String,
    word: &str,
    font: Font,
    size: Pt,
    max_width: Pt,
) -> Result<(), PDFError> {
    let width = measurer.width_of_text(word, font, size)?;
    if width > max_width {
        debug!("word {word:?} overhangs its line ({width} > {max_width})");
    }
    line.push_str(word);
    Ok(())
}
