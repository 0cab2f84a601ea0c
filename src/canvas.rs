use crate::document::Document;
use crate::font::Font;
use crate::info::Info;
use crate::layout::{DrawOp, Margins};
use crate::page::{Page, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::units::Pt;
use crate::PDFError;
use std::io::Write;

/// A drawing surface that turns drawing commands into a persisted document. Commands are
/// issued strictly in order and nothing is ever read back.
pub trait Canvas {
    /// Set the font for all subsequent text
    fn set_font(&mut self, font: Font, size: Pt);
    /// Draw a single line of text with its baseline origin at `(x, y)`
    fn draw_text(&mut self, x: Pt, y: Pt, text: &str);
    /// Finish the current page and start a fresh one
    fn new_page(&mut self);
    /// Persist the document. A canvas can only be saved once
    fn save(&mut self) -> Result<(), PDFError>;
}

/// Replays laid out drawing instructions against a canvas
pub fn replay<C: Canvas + ?Sized>(ops: &[DrawOp], canvas: &mut C) {
    for op in ops {
        match op {
            DrawOp::SetFont { font, size } => canvas.set_font(*font, *size),
            DrawOp::Text { x, y, text } => canvas.draw_text(*x, *y, text),
        }
    }
}

/// A [Canvas] that builds a PDF [Document] and writes it to `W` when saved. Text drawn
/// before any font is set uses 12pt Helvetica.
pub struct PdfCanvas<W: Write> {
    document: Document,
    page_size: PageSize,
    margins: Option<Margins>,
    current: Page,
    font: Option<SpanFont>,
    out: W,
    saved: bool,
}

impl<W: Write> PdfCanvas<W> {
    pub fn new(page_size: PageSize, margins: Option<Margins>, out: W) -> PdfCanvas<W> {
        PdfCanvas {
            document: Document::default(),
            page_size,
            margins,
            current: Page::new(page_size, margins),
            font: None,
            out,
            saved: false,
        }
    }

    /// Sets the metadata written into the document's info dictionary
    pub fn set_info(&mut self, info: Info) {
        self.document.set_info(info);
    }

    /// The number of finished pages
    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Give back the writer the document was (or would have been) saved to
    pub fn into_inner(self) -> W {
        self.out
    }

    fn finish_page(&mut self) {
        let page = std::mem::replace(&mut self.current, Page::new(self.page_size, self.margins));
        self.document.add_page(page);
    }
}

impl<W: Write> Canvas for PdfCanvas<W> {
    fn set_font(&mut self, font: Font, size: Pt) {
        let id = self.document.add_font(font);
        self.font = Some(SpanFont { id, size });
    }

    fn draw_text(&mut self, x: Pt, y: Pt, text: &str) {
        let font = match self.font {
            Some(font) => font,
            None => {
                let font = SpanFont {
                    id: self.document.add_font(Font::Helvetica),
                    size: Pt(12.0),
                };
                self.font = Some(font);
                font
            }
        };
        self.current.add_span(SpanLayout {
            text: text.to_string(),
            font,
            coords: (x, y),
        });
    }

    fn new_page(&mut self) {
        self.finish_page();
    }

    fn save(&mut self) -> Result<(), PDFError> {
        if self.saved {
            return Err(PDFError::Io(std::io::Error::other(
                "canvas has already been saved",
            )));
        }
        self.saved = true;
        if !self.current.is_empty() || self.document.page_count() == 0 {
            self.finish_page();
        }
        let document = std::mem::take(&mut self.document);
        document.write(&mut self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::LETTER;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl Canvas for Recorder {
        fn set_font(&mut self, font: Font, size: Pt) {
            self.calls.push(format!("font {font} {size}"));
        }

        fn draw_text(&mut self, x: Pt, y: Pt, text: &str) {
            self.calls.push(format!("text {x} {y} {text}"));
        }

        fn new_page(&mut self) {
            self.calls.push("page".into());
        }

        fn save(&mut self) -> Result<(), PDFError> {
            self.calls.push("save".into());
            Ok(())
        }
    }

    #[test]
    fn replay_issues_commands_in_order() {
        let ops = vec![
            DrawOp::SetFont {
                font: Font::HelveticaBold,
                size: Pt(11.0),
            },
            DrawOp::Text {
                x: Pt(40.0),
                y: Pt(700.0),
                text: "Title".into(),
            },
        ];
        let mut recorder = Recorder::default();
        replay(&ops, &mut recorder);
        assert_eq!(
            recorder.calls,
            vec!["font Helvetica-Bold 11", "text 40 700 Title"]
        );
    }

    #[test]
    fn saves_one_page_per_new_page() {
        let mut canvas = PdfCanvas::new(LETTER, None, Vec::new());
        canvas.draw_text(Pt(40.0), Pt(700.0), "first");
        canvas.new_page();
        assert_eq!(canvas.page_count(), 1);
        canvas.save().unwrap();

        let bytes = canvas.into_inner();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Count 1"));
        assert!(text.contains("/BaseFont /Helvetica"));
    }

    #[test]
    fn saving_without_drawing_still_writes_a_page() {
        let mut canvas = PdfCanvas::new(LETTER, None, Vec::new());
        canvas.save().unwrap();
        let bytes = canvas.into_inner();
        assert!(String::from_utf8_lossy(&bytes).contains("/Count 1"));
    }

    #[test]
    fn cannot_save_twice() {
        let mut canvas = PdfCanvas::new(LETTER, None, Vec::new());
        canvas.save().unwrap();
        assert!(matches!(canvas.save(), Err(PDFError::Io(_))));
    }
}
