use crate::font::{Font, TextMeasurer};
use crate::layout::{wrap_text, Cursor};
use crate::units::Pt;
use crate::PDFError;

/// One semantic unit of document content. Blocks are consumed once, in order, by a
/// [BlockRenderer]; the checked constructors reject styles that would break layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A section title, set on a single line in the theme's title style
    Title(String),
    /// Body text wrapped to the available width
    Paragraph {
        text: String,
        font_size: Pt,
        leading: Pt,
    },
    /// Bulleted items, each wrapped to the width left over after the bullet indent
    BulletList {
        items: Vec<String>,
        font_size: Pt,
        leading: Pt,
    },
    /// A single unwrapped line in an arbitrary font, followed by a fixed advance
    Line {
        text: String,
        font: Font,
        font_size: Pt,
        advance: Pt,
    },
    /// Vertical space with nothing drawn in it
    Spacer(Pt),
}

impl Block {
    pub fn title<S: Into<String>>(text: S) -> Block {
        Block::Title(text.into())
    }

    pub fn paragraph<S: Into<String>>(
        text: S,
        font_size: Pt,
        leading: Pt,
    ) -> Result<Block, PDFError> {
        let block = Block::Paragraph {
            text: text.into(),
            font_size,
            leading,
        };
        block.validate()?;
        Ok(block)
    }

    pub fn bullet_list<I, S>(items: I, font_size: Pt, leading: Pt) -> Result<Block, PDFError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let block = Block::BulletList {
            items: items.into_iter().map(Into::into).collect(),
            font_size,
            leading,
        };
        block.validate()?;
        Ok(block)
    }

    pub fn line<S: Into<String>>(
        text: S,
        font: Font,
        font_size: Pt,
        advance: Pt,
    ) -> Result<Block, PDFError> {
        let block = Block::Line {
            text: text.into(),
            font,
            font_size,
            advance,
        };
        block.validate()?;
        Ok(block)
    }

    pub fn spacer(gap: Pt) -> Result<Block, PDFError> {
        let block = Block::Spacer(gap);
        block.validate()?;
        Ok(block)
    }

    /// Check that sizes and leadings are positive and advances are never upward
    pub fn validate(&self) -> Result<(), PDFError> {
        match self {
            Block::Title(_) => Ok(()),
            Block::Paragraph {
                font_size, leading, ..
            }
            | Block::BulletList {
                font_size, leading, ..
            } => {
                positive("font size", *font_size)?;
                positive("leading", *leading)
            }
            Block::Line {
                font_size, advance, ..
            } => {
                positive("font size", *font_size)?;
                non_negative("advance", *advance)
            }
            Block::Spacer(gap) => non_negative("spacer", *gap),
        }
    }
}

fn positive(what: &str, value: Pt) -> Result<(), PDFError> {
    if value.is_positive() {
        Ok(())
    } else {
        Err(PDFError::InvalidBlock(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

fn non_negative(what: &str, value: Pt) -> Result<(), PDFError> {
    if value.is_non_negative() {
        Ok(())
    } else {
        Err(PDFError::InvalidBlock(format!(
            "{what} must not be negative, got {value}"
        )))
    }
}

/// A positioned drawing instruction, replayed against a [crate::Canvas] once layout is done
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetFont { font: Font, size: Pt },
    Text { x: Pt, y: Pt, text: String },
}

/// Fonts and fixed metrics shared by all blocks
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub body_font: Font,
    pub title_font: Font,
    pub title_size: Pt,
    /// How far a title moves the cursor down
    pub title_leading: Pt,
    /// Distance from the bullet marker to the item text
    pub bullet_indent: Pt,
    pub bullet_marker: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            body_font: Font::Helvetica,
            title_font: Font::HelveticaBold,
            title_size: Pt(11.0),
            title_leading: Pt(14.0),
            bullet_indent: Pt(11.0),
            bullet_marker: "-".to_string(),
        }
    }
}

/// Turns blocks into draw instructions. Every method takes the cursor by value and hands
/// back where the next block should start.
pub struct BlockRenderer<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a M,
    theme: &'a Theme,
}

impl<'a, M: TextMeasurer + ?Sized> BlockRenderer<'a, M> {
    pub fn new(measurer: &'a M, theme: &'a Theme) -> Self {
        BlockRenderer { measurer, theme }
    }

    /// Lay out any block at `cursor`, wrapping body text to `width`
    pub fn render(
        &self,
        block: &Block,
        cursor: Cursor,
        width: Pt,
        out: &mut Vec<DrawOp>,
    ) -> Result<Cursor, PDFError> {
        match block {
            Block::Title(text) => Ok(self.title(text, cursor, out)),
            Block::Paragraph {
                text,
                font_size,
                leading,
            } => self.paragraph(text, cursor, width, *font_size, *leading, out),
            Block::BulletList {
                items,
                font_size,
                leading,
            } => self.bullet_list(items.as_slice(), cursor, width, *font_size, *leading, out),
            Block::Line {
                text,
                font,
                font_size,
                advance,
            } => Ok(self.line(text, *font, *font_size, *advance, cursor, out)),
            Block::Spacer(gap) => Ok(self.spacer(*gap, cursor)),
        }
    }

    /// Titles are assumed to fit on one line and are never wrapped
    pub fn title(&self, text: &str, cursor: Cursor, out: &mut Vec<DrawOp>) -> Cursor {
        self.line(
            text,
            self.theme.title_font,
            self.theme.title_size,
            self.theme.title_leading,
            cursor,
            out,
        )
    }

    pub fn paragraph(
        &self,
        text: &str,
        mut cursor: Cursor,
        width: Pt,
        font_size: Pt,
        leading: Pt,
        out: &mut Vec<DrawOp>,
    ) -> Result<Cursor, PDFError> {
        let font = self.theme.body_font;
        out.push(DrawOp::SetFont {
            font,
            size: font_size,
        });
        for line in wrap_text(self.measurer, text, font, font_size, width)? {
            out.push(DrawOp::Text {
                x: cursor.x,
                y: cursor.y,
                text: line,
            });
            cursor.advance(1, leading);
        }
        Ok(cursor)
    }

    pub fn bullet_list<S: AsRef<str>>(
        &self,
        items: &[S],
        mut cursor: Cursor,
        width: Pt,
        font_size: Pt,
        leading: Pt,
        out: &mut Vec<DrawOp>,
    ) -> Result<Cursor, PDFError> {
        let font = self.theme.body_font;
        let text_width = width - self.theme.bullet_indent;
        out.push(DrawOp::SetFont {
            font,
            size: font_size,
        });
        for item in items {
            let lines = wrap_text(self.measurer, item.as_ref(), font, font_size, text_width)?;
            for (i, line) in lines.into_iter().enumerate() {
                if i == 0 {
                    out.push(DrawOp::Text {
                        x: cursor.x,
                        y: cursor.y,
                        text: self.theme.bullet_marker.clone(),
                    });
                }
                let column = cursor.indented(self.theme.bullet_indent);
                out.push(DrawOp::Text {
                    x: column.x,
                    y: column.y,
                    text: line,
                });
                cursor.advance(1, leading);
            }
        }
        Ok(cursor)
    }

    pub fn line(
        &self,
        text: &str,
        font: Font,
        font_size: Pt,
        advance: Pt,
        mut cursor: Cursor,
        out: &mut Vec<DrawOp>,
    ) -> Cursor {
        out.push(DrawOp::SetFont {
            font,
            size: font_size,
        });
        out.push(DrawOp::Text {
            x: cursor.x,
            y: cursor.y,
            text: text.to_string(),
        });
        cursor.advance(1, advance);
        cursor
    }

    pub fn spacer(&self, gap: Pt, mut cursor: Cursor) -> Cursor {
        cursor.advance(1, gap);
        cursor
    }
}
