//! Text layout: wrapping text into lines and flowing blocks down a page.
//!
//! Layout is pure. Blocks are turned into a list of positioned [DrawOp]s by a
//! [BlockRenderer], with a [Cursor] threaded through every call, and nothing is drawn
//! until that list is replayed against a [crate::Canvas].
//!
//! # Example
//!
//! ```
//! use pdf_summary::layout::{Block, BlockRenderer, Cursor, DrawOp, Theme};
//! use pdf_summary::{Pt, StandardMetrics};
//!
//! let theme = Theme::default();
//! let renderer = BlockRenderer::new(&StandardMetrics, &theme);
//!
//! let block = Block::paragraph("Hello, world!", Pt(9.5), Pt(12.0)).unwrap();
//! let mut ops: Vec<DrawOp> = Vec::new();
//! let cursor = renderer
//!     .render(&block, Cursor::new(Pt(40.0), Pt(750.0)), Pt(532.0), &mut ops)
//!     .unwrap();
//!
//! assert_eq!(cursor.y, Pt(738.0));
//! ```

mod block;
mod cursor;
mod margins;
mod wrap;

pub use block::*;
pub use cursor::*;
pub use margins::*;
pub use wrap::*;
