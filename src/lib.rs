//! Lays out and renders one-page summary reports as PDF documents.
//!
//! A [Report] is flattened into [layout::Block]s, which a [SummaryBuilder] flows down a
//! single page, wrapping text to the content width. The result is a list of positioned
//! drawing instructions that is then replayed onto a [Canvas], typically a [PdfCanvas].

mod builder;
pub use builder::*;

mod canvas;
pub use canvas::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout text on pages
pub mod layout;

mod page;
pub use page::*;

/// Pre-defined page sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

/// Report content and the bundled sample report
pub mod report;
pub use report::{Body, Report, Section};

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for inspecting written documents
pub use pdf_writer;
