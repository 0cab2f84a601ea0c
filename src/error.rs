use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error("unknown font: {0}")]
    /// The font name does not refer to one of the supported base fonts
    UnknownFont(String),

    #[error("failed to measure text: {0}")]
    /// A [crate::TextMeasurer] could not measure a run of text
    Measurement(String),

    #[error("invalid block: {0}")]
    /// A block was constructed with an unusable size, leading, or gap
    InvalidBlock(String),

    #[error("invalid page geometry: {0}")]
    /// The margins leave no room for content
    InvalidGeometry(String),

    #[error("page is missing from the document")]
    /// The page order refers to a page that isn't in the document
    PageMissing,
}
