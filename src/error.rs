use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PdfError {
    #[error(transparent)]
    /// An I/O error occurred while serializing the finished document
    Io(#[from] std::io::Error),

    #[error("document refers to a page that is missing from the page arena")]
    /// The page order list referenced a page that was never allocated
    PageMissing,
}
