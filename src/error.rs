use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum Img2PdfError {
    /// The source directory is missing or holds no regular files. Nothing is
    /// written when this happens.
    #[error("no images found in '{}'", dir.display())]
    EmptyInput { dir: PathBuf },

    /// The configuration can't produce a usable page layout
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// [lopdf] failed to load, navigate or save the document
    Pdf(#[from] lopdf::Error),

    /// The document has fewer pages than there are images to place
    #[error("page {index} is missing (document has {total} pages)")]
    PageMissing { index: usize, total: usize },

    /// A page object doesn't look like a page (no usable media box, resources
    /// that aren't a dictionary, etc)
    #[error("malformed page {index}: {detail}")]
    MalformedPage { index: usize, detail: String },
}
