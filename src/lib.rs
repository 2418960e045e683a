//! Turn a directory of images into a PDF with one image per page.
//!
//! Each image is shrunk (never enlarged) to fit inside the page's padding,
//! centred horizontally and aligned to the top of the padded area. The
//! document is built in two passes: [create_document] writes blank pages and
//! metadata, then [fill_pages] reopens the file and draws the images in.
//! [convert] runs both.
//!
//! ```no_run
//! use img2pdf::{convert, Config, NoopProgress};
//!
//! let config = Config::default()
//!     .source_dir("photos")
//!     .target_file("photos.pdf");
//! let conversion = convert(&config, &NoopProgress).unwrap();
//! println!("{} pages", conversion.page_count);
//! ```

mod collect;
pub use collect::*;

mod config;
pub use config::*;

mod convert;
pub use convert::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod filler;
pub use filler::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Named paper sizes
pub mod pagesize;

mod placement;
pub use placement::*;

mod progress;
pub use progress::*;

mod rect;
pub use rect::*;

pub(crate) mod refs;

/// Re-export lopdf, for inspecting generated documents
pub use lopdf;
