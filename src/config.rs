//! Settings for a conversion run.
//!
//! Every value has a default matching the tool's historical behaviour: read
//! `imgSource/`, write `pdfTarget/my_doc.pdf` on US Letter pages with 30pt of
//! padding on each side, stamped with the fixed [Info] metadata.

use crate::{error::Img2PdfError, info::Info, pagesize, pagesize::PageSize, placement::Padding};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the images, one per page. Not searched recursively.
    pub source_dir: PathBuf,
    /// Where the document is written. Overwritten if it exists.
    pub target_file: PathBuf,
    pub page_size: PageSize,
    pub padding: Padding,
    pub info: Info,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_dir: PathBuf::from("imgSource"),
            target_file: PathBuf::from("pdfTarget").join("my_doc.pdf"),
            page_size: pagesize::LETTER,
            padding: Padding::default(),
            info: Info::default(),
        }
    }
}

impl Config {
    pub fn source_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn target_file<P: Into<PathBuf>>(mut self, file: P) -> Self {
        self.target_file = file.into();
        self
    }

    pub fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn info(mut self, info: Info) -> Self {
        self.info = info;
        self
    }

    /// Check that the page leaves some room for images once padding is taken off
    pub fn validate(&self) -> Result<(), Img2PdfError> {
        let (w, h) = self.page_size;
        if !(w > 0.0 && h > 0.0) {
            return Err(Img2PdfError::InvalidConfig(format!(
                "page size must be positive, got {w}x{h}"
            )));
        }
        if self.padding.horizontal < 0.0 || self.padding.vertical < 0.0 {
            return Err(Img2PdfError::InvalidConfig(
                "padding can't be negative".to_string(),
            ));
        }
        let (uw, uh) = self.padding.usable_area(w, h);
        if uw <= 0.0 || uh <= 0.0 {
            return Err(Img2PdfError::InvalidConfig(format!(
                "padding of {}x{} leaves no room on a {w}x{h} page",
                self.padding.horizontal, self.padding.vertical
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.padding, Padding::all(30.0));
        assert_eq!(config.page_size, pagesize::LETTER);
    }

    #[test]
    fn padding_wider_than_the_page_is_rejected() {
        let config = Config::default().padding(Padding::symmetric(400.0, 30.0));
        assert!(matches!(
            config.validate(),
            Err(Img2PdfError::InvalidConfig(_))
        ));
    }

    #[test]
    fn negative_padding_is_rejected() {
        let config = Config::default().padding(Padding::all(-1.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn builder_overrides_paths() {
        let config = Config::default().source_dir("in").target_file("out.pdf");
        assert_eq!(config.source_dir, PathBuf::from("in"));
        assert_eq!(config.target_file, PathBuf::from("out.pdf"));
    }
}
