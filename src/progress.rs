//! Progress callbacks for a conversion run.
//!
//! [crate::convert] reports when the blank document has been written, and
//! [crate::fill_pages] reports every image it places (or gives up on) so a
//! caller can print progress as it happens rather than after the document is
//! saved. All methods default to doing nothing.

use crate::error::Img2PdfError;
use std::path::Path;

pub trait FillProgress {
    /// Called once the blank document of `page_count` pages has been written to `path`.
    fn on_document_created(&self, path: &Path, page_count: usize) {
        let _ = (path, page_count);
    }

    /// Called after the image at `path` has been drawn on page `page_index` (0-based).
    fn on_image_inserted(&self, page_index: usize, path: &Path) {
        let _ = (page_index, path);
    }

    /// Called when the image at `path` couldn't be placed; page `page_index` stays blank.
    fn on_image_skipped(&self, page_index: usize, path: &Path, error: &Img2PdfError) {
        let _ = (page_index, path, error);
    }
}

/// Ignores all progress events
pub struct NoopProgress;

impl FillProgress for NoopProgress {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<(usize, bool)>>,
    }

    impl FillProgress for Recorder {
        fn on_image_inserted(&self, page_index: usize, _path: &Path) {
            self.events.borrow_mut().push((page_index, true));
        }

        fn on_image_skipped(&self, page_index: usize, _path: &Path, _error: &Img2PdfError) {
            self.events.borrow_mut().push((page_index, false));
        }
    }

    #[test]
    fn noop_progress_does_nothing() {
        let p = NoopProgress;
        p.on_document_created(Path::new("out.pdf"), 2);
        p.on_image_inserted(0, Path::new("a.png"));
        p.on_image_skipped(1, Path::new("b.png"), &Img2PdfError::InvalidConfig("x".into()));
    }

    #[test]
    fn trait_objects_receive_events() {
        let recorder = Recorder::default();
        let p: &dyn FillProgress = &recorder;
        p.on_image_inserted(0, Path::new("a.png"));
        p.on_image_skipped(1, Path::new("b.png"), &Img2PdfError::PageMissing { index: 1, total: 1 });
        assert_eq!(*recorder.events.borrow(), vec![(0, true), (1, false)]);
    }
}
