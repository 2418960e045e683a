use crate::{
    error::Img2PdfError,
    info::Info,
    pagesize::PageSize,
    rect::Rect,
    refs::ObjectReferences,
};
use pdf_writer::{Finish, Pdf, Ref};
use std::{io::Write, path::Path};
use tracing::{debug, info};

/// A document made of blank pages, all the same size. This is the skeleton that
/// [crate::fill_pages] later draws the images into.
#[derive(Debug, Clone)]
pub struct BlankDocument {
    pub info: Option<Info>,
    pub page_size: PageSize,
    pub page_count: usize,
}

impl BlankDocument {
    pub fn new(page_count: usize, page_size: PageSize) -> BlankDocument {
        BlankDocument {
            info: None,
            page_size,
            page_count,
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Render the document to bytes and write them out. The whole document is
    /// rendered in memory first.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), Img2PdfError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen();
        let page_tree_id = refs.gen();

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..self.page_count)
            .map(|_| refs.gen())
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs.iter().copied());

        let media_box: pdf_writer::Rect = Rect::from_size(self.page_size).into();
        for page_id in page_refs {
            let mut page = writer.page(page_id);
            page.media_box(media_box);
            page.parent(page_tree_id);
            page.resources();
            page.finish();
        }

        writer.catalog(catalog_id).pages(page_tree_id);

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }

    /// Write the document to `path`, creating the parent directory if needed.
    /// The rendered bytes are dropped once written, whatever the outcome.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Img2PdfError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                debug!("creating output directory {}", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut bytes = Vec::new();
        self.write(&mut bytes)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Create a document of `page_count` blank `page_size` pages carrying `info`, and
/// write it to `path`.
pub fn create_document<P: AsRef<Path>>(
    path: P,
    page_count: usize,
    page_size: PageSize,
    info: &Info,
) -> Result<(), Img2PdfError> {
    let path = path.as_ref();
    let mut doc = BlankDocument::new(page_count, page_size);
    doc.set_info(info.clone());
    doc.save(path)?;
    info!(
        "created {} with {} blank {}x{} pages",
        path.display(),
        page_count,
        page_size.0,
        page_size.1
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{A4, LETTER};

    #[test]
    fn writes_a_pdf_header() {
        let mut out = Vec::new();
        BlankDocument::new(2, LETTER).write(&mut out).unwrap();
        assert!(out.starts_with(b"%PDF-"));
    }

    #[test]
    fn blank_pages_survive_a_reload() {
        let mut out = Vec::new();
        let mut doc = BlankDocument::new(3, A4);
        doc.set_info(Info::default());
        doc.write(&mut out).unwrap();

        let loaded = lopdf::Document::load_mem(&out).unwrap();
        let pages = loaded.get_pages();
        assert_eq!(pages.len(), 3);
        for id in pages.values() {
            let page = loaded.get_dictionary(*id).unwrap();
            let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
            let rect = Rect::try_from(media_box.as_slice()).unwrap();
            assert!((rect.width() - A4.0).abs() < 0.01);
            assert!((rect.height() - A4.1).abs() < 0.01);
            assert!(page.get(b"Contents").is_err());
        }
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("pdfTarget").join("my_doc.pdf");
        create_document(&path, 1, LETTER, &Info::default()).unwrap();
        assert!(path.is_file());
    }
}
