use crate::{
    collect::ImageFile,
    error::Img2PdfError,
    image::Image,
    placement::{place_on_page, Padding, Placement},
    progress::FillProgress,
    rect::Rect,
};
use lopdf::{Dictionary, Object, ObjectId, Stream};
use std::{io::Write, path::Path};
use tracing::{debug, error, info, warn};

/// How deep to walk up the page tree looking for inherited attributes
const MAX_TREE_DEPTH: usize = 32;

/// Lifecycle of the output document. Pages go from created to populated one
/// at a time; the single save at the end makes the document `Saved`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DocumentState {
    Created,
    Populated,
    Saved,
}

/// What happened to a single page during [fill_pages]
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Inserted(Placement),
    /// The page was left blank, with the reason why
    Skipped(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FillReport {
    /// One outcome per input image, in input order
    pub pages: Vec<PageOutcome>,
    pub state: DocumentState,
}

impl FillReport {
    pub fn inserted(&self) -> usize {
        self.pages
            .iter()
            .filter(|p| matches!(p, PageOutcome::Inserted(_)))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.pages.len() - self.inserted()
    }
}

/// Reopen the document at `path` and draw `images[i]` onto page `i`, then save
/// the document back to `path`.
///
/// An image that can't be decoded or drawn is logged, reported to `progress`,
/// and skipped; its page stays blank and the remaining images are still placed.
/// Failing to open or save the document is an error, in which case nothing
/// drawn during this call is kept.
pub fn fill_pages<P: AsRef<Path>>(
    path: P,
    images: &[ImageFile],
    padding: &Padding,
    progress: &dyn FillProgress,
) -> Result<FillReport, Img2PdfError> {
    let path = path.as_ref();
    let mut doc = lopdf::Document::load(path)?;
    let pages: Vec<ObjectId> = doc.get_pages().into_values().collect();
    debug!("reopened {} with {} pages", path.display(), pages.len());

    let mut report = FillReport {
        pages: Vec::with_capacity(images.len()),
        state: DocumentState::Created,
    };

    for (index, file) in images.iter().enumerate() {
        let outcome = match draw_image(&mut doc, &pages, index, file.path(), padding) {
            Ok(placement) => {
                info!(
                    "inserted {} on page {} at ({}, {}) size {}x{}",
                    file.path().display(),
                    index + 1,
                    placement.x,
                    placement.y,
                    placement.width,
                    placement.height
                );
                progress.on_image_inserted(index, file.path());
                report.state = DocumentState::Populated;
                PageOutcome::Inserted(placement)
            }
            Err(e) => {
                match &e {
                    Img2PdfError::Image(_) | Img2PdfError::Io(_) => {
                        warn!("skipping unreadable image {}: {e}", file.path().display())
                    }
                    _ => error!(
                        "failed to draw {} on page {}: {e}",
                        file.path().display(),
                        index + 1
                    ),
                }
                progress.on_image_skipped(index, file.path(), &e);
                PageOutcome::Skipped(e.to_string())
            }
        };
        report.pages.push(outcome);
    }

    doc.save(path)?;
    report.state = DocumentState::Saved;
    Ok(report)
}

fn draw_image(
    doc: &mut lopdf::Document,
    pages: &[ObjectId],
    index: usize,
    path: &Path,
    padding: &Padding,
) -> Result<Placement, Img2PdfError> {
    let page_id = *pages.get(index).ok_or(Img2PdfError::PageMissing {
        index,
        total: pages.len(),
    })?;

    let image = Image::from_file(path)?;
    let page_box = page_box(doc, page_id, index)?;
    let placement = place_on_page(image.width as f32, image.height as f32, &page_box, padding);

    let contents = existing_contents(doc, page_id, index)?;

    let image_id = image.embed(doc);
    let name = match register_xobject(doc, page_id, index, image_id) {
        Ok(name) => name,
        Err(e) => {
            discard_image(doc, image_id);
            return Err(e);
        }
    };
    let content = render_image(&name, &placement)?;
    append_content(doc, page_id, contents, content)?;

    Ok(placement)
}

/// Removes an embedded image, and its soft mask, from the document
fn discard_image(doc: &mut lopdf::Document, image_id: ObjectId) {
    if let Some(Object::Stream(image)) = doc.objects.remove(&image_id) {
        if let Ok(mask_id) = image.dict.get(b"SMask").and_then(Object::as_reference) {
            doc.objects.remove(&mask_id);
        }
    }
}

fn resolve<'a>(doc: &'a lopdf::Document, obj: &'a Object) -> Result<&'a Object, Img2PdfError> {
    match obj {
        Object::Reference(id) => Ok(doc.get_object(*id)?),
        other => Ok(other),
    }
}

/// The visible area of a page: its crop box if it has one, otherwise its
/// media box. Both may be inherited from an ancestor in the page tree.
fn page_box(doc: &lopdf::Document, page_id: ObjectId, index: usize) -> Result<Rect, Img2PdfError> {
    let malformed = |detail: String| Img2PdfError::MalformedPage { index, detail };

    for key in [&b"CropBox"[..], &b"MediaBox"[..]] {
        let mut node = doc.get_dictionary(page_id)?;
        for _ in 0..MAX_TREE_DEPTH {
            if let Ok(value) = node.get(key) {
                let values = resolve(doc, value)?
                    .as_array()
                    .map_err(|e| malformed(e.to_string()))?;
                return Rect::try_from(values.as_slice()).map_err(malformed);
            }
            match node.get(b"Parent").and_then(Object::as_reference) {
                Ok(parent) => node = doc.get_dictionary(parent)?,
                Err(_) => break,
            }
        }
    }

    Err(malformed("no MediaBox".to_string()))
}

/// Looks up a dictionary entry that may be stored inline or by reference.
/// Returns the referenced object id (if any) along with a copy of the dictionary.
fn dict_entry(
    doc: &lopdf::Document,
    parent: &Dictionary,
    key: &[u8],
    index: usize,
) -> Result<(Option<ObjectId>, Dictionary), Img2PdfError> {
    match parent.get(key) {
        Ok(Object::Reference(id)) => Ok((Some(*id), doc.get_dictionary(*id)?.clone())),
        Ok(Object::Dictionary(dict)) => Ok((None, dict.clone())),
        Ok(other) => Err(Img2PdfError::MalformedPage {
            index,
            detail: format!(
                "{} is not a dictionary: {other:?}",
                String::from_utf8_lossy(key)
            ),
        }),
        Err(_) => Ok((None, Dictionary::new())),
    }
}

/// Adds `image_id` to the page's `/XObject` resources under a fresh name,
/// returning that name
fn register_xobject(
    doc: &mut lopdf::Document,
    page_id: ObjectId,
    index: usize,
    image_id: ObjectId,
) -> Result<String, Img2PdfError> {
    let page = doc.get_dictionary(page_id)?;
    let (resources_id, mut resources) = dict_entry(doc, page, b"Resources", index)?;
    let (xobjects_id, mut xobjects) = dict_entry(doc, &resources, b"XObject", index)?;

    let name = (0..)
        .map(|n| format!("Im{n}"))
        .find(|name| !xobjects.has(name.as_bytes()))
        .unwrap_or_else(|| format!("Im{index}"));
    xobjects.set(name.as_str(), Object::Reference(image_id));

    match xobjects_id {
        Some(id) => {
            doc.objects.insert(id, Object::Dictionary(xobjects));
        }
        None => {
            resources.set("XObject", Object::Dictionary(xobjects));
        }
    }
    match resources_id {
        Some(id) => {
            doc.objects.insert(id, Object::Dictionary(resources));
        }
        None => {
            doc.get_dictionary_mut(page_id)?
                .set("Resources", Object::Dictionary(resources));
        }
    }

    Ok(name)
}

/// The content stream operators that paint the named image XObject into `placement`
#[allow(clippy::write_with_newline)]
fn render_image(name: &str, placement: &Placement) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    write!(&mut content, "q\n")?;
    write!(
        &mut content,
        "{} 0 0 {} {} {} cm\n",
        placement.width, placement.height, placement.x, placement.y
    )?;
    write!(&mut content, "/{name} Do\n")?;
    write!(&mut content, "Q\n")?;
    Ok(content)
}

/// A page's current `/Contents`, which must be absent, a stream reference or
/// an array of them
fn existing_contents(
    doc: &lopdf::Document,
    page_id: ObjectId,
    index: usize,
) -> Result<Option<Object>, Img2PdfError> {
    match doc.get_dictionary(page_id)?.get(b"Contents") {
        Err(_) => Ok(None),
        Ok(contents @ (Object::Reference(_) | Object::Array(_))) => Ok(Some(contents.clone())),
        Ok(other) => Err(Img2PdfError::MalformedPage {
            index,
            detail: format!("unexpected /Contents {other:?}"),
        }),
    }
}

/// Append a content stream to a page, after its `existing` content
fn append_content(
    doc: &mut lopdf::Document,
    page_id: ObjectId,
    existing: Option<Object>,
    content: Vec<u8>,
) -> Result<(), Img2PdfError> {
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

    let contents = match existing {
        Some(Object::Array(mut streams)) => {
            streams.push(Object::Reference(content_id));
            Object::Array(streams)
        }
        Some(stream) => Object::Array(vec![stream, Object::Reference(content_id)]),
        None => Object::Reference(content_id),
    };
    doc.get_dictionary_mut(page_id)?.set("Contents", contents);
    Ok(())
}
