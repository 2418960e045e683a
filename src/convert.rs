use crate::{
    collect::collect_images,
    config::Config,
    document::create_document,
    error::Img2PdfError,
    filler::{fill_pages, DocumentState, FillReport},
    progress::FillProgress,
};
use tracing::{error, info};

/// Summary of a [convert] run
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Number of pages in the document, one per input file
    pub page_count: usize,
    /// Whether the blank document was written
    pub created: bool,
    /// Outcome of the page-filling pass, or [None] if it didn't run or the
    /// document couldn't be reopened or saved
    pub report: Option<FillReport>,
}

impl Conversion {
    pub fn inserted(&self) -> usize {
        self.report.as_ref().map(FillReport::inserted).unwrap_or(0)
    }

    pub fn skipped(&self) -> usize {
        self.report.as_ref().map(FillReport::skipped).unwrap_or(0)
    }

    /// The state the output document was left in, or [None] if this run
    /// never wrote it
    pub fn state(&self) -> Option<DocumentState> {
        match &self.report {
            Some(report) => Some(report.state),
            None if self.created => Some(DocumentState::Created),
            None => None,
        }
    }

    pub fn saved(&self) -> bool {
        self.state() == Some(DocumentState::Saved)
    }
}

/// Convert every file in `config.source_dir` into a page of `config.target_file`.
///
/// Runs in two passes: a document of blank pages is written first, then
/// reopened and each image drawn onto its page. An empty (or missing) source
/// directory aborts the run before anything is written. If the blank document
/// can't be written the second pass is skipped, so a file left over from an
/// earlier run is never filled. Any failure other than empty input or an
/// invalid configuration is logged and reflected in the returned [Conversion]
/// rather than returned as an error.
pub fn convert(config: &Config, progress: &dyn FillProgress) -> Result<Conversion, Img2PdfError> {
    config.validate()?;

    let images = collect_images(&config.source_dir)?;
    let page_count = images.len();

    if let Err(e) = create_document(
        &config.target_file,
        page_count,
        config.page_size,
        &config.info,
    ) {
        error!("failed to create {}: {e}", config.target_file.display());
        return Ok(Conversion {
            page_count,
            created: false,
            report: None,
        });
    }
    progress.on_document_created(&config.target_file, page_count);

    let report = match fill_pages(&config.target_file, &images, &config.padding, progress) {
        Ok(report) => {
            info!(
                "wrote {} ({} of {} images placed)",
                config.target_file.display(),
                report.inserted(),
                page_count
            );
            Some(report)
        }
        Err(e) => {
            error!("failed to fill {}: {e}", config.target_file.display());
            None
        }
    };

    Ok(Conversion {
        page_count,
        created: true,
        report,
    })
}
