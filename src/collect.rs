use crate::error::Img2PdfError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A file discovered in the source directory, expected to hold an image.
/// Its pixel dimensions are only known once [crate::Image::from_file] decodes it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ImageFile {
    pub path: PathBuf,
}

impl ImageFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> ImageFile {
        ImageFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Lists the regular files directly inside `dir`, sorted by file name.
///
/// Subdirectories are skipped, not descended into. If `dir` doesn't exist,
/// isn't a directory, or holds no regular files, [Img2PdfError::EmptyInput]
/// is returned and nothing should be produced.
pub fn collect_images<P: AsRef<Path>>(dir: P) -> Result<Vec<ImageFile>, Img2PdfError> {
    let dir = dir.as_ref();
    let empty = || Img2PdfError::EmptyInput {
        dir: dir.to_path_buf(),
    };

    if !dir.is_dir() {
        debug!("source {} is not a directory", dir.display());
        return Err(empty());
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        // follow symlinks so a link to an image counts as a file
        let is_file = std::fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
        if is_file {
            files.push(ImageFile::new(entry.path()));
        } else {
            debug!("skipping non-file entry {}", entry.path().display());
        }
    }

    if files.is_empty() {
        return Err(empty());
    }

    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    debug!("found {} input files in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_directory_is_empty_input() {
        let tmp = tempfile::tempdir().unwrap();
        let err = collect_images(tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, Img2PdfError::EmptyInput { .. }));
    }

    #[test]
    fn directory_with_only_subdirectories_is_empty_input() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested").join("a.png"), b"x").unwrap();
        let err = collect_images(tmp.path()).unwrap_err();
        assert!(matches!(err, Img2PdfError::EmptyInput { .. }));
    }

    #[test]
    fn a_file_is_not_a_source_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("a.png");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            collect_images(&file),
            Err(Img2PdfError::EmptyInput { .. })
        ));
    }

    #[test]
    fn lists_direct_files_in_name_order() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.jpg", "b.gif"] {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("0.png"), b"x").unwrap();

        let files = collect_images(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.path().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.gif", "c.png"]);
    }
}
