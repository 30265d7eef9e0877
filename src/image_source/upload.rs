use crate::image_source::interface::UploadError;
use std::path::Path;

/// A file handed to the upload affordance, either with its bytes already in
/// memory (drag and drop) or only as a path on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Option<Vec<u8>>,
    pub path: Option<std::path::PathBuf>,
}

impl UploadedFile {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            name,
            bytes: None,
            path: Some(path.to_path_buf()),
        }
    }

    pub fn to_display_string(&self) -> String {
        format!(
            "UploadedFile {{ name: {:?}, bytes: {:?}, path: {:?} }}",
            self.name,
            self.bytes.as_ref().map(|b| b.len()),
            self.path
        )
    }
}

pub fn check_extension(name: &str, accepted: &[String]) -> Result<(), UploadError> {
    let extension = Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    match extension {
        Some(ext) if accepted.iter().any(|a| a.eq_ignore_ascii_case(&ext)) => Ok(()),
        _ => Err(UploadError::UnsupportedType {
            name: name.to_string(),
            accepted: accepted.join(", "),
        }),
    }
}

pub fn read_upload(path: &Path) -> Result<Vec<u8>, UploadError> {
    let bytes = std::fs::read(path).map_err(|source| UploadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.is_empty() {
        return Err(UploadError::Empty {
            name: path.display().to_string(),
        });
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted() -> Vec<String> {
        vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()]
    }

    #[test]
    fn test_accepts_image_extensions_case_insensitively() {
        assert!(check_extension("gecko.png", &accepted()).is_ok());
        assert!(check_extension("leaf.JPG", &accepted()).is_ok());
        assert!(check_extension("photo.final.Jpeg", &accepted()).is_ok());
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert!(matches!(
            check_extension("notes.txt", &accepted()),
            Err(UploadError::UnsupportedType { .. })
        ));
        assert!(matches!(
            check_extension("no_extension", &accepted()),
            Err(UploadError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let path = std::env::temp_dir().join("leaf-gecko-classifier-missing-upload.png");
        let _ = std::fs::remove_file(&path);

        assert!(matches!(read_upload(&path), Err(UploadError::Read { .. })));
    }

    #[test]
    fn test_read_empty_file() {
        let path = std::env::temp_dir().join("leaf-gecko-classifier-empty-upload.png");
        std::fs::write(&path, b"").unwrap();

        assert!(matches!(read_upload(&path), Err(UploadError::Empty { .. })));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_uploaded_file_name_from_path() {
        let file = UploadedFile::from_path(Path::new("/tmp/images/gecko.jpeg"));
        assert_eq!(file.name, "gecko.jpeg");
        assert!(file.bytes.is_none());
    }
}
