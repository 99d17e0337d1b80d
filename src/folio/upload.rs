//! Image upload handling: extension allow-list, filename sanitizing, and
//! collision-resistant storage under the images root.
//!
//! Uploaded files are written once to their final path and never modified
//! or deleted by this system; deleting a project does not delete its image.

use crate::error::{FolioError, Result};
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Request bodies above this are rejected before any processing.
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Where an upload lands: profile images at the images root, project
/// images under a `projects/` sub-directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Profile,
    Project,
}

impl UploadKind {
    /// Anything other than an explicit "profile" is treated as a project
    /// upload, including a missing type field.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("profile") => UploadKind::Profile,
            _ => UploadKind::Project,
        }
    }
}

/// Result of a stored upload: the generated filename and the web-relative
/// path the site documents reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub filename: String,
    pub web_path: String,
}

/// True when the name has an extension in the image allow-list
/// (case-insensitive, matched on the substring after the last dot).
pub fn allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Reduce an untrusted original filename to a filesystem-safe token: drop
/// any path components, map whitespace to underscores, keep only ASCII
/// alphanumerics plus `-`, `_` and `.`, and strip leading dots.
pub fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect();
    cleaned.trim_start_matches('.').to_string()
}

/// Validate and store an uploaded image, returning the generated name and
/// web path. The stored name is the sanitized stem plus an 8-hex-character
/// random suffix, extension preserved as uploaded.
pub fn store_image(
    images_root: &Path,
    original_name: &str,
    bytes: &[u8],
    kind: UploadKind,
) -> Result<StoredUpload> {
    if original_name.is_empty() {
        return Err(FolioError::InvalidInput("No file selected".to_string()));
    }
    if !allowed_file(original_name) {
        return Err(FolioError::InvalidInput("Invalid file type".to_string()));
    }

    let sanitized = sanitize_filename(original_name);
    let Some((stem, ext)) = sanitized.rsplit_once('.') else {
        return Err(FolioError::InvalidInput("Invalid file name".to_string()));
    };
    if stem.is_empty() {
        return Err(FolioError::InvalidInput("Invalid file name".to_string()));
    }

    let suffix = &Uuid::new_v4().simple().to_string()[..8];
    let filename = format!("{stem}_{suffix}.{ext}");

    let (dir, web_path) = match kind {
        UploadKind::Profile => (
            images_root.to_path_buf(),
            format!("assets/images/{filename}"),
        ),
        UploadKind::Project => (
            images_root.join("projects"),
            format!("assets/images/projects/{filename}"),
        ),
    };

    fs::create_dir_all(&dir).map_err(FolioError::Io)?;
    fs::write(dir.join(&filename), bytes).map_err(FolioError::Io)?;

    Ok(StoredUpload { filename, web_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_list_is_case_insensitive() {
        assert!(allowed_file("photo.PNG"));
        assert!(allowed_file("photo.webp"));
        assert!(!allowed_file("photo.EXE"));
        assert!(!allowed_file("photo"));
        assert!(!allowed_file("archive.tar.xz"));
    }

    #[test]
    fn sanitize_strips_paths_and_unsafe_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd.png"), "passwd.png");
        assert_eq!(sanitize_filename("my photo (1).jpg"), "my_photo_1.jpg");
        assert_eq!(sanitize_filename("C:\\Users\\me\\pic.gif"), "pic.gif");
        assert_eq!(sanitize_filename(".hidden.png"), "hidden.png");
    }

    #[test]
    fn store_image_routes_by_kind() {
        let dir = tempfile::tempdir().unwrap();
        let stored =
            store_image(dir.path(), "avatar.png", b"fake", UploadKind::Profile).unwrap();
        assert!(stored.filename.starts_with("avatar_"));
        assert!(stored.filename.ends_with(".png"));
        assert_eq!(stored.web_path, format!("assets/images/{}", stored.filename));
        assert!(dir.path().join(&stored.filename).exists());

        let stored =
            store_image(dir.path(), "shot.jpg", b"fake", UploadKind::Project).unwrap();
        assert_eq!(
            stored.web_path,
            format!("assets/images/projects/{}", stored.filename)
        );
        assert!(dir.path().join("projects").join(&stored.filename).exists());
    }

    #[test]
    fn suffix_is_eight_hex_chars() {
        let dir = tempfile::tempdir().unwrap();
        let stored =
            store_image(dir.path(), "photo.PNG", b"x", UploadKind::Profile).unwrap();
        // photo_<8 hex>.PNG
        let stem = stored.filename.strip_suffix(".PNG").unwrap();
        let suffix = stem.strip_prefix("photo_").unwrap();
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn rejected_uploads_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = store_image(dir.path(), "evil.exe", b"x", UploadKind::Project).unwrap_err();
        assert!(matches!(err, FolioError::InvalidInput(_)));
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn empty_filename_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = store_image(dir.path(), "", b"x", UploadKind::Project).unwrap_err();
        assert!(matches!(err, FolioError::InvalidInput(_)));
    }

    #[test]
    fn parse_kind_defaults_to_project() {
        assert_eq!(UploadKind::parse(Some("profile")), UploadKind::Profile);
        assert_eq!(UploadKind::parse(Some("project")), UploadKind::Project);
        assert_eq!(UploadKind::parse(Some("banana")), UploadKind::Project);
        assert_eq!(UploadKind::parse(None), UploadKind::Project);
    }
}
