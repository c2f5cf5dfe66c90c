//! Cover image uploads

/// Image types the cover image field accepts
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/jpg", "image/gif"];

/// Anything the form can carry as a selected cover image.
///
/// Native builds use [`ImageUpload`]; the browser front-end wraps a
/// `web_sys::File`.
pub trait Upload {
    fn file_name(&self) -> String;
}

/// An in-memory image file ready for multipart upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name).to_string();
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read an image from disk, naming it after the file.
    #[cfg(feature = "native")]
    pub fn from_path(path: &std::path::Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "cover_image".to_string());
        Ok(Self::new(file_name, bytes))
    }

    pub fn is_accepted_type(&self) -> bool {
        ACCEPTED_IMAGE_TYPES.contains(&self.content_type.as_str())
    }
}

impl Upload for ImageUpload {
    fn file_name(&self) -> String {
        self.file_name.clone()
    }
}

/// Guess a MIME type from the file extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}
