//! Asset kinds and the file acceptance guard shared by Upload and Verify.
//!
//! DESIGN
//! ======
//! The guard is a pure function over `FileInfo` so it can be exercised without
//! a browser. The file picker converts a `web_sys::File` into `FileInfo` and
//! never inspects the bytes.

#[cfg(test)]
#[path = "asset_test.rs"]
mod asset_test;

use crate::state::notify::Notice;

/// Bytes in one megabyte, as the picker reports limits.
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Declared category of an asset; governs validation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Image,
    Document,
    Audio,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Image, AssetKind::Document, AssetKind::Audio];

    /// Stable lowercase identifier used as the select option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "document",
            Self::Audio => "audio",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "image" => Some(Self::Image),
            "document" => Some(Self::Document),
            "audio" => Some(Self::Audio),
            _ => None,
        }
    }

    /// Plural label for kind pickers and filter options.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "Images",
            Self::Document => "PDF",
            Self::Audio => "Audio",
        }
    }

    /// Noun used inside sentences ("Please upload a PDF file.").
    #[must_use]
    pub fn noun(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Document => "PDF",
            Self::Audio => "audio",
        }
    }

    /// Largest accepted file, in megabytes.
    #[must_use]
    pub fn max_size_mb(self) -> u64 {
        match self {
            Self::Image => 10,
            Self::Document => 20,
            Self::Audio => 30,
        }
    }

    /// Value for the `accept` attribute of the file input.
    #[must_use]
    pub fn accept_attr(self) -> &'static str {
        match self {
            Self::Image => "image/*",
            Self::Document => ".pdf",
            Self::Audio => "audio/*",
        }
    }

    /// Whether a file's name/MIME type matches this kind.
    ///
    /// Documents are matched on a `.pdf` suffix; images and audio on the MIME
    /// type prefix, since browsers report those reliably.
    #[must_use]
    pub fn matches(self, file: &FileInfo) -> bool {
        match self {
            Self::Document => file.name.to_ascii_lowercase().ends_with(".pdf"),
            Self::Image => file.mime_type.starts_with("image"),
            Self::Audio => file.mime_type.starts_with("audio"),
        }
    }
}

/// Metadata of a file picked by the user. The contents are never read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
}

impl FileInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, byte_size: u64, mime_type: impl Into<String>) -> Self {
        Self { name: name.into(), byte_size, mime_type: mime_type.into() }
    }

    /// Size formatted the way the picker shows it, e.g. `"2.50 MB"`.
    #[must_use]
    pub fn size_label(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let mb = self.byte_size as f64 / BYTES_PER_MB as f64;
        format!("{mb:.2} MB")
    }
}

/// Why a candidate file was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FileRejection {
    #[error("Please upload a {} file.", .kind.noun())]
    WrongType { kind: AssetKind },
    #[error("Maximum file size is {max_mb}MB.")]
    TooLarge { max_mb: u64 },
}

impl FileRejection {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::WrongType { .. } => "Invalid file type",
            Self::TooLarge { .. } => "File too large",
        }
    }

    #[must_use]
    pub fn notice(self) -> Notice {
        Notice::destructive(self.title(), self.to_string())
    }
}

/// Run the acceptance guard: type first, then size.
///
/// # Errors
///
/// Returns the first rule the file violates.
pub fn check_file(kind: AssetKind, file: &FileInfo) -> Result<(), FileRejection> {
    if !kind.matches(file) {
        return Err(FileRejection::WrongType { kind });
    }
    let max_mb = kind.max_size_mb();
    if file.byte_size > max_mb * BYTES_PER_MB {
        return Err(FileRejection::TooLarge { max_mb });
    }
    Ok(())
}

/// Boolean form of [`check_file`].
#[must_use]
pub fn is_acceptable_file(kind: AssetKind, file: &FileInfo) -> bool {
    check_file(kind, file).is_ok()
}

/// Notice shown after a file passes the guard.
#[must_use]
pub fn file_selected_notice(file: &FileInfo) -> Notice {
    Notice::success("File selected", format!("{} has been selected for upload.", file.name))
}
