//! Request and result types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::raster::ImageFormat;

/// One thumbnail request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRequest {
    /// Path or `file://` URI of the PDF
    pub source: String,
    /// Zero-based page index; negative values are rejected
    pub page_index: i64,
    /// Logical name used as the output file prefix; defaults to `source`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_hint: Option<String>,
}

impl ThumbnailRequest {
    pub fn new(source: impl Into<String>, page_index: i64) -> Self {
        Self {
            source: source.into(),
            page_index,
            name_hint: None,
        }
    }

    pub fn with_name_hint(mut self, name: impl Into<String>) -> Self {
        self.name_hint = Some(name.into());
        self
    }

    /// Logical name the output file is derived from
    pub fn logical_name(&self) -> &str {
        self.name_hint.as_deref().unwrap_or(&self.source)
    }
}

/// Where a thumbnail was written and how large its page is
///
/// `width` and `height` are the page's content-bounds size in PDF units,
/// truncated toward zero, whatever scale the image was rendered at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDescriptor {
    /// `file://` URI of the written image
    pub uri: String,
    /// Filesystem path of the written image
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}
