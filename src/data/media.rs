//! Media attachment: MIME classification and data-URI embedding.
//!
//! Files are stored as-is. There is no size limit and no check that the
//! payload is actually playable.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use crate::error::MediaError;
use crate::models::{Media, MediaKind};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Classify a MIME type by its top-level prefix.
pub fn classify_mime(mime: &str) -> MediaKind {
    if mime.starts_with("image/") {
        MediaKind::Image
    } else if mime.starts_with("audio/") {
        MediaKind::Audio
    } else if mime.starts_with("video/") {
        MediaKind::Video
    } else {
        MediaKind::Unknown
    }
}

pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

pub fn media_from_bytes(mime: &str, bytes: &[u8]) -> Media {
    Media {
        kind: classify_mime(mime),
        source_data: to_data_uri(mime, bytes),
    }
}

/// Read a file and embed it, guessing the MIME type from the extension.
pub async fn load_media_file<P: AsRef<Path>>(path: P) -> Result<Media, MediaError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| MediaError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mime = mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_MIME);
    let media = media_from_bytes(mime, &bytes);

    debug!(
        path = %path.display(),
        mime,
        kind = media.kind.label(),
        bytes = bytes.len(),
        "embedded media file"
    );

    Ok(media)
}

/// MIME type declared in a data URI, if it has one.
pub fn data_uri_mime(source: &str) -> Option<&str> {
    let rest = source.strip_prefix("data:")?;
    let end = rest.find([';', ','])?;
    Some(&rest[..end]).filter(|m| !m.is_empty())
}

/// Approximate decoded size of a base64 data URI payload.
pub fn payload_size(source: &str) -> usize {
    match source.split_once(";base64,") {
        Some((_, payload)) => {
            let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
            (payload.len() / 4 * 3).saturating_sub(padding)
        }
        None => source.split_once(',').map_or(0, |(_, data)| data.len()),
    }
}

/// Short human-readable description for the presentation layer.
pub fn describe(media: &Media) -> String {
    let size = payload_size(&media.source_data);
    let mime = data_uri_mime(&media.source_data).unwrap_or("?");
    format!("[{} · {} · {}]", media.kind.label(), mime, format_size(size))
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
