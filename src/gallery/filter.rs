//! Which records are worth showing as picture cards

use reqwest::Url;

use crate::backend::types::Record;

pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// True for image entries with a usable picture URL and no error marker
pub fn is_valid(record: &Record) -> bool {
    if record.msg.is_some() || record.media_type != "image" {
        return false;
    }

    match record.url.as_deref() {
        Some(url) if !url.trim().is_empty() => has_image_extension(url),
        _ => false,
    }
}

/// Keep only valid records, in their original order
pub fn filter_valid(records: &[Record]) -> Vec<Record> {
    records.iter().filter(|r| is_valid(r)).cloned().collect()
}

/// Suffix match after the last dot, so a bare `/.jpg` segment counts too
fn has_image_extension(url: &str) -> bool {
    url_path(url)
        .rsplit_once('.')
        .map(|(_, ext)| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
        .unwrap_or(false)
}

/// Path component of an absolute or relative URL, without query or fragment
fn url_path(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}
