use crate::fetcher::{errors::FetchError, types::PageResponse};
use bytes::Bytes;
use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;
use url::Url;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    body_bytes: Bytes,
    content_type: String,
) -> Result<PageResponse, FetchError> {
    let encoding = resolve_encoding(&content_type, &body_bytes);
    // decode() honors a BOM, so the encoding actually used may differ
    let (decoded, encoding, had_errors) = encoding.decode(&body_bytes);
    if had_errors {
        return Err(FetchError::Charset(format!(
            "failed to decode body as {}",
            encoding.name()
        )));
    }

    Ok(PageResponse {
        url_final,
        status,
        content_type,
        body: decoded.into_owned(),
        charset: encoding.name(),
        fetched_at: Utc::now(),
    })
}

fn resolve_encoding(content_type: &str, body_bytes: &[u8]) -> &'static Encoding {
    // 1. Charset declared in the Content-Type header
    if let Some(encoding) = encoding_from_capture(CHARSET_REGEX.captures(content_type)) {
        return encoding;
    }

    // 2. Charset declared in a <meta> tag within the first 4KB
    let window = &body_bytes[..body_bytes.len().min(4096)];
    let head = String::from_utf8_lossy(window);

    if let Some(encoding) = encoding_from_capture(META_CHARSET_REGEX.captures(&head)) {
        return encoding;
    }
    if let Some(encoding) = encoding_from_capture(META_HTTP_EQUIV_REGEX.captures(&head)) {
        return encoding;
    }

    // 3. Heuristic detection over the same window
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(window, false);
    detector.guess(None, true)
}

fn encoding_from_capture(captures: Option<regex::Captures<'_>>) -> Option<&'static Encoding> {
    let label = captures?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}
