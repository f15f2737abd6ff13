pub mod parse;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::fetcher;

#[cfg(test)]
use mockall::automock;

/// Fetches a page and pulls out its headline.
///
/// Every failure on the way (invalid URL, unreachable host, non-success
/// status, undecodable body, absent or text-less `<h1>`) collapses to
/// `None`; the cause is logged here and nowhere else.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HeadlineExtractorTrait {
    async fn headline(&self, url: &str) -> Option<String>;
}

pub struct HeadlineExtractor;

#[async_trait]
impl HeadlineExtractorTrait for HeadlineExtractor {
    #[instrument(skip_all, fields(url = %url))]
    async fn headline(&self, url: &str) -> Option<String> {
        let page = match fetcher::fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("page fetch failed: {}", e);
                return None;
            }
        };

        match parse::first_h1(&page.body) {
            Some(text) => Some(text),
            None => {
                info!("no headline text at {}", page.url_final);
                None
            }
        }
    }
}
