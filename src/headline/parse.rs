use scraper::{Html, Selector};
use std::sync::LazyLock;

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("Failed to compile h1 selector"));

/// Text of the first `<h1>` element in the document, with whitespace
/// collapsed. `None` when the document has no `<h1>` at all or the first
/// one carries no text. Later headings are never consulted.
pub fn first_h1(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let heading = document.select(&H1_SELECTOR).next()?;
    let text = heading
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    if text.is_empty() { None } else { Some(text) }
}
