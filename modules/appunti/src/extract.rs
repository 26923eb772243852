//! Field extraction from Wikimedia HTML pages.
//!
//! Two page shapes are understood: a Commons file page, which carries an
//! English description block (`.description.en`), and a media search result
//! page, which lists `.sdms-image-result` entries.

use appunti_types::{ImageRecord, NO_DESCRIPTION};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| selector(".description.en"));
static IMAGE_RESULT: LazyLock<Selector> = LazyLock::new(|| selector(".sdms-image-result"));
static IMAGE: LazyLock<Selector> = LazyLock::new(|| selector("img"));
static IMAGE_TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".sdms-image-title"));
static IMAGE_LINK: LazyLock<Selector> = LazyLock::new(|| selector("a.sdms-image-title"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

/// A parsed HTML document that can be queried with CSS selectors
pub struct Page {
    document: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// All elements matching `selector`, in document order
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.document.select(selector)
    }

    pub fn select_first<'a>(&'a self, selector: &'a Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }
}

/// Extract the English description from a file page, or the fallback text.
pub fn description(html: &str) -> String {
    let page = Page::parse(html);
    let element = page.select_first(&DESCRIPTION);
    log::debug!("Description element found: {}", element.is_some());

    match element {
        Some(el) => {
            let description = clean_description(&text_of(el));
            log::debug!("Extracted description: {}", description);
            description
        }
        None => NO_DESCRIPTION.to_string(),
    }
}

/// Extract image records from a media search result page.
///
/// Results whose image lacks a non-empty `src` or `alt` are skipped.
pub fn images(html: &str) -> Vec<ImageRecord> {
    let page = Page::parse(html);
    page.select(&IMAGE_RESULT).filter_map(image_record).collect()
}

fn image_record(result: ElementRef<'_>) -> Option<ImageRecord> {
    let img = result.select(&IMAGE).next()?;
    let src = non_empty(img.value().attr("src"))?;
    let alt = non_empty(img.value().attr("alt"))?;

    let title = result
        .select(&IMAGE_TITLE)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string();

    let page_url = result
        .select(&IMAGE_LINK)
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string);

    Some(ImageRecord {
        src,
        alt,
        title,
        page_url,
    })
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Drop a leading "English:" label and surrounding whitespace
fn clean_description(text: &str) -> String {
    text.strip_prefix("English:").unwrap_or(text).trim().to_string()
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
