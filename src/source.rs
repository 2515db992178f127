use crate::extract;
use regex::Regex;
use reqwest::Client;
use tracing::debug;

/// The page-read boundary: one text snapshot of the watched element per tick.
///
/// `None` means the page or element is unavailable this tick - an expected
/// transient condition (page loading, element re-rendered), never an error.
#[allow(async_fn_in_trait)]
pub trait PriceSource {
    async fn read(&mut self) -> Option<String>;
}

/// Polls a fixed page URL and extracts the visible text of the first element
/// carrying a fixed CSS class.
pub struct HtmlSource {
    client: Client,
    url: String,
    selector: Regex,
}

impl HtmlSource {
    pub fn new(url: &str, css_class: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            client: Client::new(),
            url: url.to_string(),
            selector: extract::class_selector(css_class)?,
        })
    }
}

impl PriceSource for HtmlSource {
    async fn read(&mut self) -> Option<String> {
        let response = match self.client.get(&self.url).send().await {
            Ok(r) => r,
            Err(e) => {
                debug!("Page fetch failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            debug!("Page fetch returned {}", response.status());
            return None;
        }

        let html = response.text().await.ok()?;
        extract::select_text(&self.selector, &html)
    }
}
