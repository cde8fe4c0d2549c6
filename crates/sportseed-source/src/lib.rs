//! Scraping source for sport names.
//!
//! [`WikipediaSource`] fetches the "List of sports" article and pulls the
//! names out of its column lists. The markup knowledge lives entirely in
//! [`parse_sports`]; callers only see a set of names.

pub mod error;

pub use error::{Error, Result};

use std::{collections::BTreeSet, sync::LazyLock, time::Duration};

use reqwest::{Client, header};
use scraper::{ElementRef, Html, Selector};
use sportseed_core::source::SportSource;

/// Default page the sport names are scraped from.
pub const DEFAULT_URL: &str = "https://en.wikipedia.org/wiki/List_of_sports";

const USER_AGENT: &str = "Mozilla/5.0";

static COLUMN_LIST: LazyLock<Selector> =
  LazyLock::new(|| Selector::parse("div.div-col").expect("valid selector"));
static LIST_ITEM: LazyLock<Selector> =
  LazyLock::new(|| Selector::parse("li").expect("valid selector"));
static LINK: LazyLock<Selector> =
  LazyLock::new(|| Selector::parse("a").expect("valid selector"));

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Extract sport names from an HTML document.
///
/// Every `li` inside a `div.div-col` contributes the text of its first link.
/// Items without a link, and links whose trimmed text is empty, are skipped.
pub fn parse_sports(html: &str) -> BTreeSet<String> {
  let document = Html::parse_document(html);

  document
    .select(&COLUMN_LIST)
    .flat_map(|column| column.select(&LIST_ITEM))
    .filter_map(|item| item.select(&LINK).next())
    .map(link_text)
    .filter(|name| !name.is_empty())
    .collect()
}

/// Text of `link` with each text node trimmed, joined without separators.
fn link_text(link: ElementRef<'_>) -> String {
  link.text().map(str::trim).collect()
}

// ─── Source ──────────────────────────────────────────────────────────────────

/// A [`SportSource`] that scrapes a Wikipedia-style list page.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct WikipediaSource {
  client: Client,
  url:    String,
}

impl WikipediaSource {
  pub fn new(url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .user_agent(USER_AGENT)
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, url: url.into() })
  }

  pub fn url(&self) -> &str { &self.url }

  async fn fetch_page(&self) -> Result<String> {
    let resp = self
      .client
      .get(&self.url)
      .header(header::ACCEPT, "text/html")
      .send()
      .await?;

    let status = resp.status();
    if !status.is_success() {
      return Err(Error::Status { url: self.url.clone(), status });
    }
    Ok(resp.text().await?)
  }
}

impl SportSource for WikipediaSource {
  type Error = Error;

  async fn fetch_sports(&self) -> Result<BTreeSet<String>> {
    tracing::info!("fetching list of sports from {}", self.url);
    let body = self.fetch_page().await?;
    let sports = parse_sports(&body);
    tracing::info!("scraped {} sports", sports.len());
    Ok(sports)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
