//! HTTP client for the remote suggestion endpoints.
//!
//! Each category maps to one GET endpoint returning a small JSON body, from
//! which one text field is projected. All response fields are optional: a
//! missing field yields "no suggestion" rather than a parse error.

use crate::config::Config;
use crate::suggest::Category;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Response body of the advice endpoint (`{"slip": {"advice": "..."}}`).
#[derive(Debug, Deserialize)]
struct AdviceResponse {
    slip: Option<AdviceSlip>,
}

#[derive(Debug, Deserialize)]
struct AdviceSlip {
    advice: Option<String>,
}

/// Response body of the quote endpoint (`{"content": "...", "author": "..."}`).
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    content: Option<String>,
    author: Option<String>,
}

/// Response body of the activity endpoint (`{"activity": "..."}`).
#[derive(Debug, Deserialize)]
struct ActivityResponse {
    activity: Option<String>,
}

/// Client for fetching one suggestion from a category endpoint.
///
/// The configured timeout bounds the whole request. Every failure mode
/// (connection error, timeout, non-success status, unparseable body, missing
/// field) collapses into `None`; the caller falls back to the local pool.
pub struct SuggestionClient {
    client: Client,
    advice_url: String,
    quote_url: String,
    activity_url: String,
}

impl SuggestionClient {
    /// Creates a client from the configured endpoints and timeout.
    ///
    /// Falls back to a default client if the timeout-bearing builder cannot
    /// be constructed, so suggestion setup never aborts the application.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(config.suggest_timeout)
            .build()
            .unwrap_or_default();

        SuggestionClient {
            client,
            advice_url: config.advice_url.clone(),
            quote_url: config.quote_url.clone(),
            activity_url: config.activity_url.clone(),
        }
    }

    fn endpoint(&self, category: Category) -> &str {
        match category {
            Category::Advice => &self.advice_url,
            Category::Quote => &self.quote_url,
            Category::Activity => &self.activity_url,
        }
    }

    /// Appends a cache-busting timestamp parameter so intermediaries do not
    /// serve the same response over and over.
    fn cache_busted(url: &str) -> String {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        if url.contains('?') {
            format!("{}&ts={}", url, ts)
        } else {
            format!("{}?ts={}", url, ts)
        }
    }

    /// Fetches one suggestion for `category`.
    ///
    /// Returns `None` on any failure; failures are logged at debug level and
    /// otherwise indistinguishable to the caller.
    pub fn fetch(&self, category: Category) -> Option<String> {
        let url = Self::cache_busted(self.endpoint(category));
        debug!("Fetching {:?} suggestion", category);

        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(e) => {
                debug!("Suggestion fetch failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            debug!("Suggestion fetch returned status {}", response.status());
            return None;
        }

        let text = match category {
            Category::Advice => response
                .json::<AdviceResponse>()
                .ok()?
                .slip?
                .advice?,
            Category::Quote => {
                let body = response.json::<QuoteResponse>().ok()?;
                format!("{} — {}", body.content?, body.author?)
            }
            Category::Activity => response.json::<ActivityResponse>().ok()?.activity?,
        };

        Some(text)
    }
}
