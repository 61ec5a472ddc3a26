//! LangSearch web-search client.
//!
//! Produces a short human-readable digest of the top results. By contract,
//! every failure mode (transport, non-2xx status, malformed response) is
//! reported in-band as the returned string, never as an `Err` - a broken
//! search degrades the answer, it must not abort the submission.

use serde_json::{json, Value};

const LANGSEARCH_URL: &str = "https://api.langsearch.com/v1/web-search";

/// Maximum result blocks rendered in the digest, regardless of how many
/// results the API was asked for.
const MAX_RESULTS: usize = 3;
/// Title truncation limit (characters).
const TITLE_MAX: usize = 80;
/// Summary truncation limit (characters).
const SUMMARY_MAX: usize = 100;

/// Client for the LangSearch web-search API.
pub struct LangSearchClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl LangSearchClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: LANGSEARCH_URL.to_string(),
        }
    }

    /// Override the endpoint URL (test servers).
    #[cfg(test)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    /// Search the web and return a formatted digest of the top results.
    ///
    /// One outbound POST per invocation; no retry, no explicit timeout.
    pub async fn search(&self, query: &str, count: u32) -> String {
        tracing::debug!(query, count, "LangSearch request");

        let body = json!({
            "query": query,
            "freshness": "noLimit",
            "summary": true,
            "count": count,
        });

        let response = match self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!(error = %e, "LangSearch transport error");
                return format!("Search failed: {}", e);
            }
        };

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::warn!(status = %status, "LangSearch returned error status");
            return format!("Search failed: {}, {}", status.as_u16(), text);
        }

        match parse_results(&text) {
            Ok(digest) => digest,
            Err(e) => {
                tracing::warn!(error = %e, "LangSearch response did not parse");
                format!("Failed to parse LangSearch response: {}", e)
            }
        }
    }
}

/// Parse the response envelope and format the digest.
///
/// Expected shape: `{"data": {"webPages": {"value": [{"name", "summary", ..}]}}}`.
fn parse_results(body: &str) -> Result<String, String> {
    let json: Value = serde_json::from_str(body).map_err(|e| e.to_string())?;

    let pages = json
        .get("data")
        .and_then(|v| v.get("webPages"))
        .and_then(|v| v.get("value"))
        .and_then(|v| v.as_array())
        .ok_or_else(|| "missing data.webPages.value".to_string())?;

    if pages.is_empty() {
        return Ok("No relevant results found.".to_string());
    }

    format_digest(pages)
}

/// Format up to `MAX_RESULTS` pages as numbered result blocks.
///
/// A page without a string `name` or `summary` is a malformed response,
/// reported as a parse error rather than rendered with placeholders.
fn format_digest(pages: &[Value]) -> Result<String, String> {
    let mut formatted = String::new();

    for (i, page) in pages.iter().take(MAX_RESULTS).enumerate() {
        let title = page
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "missing 'name' field".to_string())?;
        let summary = page
            .get("summary")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "missing 'summary' field".to_string())?;

        formatted.push_str(&format!(
            "\n--- Result {} ---\nTitle: {}\nSummary: {}\n",
            i + 1,
            truncate(title, TITLE_MAX),
            truncate(summary, SUMMARY_MAX),
        ));
    }

    Ok(formatted.trim().to_string())
}

/// Truncate to at most `max` characters, appending an ellipsis marker only
/// when something was actually cut. Counts characters, not bytes, so
/// multi-byte text is never split mid-code-point.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{}...", head)
    }
}
