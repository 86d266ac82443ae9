//! Wikipedia lookup client
//!
//! Two-step resolution against the MediaWiki API:
//! 1. `opensearch` turns free text ("lamelo_ball", "drake") into up to
//!    `search_limit` ranked page titles ("LaMelo Ball", "Drake (musician)")
//! 2. `pageimages` is asked for each title in rank order; the first title
//!    with a thumbnail is the match
//!
//! Title lookups are exact, which is why step 1 is needed at all.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::EntityLookup;
use crate::config::LookupConfig;
use crate::entity::EntityMatch;
use crate::error::{LookupError, LookupResult};

/// `action=query&prop=pageimages` response
#[derive(Debug, Clone, Deserialize)]
pub struct PageImagesResponse {
    #[serde(default)]
    pub query: Option<PageImagesQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageImagesQuery {
    /// Keyed by page id ("-1" for a missing page)
    #[serde(default)]
    pub pages: BTreeMap<String, PageEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub source: String,
}

/// Ranked titles from an `opensearch` response
///
/// The body is `[query, [titles], [descriptions], [urls]]`.
pub fn parse_opensearch(body: &Value) -> LookupResult<Vec<String>> {
    let titles = body
        .get(1)
        .and_then(Value::as_array)
        .ok_or_else(|| LookupError::malformed("opensearch response has no title list"))?;

    Ok(titles
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect())
}

/// Thumbnail URL of the first page in a `pageimages` response, if it has one
pub fn parse_page_thumbnail(body: &Value) -> LookupResult<Option<String>> {
    let response: PageImagesResponse = serde_json::from_value(body.clone())
        .map_err(|e| LookupError::malformed(format!("pageimages response: {}", e)))?;

    let query = response
        .query
        .ok_or_else(|| LookupError::malformed("pageimages response has no query"))?;

    Ok(query
        .pages
        .into_values()
        .next()
        .and_then(|page| page.thumbnail)
        .map(|thumb| thumb.source))
}

/// Article URL for a canonical page name on the wiki behind `api_base`
pub fn page_url(api_base: &Url, name: &str) -> String {
    let mut url = api_base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.set_path(&format!("/wiki/{}", name.replace(' ', "_")));
    url.to_string()
}

/// MediaWiki-backed [`EntityLookup`]
pub struct WikipediaClient {
    http: Client,
    api_url: Url,
    search_limit: u32,
    thumbnail_size: u32,
}

impl WikipediaClient {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let api_url = config.api_url().context("Invalid lookup API base")?;
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            api_url,
            search_limit: config.search_limit,
            thumbnail_size: config.thumbnail_size,
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Article URL for a canonical name
    pub fn page_url(&self, name: &str) -> String {
        page_url(&self.api_url, name)
    }

    async fn get_json(&self, params: &[(&str, String)]) -> LookupResult<Value> {
        let response = self
            .http
            .get(self.api_url.clone())
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        Ok(response.json().await?)
    }

    /// Ranked canonical titles for free text
    pub async fn search_names(&self, query: &str) -> LookupResult<Vec<String>> {
        let body = self
            .get_json(&[
                ("action", "opensearch".to_string()),
                ("search", query.to_string()),
                ("limit", self.search_limit.to_string()),
                ("namespace", "0".to_string()),
                ("format", "json".to_string()),
            ])
            .await?;
        parse_opensearch(&body)
    }

    /// Thumbnail URL for an exact page title
    pub async fn page_image(&self, title: &str) -> LookupResult<Option<String>> {
        let body = self
            .get_json(&[
                ("action", "query".to_string()),
                ("titles", title.to_string()),
                ("prop", "pageimages".to_string()),
                ("format", "json".to_string()),
                ("pithumbsize", self.thumbnail_size.to_string()),
            ])
            .await?;
        parse_page_thumbnail(&body)
    }

    /// Fallible form of [`EntityLookup::resolve`]
    pub async fn lookup(&self, candidate: &str) -> LookupResult<Option<EntityMatch>> {
        let titles = self.search_names(candidate).await?;
        tracing::debug!(candidate = %candidate, titles = ?titles, "Name search results");

        for title in titles {
            if let Some(image_url) = self.page_image(&title).await? {
                return Ok(Some(EntityMatch::new(title, image_url)));
            }
            tracing::debug!(title = %title, "Page has no image, trying next");
        }

        Ok(None)
    }
}

#[async_trait]
impl EntityLookup for WikipediaClient {
    async fn resolve(&self, candidate: &str) -> Option<EntityMatch> {
        match self.lookup(candidate).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(candidate = %candidate, error = %e, "Lookup failed, treating as no match");
                None
            }
        }
    }
}
