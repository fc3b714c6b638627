//! Firecrawl API客户端
//!
//! - 搜索：`POST {base_url}/search`，请求体 `{query, limit, scrapeOptions}`
//! - 抓取：`POST {base_url}/scrape`，请求体 `{url, formats}`
//! - 认证：`Authorization: Bearer <key>`
//!
//! 每次调用都直接请求后端，没有缓存、重试或限流。

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::FirecrawlConfig;
use crate::fetch::error::FirecrawlError;
use crate::fetch::types::{
    ScrapeOptions, ScrapeRequest, ScrapeResponse, ScrapedPage, SearchHit, SearchRequest,
    SearchResponse,
};

/// Firecrawl客户端
#[derive(Debug, Clone)]
pub struct FirecrawlClient {
    http: reqwest::Client,
    config: FirecrawlConfig,
}

impl FirecrawlClient {
    pub fn new(config: FirecrawlConfig) -> Result<Self, FirecrawlError> {
        if config.api_key.trim().is_empty() {
            return Err(FirecrawlError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| FirecrawlError::Network(Arc::new(e)))?;

        Ok(Self { http, config })
    }

    /// 调研流程实际使用的搜索词，附加配置的后缀
    pub fn search_phrase(&self, query: &str) -> String {
        let suffix = self.config.search_suffix.trim();
        if suffix.is_empty() {
            query.to_string()
        } else {
            format!("{} {}", query, suffix)
        }
    }

    /// 执行网页搜索，搜索词原样发送
    pub async fn search_pages(
        &self,
        phrase: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, FirecrawlError> {
        let request = SearchRequest {
            query: phrase,
            limit,
            scrape_options: ScrapeOptions::markdown(),
        };

        let start = Instant::now();
        let response: SearchResponse = self.post("search", &request).await?;
        if !response.success {
            return Err(FirecrawlError::Unsuccessful(
                response.error.unwrap_or_else(|| "search failed".to_string()),
            ));
        }

        tracing::debug!(
            "search '{}' completed in {:?}, {} results",
            phrase,
            start.elapsed(),
            response.data.len()
        );

        let mut hits = response.data;
        hits.truncate(limit);
        Ok(hits)
    }

    /// 抓取单个页面为markdown
    pub async fn scrape_page(&self, url: &str) -> Result<ScrapedPage, FirecrawlError> {
        let request = ScrapeRequest {
            url,
            formats: vec!["markdown"],
        };

        let start = Instant::now();
        let response: ScrapeResponse = self.post("scrape", &request).await?;
        if !response.success {
            return Err(FirecrawlError::Unsuccessful(
                response.error.unwrap_or_else(|| "scrape failed".to_string()),
            ));
        }

        let data = response
            .data
            .ok_or_else(|| FirecrawlError::Parse("scrape response has no data".to_string()))?;
        tracing::debug!("scraped {} in {:?}", url, start.elapsed());

        Ok(data.into())
    }

    async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, FirecrawlError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);

        let http_response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("Firecrawl {} response status: {}", endpoint, status);

        if status == 401 || status == 403 {
            return Err(FirecrawlError::AuthError);
        }

        if status == 429 {
            return Err(FirecrawlError::RateLimited);
        }

        if status.is_client_error() || status.is_server_error() {
            return Err(FirecrawlError::HttpError {
                status: status.as_u16(),
            });
        }

        let bytes = http_response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| FirecrawlError::Parse(e.to_string()))
    }
}
