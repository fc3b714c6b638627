//! Content Fetcher - 网页搜索与页面抓取
//!
//! 流程只依赖 [`ContentFetcher`]：搜索失败返回空列表，抓取失败返回 `None`，
//! 错误在这里记录日志后吞掉，不会向上传播。具体的后端是 Firecrawl。

pub mod error;
pub mod firecrawl;
pub mod types;

pub use error::FirecrawlError;
pub use firecrawl::FirecrawlClient;
pub use types::{HitMetadata, ScrapedPage, SearchHit};

use async_trait::async_trait;

/// 搜索与抓取能力
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// 搜索网页，最多返回 `max_results` 条命中；后端出错时返回空列表
    async fn search(&self, query: &str, max_results: usize) -> Vec<SearchHit>;

    /// 抓取URL并转换为markdown；后端出错时返回 `None`
    async fn scrape(&self, url: &str) -> Option<ScrapedPage>;
}

#[async_trait]
impl ContentFetcher for FirecrawlClient {
    async fn search(&self, query: &str, max_results: usize) -> Vec<SearchHit> {
        let phrase = self.search_phrase(query);
        match self.search_pages(&phrase, max_results).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!("Error during search: {}", e);
                Vec::new()
            }
        }
    }

    async fn scrape(&self, url: &str) -> Option<ScrapedPage> {
        match self.scrape_page(url).await {
            Ok(page) => Some(page),
            Err(e) => {
                tracing::warn!("Error during scraping {}: {}", url, e);
                None
            }
        }
    }
}
