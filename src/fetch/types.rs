//! Firecrawl请求与响应类型

use serde::{Deserialize, Serialize};

/// 搜索命中
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// 命中页面的原始内容
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub metadata: Option<HitMetadata>,
}

impl SearchHit {
    /// 命中的标题，优先使用页面元数据中的标题
    pub fn display_title(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.title.as_deref())
            .or(self.title.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

/// 页面元数据
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HitMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "sourceURL")]
    pub source_url: Option<String>,
}

/// 抓取得到的页面
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedPage {
    pub markdown: String,
    #[serde(default)]
    pub metadata: Option<HitMetadata>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest<'a> {
    pub query: &'a str,
    pub limit: usize,
    #[serde(rename = "scrapeOptions")]
    pub scrape_options: ScrapeOptions,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScrapeOptions {
    pub formats: Vec<&'static str>,
}

impl ScrapeOptions {
    pub fn markdown() -> Self {
        Self {
            formats: vec!["markdown"],
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ScrapeRequest<'a> {
    pub url: &'a str,
    pub formats: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<SearchHit>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScrapeResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ScrapeData>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScrapeData {
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub metadata: Option<HitMetadata>,
}

impl From<ScrapeData> for ScrapedPage {
    fn from(data: ScrapeData) -> Self {
        Self {
            markdown: data.markdown.unwrap_or_default(),
            metadata: data.metadata,
        }
    }
}
