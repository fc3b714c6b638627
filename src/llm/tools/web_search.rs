//! 网页搜索工具

use rig::tool::Tool;
use serde::{Deserialize, Serialize};

use crate::fetch::{FirecrawlClient, FirecrawlError, SearchHit};
use crate::utils::text::truncate_chars;

const DEFAULT_LIMIT: usize = 5;
const MAX_LIMIT: usize = 10;
/// 每条命中返回给模型的markdown长度上限
const MAX_HIT_CHARS: usize = 4000;

/// 网页搜索工具
#[derive(Debug, Clone)]
pub struct WebSearchTool {
    client: FirecrawlClient,
}

/// 搜索参数
#[derive(Debug, Deserialize)]
pub struct WebSearchArgs {
    pub query: String,
    pub limit: Option<usize>,
}

/// 搜索结果
#[derive(Debug, Serialize)]
pub struct WebSearchOutput {
    pub results: Vec<SearchHit>,
}

impl WebSearchTool {
    pub fn new(client: FirecrawlClient) -> Self {
        Self { client }
    }

    fn effective_limit(args: &WebSearchArgs) -> usize {
        args.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }
}

impl Tool for WebSearchTool {
    const NAME: &'static str = "web_search";

    type Error = FirecrawlError;
    type Args = WebSearchArgs;
    type Output = WebSearchOutput;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Search the web and return the top results with their url, title, description and page content as markdown.".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Number of results to return (1-10, default 5)"
                    }
                },
                "required": ["query"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        tracing::info!("   🔧 tool called...web_search@{:?}", args);

        let limit = Self::effective_limit(&args);
        let mut results = self.client.search_pages(&args.query, limit).await?;
        for hit in results.iter_mut() {
            if let Some(markdown) = hit.markdown.as_mut() {
                let truncated = truncate_chars(markdown, MAX_HIT_CHARS).len();
                markdown.truncate(truncated);
            }
        }

        Ok(WebSearchOutput { results })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit() {
        let args = |limit| WebSearchArgs {
            query: "rust web frameworks".to_string(),
            limit,
        };

        assert_eq!(WebSearchTool::effective_limit(&args(None)), DEFAULT_LIMIT);
        assert_eq!(WebSearchTool::effective_limit(&args(Some(0))), 1);
        assert_eq!(WebSearchTool::effective_limit(&args(Some(50))), MAX_LIMIT);
        assert_eq!(WebSearchTool::effective_limit(&args(Some(3))), 3);
    }

    #[test]
    fn test_args_deserialize_without_limit() {
        let args: WebSearchArgs =
            serde_json::from_value(serde_json::json!({ "query": "axum" })).unwrap();
        assert_eq!(args.query, "axum");
        assert!(args.limit.is_none());
    }
}
