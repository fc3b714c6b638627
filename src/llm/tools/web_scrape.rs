//! 网页抓取工具

use rig::tool::Tool;
use serde::Deserialize;

use crate::fetch::{FirecrawlClient, FirecrawlError, ScrapedPage};

/// 网页抓取工具
#[derive(Debug, Clone)]
pub struct WebScrapeTool {
    client: FirecrawlClient,
}

/// 抓取参数
#[derive(Debug, Deserialize)]
pub struct WebScrapeArgs {
    pub url: String,
}

impl WebScrapeTool {
    pub fn new(client: FirecrawlClient) -> Self {
        Self { client }
    }
}

impl Tool for WebScrapeTool {
    const NAME: &'static str = "web_scrape";

    type Error = FirecrawlError;
    type Args = WebScrapeArgs;
    type Output = ScrapedPage;

    async fn definition(&self, _prompt: String) -> rig::completion::ToolDefinition {
        rig::completion::ToolDefinition {
            name: Self::NAME.to_string(),
            description: "Scrape a single web page and return its content as markdown together with page metadata.".to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "Absolute URL of the page to scrape"
                    }
                },
                "required": ["url"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        tracing::info!("   🔧 tool called...web_scrape@{}", args.url);

        self.client.scrape_page(&args.url).await
    }
}
