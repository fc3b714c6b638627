use anyhow::Result;
use async_trait::async_trait;

use crate::fetch::SearchHit;
use crate::research::prompts::{TOOL_EXTRACTION_SYSTEM, tool_extraction_user};
use crate::research::{ResearchContext, Stage};
use crate::types::{ResearchState, StateUpdate};
use crate::utils::text::truncate_chars;

/// 从对比类文章中提取候选工具名
#[derive(Default)]
pub struct ToolExtractor;

impl ToolExtractor {
    /// 搜索对比文章并拼接每篇文章的开头部分
    async fn collect_articles(
        &self,
        context: &ResearchContext,
        query: &str,
    ) -> (String, Vec<SearchHit>) {
        let article_query = format!("{} tools comparison best alternatives", query);
        let hits = context
            .fetcher
            .search(&article_query, context.config.article_results)
            .await;

        let mut all_content = String::new();
        for hit in &hits {
            if hit.url.is_empty() {
                continue;
            }
            if let Some(page) = context.fetcher.scrape(&hit.url).await {
                all_content.push_str(truncate_chars(
                    &page.markdown,
                    context.config.article_excerpt_chars,
                ));
                all_content.push_str("\n\n");
            }
        }

        (all_content, hits)
    }
}

#[async_trait]
impl Stage for ToolExtractor {
    fn name(&self) -> &'static str {
        "extract_tools"
    }

    async fn execute(
        &self,
        context: &ResearchContext,
        state: &ResearchState,
    ) -> Result<StateUpdate> {
        tracing::info!("🕵️ Finding articles about: {}", state.query);

        let (all_content, hits) = self.collect_articles(context, &state.query).await;

        let extracted_tools = match context
            .llm
            .prompt(
                TOOL_EXTRACTION_SYSTEM,
                &tool_extraction_user(&state.query, &all_content),
            )
            .await
        {
            Ok(reply) => {
                let tool_names = parse_tool_names(&reply);
                let preview: Vec<&str> = tool_names.iter().take(5).map(String::as_str).collect();
                tracing::info!("🔧 Extracted tools: {}", preview.join(", "));
                tool_names
            }
            Err(e) => {
                tracing::warn!("Error during tool extraction: {}", e);
                Vec::new()
            }
        };

        Ok(StateUpdate {
            extracted_tools: Some(extracted_tools),
            search_results: Some(hits),
            ..Default::default()
        })
    }
}

/// 模型回复每行一个工具名，去掉首尾空白与空行
pub fn parse_tool_names(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
