use anyhow::Result;
use async_trait::async_trait;

use crate::research::stages::analyze_tool_content;
use crate::research::{ResearchContext, Stage};
use crate::types::{CompanyInfo, ResearchState, StateUpdate};

/// 逐个调研候选工具的官网
#[derive(Default)]
pub struct ToolResearcher;

impl ToolResearcher {
    /// 确定要调研的工具名
    ///
    /// 有提取结果时取前 `max_tools` 个；否则直接用原始查询搜索，以命中标题作为工具名。
    /// 提取失败与提取结果为空走同一条回退路径。
    async fn select_tool_names(
        &self,
        context: &ResearchContext,
        state: &ResearchState,
    ) -> Vec<String> {
        let max_tools = context.config.max_tools;

        if !state.extracted_tools.is_empty() {
            return state
                .extracted_tools
                .iter()
                .take(max_tools)
                .cloned()
                .collect();
        }

        tracing::warn!("⚠️ No tools extracted to research. Falling back to direct search.");
        context
            .fetcher
            .search(&state.query, max_tools)
            .await
            .iter()
            .take(max_tools)
            .map(|hit| hit.display_title().unwrap_or("Unknown").to_string())
            .collect()
    }

    /// 调研单个工具；找不到官网时返回 `None`
    async fn research_tool(
        &self,
        context: &ResearchContext,
        tool_name: &str,
    ) -> Option<CompanyInfo> {
        let site_query = format!("{} {}", tool_name, context.config.site_query_suffix);
        let hits = context
            .fetcher
            .search(&site_query, context.config.site_results)
            .await;

        let Some(hit) = hits.first() else {
            tracing::debug!("no official site found for {}, skipping", tool_name);
            return None;
        };

        let mut company = CompanyInfo::from_hit(tool_name, hit);

        if let Some(page) = context.fetcher.scrape(&company.website).await {
            let analysis =
                analyze_tool_content(context.llm.as_ref(), &company.name, &page.markdown).await;
            company.apply_analysis(analysis);
        }

        Some(company)
    }
}

#[async_trait]
impl Stage for ToolResearcher {
    fn name(&self) -> &'static str {
        "research"
    }

    async fn execute(
        &self,
        context: &ResearchContext,
        state: &ResearchState,
    ) -> Result<StateUpdate> {
        let tool_names = self.select_tool_names(context, state).await;
        tracing::info!("🧐 Researching specific tools: {}", tool_names.join(", "));

        let mut companies = Vec::with_capacity(tool_names.len());
        for tool_name in &tool_names {
            if let Some(company) = self.research_tool(context, tool_name).await {
                companies.push(company);
            }
        }

        Ok(StateUpdate {
            companies: Some(companies),
            ..Default::default()
        })
    }
}
