use crate::llm::LanguageModel;
use crate::research::prompts::{TOOL_ANALYSIS_SYSTEM, tool_analysis_user};
use crate::types::CompanyAnalysis;

/// 让模型对抓取到的官网内容做结构化分析
///
/// 模型调用失败时返回 [`CompanyAnalysis::failed`]，不向上传播错误。
pub async fn analyze_tool_content(
    llm: &dyn LanguageModel,
    tool_name: &str,
    content: &str,
) -> CompanyAnalysis {
    match llm
        .analyze_company(TOOL_ANALYSIS_SYSTEM, &tool_analysis_user(tool_name, content))
        .await
    {
        Ok(analysis) => analysis,
        Err(e) => {
            tracing::warn!("Error during analysis of {}: {}", tool_name, e);
            CompanyAnalysis::failed()
        }
    }
}
