//! 语言模型接入

use anyhow::Result;
use async_trait::async_trait;

use crate::types::CompanyAnalysis;

pub mod client;
pub mod tools;

pub use client::LLMClient;

/// 调研流程依赖的模型能力
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// 单轮对话，返回自由文本
    async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// 结构化输出，结果受 [`CompanyAnalysis`] 的schema约束
    async fn analyze_company(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<CompanyAnalysis>;
}
