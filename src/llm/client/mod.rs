//! LLM客户端 - 提供统一的LLM服务接口

use anyhow::Result;
use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::LLMConfig;
use crate::llm::LanguageModel;
use crate::llm::tools::{WebScrapeTool, WebSearchTool};
use crate::types::CompanyAnalysis;

mod providers;

pub use providers::{ProviderAgent, ProviderClient, ProviderExtractor};

/// LLM客户端
///
/// 每次调用只尝试一次，失败直接返回错误，由调用方决定是否降级。
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: LLMConfig) -> Result<Self> {
        let client = ProviderClient::new(&config)?;
        Ok(Self { client, config })
    }

    /// 数据提取方法
    pub async fn extract<T>(&self, system_prompt: &str, user_prompt: &str) -> Result<T>
    where
        T: JsonSchema + for<'a> Deserialize<'a> + Serialize + Send + Sync + 'static,
    {
        let extractor =
            self.client
                .create_extractor::<T>(&self.config.model, system_prompt, &self.config);

        extractor.extract(user_prompt).await
    }

    /// 简化的单轮对话方法（不使用工具）
    pub async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let agent = self
            .client
            .create_agent(&self.config.model, system_prompt, &self.config);

        agent.prompt(user_prompt).await
    }

    /// 创建挂载网页搜索与抓取工具的Agent
    pub fn build_tool_agent(
        &self,
        system_prompt: &str,
        web_search: &WebSearchTool,
        web_scrape: &WebScrapeTool,
    ) -> ProviderAgent {
        self.client.create_agent_with_tools(
            &self.config.model,
            system_prompt,
            &self.config,
            web_search,
            web_scrape,
        )
    }
}

#[async_trait]
impl LanguageModel for LLMClient {
    async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        LLMClient::prompt(self, system_prompt, user_prompt).await
    }

    async fn analyze_company(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<CompanyAnalysis> {
        self.extract::<CompanyAnalysis>(system_prompt, user_prompt)
            .await
    }
}
