use std::sync::Arc;

use anyhow::Result;

use crate::config::{Config, ResearchConfig};
use crate::fetch::{ContentFetcher, FirecrawlClient};
use crate::llm::{LLMClient, LanguageModel};

/// 调研流程的运行环境
#[derive(Clone)]
pub struct ResearchContext {
    /// 搜索与抓取
    pub fetcher: Arc<dyn ContentFetcher>,
    /// LLM调用器
    pub llm: Arc<dyn LanguageModel>,
    /// 流程参数
    pub config: ResearchConfig,
}

impl ResearchContext {
    pub fn new(
        fetcher: Arc<dyn ContentFetcher>,
        llm: Arc<dyn LanguageModel>,
        config: ResearchConfig,
    ) -> Self {
        Self {
            fetcher,
            llm,
            config,
        }
    }

    /// 基于应用配置创建真实的Firecrawl与LLM客户端，配置不完整时直接失败
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let fetcher = FirecrawlClient::new(config.firecrawl.clone())?;
        let llm = LLMClient::new(config.llm.clone())?;

        Ok(Self::new(
            Arc::new(fetcher),
            Arc::new(llm),
            config.research.clone(),
        ))
    }
}
