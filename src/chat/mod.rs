//! 对话式Agent：模型通过工具调用自行搜索和抓取网页

use anyhow::Result;
use async_trait::async_trait;
use rig::completion::Message;
use rig::tool::Tool;

use crate::config::{AgentConfig, Config};
use crate::fetch::FirecrawlClient;
use crate::llm::LLMClient;
use crate::llm::client::ProviderAgent;
use crate::llm::tools::{WebScrapeTool, WebSearchTool};
use crate::utils::text::truncate_chars;

/// 带历史的多轮对话能力
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// 发送一条消息，工具调用最多 `max_turns` 轮；本轮的消息由实现追加到 `history`
    async fn chat(
        &self,
        message: &str,
        history: &mut Vec<Message>,
        max_turns: usize,
    ) -> Result<String>;
}

#[async_trait]
impl ChatModel for ProviderAgent {
    async fn chat(
        &self,
        message: &str,
        history: &mut Vec<Message>,
        max_turns: usize,
    ) -> Result<String> {
        let reply = ProviderAgent::chat(self, message, history, max_turns).await?;
        Ok(reply)
    }
}

/// 带会话历史的工具调用Agent
pub struct ChatAgent {
    model: Box<dyn ChatModel>,
    history: Vec<Message>,
    max_turns: usize,
    max_input_chars: usize,
}

impl ChatAgent {
    /// 校验配置并创建挂载网页工具的Agent
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let firecrawl = FirecrawlClient::new(config.firecrawl.clone())?;
        let llm = LLMClient::new(config.agent_llm_config())?;

        let web_search = WebSearchTool::new(firecrawl.clone());
        let web_scrape = WebScrapeTool::new(firecrawl);
        let agent = llm.build_tool_agent(&config.agent.system_prompt, &web_search, &web_scrape);

        Ok(Self::new(Box::new(agent), &config.agent))
    }

    pub fn new(model: Box<dyn ChatModel>, config: &AgentConfig) -> Self {
        Self {
            model,
            history: Vec::new(),
            max_turns: config.max_turns,
            max_input_chars: config.max_input_chars,
        }
    }

    /// Agent可用的工具名
    pub fn tool_names() -> Vec<&'static str> {
        vec![WebSearchTool::NAME, WebScrapeTool::NAME]
    }

    /// 发送一条用户消息，返回Agent的最终回复
    pub async fn send(&mut self, input: &str) -> Result<String> {
        let message = truncate_chars(input, self.max_input_chars);
        tracing::debug!(
            "sending message ({} chars, {} history entries)",
            message.chars().count(),
            self.history.len()
        );

        self.model
            .chat(message, &mut self.history, self.max_turns)
            .await
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
