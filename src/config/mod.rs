use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "toolscout.toml";

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "anthropic")]
    Anthropic,
    #[serde(rename = "deepseek")]
    DeepSeek,
    #[serde(rename = "ollama")]
    Ollama,
}

impl LLMProvider {
    /// 该provider的API KEY所在的环境变量
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            LLMProvider::OpenAI => Some("OPENAI_API_KEY"),
            LLMProvider::Anthropic => Some("ANTHROPIC_API_KEY"),
            LLMProvider::DeepSeek => Some("DEEPSEEK_API_KEY"),
            LLMProvider::Ollama => None,
        }
    }
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
            LLMProvider::DeepSeek => write!(f, "deepseek"),
            LLMProvider::Ollama => write!(f, "ollama"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "anthropic" => Ok(LLMProvider::Anthropic),
            "deepseek" => Ok(LLMProvider::DeepSeek),
            "ollama" => Ok(LLMProvider::Ollama),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 配置校验错误，启动时即失败
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("FIRECRAWL_API_KEY environment variable is not set.")]
    MissingFirecrawlKey,

    #[error("missing API key for LLM provider '{0}'")]
    MissingLlmKey(LLMProvider),

    #[error("research limit '{0}' must be greater than zero")]
    InvalidLimit(&'static str),
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// LLM模型配置
    pub llm: LLMConfig,

    /// 搜索与抓取后端配置
    pub firecrawl: FirecrawlConfig,

    /// 调研流程参数
    pub research: ResearchConfig,

    /// 对话Agent配置
    pub agent: AgentConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// LLM Provider类型
    pub provider: LLMProvider,

    /// LLM API KEY，文件中未给出时从provider对应的环境变量读取
    #[serde(default)]
    pub api_key: String,

    /// LLM API基地址
    pub api_base_url: String,

    /// 调研流程使用的模型
    pub model: String,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,
}

/// Firecrawl配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct FirecrawlConfig {
    pub api_key: String,

    pub base_url: String,

    /// 附加在每个搜索词后面的后缀，为空时不附加
    pub search_suffix: String,
}

/// 调研流程参数
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ResearchConfig {
    /// 工具提取阶段搜索的文章数
    pub article_results: usize,

    /// 每篇文章截取的字符数
    pub article_excerpt_chars: usize,

    /// 最多调研的工具数
    pub max_tools: usize,

    /// 官网搜索的结果数
    pub site_results: usize,

    /// 官网搜索词后缀
    pub site_query_suffix: String,
}

/// 对话Agent配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AgentConfig {
    pub model: String,

    pub temperature: f64,

    /// 每条用户消息允许的最大工具调用轮数
    pub max_turns: usize,

    /// 用户输入截断长度（字符）
    pub max_input_chars: usize,

    pub system_prompt: String,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        Self::from_toml(&content, |name| std::env::var(name).ok())
    }

    /// 解析TOML内容，缺失的LLM API KEY通过 `lookup` 按provider查找
    fn from_toml<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Config = toml::from_str(content).context("Failed to parse config file")?;
        config.llm.resolve_api_key(lookup);
        Ok(config)
    }

    /// 校验必需的凭据与参数
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.firecrawl.api_key.trim().is_empty() {
            return Err(ConfigError::MissingFirecrawlKey);
        }

        if self.llm.provider.api_key_env().is_some() && self.llm.api_key.trim().is_empty() {
            return Err(ConfigError::MissingLlmKey(self.llm.provider));
        }

        let research = &self.research;
        if research.article_results == 0 {
            return Err(ConfigError::InvalidLimit("article_results"));
        }
        if research.article_excerpt_chars == 0 {
            return Err(ConfigError::InvalidLimit("article_excerpt_chars"));
        }
        if research.max_tools == 0 {
            return Err(ConfigError::InvalidLimit("max_tools"));
        }
        if research.site_results == 0 {
            return Err(ConfigError::InvalidLimit("site_results"));
        }

        Ok(())
    }

    /// 对话Agent使用的LLM配置，与调研流程共享provider与凭据
    pub fn agent_llm_config(&self) -> LLMConfig {
        LLMConfig {
            model: self.agent.model.clone(),
            temperature: self.agent.temperature,
            ..self.llm.clone()
        }
    }
}

impl LLMConfig {
    /// api_key为空时，从当前provider对应的环境变量填充
    pub fn resolve_api_key<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if !self.api_key.trim().is_empty() {
            return;
        }
        if let Some(name) = self.provider.api_key_env() {
            self.api_key = lookup(name).unwrap_or_default();
        }
    }

    /// 切换provider，凭据改为新provider的环境变量
    pub fn switch_provider<F>(&mut self, provider: LLMProvider, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if provider == self.provider {
            return;
        }
        self.provider = provider;
        self.api_key.clear();
        self.resolve_api_key(lookup);
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        let mut config = Self {
            provider: LLMProvider::default(),
            api_key: String::new(),
            api_base_url: String::from("https://api.openai.com/v1"),
            model: String::from("gpt-4o-mini"),
            max_tokens: 4096,
            temperature: 0.1,
        };
        config.resolve_api_key(|name| std::env::var(name).ok());
        config
    }
}

impl Default for FirecrawlConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("FIRECRAWL_API_KEY").unwrap_or_default(),
            base_url: String::from("https://api.firecrawl.dev/v1"),
            search_suffix: String::from("company pricing"),
        }
    }
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            article_results: 3,
            article_excerpt_chars: 1500,
            max_tools: 4,
            site_results: 1,
            site_query_suffix: String::from("official sit"),
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: String::from("gpt-4.1"),
            temperature: 0.0,
            max_turns: 10,
            max_input_chars: 175_000,
            system_prompt: String::from(
                "You are a helpful assistant that can scrape websites, crawl pages, and extract data using Firecrawl tools. Think step by step and use the appropriate tools to help the user.",
            ),
        }
    }
}
