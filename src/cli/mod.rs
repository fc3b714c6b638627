use crate::config::{Config, DEFAULT_CONFIG_FILE, LLMProvider};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

pub mod report;
pub mod session;

/// toolscout - 开发者工具调研助手
#[derive(Parser, Debug)]
#[command(name = "toolscout")]
#[command(
    about = "Research assistant for developer tools. It finds candidate tools from comparison articles, analyzes each tool's official site with an LLM, and recommends the best fit."
)]
#[command(version)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 只调研一次该查询，然后退出
    #[arg(short, long)]
    pub query: Option<String>,

    /// 启动对话式Agent，而不是调研流程
    #[arg(long)]
    pub chat: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,

    /// LLM Provider (openai, anthropic, deepseek, ollama)
    #[arg(long)]
    pub llm_provider: Option<String>,

    /// LLM API KEY
    #[arg(long)]
    pub llm_api_key: Option<String>,

    /// LLM API基地址
    #[arg(long)]
    pub llm_api_base_url: Option<String>,

    /// 调研流程使用的模型
    #[arg(long)]
    pub model: Option<String>,

    /// 温度参数
    #[arg(long)]
    pub temperature: Option<f64>,

    /// 最大tokens数
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Firecrawl API KEY
    #[arg(long)]
    pub firecrawl_api_key: Option<String>,

    /// 最多调研的工具数
    #[arg(long)]
    pub max_tools: Option<usize>,
}

/// 程序运行模式
#[derive(Debug, Clone, PartialEq)]
pub enum RunMode {
    /// 交互式调研
    Research,
    /// 单次调研
    Once(String),
    /// 对话式Agent
    Chat,
}

impl Args {
    pub fn mode(&self) -> RunMode {
        if self.chat {
            RunMode::Chat
        } else if let Some(query) = &self.query {
            RunMode::Once(query.clone())
        } else {
            RunMode::Research
        }
    }

    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Result<Config> {
        let mut config = self.load_config()?;
        self.apply_overrides(&mut config);
        Ok(config)
    }

    /// 读取配置文件；未指定时使用当前目录下的默认文件，不存在则使用默认配置
    pub fn load_config(&self) -> Result<Config> {
        if let Some(config_path) = &self.config {
            // 显式指定的配置文件必须可读
            return Config::from_file(config_path);
        }

        let default_config_path = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(DEFAULT_CONFIG_FILE);

        if default_config_path.exists() {
            Config::from_file(&default_config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// 用命令行参数覆盖配置
    pub fn apply_overrides(self, config: &mut Config) {
        // 覆盖LLM配置
        if let Some(provider_str) = self.llm_provider {
            if let Ok(provider) = provider_str.parse::<LLMProvider>() {
                config
                    .llm
                    .switch_provider(provider, |name| std::env::var(name).ok());
            } else {
                tracing::warn!(
                    "⚠️ Unknown provider: {}, keeping {}",
                    provider_str,
                    config.llm.provider
                );
            }
        }
        if let Some(llm_api_key) = self.llm_api_key {
            config.llm.api_key = llm_api_key;
        }
        if let Some(llm_api_base_url) = self.llm_api_base_url {
            config.llm.api_base_url = llm_api_base_url;
        }
        if let Some(model) = self.model {
            config.llm.model = model;
        }
        if let Some(temperature) = self.temperature {
            config.llm.temperature = temperature;
        }
        if let Some(max_tokens) = self.max_tokens {
            config.llm.max_tokens = max_tokens;
        }

        if let Some(firecrawl_api_key) = self.firecrawl_api_key {
            config.firecrawl.api_key = firecrawl_api_key;
        }
        if let Some(max_tools) = self.max_tools {
            config.research.max_tools = max_tools;
        }

        config.verbose = config.verbose || self.verbose;
    }
}
