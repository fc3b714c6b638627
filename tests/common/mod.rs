#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use rig::completion::Message;
use toolscout::chat::ChatModel;
use toolscout::config::ResearchConfig;
use toolscout::fetch::{ContentFetcher, HitMetadata, ScrapedPage, SearchHit};
use toolscout::llm::LanguageModel;
use toolscout::research::prompts::{RECOMMENDATIONS_SYSTEM, TOOL_EXTRACTION_SYSTEM};
use toolscout::research::{ResearchContext, Workflow};
use toolscout::types::{CompanyAnalysis, PricingModel};

/// 构造一条搜索命中，标题放在页面元数据里
pub fn hit(url: &str, title: Option<&str>, markdown: Option<&str>) -> SearchHit {
    SearchHit {
        url: url.to_string(),
        title: None,
        description: None,
        markdown: markdown.map(str::to_string),
        metadata: Some(HitMetadata {
            title: title.map(str::to_string),
            ..Default::default()
        }),
    }
}

/// 按查询词与URL预设结果的搜索抓取后端
#[derive(Default)]
pub struct ScriptedFetcher {
    searches: HashMap<String, Vec<SearchHit>>,
    pages: HashMap<String, String>,
    search_log: Mutex<Vec<(String, usize)>>,
    scrape_log: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, hits: Vec<SearchHit>) -> Self {
        self.searches.insert(query.to_string(), hits);
        self
    }

    pub fn with_page(mut self, url: &str, markdown: &str) -> Self {
        self.pages.insert(url.to_string(), markdown.to_string());
        self
    }

    /// 官网搜索命中加可抓取的官网页面
    pub fn with_site(self, tool: &str, url: &str) -> Self {
        let query = format!("{} official sit", tool);
        let placeholder = format!("{} search snippet", tool);
        self.with_search(&query, vec![hit(url, Some(tool), Some(&placeholder))])
            .with_page(url, &format!("# {}\nOfficial site content", tool))
    }

    pub fn searches(&self) -> Vec<(String, usize)> {
        self.search_log.lock().unwrap().clone()
    }

    pub fn scrapes(&self) -> Vec<String> {
        self.scrape_log.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentFetcher for ScriptedFetcher {
    async fn search(&self, query: &str, max_results: usize) -> Vec<SearchHit> {
        self.search_log
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));
        self.searches
            .get(query)
            .map(|hits| hits.iter().take(max_results).cloned().collect())
            .unwrap_or_default()
    }

    async fn scrape(&self, url: &str) -> Option<ScrapedPage> {
        self.scrape_log.lock().unwrap().push(url.to_string());
        self.pages.get(url).map(|markdown| ScrapedPage {
            markdown: markdown.clone(),
            metadata: None,
        })
    }
}

/// 模型调用记录
#[derive(Debug, Clone, PartialEq)]
pub enum ModelCall {
    Extraction(String),
    Analysis(String),
    Recommendation(String),
}

/// 按提示词类型返回预设回复的模型
pub struct ScriptedModel {
    extraction: Result<String, String>,
    recommendation: Result<String, String>,
    analyses: HashMap<String, Result<CompanyAnalysis, String>>,
    calls: Mutex<Vec<ModelCall>>,
}

impl ScriptedModel {
    pub fn new(extraction: Result<&str, &str>) -> Self {
        Self {
            extraction: extraction.map(str::to_string).map_err(str::to_string),
            recommendation: Ok("Use the first tool.".to_string()),
            analyses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_recommendation(mut self, recommendation: Result<&str, &str>) -> Self {
        self.recommendation = recommendation.map(str::to_string).map_err(str::to_string);
        self
    }

    pub fn with_analysis(mut self, tool: &str, analysis: Result<CompanyAnalysis, &str>) -> Self {
        self.analyses
            .insert(tool.to_string(), analysis.map_err(str::to_string));
        self
    }

    pub fn calls(&self) -> Vec<ModelCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ModelCall) {
        self.calls.lock().unwrap().push(call);
    }
}

/// 未单独预设时的分析结果
pub fn analysis_for(tool: &str) -> CompanyAnalysis {
    CompanyAnalysis {
        pricing_model: PricingModel::Freemium,
        is_open_source: Some(true),
        tech_stack: vec!["Rust".to_string()],
        description: format!("{} for developers", tool),
        api_available: Some(true),
        language_support: vec!["Python".to_string()],
        integration_capabilities: vec!["Docker".to_string()],
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let scripted = if system_prompt == TOOL_EXTRACTION_SYSTEM {
            self.record(ModelCall::Extraction(user_prompt.to_string()));
            &self.extraction
        } else if system_prompt == RECOMMENDATIONS_SYSTEM {
            self.record(ModelCall::Recommendation(user_prompt.to_string()));
            &self.recommendation
        } else {
            return Err(anyhow!("unexpected system prompt: {}", system_prompt));
        };

        scripted.clone().map_err(|e| anyhow!(e))
    }

    async fn analyze_company(
        &self,
        _system_prompt: &str,
        user_prompt: &str,
    ) -> Result<CompanyAnalysis> {
        let tool = user_prompt
            .lines()
            .next()
            .and_then(|line| line.strip_prefix("Company/Tool: "))
            .unwrap_or_default()
            .to_string();
        self.record(ModelCall::Analysis(tool.clone()));

        match self.analyses.get(&tool) {
            Some(scripted) => scripted.clone().map_err(|e| anyhow!(e)),
            None => Ok(analysis_for(&tool)),
        }
    }
}

pub fn workflow(fetcher: &Arc<ScriptedFetcher>, model: &Arc<ScriptedModel>) -> Workflow {
    let fetcher: Arc<dyn ContentFetcher> = fetcher.clone();
    let model: Arc<dyn LanguageModel> = model.clone();
    Workflow::new(ResearchContext::new(
        fetcher,
        model,
        ResearchConfig::default(),
    ))
}

/// 按顺序返回预设回复的对话模型，记录收到的每条消息
#[derive(Clone, Default)]
pub struct ScriptedChat {
    replies: Arc<Mutex<VecDeque<Result<String, String>>>>,
    received: Arc<Mutex<Vec<String>>>,
}

impl ScriptedChat {
    pub fn new(replies: Vec<Result<&str, &str>>) -> Self {
        let replies = replies
            .into_iter()
            .map(|reply| reply.map(str::to_string).map_err(str::to_string))
            .collect();
        Self {
            replies: Arc::new(Mutex::new(replies)),
            received: Arc::default(),
        }
    }

    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedChat {
    async fn chat(
        &self,
        message: &str,
        history: &mut Vec<Message>,
        _max_turns: usize,
    ) -> Result<String> {
        self.received.lock().unwrap().push(message.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("no more replies".to_string()))
            .map_err(|e| anyhow!(e))?;

        history.push(Message::user(message));
        history.push(Message::assistant(reply.clone()));
        Ok(reply)
    }
}
