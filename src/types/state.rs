use serde::{Deserialize, Serialize};

use crate::fetch::SearchHit;
use crate::types::CompanyInfo;

/// 贯穿整个调研流程的状态
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchState {
    pub query: String,
    pub extracted_tools: Vec<String>,
    pub companies: Vec<CompanyInfo>,
    /// 仅用于诊断，下游不消费
    pub search_results: Vec<SearchHit>,
    pub analysis: Option<String>,
}

impl ResearchState {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// 合并阶段输出，只替换阶段实际返回的字段
    pub fn merge(&mut self, update: StateUpdate) {
        if let Some(extracted_tools) = update.extracted_tools {
            self.extracted_tools = extracted_tools;
        }
        if let Some(companies) = update.companies {
            self.companies = companies;
        }
        if let Some(search_results) = update.search_results {
            self.search_results = search_results;
        }
        if let Some(analysis) = update.analysis {
            self.analysis = Some(analysis);
        }
    }
}

/// 单个阶段对状态的增量更新
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateUpdate {
    pub extracted_tools: Option<Vec<String>>,
    pub companies: Option<Vec<CompanyInfo>>,
    pub search_results: Option<Vec<SearchHit>>,
    pub analysis: Option<String>,
}
