use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fetch::SearchHit;

/// 定价模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PricingModel {
    Free,
    Freemium,
    Paid,
    Enterprise,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for PricingModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingModel::Free => write!(f, "Free"),
            PricingModel::Freemium => write!(f, "Freemium"),
            PricingModel::Paid => write!(f, "Paid"),
            PricingModel::Enterprise => write!(f, "Enterprise"),
            PricingModel::Unknown => write!(f, "Unknown"),
        }
    }
}

/// 开发者体验评级（当前流程不填充）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DeveloperExperience {
    Poor,
    Good,
    Excellent,
}

/// 模型对单个开发者工具页面内容的结构化分析结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyAnalysis {
    /// Free, Freemium, Paid, Enterprise 或 Unknown
    pub pricing_model: PricingModel,
    /// 是否开源，无法判断时为null
    #[serde(default)]
    pub is_open_source: Option<bool>,
    /// 工具所使用或支持的技术栈
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// 一句话描述该工具的用途
    #[serde(default)]
    pub description: String,
    /// 是否提供API/SDK，无法判断时为null
    #[serde(default)]
    pub api_available: Option<bool>,
    /// 支持的编程语言
    #[serde(default)]
    pub language_support: Vec<String>,
    /// 可集成的工具与平台
    #[serde(default)]
    pub integration_capabilities: Vec<String>,
}

impl CompanyAnalysis {
    /// 分析失败时的占位结果，保证单个工具失败不会中断整个流程
    pub fn failed() -> Self {
        Self {
            pricing_model: PricingModel::Unknown,
            is_open_source: None,
            tech_stack: Vec::new(),
            description: "Failed".to_string(),
            api_available: None,
            language_support: Vec::new(),
            integration_capabilities: Vec::new(),
        }
    }
}

/// 被调研的单个工具
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub description: String,
    pub website: String,
    pub pricing_model: Option<PricingModel>,
    pub is_open_source: Option<bool>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub competitors: Vec<String>,
    pub api_available: Option<bool>,
    #[serde(default)]
    pub language_support: Vec<String>,
    #[serde(default)]
    pub integration_capabilities: Vec<String>,
    pub developer_experience_rating: Option<DeveloperExperience>,
}

impl CompanyInfo {
    /// 基于官网搜索命中创建记录，分析字段保持未设置
    pub fn from_hit(name: &str, hit: &SearchHit) -> Self {
        Self {
            name: name.to_string(),
            description: hit.markdown.clone().unwrap_or_default(),
            website: hit.url.clone(),
            pricing_model: None,
            is_open_source: None,
            tech_stack: Vec::new(),
            competitors: Vec::new(),
            api_available: None,
            language_support: Vec::new(),
            integration_capabilities: Vec::new(),
            developer_experience_rating: None,
        }
    }

    /// 用分析结果逐字段覆盖
    pub fn apply_analysis(&mut self, analysis: CompanyAnalysis) {
        self.pricing_model = Some(analysis.pricing_model);
        self.is_open_source = analysis.is_open_source;
        self.tech_stack = analysis.tech_stack;
        self.description = analysis.description;
        self.api_available = analysis.api_available;
        self.language_support = analysis.language_support;
        self.integration_capabilities = analysis.integration_capabilities;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn site_hit() -> SearchHit {
        SearchHit {
            url: "https://www.pinecone.io".to_string(),
            title: Some("Pinecone".to_string()),
            description: None,
            markdown: Some("# Pinecone\nThe vector database".to_string()),
            metadata: None,
        }
    }

    #[test]
    fn test_from_hit_leaves_analysis_fields_unset() {
        let company = CompanyInfo::from_hit("Pinecone", &site_hit());

        assert_eq!(company.name, "Pinecone");
        assert_eq!(company.website, "https://www.pinecone.io");
        assert_eq!(company.description, "# Pinecone\nThe vector database");
        assert!(company.pricing_model.is_none());
        assert!(company.is_open_source.is_none());
        assert!(company.api_available.is_none());
        assert!(company.tech_stack.is_empty());
        assert!(company.competitors.is_empty());
        assert!(company.developer_experience_rating.is_none());
    }

    #[test]
    fn test_from_hit_without_markdown_has_empty_description() {
        let mut hit = site_hit();
        hit.markdown = None;
        let company = CompanyInfo::from_hit("Pinecone", &hit);
        assert_eq!(company.description, "");
    }

    #[test]
    fn test_failed_analysis_serializes_as_sentinel() {
        let mut company = CompanyInfo::from_hit("Pinecone", &site_hit());
        company.apply_analysis(CompanyAnalysis::failed());

        let value = serde_json::to_value(&company).unwrap();
        assert_eq!(value["pricing_model"], json!("Unknown"));
        assert_eq!(value["description"], json!("Failed"));
        assert_eq!(value["is_open_source"], json!(null));
        assert_eq!(value["api_available"], json!(null));
        assert_eq!(value["tech_stack"], json!([]));
        assert_eq!(value["language_support"], json!([]));
        assert_eq!(value["integration_capabilities"], json!([]));
    }

    #[test]
    fn test_apply_analysis_overwrites_fields() {
        let mut company = CompanyInfo::from_hit("Qdrant", &site_hit());
        company.apply_analysis(CompanyAnalysis {
            pricing_model: PricingModel::Freemium,
            is_open_source: Some(true),
            tech_stack: vec!["Rust".to_string()],
            description: "Vector search engine".to_string(),
            api_available: Some(true),
            language_support: vec!["Python".to_string(), "Go".to_string()],
            integration_capabilities: vec!["LangChain".to_string()],
        });

        assert_eq!(company.pricing_model, Some(PricingModel::Freemium));
        assert_eq!(company.is_open_source, Some(true));
        assert_eq!(company.description, "Vector search engine");
        assert_eq!(company.language_support.len(), 2);
        assert_eq!(company.website, "https://www.pinecone.io");
    }

    #[test]
    fn test_unrecognized_pricing_model_is_unknown() {
        let analysis: CompanyAnalysis =
            serde_json::from_value(json!({ "pricing_model": "Open Core" })).unwrap();
        assert_eq!(analysis.pricing_model, PricingModel::Unknown);
        assert!(analysis.tech_stack.is_empty());
        assert_eq!(analysis.description, "");
    }
}
