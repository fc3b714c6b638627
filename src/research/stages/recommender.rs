use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::research::prompts::{RECOMMENDATIONS_SYSTEM, recommendations_user};
use crate::research::{ResearchContext, Stage};
use crate::types::{CompanyInfo, ResearchState, StateUpdate};

/// 汇总调研结果并生成推荐
///
/// 这里的模型错误不做降级，直接中断本次调研。
#[derive(Default)]
pub struct Recommender;

impl Recommender {
    /// 每个工具序列化为一行JSON，以 `", "` 连接
    pub fn serialize_companies(companies: &[CompanyInfo]) -> Result<String> {
        let rows = companies
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to serialize company data")?;
        Ok(rows.join(", "))
    }
}

#[async_trait]
impl Stage for Recommender {
    fn name(&self) -> &'static str {
        "analyze"
    }

    async fn execute(
        &self,
        context: &ResearchContext,
        state: &ResearchState,
    ) -> Result<StateUpdate> {
        tracing::info!("🧠 Generating recommendations");

        let company_data = Self::serialize_companies(&state.companies)?;
        let analysis = context
            .llm
            .prompt(
                RECOMMENDATIONS_SYSTEM,
                &recommendations_user(&state.query, &company_data),
            )
            .await
            .context("Failed to generate recommendations")?;

        Ok(StateUpdate {
            analysis: Some(analysis),
            ..Default::default()
        })
    }
}
