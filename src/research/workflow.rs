use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Config;
use crate::research::{Recommender, ResearchContext, ToolExtractor, ToolResearcher};
use crate::types::{ResearchState, StateUpdate};

/// 调研流程中的一个阶段
///
/// 阶段只读取状态快照，返回自己修改的字段，由 [`Workflow`] 负责合并。
#[async_trait]
pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(
        &self,
        context: &ResearchContext,
        state: &ResearchState,
    ) -> Result<StateUpdate>;
}

/// 调研流程驱动器
pub struct Workflow {
    context: ResearchContext,
}

impl Workflow {
    pub fn new(context: ResearchContext) -> Self {
        Self { context }
    }

    /// 校验配置并创建使用真实后端的流程
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(ResearchContext::from_config(config)?))
    }

    /// 按固定顺序执行 提取 -> 调研 -> 推荐，返回最终状态
    pub async fn run(&self, query: &str) -> Result<ResearchState> {
        let mut state = ResearchState::new(query);
        let stages: [&dyn Stage; 3] = [&ToolExtractor, &ToolResearcher, &Recommender];

        for stage in stages {
            self.execute_stage(stage, &mut state).await?;
        }

        Ok(state)
    }

    /// 执行单个阶段并合并其输出
    async fn execute_stage(&self, stage: &dyn Stage, state: &mut ResearchState) -> Result<()> {
        let start = Instant::now();
        let update = stage.execute(&self.context, state).await?;
        state.merge(update);
        tracing::debug!("stage {} finished in {:?}", stage.name(), start.elapsed());
        Ok(())
    }
}
