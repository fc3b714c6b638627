//! 开发者工具调研流程
//!
//! 三个阶段严格按顺序执行，每个阶段读取当前状态并返回增量更新：
//!
//! 1. [`ToolExtractor`]：搜索对比类文章，抓取内容，让模型列出候选工具名
//! 2. [`ToolResearcher`]：逐个查找工具官网、抓取并做结构化分析
//! 3. [`Recommender`]：汇总所有工具信息，生成最终推荐
//!
//! 前两个阶段对搜索、抓取与模型调用的失败都做本地降级，只有推荐阶段的模型错误会中断流程。

pub mod context;
pub mod prompts;
pub mod stages;
pub mod workflow;

pub use context::ResearchContext;
pub use stages::{Recommender, ToolExtractor, ToolResearcher};
pub use workflow::{Stage, Workflow};
