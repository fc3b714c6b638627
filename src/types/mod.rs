//! 调研流程的数据模型

pub mod company;
pub mod state;

pub use company::{CompanyAnalysis, CompanyInfo, DeveloperExperience, PricingModel};
pub use state::{ResearchState, StateUpdate};
