pub mod chat;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod llm;
pub mod research;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use research::Workflow;
pub use types::{CompanyAnalysis, CompanyInfo, ResearchState};
