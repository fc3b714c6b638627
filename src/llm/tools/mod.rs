//! 对话Agent可调用的工具

pub mod web_scrape;
pub mod web_search;

pub use web_scrape::WebScrapeTool;
pub use web_search::WebSearchTool;
