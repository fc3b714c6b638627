mod content_analysis;
mod recommender;
mod tool_extractor;
mod tool_researcher;

pub use content_analysis::analyze_tool_content;
pub use recommender::Recommender;
pub use tool_extractor::{ToolExtractor, parse_tool_names};
pub use tool_researcher::ToolResearcher;
