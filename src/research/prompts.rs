//! 调研流程使用的提示词

pub const TOOL_EXTRACTION_SYSTEM: &str = "You are a tech researcher. Extract specific tool, library, platform, or service names from articles. Focus on actual products that developers can use, not general concepts or features.";

pub fn tool_extraction_user(query: &str, content: &str) -> String {
    format!(
        "Query: {query}\nArticle Content: {content}\n\n\
         Extract a list of specific tool or service names mentioned in this content that are relevant to \"{query}\".\n\n\
         Rules:\n\
         - Only include actual product names, not generic terms\n\
         - Focus on tools developers can directly use or integrate\n\
         - Include both open source and commercial options\n\
         - Limit to the 5 most relevant tools\n\
         - Return just the tool names, one per line, with no numbering or descriptions\n\n\
         Example format:\n\
         Supabase\n\
         PlanetScale\n\
         Railway"
    )
}

pub const TOOL_ANALYSIS_SYSTEM: &str = "You are analyzing developer tools and programming technologies. Focus on extracting information relevant to programmers and software developers. Pay special attention to programming languages, frameworks, APIs, SDKs, and development workflows.";

pub fn tool_analysis_user(tool_name: &str, content: &str) -> String {
    format!(
        "Company/Tool: {tool_name}\nWebsite Content: {content}\n\n\
         Analyze this content from a developer's perspective and provide:\n\
         - pricing_model: One of \"Free\", \"Freemium\", \"Paid\", \"Enterprise\", or \"Unknown\"\n\
         - is_open_source: true if open source, false if proprietary, null if unclear\n\
         - tech_stack: programming languages, frameworks, databases, APIs, or technologies supported or used\n\
         - description: a one-sentence description of what this tool does for developers\n\
         - api_available: true if a REST API, GraphQL API, SDK, or other programmatic access is mentioned\n\
         - language_support: programming languages explicitly supported (e.g. Python, JavaScript, Go)\n\
         - integration_capabilities: tools or platforms it integrates with (e.g. GitHub, VS Code, Docker, AWS)"
    )
}

pub const RECOMMENDATIONS_SYSTEM: &str = "You are a senior software engineer providing quick, concise tech recommendations. Keep responses brief and actionable, at most 3-4 sentences in total.";

pub fn recommendations_user(query: &str, company_data: &str) -> String {
    format!(
        "Developer Query: {query}\nTools/Technologies Analyzed: {company_data}\n\n\
         Provide a brief recommendation (3-4 sentences max) covering:\n\
         - Which tool is best and why\n\
         - The key cost or pricing consideration\n\
         - The main technical advantage\n\n\
         Be concise and direct."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_prompts_embed_inputs() {
        let extraction = tool_extraction_user("vector databases", "Pinecone vs Qdrant");
        assert!(extraction.contains("Query: vector databases"));
        assert!(extraction.contains("Article Content: Pinecone vs Qdrant"));

        let analysis = tool_analysis_user("Qdrant", "# Qdrant docs");
        assert!(analysis.starts_with("Company/Tool: Qdrant\nWebsite Content: # Qdrant docs"));

        let recommendation = recommendations_user("vector databases", "{\"name\":\"Qdrant\"}");
        assert!(recommendation.contains("{\"name\":\"Qdrant\"}"));
    }
}
