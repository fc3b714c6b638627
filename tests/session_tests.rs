mod common;

use std::sync::Arc;

use common::{ModelCall, ScriptedChat, ScriptedFetcher, ScriptedModel, workflow};
use toolscout::chat::ChatAgent;
use toolscout::cli::session::{chat_loop, research_loop};
use toolscout::config::AgentConfig;

#[tokio::test]
async fn test_research_loop_runs_queries_until_exit() {
    let fetcher = Arc::new(ScriptedFetcher::new().with_site("Vite", "https://vite.dev"));
    let model = Arc::new(ScriptedModel::new(Ok("Vite")));
    let workflow = workflow(&fetcher, &model);

    let input: &[u8] = b"   \nfrontend bundlers\nExit\nnever researched\n";
    let mut output = Vec::new();
    research_loop(&workflow, input, &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("Developer Tools Research Agent"));
    assert!(output.contains("📊 Results for: frontend bundlers"));
    assert!(output.contains("1. 🏢 Vite"));
    assert!(output.contains("Developer Recommendations:"));
    assert!(output.contains("Exiting the workflow. Goodbye!"));

    let extractions = model
        .calls()
        .iter()
        .filter(|call| matches!(call, ModelCall::Extraction(_)))
        .count();
    assert_eq!(extractions, 1);
}

#[tokio::test]
async fn test_research_loop_reports_failure_and_continues() {
    let fetcher = Arc::new(ScriptedFetcher::new());
    let model = Arc::new(ScriptedModel::new(Ok("")).with_recommendation(Err("model down")));
    let workflow = workflow(&fetcher, &model);

    let input: &[u8] = b"first\nsecond\n";
    let mut output = Vec::new();
    research_loop(&workflow, input, &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("❌ Research failed").count(), 2);
    assert!(output.contains("model down"));
}

fn chat_agent(chat: &ScriptedChat, max_input_chars: usize) -> ChatAgent {
    let config = AgentConfig {
        max_input_chars,
        ..AgentConfig::default()
    };
    ChatAgent::new(Box::new(chat.clone()), &config)
}

#[tokio::test]
async fn test_chat_loop_exits_only_on_quit() {
    let chat = ScriptedChat::new(vec![Ok("first reply"), Ok("second reply")]);
    let mut agent = chat_agent(&chat, 175_000);

    let input: &[u8] = b"hello\nexit\nquit\nnever sent\n";
    let mut output = Vec::new();
    chat_loop(&mut agent, input, &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("Available tools: web_search web_scrape"));
    assert!(output.contains("Agent: first reply"));
    assert!(output.contains("Agent: second reply"));
    assert!(output.contains("Exiting..."));
    assert_eq!(chat.received(), vec!["hello", "exit"]);
    assert_eq!(agent.history_len(), 4);
}

#[tokio::test]
async fn test_chat_loop_truncates_long_input() {
    let chat = ScriptedChat::new(vec![Ok("ok")]);
    let mut agent = chat_agent(&chat, 5);

    let input: &[u8] = b"abcdefghij\nquit\n";
    let mut output = Vec::new();
    chat_loop(&mut agent, input, &mut output).await.unwrap();

    assert_eq!(chat.received(), vec!["abcde"]);
}

#[tokio::test]
async fn test_chat_loop_prints_errors_and_continues() {
    let chat = ScriptedChat::new(vec![Err("tool server unavailable"), Ok("recovered")]);
    let mut agent = chat_agent(&chat, 175_000);

    let input: &[u8] = b"first\nsecond\nquit\n";
    let mut output = Vec::new();
    chat_loop(&mut agent, input, &mut output).await.unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Error: tool server unavailable"));
    assert!(output.contains("Agent: recovered"));
    assert_eq!(agent.history_len(), 2);
}
