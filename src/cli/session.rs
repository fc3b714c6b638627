//! 交互式会话循环

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::chat::ChatAgent;
use crate::cli::RunMode;
use crate::cli::report::format_report;
use crate::config::Config;
use crate::research::Workflow;

/// 按运行模式启动
pub async fn launch(config: &Config, mode: RunMode) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    match mode {
        RunMode::Research => {
            let workflow = Workflow::from_config(config)?;
            research_loop(&workflow, stdin, &mut stdout).await
        }
        RunMode::Once(query) => {
            let workflow = Workflow::from_config(config)?;
            let state = workflow.run(query.trim()).await?;
            write!(stdout, "{}", format_report(&state))?;
            Ok(())
        }
        RunMode::Chat => {
            let mut agent = ChatAgent::from_config(config)?;
            chat_loop(&mut agent, stdin, &mut stdout).await
        }
    }
}

fn is_exit_command(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "exit" | "quit")
}

/// 调研REPL：每行一个查询，`exit`/`quit` 退出
pub async fn research_loop<R, W>(workflow: &Workflow, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "Developer Tools Research Agent")?;

    loop {
        write!(out, "\n🔎 Developer Tools Query: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let query = line.trim();

        if is_exit_command(query) {
            writeln!(out, "Exiting the workflow. Goodbye!")?;
            break;
        }
        if query.is_empty() {
            continue;
        }

        match workflow.run(query).await {
            Ok(state) => write!(out, "{}", format_report(&state))?,
            Err(e) => {
                tracing::error!("research for '{}' failed: {:#}", query, e);
                writeln!(out, "❌ Research failed: {:#}", e)?;
            }
        }
    }

    Ok(())
}

/// 对话REPL：只有 `quit` 退出
pub async fn chat_loop<R, W>(agent: &mut ChatAgent, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "Available tools: {}", ChatAgent::tool_names().join(" "))?;
    writeln!(out, "{}", "-".repeat(60))?;

    loop {
        write!(out, "\nYou: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line == "quit" {
            writeln!(out, "Exiting...")?;
            break;
        }

        match agent.send(&line).await {
            Ok(reply) => {
                writeln!(out, "\nAgent: {}", reply)?;
                tracing::debug!("conversation has {} messages", agent.history_len());
            }
            Err(e) => writeln!(out, "\nError: {}", e)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::is_exit_command;

    #[test]
    fn test_exit_commands() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("QUIT"));
        assert!(!is_exit_command("quit now"));
        assert!(!is_exit_command(""));
    }
}
