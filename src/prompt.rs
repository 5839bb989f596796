use crate::error::Error;
use std::env;

/// Operator-supplied request: target tool plus a free-text task description.
/// Both are validated here so nothing empty ever reaches the network layer.
#[derive(Debug, Clone)]
pub struct Request {
    pub tool: String,
    pub task: String,
}

impl Request {
    pub fn new(tool: &str, task: &str) -> Result<Self, Error> {
        let tool = tool.trim();
        let task = task.trim();

        if tool.is_empty() {
            return Err(Error::InvalidInput(
                "tool name must not be empty".to_string(),
            ));
        }
        if task.is_empty() {
            return Err(Error::InvalidInput(
                "task description must not be empty".to_string(),
            ));
        }

        Ok(Request {
            tool: tool.to_string(),
            task: task.to_string(),
        })
    }
}

pub fn build_system_prompt(tool: &str, custom_template: Option<&str>) -> String {
    let os = get_os();
    let shell = get_shell();

    match custom_template {
        Some(template) => template
            .replace("{{tool}}", tool)
            .replace("{{os}}", &os)
            .replace("{{shell}}", &shell),
        None => format!(
            r#"You translate natural-language requests into a single `{}` command line.

Rules:
- Respond with exactly one runnable shell command, nothing else
- No explanations, no markdown fencing, no backticks
- Prefer safe quoting for filenames
- The command must be valid for this environment

Context:
- OS: {}
- Shell: {}"#,
            tool, os, shell
        ),
    }
}

fn get_os() -> String {
    format!("{} ({})", env::consts::OS, env::consts::ARCH)
}

fn get_shell() -> String {
    env::var("SHELL")
        .ok()
        .and_then(|s| s.rsplit('/').next().map(String::from))
        .unwrap_or_else(|| "unknown".to_string())
}
