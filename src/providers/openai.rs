use crate::config::Config;
use crate::error::Error;
use crate::providers::{create_client, CompletionProvider, CompletionResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const MAX_ERROR_BODY: usize = 512;

pub struct OpenAiProvider {
    api_key: String,
    model: String,
    api_base_url: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base_url: config.api_base_url.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, system: &str, task: &str) -> Result<CompletionResult, Error> {
        let client = create_client();

        let request = ChatRequest {
            model: self.model.clone(),
            max_tokens: 1024,
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: task.to_string(),
                },
            ],
        };

        let response = client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Error::Api {
                status,
                body: snippet(&body),
            });
        }

        let body_text = response.text().await?;
        let body: ChatResponse = serde_json::from_str(&body_text)
            .map_err(|e| Error::Parse(format!("failed to decode response body: {}", e)))?;

        let text = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| Error::Parse("response contained no message text".to_string()))?;

        let command = extract_command(&text)
            .ok_or_else(|| Error::Parse(format!("no command in model output: {:?}", text)))?;

        Ok(CompletionResult { command })
    }
}

/// Reduce model output to a single command line: drop markdown fences,
/// strip stray backticks, take the first non-empty line.
fn extract_command(raw: &str) -> Option<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("```"))
        .map(|line| line.trim_matches('`').trim())
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

fn snippet(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &trimmed[..end])
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_plain_command() {
        assert_eq!(
            extract_command("tar -xf archive.tar.gz").as_deref(),
            Some("tar -xf archive.tar.gz")
        );
    }

    #[test]
    fn test_extract_takes_first_nonempty_line() {
        assert_eq!(
            extract_command("\n\nffmpeg -i in.mp4 out.gif\nsecond line").as_deref(),
            Some("ffmpeg -i in.mp4 out.gif")
        );
    }

    #[test]
    fn test_extract_strips_code_fence() {
        let raw = "```sh\ntar -czf out.tar.gz dir/\n```";
        assert_eq!(extract_command(raw).as_deref(), Some("tar -czf out.tar.gz dir/"));
    }

    #[test]
    fn test_extract_strips_inline_backticks() {
        assert_eq!(extract_command("`ls -la`").as_deref(), Some("ls -la"));
    }

    #[test]
    fn test_extract_rejects_empty_output() {
        assert_eq!(extract_command(""), None);
        assert_eq!(extract_command("  \n \n"), None);
        assert_eq!(extract_command("``\n"), None);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = OpenAiProvider {
            api_key: "k".to_string(),
            model: "m".to_string(),
            api_base_url: "https://api.example.com/v1/".to_string(),
        };
        assert_eq!(provider.endpoint(), "https://api.example.com/v1/chat/completions");
    }

    #[test]
    fn test_snippet_truncates_long_bodies() {
        let body = "x".repeat(MAX_ERROR_BODY * 2);
        let short = snippet(&body);
        assert!(short.len() < body.len());
        assert!(short.ends_with('…'));
    }
}
