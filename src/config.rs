use crate::confirm::ConfirmDefault;
use crate::error::Error;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

const API_KEY_VAR: &str = "LLMWRAP_OPENAI_API_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
    pub default_answer: ConfirmDefault,
    pub system_prompt: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    model: Option<String>,
    api_base_url: Option<String>,
    default_answer: Option<String>,
    system_prompt: Option<String>,
}

/// Environment values read once at startup. Resolution stays a pure function
/// of these plus the config file, so nothing below reads the environment.
struct EnvConfig {
    api_key: Option<String>,
    model: Option<String>,
    api_base_url: Option<String>,
    default_answer: Option<String>,
}

impl EnvConfig {
    fn read() -> Self {
        Self {
            api_key: env::var(API_KEY_VAR).ok(),
            model: env::var("LLMWRAP_MODEL").ok(),
            api_base_url: env::var("LLMWRAP_OPENAI_BASE_URL").ok(),
            default_answer: env::var("LLMWRAP_DEFAULT_ANSWER").ok(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI flag > environment >
    /// ~/.config/llmwrap/config.toml > built-in default. The API key comes
    /// only from the environment.
    pub fn load(model_flag: Option<String>, api_base_flag: Option<String>) -> Result<Self, Error> {
        Self::resolve(
            EnvConfig::read(),
            Self::load_file_config(),
            model_flag,
            api_base_flag,
        )
    }

    fn resolve(
        env: EnvConfig,
        file: FileConfig,
        model_flag: Option<String>,
        api_base_flag: Option<String>,
    ) -> Result<Self, Error> {
        let api_key = Self::resolve_api_key(env.api_key)?;

        let model = model_flag
            .or(env.model)
            .or(file.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let api_base_url = api_base_flag
            .or(env.api_base_url)
            .or(file.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let default_answer =
            Self::resolve_default_answer(env.default_answer.or(file.default_answer))?;

        Ok(Config {
            api_key,
            model,
            api_base_url,
            default_answer,
            system_prompt: file.system_prompt,
        })
    }

    fn resolve_api_key(value: Option<String>) -> Result<String, Error> {
        match value {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(Error::MissingCredential(format!(
                "No API key found. Set {} in your environment before running llmwrap.",
                API_KEY_VAR
            ))),
        }
    }

    fn resolve_default_answer(value: Option<String>) -> Result<ConfirmDefault, Error> {
        match value {
            None => Ok(ConfirmDefault::default()),
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "yes" | "y" => Ok(ConfirmDefault::Yes),
                "no" | "n" => Ok(ConfirmDefault::No),
                other => Err(Error::InvalidInput(format!(
                    "Unknown default_answer '{}'. Use 'yes' or 'no'.",
                    other
                ))),
            },
        }
    }

    fn config_path() -> Option<PathBuf> {
        // XDG_CONFIG_HOME first, then ~/.config
        let config_dir = env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;

        Some(config_dir.join("llmwrap").join("config.toml"))
    }

    fn load_file_config() -> FileConfig {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }
}
