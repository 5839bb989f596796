use std::io;
use thiserror::Error;

/// Exit code for a declined confirmation. Not an error, just a negative outcome.
pub const EXIT_DECLINED: u8 = 1;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    MissingCredential(String),

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("could not extract a command from the API response: {0}")]
    Parse(String),

    #[error("failed to spawn shell: {0}")]
    Spawn(#[source] io::Error),
}

impl Error {
    /// Process exit code for this failure. Each kind gets its own code so
    /// scripts can tell them apart; 0 and 1 are reserved for success and
    /// decline, and anything else is the child's own exit code.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidInput(_) => 2,
            Error::MissingCredential(_) => 3,
            Error::Network(_) => 4,
            Error::Api { .. } => 5,
            Error::Parse(_) => 6,
            Error::Spawn(_) => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            Error::InvalidInput("x".to_string()),
            Error::MissingCredential("x".to_string()),
            Error::Api {
                status: 500,
                body: "x".to_string(),
            },
            Error::Parse("x".to_string()),
            Error::Spawn(io::Error::new(io::ErrorKind::NotFound, "sh")),
        ];

        let mut codes: Vec<u8> = errors.iter().map(|e| e.exit_code()).collect();
        codes.push(EXIT_DECLINED);
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len() + 1);
        assert!(!codes.contains(&0));
    }

    #[test]
    fn test_api_error_message_carries_status_and_body() {
        let err = Error::Api {
            status: 429,
            body: "rate limited".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("rate limited"));
    }
}
