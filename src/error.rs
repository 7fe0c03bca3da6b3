// Custom error types for better error handling
#[derive(Debug)]
pub enum AppError {
    Usage(String),
    Network(String),
    Decode(String),
    Config(String),
}

impl AppError {
    /// Prefix the message with what the caller was doing, keeping the kind.
    pub fn context(self, what: &str) -> Self {
        match self {
            AppError::Usage(msg) => AppError::Usage(format!("{what}: {msg}")),
            AppError::Network(msg) => AppError::Network(format!("{what}: {msg}")),
            AppError::Decode(msg) => AppError::Decode(format!("{what}: {msg}")),
            AppError::Config(msg) => AppError::Config(format!("{what}: {msg}")),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Usage(msg) => write!(f, "{}", msg),
            AppError::Network(msg) => write!(f, "network error: {}", msg),
            AppError::Decode(msg) => write!(f, "decode error: {}", msg),
            AppError::Config(msg) => write!(f, "configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_display_as_plain_messages() {
        let err = AppError::Usage("explore accepts only one argument".to_string());
        assert_eq!(err.to_string(), "explore accepts only one argument");
    }

    #[test]
    fn network_errors_carry_their_kind() {
        let err = AppError::Network("request timed out".to_string());
        assert_eq!(err.to_string(), "network error: request timed out");
    }

    #[test]
    fn context_prefixes_without_changing_the_kind() {
        let err = AppError::Network("connection refused".to_string()).context("unable to catch magikarp");
        match &err {
            AppError::Network(msg) => assert_eq!(msg, "unable to catch magikarp: connection refused"),
            other => panic!("expected a network error, got {other:?}"),
        }
    }
}
