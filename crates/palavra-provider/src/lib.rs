use std::time::Duration;

use palavra_core::settings::RequestSettings;

/// Fixed message for a non-success HTTP status
pub const FETCH_FAILED_MESSAGE: &str = "Não foi possível buscar as palavras agora.";
/// Fallback message when a failure carries no message of its own
pub const UNEXPECTED_MESSAGE: &str = "Algo inesperado aconteceu.";

/// Word batch provider interface
#[async_trait::async_trait]
pub trait WordProvider: Send + Sync {
    /// Fetch one batch of random words for the given settings
    async fn fetch_words(&self, settings: &RequestSettings) -> Result<Vec<String>, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("provider returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed word list: {0}")]
    Body(#[from] serde_json::Error),
}

impl ProviderError {
    /// Message shown to the user in place of the word list.
    ///
    /// A bad status maps to the fixed localized message; anything else
    /// surfaces its own message, with a fallback if there is none.
    pub fn user_message(&self) -> String {
        match self {
            ProviderError::Status { .. } => FETCH_FAILED_MESSAGE.to_string(),
            other => {
                let message = other.to_string();
                if message.is_empty() {
                    UNEXPECTED_MESSAGE.to_string()
                } else {
                    message
                }
            }
        }
    }
}

/// Client for the random-word HTTP API
#[derive(Clone)]
pub struct RandomWordClient {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl RandomWordClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            base_url,
            timeout,
            client: reqwest::Client::new(),
        }
    }

    fn query_params(settings: &RequestSettings) -> [(&'static str, String); 3] {
        [
            ("number", settings.count.to_string()),
            ("lang", settings.language.code().to_string()),
            ("length", settings.word_length.to_string()),
        ]
    }
}

#[async_trait::async_trait]
impl WordProvider for RandomWordClient {
    async fn fetch_words(&self, settings: &RequestSettings) -> Result<Vec<String>, ProviderError> {
        let url = format!("{}/word", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .query(&Self::query_params(settings))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status { status });
        }

        let body = response.text().await?;
        let words: Vec<String> = serde_json::from_str(&body)?;
        Ok(words)
    }
}
