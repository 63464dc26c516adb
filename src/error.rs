/// Plugin-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External site error: {0}")]
    ExternalApi(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Host error: {0}")]
    Host(String),
}

impl AppError {
    /// Message shown to the user in the host's notification toast.
    ///
    /// Transport errors from reqwest carry the full URL, which is noise in a
    /// toast, so they are collapsed to their kind.
    pub fn user_message(&self) -> String {
        match self {
            AppError::HttpClient(e) if e.is_timeout() => "timeout".to_string(),
            AppError::HttpClient(e) if e.is_connect() => "connection failed".to_string(),
            AppError::HttpClient(_) => "network error".to_string(),
            AppError::ExternalApi(msg) | AppError::Host(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
