#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    /// HTTP-like status; `0` when the composer socket itself failed.
    pub status: u64,
    pub message: String,
}

impl ApiError {
    pub fn socket(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: message.into(),
        }
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
