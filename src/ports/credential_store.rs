use crate::domain::AppError;

/// Port for the cached GitHub access token.
pub trait CredentialStore {
    /// Load the cached token. A missing or empty cache yields `None`.
    fn load(&self) -> Result<Option<String>, AppError>;

    /// Persist `token`, replacing any cached value.
    fn save(&self, token: &str) -> Result<(), AppError>;
}
