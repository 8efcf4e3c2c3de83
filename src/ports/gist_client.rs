//! GitHub gist API port definition.

use crate::domain::{AppError, Gist};

/// Port for the remote gist collection.
pub trait GistClient {
    /// List every gist owned by `username`, with pagination fully resolved.
    fn list_gists(&self, username: &str) -> Result<Vec<Gist>, AppError>;

    /// Delete a single gist by id.
    fn delete_gist(&self, id: &str) -> Result<(), AppError>;
}
