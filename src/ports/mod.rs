mod console;
mod credential_store;
mod gist_client;

pub use console::Console;
pub use credential_store::CredentialStore;
pub use gist_client::GistClient;
