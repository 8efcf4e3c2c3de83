pub mod credential_file;
pub mod github_client_http;
pub mod terminal_console;

pub use credential_file::{DEFAULT_CREDENTIAL_PATH, JsonCredentialFile, expand_home};
pub use github_client_http::HttpGistClient;
pub use terminal_console::TerminalConsole;
