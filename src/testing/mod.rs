mod fake_gist_client;
mod memory_credential_store;
mod scripted_console;

pub use fake_gist_client::FakeGistClient;
pub use memory_credential_store::MemoryCredentialStore;
pub use scripted_console::ScriptedConsole;
