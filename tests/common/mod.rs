//! Shared testing utilities for gist-sweep CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "test-token";
pub const OLD_TIMESTAMP: &str = "2001-01-01T00:00:00Z";

/// Testing harness providing an isolated `$HOME` and a fake GitHub API.
#[allow(dead_code)]
pub struct TestContext {
    home: TempDir,
    pub server: mockito::ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with no cached credential.
    pub fn new() -> Self {
        let home = TempDir::new().expect("Failed to create temp directory for tests");
        Self { home, server: mockito::Server::new() }
    }

    /// Create an environment whose default credential cache holds `TEST_TOKEN`.
    pub fn with_token() -> Self {
        let ctx = Self::new();
        ctx.write_credential(&ctx.credential_path(), TEST_TOKEN);
        ctx
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Default credential cache inside the emulated home.
    pub fn credential_path(&self) -> PathBuf {
        self.home().join(".gist-sweep")
    }

    /// Write a credential cache with owner-only permissions.
    pub fn write_credential(&self, path: &Path, token: &str) {
        fs::write(path, format!(r#"{{"oauth_token":"{}"}}"#, token))
            .expect("Failed to write credential cache");
        set_mode(path, 0o600);
    }

    /// Build a command for invoking the compiled `gist-sweep` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gist-sweep").expect("Failed to locate gist-sweep binary");
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env("GIST_SWEEP_API_URL", self.server.url())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Register the listing endpoint for `username` returning `body`.
    pub fn mock_list(&mut self, username: &str, body: &str) -> mockito::Mock {
        self.server
            .mock("GET", format!("/users/{}/gists", username).as_str())
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Register a delete endpoint expected to be hit `hits` times.
    pub fn mock_delete(&mut self, id: &str, status: usize, hits: usize) -> mockito::Mock {
        self.server
            .mock("DELETE", format!("/gists/{}", id).as_str())
            .with_status(status)
            .expect(hits)
            .create()
    }
}

/// Render a gist as the GitHub API does.
pub fn gist_json(id: &str, description: Option<&str>, public: bool, updated_at: &str) -> String {
    let description = match description {
        Some(text) => format!("\"{}\"", text),
        None => "null".to_string(),
    };
    format!(
        r#"{{"id":"{}","description":{},"public":{},"updated_at":"{}","files":{{}}}}"#,
        id, description, public, updated_at
    )
}

/// Render a JSON array of gists.
pub fn gist_list(gists: &[String]) -> String {
    format!("[{}]", gists.join(","))
}

#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .expect("Failed to set credential permissions");
}

#[cfg(not(unix))]
pub fn set_mode(_path: &Path, _mode: u32) {}
