use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, Gist};
use crate::ports::GistClient;

/// In-memory gist API that records every call.
#[derive(Clone, Default)]
pub struct FakeGistClient {
    pub gists: Vec<Gist>,
    pub list_failure: Option<String>,
    pub failing_ids: HashSet<String>,
    pub listed_users: Arc<Mutex<Vec<String>>>,
    pub delete_calls: Arc<Mutex<Vec<String>>>,
}

impl FakeGistClient {
    pub fn new(gists: Vec<Gist>) -> Self {
        Self { gists, ..Self::default() }
    }

    pub fn failing_list(message: impl Into<String>) -> Self {
        Self { list_failure: Some(message.into()), ..Self::default() }
    }

    pub fn fail_delete_of(mut self, id: impl Into<String>) -> Self {
        self.failing_ids.insert(id.into());
        self
    }

    pub fn get_delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }

    pub fn get_listed_users(&self) -> Vec<String> {
        self.listed_users.lock().unwrap().clone()
    }
}

impl GistClient for FakeGistClient {
    fn list_gists(&self, username: &str) -> Result<Vec<Gist>, AppError> {
        self.listed_users.lock().unwrap().push(username.to_string());
        match &self.list_failure {
            Some(message) => Err(AppError::api_error(message.clone(), Some(401))),
            None => Ok(self.gists.clone()),
        }
    }

    fn delete_gist(&self, id: &str) -> Result<(), AppError> {
        self.delete_calls.lock().unwrap().push(id.to_string());
        if self.failing_ids.contains(id) {
            return Err(AppError::api_error("Not Found", Some(404)));
        }
        Ok(())
    }
}
