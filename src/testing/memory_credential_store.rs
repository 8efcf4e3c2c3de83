use std::cell::RefCell;

use crate::domain::AppError;
use crate::ports::CredentialStore;

/// Credential cache held in memory.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    pub token: RefCell<Option<String>>,
    pub saves: RefCell<usize>,
}

impl MemoryCredentialStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_string())), saves: RefCell::new(0) }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        Ok(self.token.borrow().clone())
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        *self.token.borrow_mut() = Some(token.to_string());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}
