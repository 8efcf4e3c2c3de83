use crate::domain::AppError;
use crate::ports::{Console, CredentialStore};

/// Return the cached token, or ask the operator for one and cache it.
pub fn resolve_token<S, C>(store: &S, console: &mut C) -> Result<String, AppError>
where
    S: CredentialStore,
    C: Console,
{
    if let Some(token) = store.load()? {
        return Ok(token.trim().to_string());
    }

    console.write_line("You need to setup a 'Personal Access Token' to use with gist-sweep")?;
    let token = console
        .prompt_secret("I'll wait for you to paste one in: ")?
        .map(|raw| raw.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or(AppError::MissingToken)?;

    store.save(&token)?;
    Ok(token)
}
