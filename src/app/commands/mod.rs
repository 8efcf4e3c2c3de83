pub mod credential;
pub mod sweep;
