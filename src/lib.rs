//! gist-sweep: remove old GitHub gists selected by age, visibility, and description.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{SweepOptions, sweep};
pub use domain::{AppError, Criteria, Gist, GistApiConfig, SweepOutcome, select};
