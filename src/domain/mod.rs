pub mod api_config;
pub mod criteria;
pub mod error;
pub mod gist;
pub mod outcome;
pub mod selection;

pub use api_config::{API_URL_ENV, GistApiConfig};
pub use criteria::{Criteria, DEFAULT_MIN_AGE_DAYS};
pub use error::AppError;
pub use gist::Gist;
pub use outcome::SweepOutcome;
pub use selection::{is_eligible, select};
