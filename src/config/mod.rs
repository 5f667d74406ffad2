//! Configuration for the remote API and the posts slice.

mod loader;
mod types;

pub use loader::{ConfigError, API_URL_ENV, MAX_BACKDATE_STEP_SECONDS};
pub use types::{ApiConfig, Config, LoadConfig};
