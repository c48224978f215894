//! Config Resource
//!
//! Loads the static `config.json` that names the quotes service.

use super::{get_text, parse_json, QuotesError};
use crate::models::ConfigObject;

/// Path of the config resource, relative to the page origin
pub const CONFIG_PATH: &str = "/assets/config.json";

pub async fn load_config() -> Result<ConfigObject, QuotesError> {
    parse_config(&get_text(CONFIG_PATH).await?)
}

pub fn parse_config(body: &str) -> Result<ConfigObject, QuotesError> {
    parse_json(body)
}
