use leptos::prelude::{get_configuration, LeptosOptions};

use crate::error::ServerError;

/// Reads the leptos options from Cargo metadata and `LEPTOS_*` overrides.
pub fn load_options() -> Result<LeptosOptions, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
    Ok(conf.leptos_options)
}
