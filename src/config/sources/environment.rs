//! Environment variable source: PHONEBOOK_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `PHONEBOOK__STORAGE__PATH=/tmp/book.txt` sets `storage.path`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("PHONEBOOK")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
