pub mod service;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};

/// Builder seeded with the lowest-precedence defaults.
pub(crate) fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("storage.path", "phonebook.txt")?
        .set_default("storage.parse_policy", "lenient")?
        .set_default("ui.language", "en")
}
