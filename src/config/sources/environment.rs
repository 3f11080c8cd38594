//! Environment variable source: TREESTORE prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `TREESTORE__OUTPUT__FORMAT=text` sets `output.format`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("TREESTORE")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
