//! Environment source: ARCHMD__<SECTION>__<KEY> variables

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add the environment source; it overrides every file source.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("ARCHMD")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    )
}
