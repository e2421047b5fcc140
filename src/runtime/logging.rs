use std::io::Write;

use env_logger::{Builder, Env};

use crate::config::LogSettings;

/// Install the global logger. `RUST_LOG` overrides the configured level.
///
/// Calling this twice is harmless; the second logger is simply not installed.
pub fn init_logging(settings: &LogSettings) {
    let env = Env::default().default_filter_or(settings.level.trim());

    let _ = Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
