use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub const LOG_VAR: &str = "GITCLEANER_LOG";

/// Install the stderr subscriber. Quiet unless `GITCLEANER_LOG` (or `--verbose`) asks for more.
pub fn init(verbose: bool) {
    let level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_VAR)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
