use error_stack::fmt::ColorMode;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "RAK_LOG";

/// Installs the global subscriber, filtered by `RAK_LOG` (for example `RAK_LOG=rak_service=debug`).
///
/// Call once from the `main` of the binary that embeds the services, before building state:
///
/// ```no_run
/// rak_service::logging::init();
/// ```
pub fn init() {
    error_stack::Report::set_color_mode(ColorMode::None);

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_env(LOG_ENV_VAR))
        .init();
}
