use log::SetLoggerError;

const DEFAULT_LOG_FILTER: &str = "warn,trackview_core=info";

/// Installs a stderr logger for hosts that don't bring their own.
///
/// `RUST_LOG` overrides the default filter.
pub fn setup() -> Result<(), SetLoggerError> {
	let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_owned());

	env_logger::Builder::new()
		.parse_filters(&directives)
		.format_target(false)
		.try_init()
}
