//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Terse human-readable output, warnings and above (CLI default)
    Interactive,
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Default filter directive when `RUST_LOG` is unset
    pub fn default_directive(&self) -> &'static str {
        match self {
            Profile::Interactive => "scriptman=warn",
            Profile::Development => "scriptman=debug",
            Profile::Production => "scriptman=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()))
}

/// Initialize the logging facility
///
/// Call once at start-up; later calls are no-ops. All profiles write to
/// stderr so that command output on stdout stays clean.
///
/// # Profiles
///
/// - **Interactive**: compact lines, warn level, no targets
/// - **Development**: human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: bare registry, capture is installed via `init_test_capture()`
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Interactive => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .with_target(false)
                .without_time()
                .init();
        }
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Test => {
            tracing_subscriber::registry().init();
        }
    });
}
