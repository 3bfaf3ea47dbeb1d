//! Logging initialization module

use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output on stderr
    Development,
    /// JSON structured output on stderr
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Directive used when `RUST_LOG` is not set
    pub fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "envdiff=debug",
            Profile::Production => "envdiff=info",
            Profile::Test => "envdiff=trace",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call has any effect. `RUST_LOG` overrides the profile's
/// default filter. Output goes to stderr so stdout stays free for rendered
/// edit scripts.
///
/// # Example
///
/// ```
/// use envdiff_core::logging_facility::{init, Profile};
///
/// init(Profile::Test);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Test => {
                // Test capture is installed separately via init_test_capture()
                tracing_subscriber::registry().with(filter).init();
            }
        }
    });
}
