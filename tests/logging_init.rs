//! Installs the global subscriber, so it runs in its own test binary.

use esquery_core::core::config::LogConfig;
use esquery_core::core::logging::init_tracing;
use esquery_core::ResolveError;

#[test]
fn second_init_is_rejected() {
    let config = LogConfig::default();

    assert!(matches!(init_tracing(&config), Ok(None)));
    assert!(matches!(
        init_tracing(&config),
        Err(ResolveError::Config(_))
    ));
}
