pub mod mock_server;

/// Route `tracing` output through the test harness so it only shows up for
/// failing tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
