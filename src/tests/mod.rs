mod registry_tests;

/// Route `log` output through the test harness. Safe to call from every test.
pub(crate) fn init_logging() {
	let _ = env_logger::builder().is_test(true).try_init();
}
