/// Writes log records to stderr, prefixed with their level and target.
pub struct Log {}

impl log::Log for Log {
	fn enabled(&self, metadata: &log::Metadata) -> bool {
		metadata.level() <= log::Level::Debug
	}

	fn log(&self, record: &log::Record) {
		if self.enabled(record.metadata()) {
			eprintln!("{} [{}]: {}", record.level(), record.target(), record.args());
		}
	}

	fn flush(&self) {}
}
