pub mod batch;
pub mod watch;

/// Local wall-clock time for event prefixes.
pub(crate) fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
