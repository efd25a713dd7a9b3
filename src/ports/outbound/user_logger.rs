/// UserLogger port for user-facing progress and diagnostics
///
/// Fire-and-forget: implementations must not fail, and callers never look at
/// what happened to a message.
pub trait UserLogger {
    /// Reports an informational message
    fn info(&self, message: &str);

    /// Reports a recoverable error
    fn error(&self, message: &str);

    /// Reports progress through a sequence of `total` steps (1-based `current`)
    fn progress(&self, current: usize, total: usize, message: &str) {
        self.info(&format!("({}/{}) {}", current, total, message));
    }
}
