use crate::ports::outbound::UserLogger;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

/// StderrUserLogger adapter for reporting progress to stderr
///
/// Writes everything to stderr so stdout stays free for piping. Download
/// progress is shown as an indicatif bar; messages logged while the bar is
/// visible are printed above it.
pub struct StderrUserLogger {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrUserLogger {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            pb.set_length(total as u64);
            return pb.clone();
        }

        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    /// Prints a line, above the progress bar if one is active. A bar that has
    /// reached its end is cleared first.
    fn print(&self, line: &str) {
        let mut pb_option = self.progress_bar.borrow_mut();
        match pb_option.take() {
            Some(pb) if pb.length().is_some_and(|len| pb.position() >= len) => {
                pb.finish_and_clear();
                eprintln!("{}", line);
            }
            Some(pb) => {
                println_above(&pb, line);
                *pb_option = Some(pb);
            }
            None => eprintln!("{}", line),
        }
    }
}

/// indicatif drops `println` output for hidden bars (stderr not a terminal)
fn println_above(pb: &ProgressBar, line: &str) {
    if pb.is_hidden() {
        eprintln!("{}", line);
    } else {
        pb.println(line);
    }
}

impl Default for StderrUserLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StderrUserLogger {
    fn drop(&mut self) {
        if let Some(pb) = self.progress_bar.get_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl UserLogger for StderrUserLogger {
    fn info(&self, message: &str) {
        self.print(message);
    }

    fn error(&self, message: &str) {
        self.print(&format!("⚠️  {}", message.red()));
    }

    fn progress(&self, current: usize, total: usize, message: &str) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current.saturating_sub(1) as u64);
        pb.set_message(message.to_string());
        println_above(&pb, &format!("   ({}/{}) {}", current, total, message));
        pb.set_position(current as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_logger_creation() {
        let logger = StderrUserLogger::new();
        // Can't easily test stderr output, but verify it doesn't panic
        logger.info("Test message");
        logger.progress(1, 2, "Downloading license MIT");
        logger.error("Test error");
        logger.progress(2, 2, "Downloading license BSD");
        logger.info("Test completion");
    }

    #[test]
    fn test_user_logger_default() {
        let logger = StderrUserLogger::default();
        logger.info("Test message");
    }
}
