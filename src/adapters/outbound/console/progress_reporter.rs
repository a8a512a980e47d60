use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;

const PROGRESS_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Messages go to stderr so they never mix with a certificate printed on
/// stdout. Check progress is drawn with an indicatif bar that is created
/// on first use and cleared once a stage finishes or an error is shown.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    hidden: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            hidden: false,
        }
    }

    /// Reporter that prints messages but never draws a progress bar
    pub fn without_progress_bar() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            hidden: true,
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        if let Some(pb) = slot.as_ref() {
            pb.set_length(total as u64);
            return pb.clone();
        }

        let pb = if self.hidden {
            ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden())
        } else {
            ProgressBar::new(total as u64)
        };
        // a bad template only costs the styling
        if let Ok(style) = ProgressStyle::default_bar().template(PROGRESS_TEMPLATE) {
            pb.set_style(style.progress_chars("=>-"));
        }
        *slot = Some(pb.clone());
        pb
    }

    fn clear_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.clear_progress_bar();
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_progress_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_is_created_lazily() {
        let reporter = StderrProgressReporter::without_progress_bar();
        assert!(reporter.progress_bar.borrow().is_none());

        reporter.report_progress(1, 4, Some("Checking files..."));
        let pb = reporter.progress_bar.borrow().clone().unwrap();
        assert_eq!(pb.position(), 1);
        assert_eq!(pb.length(), Some(4));
    }

    #[test]
    fn test_progress_bar_is_reused() {
        let reporter = StderrProgressReporter::without_progress_bar();
        reporter.report_progress(1, 4, None);
        reporter.report_progress(3, 4, None);

        let pb = reporter.progress_bar.borrow().clone().unwrap();
        assert_eq!(pb.position(), 3);
    }

    #[test]
    fn test_completion_clears_progress_bar() {
        let reporter = StderrProgressReporter::without_progress_bar();
        reporter.report_progress(4, 4, None);
        reporter.report_completion("done");
        assert!(reporter.progress_bar.borrow().is_none());

        reporter.report_progress(1, 2, None);
        reporter.report_error("warning");
        assert!(reporter.progress_bar.borrow().is_none());
    }

    #[test]
    fn test_progress_reporter_default() {
        let reporter = StderrProgressReporter::default();
        reporter.report("Test message");
    }
}
