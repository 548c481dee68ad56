use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while the grid is read, decoded, and annotated. Callers that
/// want no output pass `None` where an `Option<&ProgressReporter>` is taken.
pub struct ProgressReporter {
    progress_bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new_spinner(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { progress_bar: pb }
    }

    pub fn set_message(&self, message: &str) {
        self.progress_bar.set_message(message.to_string());
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.progress_bar.finish();
    }
}
