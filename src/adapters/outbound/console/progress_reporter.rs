use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the report on stdout.
/// Uses indicatif for the spinner shown while npm runs; indicatif hides it
/// when stderr is not a terminal.
pub struct StderrProgressReporter {
    quiet: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            quiet: false,
            spinner: RefCell::new(None),
        }
    }

    /// Only warnings are printed by a quiet reporter
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            spinner: RefCell::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Some(pb) = self.spinner.borrow_mut().take() {
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
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn start_task(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.clear_spinner();

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("   {spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        *self.spinner.borrow_mut() = Some(pb);
    }

    fn finish_task(&self) {
        self.clear_spinner();
    }

    fn report_warning(&self, message: &str) {
        self.clear_spinner();
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.yellow())
        );
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        if !self.quiet {
            eprintln!(
                "{}",
                message.if_supports_color(Stream::Stderr, |text| text.green())
            );
        }
    }
}
