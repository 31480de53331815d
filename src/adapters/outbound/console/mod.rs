/// Console adapters: stderr progress reporting and terminal geometry
mod progress_reporter;
mod terminal;

pub use progress_reporter::StderrProgressReporter;
pub use terminal::{terminal_width, DEFAULT_TERMINAL_WIDTH};
