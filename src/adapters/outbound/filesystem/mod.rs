/// Filesystem and stdout adapters for presenting the rendered report
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
