/// ProgressReporter port for reporting progress during an audit run
///
/// Progress goes to a side channel (stderr) so the report on stdout
/// stays machine-readable.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Starts an indeterminate task, such as waiting on the audit subprocess
    fn start_task(&self, message: &str);

    /// Finishes the task started by [`ProgressReporter::start_task`]
    fn finish_task(&self);

    /// Reports a warning; shown even when informational messages are silenced
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for &T {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn start_task(&self, message: &str) {
        (**self).start_task(message)
    }

    fn finish_task(&self) {
        (**self).finish_task()
    }

    fn report_warning(&self, message: &str) {
        (**self).report_warning(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
