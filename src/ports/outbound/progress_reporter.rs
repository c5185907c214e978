/// ProgressReporter port for user-facing progress messages
///
/// Progress goes to stderr so it never mixes with the rendered graph on
/// stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports traversal progress
    ///
    /// # Arguments
    /// * `current` - Packages expanded so far
    /// * `total` - Packages discovered so far (expanded or waiting)
    /// * `message` - Optional message, typically the package being expanded
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for &R {
    fn report(&self, message: &str) {
        (**self).report(message)
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        (**self).report_progress(current, total, message)
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message)
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message)
    }
}
