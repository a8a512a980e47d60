/// ProgressReporter port for reporting progress during a certification run
///
/// This port abstracts user-facing progress output (e.g., to stderr) so the
/// use case can report scanning and checking progress without knowing
/// where it ends up.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress as `current` out of `total`
    ///
    /// # Arguments
    /// * `current` - Items finished so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of a stage
    fn report_completion(&self, message: &str);
}
