/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts user feedback (e.g., to stderr) so that stdout stays
/// reserved for formatted hierarchy output.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress over a countable unit of work
    ///
    /// # Arguments
    /// * `current` - Units completed so far
    /// * `total` - Total expected units (one per scanned header)
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
