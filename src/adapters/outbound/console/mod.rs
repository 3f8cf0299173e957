/// Console adapters for stderr diagnostics
mod banner;
mod progress_reporter;

pub use banner::ConsoleBanner;
pub use progress_reporter::StderrProgressReporter;
