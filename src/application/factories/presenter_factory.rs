use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::OutputPresenter;
use std::path::{Path, PathBuf};

/// Presenter type enumeration for factory pattern
///
/// Text output goes to stdout unless an output directory was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

/// Factory for creating output presenters
///
/// This factory encapsulates the creation logic for different presenter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Arguments
    /// * `presenter_type` - The type of presenter to create
    ///
    /// # Returns
    /// A boxed OutputPresenter trait object appropriate for the specified type
    ///
    /// # Examples
    /// ```
    /// use genealogic::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }

    /// Chooses the presenter for a text format given the optional output directory
    ///
    /// # Examples
    /// ```
    /// use genealogic::application::dto::OutputFormat;
    /// use genealogic::application::factories::{PresenterFactory, PresenterType};
    /// use std::path::{Path, PathBuf};
    ///
    /// let kind = PresenterFactory::presenter_type(Some(Path::new("out")), "Animal", OutputFormat::Json);
    /// assert_eq!(kind, PresenterType::File(PathBuf::from("out/Animal_inheritance.json")));
    /// ```
    pub fn presenter_type(
        output_dir: Option<&Path>,
        root: &str,
        format: OutputFormat,
    ) -> PresenterType {
        match output_dir {
            Some(dir) => PresenterType::File(dir.join(format.output_file_name(root))),
            None => PresenterType::Stdout,
        }
    }
}
