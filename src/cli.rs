use clap::Parser;
use genealogic::application::dto::{
    normalize_extension, OutputFormat, DEFAULT_CONCURRENCY, DEFAULT_EXTENSION, DEFAULT_MAX_LINES,
};
use genealogic::config::ConfigFile;
use genealogic::shared::Result;
use std::path::PathBuf;

/// C++ class inheritance tree visualizer
#[derive(Parser, Debug)]
#[command(name = "genealogic")]
#[command(version)]
#[command(
    about = "C++ class inheritance tree visualizer - scan headers and render the hierarchy below a base class",
    long_about = None
)]
pub struct Args {
    /// Root base class name to start the tree from
    pub base_class: String,

    /// Path to the C++ source directory
    pub directory: PathBuf,

    /// Header file extension filter [default: .h]
    #[arg(short, long = "ext", value_name = "EXT")]
    pub ext: Option<String>,

    /// Output directory (default: current directory for images, stdout for text formats)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Output format: svg, png, pdf, dot, json, mermaid or text [default: svg]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Optimize for one class per header: read only the first N lines of each file
    #[arg(long)]
    pub single_class: bool,

    /// Max lines to read in single-class mode [default: 100]
    #[arg(long, value_name = "N")]
    pub max_lines: Option<usize>,

    /// Maximum number of headers read concurrently [default: 64]
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Don't auto-open the result after rendering
    #[arg(long)]
    pub no_open: bool,

    /// Path to a config file (default: genealogic.config.yml in DIRECTORY)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report every skipped header and open failure
    #[arg(short, long)]
    pub verbose: bool,
}

/// Effective options after merging the config file under the CLI flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub base_class: String,
    pub directory: PathBuf,
    pub extension: String,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub single_class: bool,
    pub max_lines: usize,
    pub concurrency: usize,
    pub no_open: bool,
    pub verbose: bool,
}

impl Args {
    /// Applies `config` under the command-line values.
    ///
    /// Flags given on the command line win; boolean switches are enabled
    /// when either source enables them.
    pub fn resolve(self, config: Option<ConfigFile>) -> Result<Options> {
        let config = config.unwrap_or_default();

        let format = match self.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or(OutputFormat::Svg),
        };
        let extension = self
            .ext
            .or(config.extension)
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        Ok(Options {
            base_class: self.base_class,
            directory: self.directory,
            extension: normalize_extension(&extension)?,
            output: self.output.or(config.output),
            format,
            single_class: self.single_class || config.single_class.unwrap_or(false),
            max_lines: self
                .max_lines
                .or(config.max_lines)
                .unwrap_or(DEFAULT_MAX_LINES),
            concurrency: self
                .concurrency
                .or(config.concurrency)
                .unwrap_or(DEFAULT_CONCURRENCY),
            no_open: self.no_open || config.no_open.unwrap_or(false),
            verbose: self.verbose,
        })
    }
}
