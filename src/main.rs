mod cli;

use clap::Parser;
use cli::{Args, Options};
use genealogic::adapters::outbound::console::{ConsoleBanner, StderrProgressReporter};
use genealogic::adapters::outbound::filesystem::FileSystemHeaderSource;
use genealogic::adapters::outbound::graphviz::{GraphvizRenderer, SystemFileOpener};
use genealogic::application::dto::{HierarchyOutcome, HierarchyRequest, HierarchyResponse};
use genealogic::application::factories::{FormatterFactory, PresenterFactory};
use genealogic::application::read_models::{HierarchyReadModel, HierarchyReadModelBuilder};
use genealogic::application::use_cases::BuildHierarchyUseCase;
use genealogic::config::{discover_config, load_config_from_path};
use genealogic::ports::outbound::{FileOpener, GraphRenderer};
use genealogic::shared::error::{ExitCode, GenealogicError, HierarchyError};
use genealogic::shared::security::validate_scan_directory;
use genealogic::shared::Result;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here and are not failures.
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    validate_scan_directory(&args.directory)?;

    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&args.directory)?,
    };
    let options = args.resolve(config)?;

    let colored = ConsoleBanner::detect_color();
    let banner = ConsoleBanner::new(colored);
    banner.print_header(&options.base_class, &options.directory, &options.extension);

    let renderer = GraphvizRenderer::new();
    if options.format.is_image() && !renderer.is_available() {
        banner.print_warning(
            "Graphviz 'dot' not found in PATH. Tree will be shown in console only. \
             Install Graphviz to render image output.",
        );
    }

    let request = HierarchyRequest::builder()
        .base_class(options.base_class.as_str())
        .directory(options.directory.clone())
        .extension(options.extension.as_str())
        .single_class(options.single_class)
        .max_lines(options.max_lines)
        .concurrency(options.concurrency)
        .report_skipped(options.verbose)
        .build()?;

    // Create adapters (Dependency Injection)
    let use_case =
        BuildHierarchyUseCase::new(FileSystemHeaderSource::new(), StderrProgressReporter::new());

    match use_case.execute(&request).await? {
        HierarchyOutcome::NoHeaders {
            directory,
            extension,
        } => {
            banner.print_error(&format!(
                "No *{} files found in {}",
                extension,
                directory.display()
            ));
            Ok(ExitCode::NotFound)
        }
        HierarchyOutcome::RootNotFound { root, .. } => {
            banner.print_error(&HierarchyError::RootNotFound { root }.to_string());
            Ok(ExitCode::NotFound)
        }
        HierarchyOutcome::NoDescendants(response) => {
            banner.print_warning(&format!("No classes inherit from '{}'", response.root));
            Ok(ExitCode::Success)
        }
        HierarchyOutcome::Built(response) => {
            emit(&options, &banner, colored, &renderer, &response).await?;
            Ok(ExitCode::Success)
        }
    }
}

/// Prints the console preview, then writes or renders the requested format
async fn emit(
    options: &Options,
    banner: &ConsoleBanner,
    colored: bool,
    renderer: &GraphvizRenderer,
    response: &HierarchyResponse,
) -> Result<()> {
    let model = HierarchyReadModelBuilder::build(response);

    let preview = FormatterFactory::create_preview(colored).format(&model)?;
    banner.print_tree_preview(&preview, model.stats.classes);

    if options.format.is_image() {
        if renderer.is_available() {
            render_image(options, banner, renderer, &model).await?;
        } else {
            banner.print_warning("Skipping image rendering (Graphviz not installed)");
        }
        return Ok(());
    }

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let content = FormatterFactory::create(options.format).format(&model)?;
    let presenter_type =
        PresenterFactory::presenter_type(options.output.as_deref(), &model.root, options.format);
    PresenterFactory::create(presenter_type).present(&content)
}

async fn render_image(
    options: &Options,
    banner: &ConsoleBanner,
    renderer: &GraphvizRenderer,
    model: &HierarchyReadModel,
) -> Result<()> {
    let Some(image_format) = options.format.image_format() else {
        return Ok(());
    };

    let output_dir = match options.output.clone() {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let output_path = output_dir.join(options.format.output_file_name(&model.root));
    ensure_output_directory(&output_dir, &output_path)?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let dot_source = FormatterFactory::create(options.format).format(model)?;
    let rendered = renderer
        .render(&dot_source, image_format, &output_path)
        .await?;

    banner.print_success(&format!("Rendered to {}", rendered.display()));

    if !options.no_open {
        if let Err(e) = SystemFileOpener::new().open(&rendered) {
            if options.verbose {
                banner.print_warning(&e.to_string());
            }
        }
    }

    Ok(())
}

fn ensure_output_directory(output_dir: &Path, output_path: &Path) -> Result<()> {
    if output_dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(output_dir).map_err(|e| {
        GenealogicError::FileWriteError {
            path: output_path.to_path_buf(),
            details: format!(
                "Failed to create output directory {}: {}",
                output_dir.display(),
                e
            ),
        }
    })?;
    Ok(())
}
