use crate::document::{load_document, write_to_file};
use crate::generator::generate;
use crate::options::{Options, PartialOptions};
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

/// OpenAPI Type Generator - Generate TypeScript declarations from OpenAPI documents
#[derive(Parser, Debug)]
#[command(name = "openapi-typegen")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the OpenAPI document (YAML or JSON)
    #[arg(value_name = "INPUT")]
    pub input_path: PathBuf,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Indentation width in spaces (overrides the config file)
    #[arg(short = 'i', long = "indent", value_name = "SPACES")]
    pub indent: Option<usize>,

    /// Options file (YAML or JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.input_path.is_file() {
        anyhow::bail!("Input document does not exist: {}", args.input_path.display());
    }

    if let Some(ref config) = args.config_path {
        if !config.is_file() {
            anyhow::bail!("Config file does not exist: {}", config.display());
        }
    }

    info!("Input: {}", args.input_path.display());
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Resolve options: defaults, then the config file, then command-line flags
pub fn resolve_options(args: &CliArgs) -> Result<Options> {
    let mut options = Options::default();

    if let Some(ref config_path) = args.config_path {
        let layer = PartialOptions::from_file(config_path)
            .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
        options = options.merge(&layer);
    }

    options = options.merge(&PartialOptions {
        indent: args.indent,
    });
    options.validate()?;

    debug!("Resolved options: {:?}", options);
    Ok(options)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    info!("Starting declaration generation...");

    let options = resolve_options(&args)?;

    // Step 1: Load the document
    let document = load_document(&args.input_path)
        .with_context(|| format!("Failed to load document: {}", args.input_path.display()))?;

    // Step 2: Extract and emit
    let output = generate(&document, &options).context("Failed to generate declarations")?;
    info!("Generated {} lines", output.lines().count());

    // Step 3: Output to file or stdout
    if let Some(output_path) = &args.output_path {
        info!("Writing output to: {}", output_path.display());
        write_to_file(&output, output_path)?;
        info!("Successfully wrote declarations to {}", output_path.display());
    } else {
        print!("{}", output);
    }

    Ok(())
}
