//! OpenAPI Type Generator - Command-line tool for generating TypeScript declarations.
//!
//! This binary reads an OpenAPI document and writes one request interface per
//! operation plus one declaration per component schema.
//!
//! # Usage
//!
//! ```bash
//! openapi-typegen [OPTIONS] <INPUT>
//! ```
//!
//! # Examples
//!
//! Generate declarations to a file:
//! ```bash
//! openapi-typegen ./openapi.yaml -o src/api-types.ts
//! ```
//!
//! Use four-space indentation:
//! ```bash
//! openapi-typegen ./openapi.json --indent 4
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! openapi-typegen ./openapi.yaml -v
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use openapi_typegen::cli;

fn main() -> Result<()> {
    // Parse once up front so the verbose flag can configure the logger
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Logs go to stderr, so stdout stays clean for the generated declarations
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("OpenAPI Type Generator starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    info!("Declaration generation completed successfully");

    Ok(())
}
