use std::{
    io::{self, BufReader, Read, Write},
    path::PathBuf,
};

use anyhow::Result;
use attrdown_converters_html::Processor;
use attrdown_parser::{Document, Options};
use clap::{Parser, ValueEnum};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, ValueEnum, Clone)]
enum Format {
    Html,
    Json,
}

/// Converts Markdown with inline attribute annotations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// List of files to convert; reads from stdin when empty
    files: Vec<PathBuf>,

    /// output format
    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// do not link bare http(s) URLs
    #[arg(long)]
    no_autolink: bool,

    /// run the engine without the attribute extension
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    let args = Args::parse();
    let options = Options::builder()
        .with_urls_linked(!args.no_autolink)
        .build();

    if args.files.is_empty() {
        let source = read_stdin()?;
        convert(&source, &args, &options)?;
    } else {
        for file in &args.files {
            tracing::debug!(source = ?file, "processing file");
            let source = std::fs::read_to_string(file)?;
            convert(&source, &args, &options)?;
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    Ok(input)
}

#[tracing::instrument(skip(source, options))]
fn convert(source: &str, args: &Args, options: &Options) -> Result<()> {
    let document = parse(source, args, options)?;
    let mut stdout = io::stdout();
    match args.format {
        Format::Html => {
            if args.plain {
                Processor::plain(options.clone()).render(&document, &mut stdout)?;
            } else {
                Processor::new(options.clone())?.render(&document, &mut stdout)?;
            }
            stdout.write_all(b"\n")?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&stdout, &document)?;
            stdout.write_all(b"\n")?;
        }
    }
    stdout.flush()?;
    Ok(())
}

fn parse(source: &str, args: &Args, options: &Options) -> Result<Document> {
    if args.plain {
        Ok(attrdown_parser::parse_plain(source, options))
    } else {
        Ok(attrdown_parser::parse_with_options(source, options)?)
    }
}
