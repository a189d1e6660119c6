//! Faqsmith main entry point
//!
//! Command-line caller that wires the extractor and the synthesizer:
//! fetch a page, check the content is usable, generate FAQs, emit JSON.

use anyhow::Context;
use clap::Parser;
use faqsmith::config::{load_config, Config};
use faqsmith::{
    ContentError, ExtractedDocument, Extractor, FaqItem, FaqSynthesizer, GenerationParams,
    OpenAiGenerator,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Faqsmith: generate FAQs from a web page
///
/// Fetches a public page, extracts its readable text, and asks a
/// text-generation API for a fixed-count set of question/answer pairs.
#[derive(Parser, Debug)]
#[command(name = "faqsmith")]
#[command(version)]
#[command(about = "Generate FAQs from a web page", long_about = None)]
struct Cli {
    /// Page URL (https:// is assumed when no scheme is given)
    #[arg(value_name = "URL")]
    url: String,

    /// Number of FAQ pairs to generate (clamped to 5-10)
    #[arg(short = 'n', long)]
    count: Option<u32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Extract the page only and print the structured document as JSON
    #[arg(long)]
    extract_only: bool,

    /// Write JSON output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    let document = handle_extract(&config, &cli.url).await?;

    if cli.extract_only {
        let json = serde_json::to_string_pretty(&document)?;
        return write_output(cli.output.as_deref(), &json);
    }

    // Content-length policy lives here, not in the extractor: pages below
    // the threshold produce FAQs that are all padding.
    let cleaned_length = document.cleaned_text.chars().count();
    let minimum = config.synthesizer.min_content_length;
    if cleaned_length < minimum {
        return Err(ContentError {
            length: cleaned_length,
            minimum,
        }
        .into());
    }

    let items = handle_generate(&config, &document, cli.count).await?;

    let json = serde_json::to_string_pretty(&items)?;
    write_output(cli.output.as_deref(), &json)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("faqsmith=info,warn"),
            1 => EnvFilter::new("faqsmith=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Runs the extraction stage
async fn handle_extract(config: &Config, url: &str) -> anyhow::Result<ExtractedDocument> {
    let extractor = Extractor::new(&config.fetcher).context("failed to build HTTP client")?;

    let document = extractor.extract(url).await?;

    tracing::info!(
        title = %document.title,
        cleaned_chars = document.metadata.cleaned_text_length,
        "page extracted"
    );

    Ok(document)
}

/// Runs the generation stage and stamps the results with provenance
async fn handle_generate(
    config: &Config,
    document: &ExtractedDocument,
    count: Option<u32>,
) -> anyhow::Result<Vec<FaqItem>> {
    let generator = OpenAiGenerator::new(config.generator.clone())?;

    let params = GenerationParams {
        temperature: config.generator.temperature,
        max_output_tokens: config.generator.max_output_tokens,
        json_output: true,
    };

    let synthesizer = FaqSynthesizer::new(generator)
        .with_params(params)
        .with_max_input_chars(config.synthesizer.max_input_chars);

    let pairs = synthesizer.generate(&document.cleaned_text, count).await?;

    tracing::info!(count = pairs.len(), "FAQ set generated");

    Ok(pairs
        .into_iter()
        .map(|pair| FaqItem::from_pair(pair, &document.url))
        .collect())
}

/// Writes output to the given path, or stdout when no path was given
fn write_output(path: Option<&std::path::Path>, json: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "output written");
        }
        None => println!("{}", json),
    }
    Ok(())
}
