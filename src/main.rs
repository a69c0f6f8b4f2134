use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};

use organizer::banner::{BannerInfo, print_banner, print_summary};
use organizer::classifier::Classifier;
use organizer::config::{ClassifierConfig, RunConfig};
use organizer::consts::{
    DEFAULT_ENDPOINT, DEFAULT_INPUT, DEFAULT_MODEL, DEFAULT_OUTPUT, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS,
};
use organizer::logging;
use organizer::pipeline::Pipeline;

#[derive(Parser)]
#[command(
    name = "organizer",
    version,
    about = "File satirical articles into categories with a local Ollama model."
)]
struct Cli {
    /// JSON array of articles to classify
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the categorized articles
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Ollama generate endpoint
    #[arg(long, env = "OLLAMA_URL", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Model name as known to Ollama
    #[arg(short, long, env = "OLLAMA_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Per-article request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,

    /// More diagnostic output (-v for debug)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

impl Cli {
    fn verbosity(&self) -> i8 {
        if self.quiet {
            -1
        } else {
            self.verbose.min(1) as i8
        }
    }

    fn into_config(self) -> RunConfig {
        RunConfig {
            input: self.input,
            output: self.output,
            classifier: ClassifierConfig {
                endpoint: self.endpoint,
                model: self.model,
                timeout: Duration::from_secs(self.timeout),
                temperature: self.temperature,
            },
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbosity()) {
        eprintln!("warning: {e}");
    }

    if let Err(e) = run(cli.into_config()).await {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

async fn run(config: RunConfig) -> anyhow::Result<()> {
    print_banner(&BannerInfo {
        endpoint: &config.classifier.endpoint,
        model: &config.classifier.model,
        input: &config.input,
        output: &config.output,
    });

    let classifier = Classifier::ollama(&config.classifier)?;
    let pipeline = Pipeline::new(classifier);

    let summary = pipeline.run(&config.input, &config.output).await?;
    print_summary(&summary);
    Ok(())
}
