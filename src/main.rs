use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

use colloquy::{
    candidate_speaker_labels, parse_speaker_labels, read_transcript, run, AnalyticsMapping,
    AnalyticsReport, Dashboard, DisabledGrammarChecker, GrammarChecker, LanguageToolClient,
    LanguageToolConfig, PipelineConfig, Transcript,
};

#[derive(Parser)]
#[command(name = "colloquy")]
#[command(author, version, about = "Per-speaker analytics for meeting transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute speaker analytics for a transcript
    Analyze {
        /// Transcript document (.docx or .txt)
        #[arg(short, long)]
        input: PathBuf,

        /// Speaker labels separated by commas, exactly as they prefix lines (e.g. "Alice:,Bob:")
        #[arg(short, long)]
        speakers: String,

        /// Only print the dashboard for this speaker
        #[arg(long)]
        speaker: Option<String>,

        /// Output file for the machine-readable report (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the human-readable dashboard (text)
        #[arg(long)]
        report: Option<PathBuf>,

        /// LanguageTool server URL (overrides LANGUAGETOOL_URL)
        #[arg(long)]
        languagetool_url: Option<String>,

        /// Grammar-check language (overrides LANGUAGETOOL_LANGUAGE)
        #[arg(long)]
        language: Option<String>,

        /// Number of sentences in each summary
        #[arg(long, default_value = "3")]
        summary_sentences: usize,

        /// Skip grammar checking
        #[arg(long)]
        skip_grammar: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show paragraph count and likely speaker labels without analyzing
    Inspect {
        /// Transcript document (.docx or .txt)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            speakers,
            speaker,
            output,
            report,
            languagetool_url,
            language,
            summary_sentences,
            skip_grammar,
            verbose,
        } => {
            setup_logging(verbose);

            let mut config = PipelineConfig::default();
            config.summary.sentences = summary_sentences;

            let options = AnalyzeOptions {
                input,
                speakers: parse_speaker_labels(&speakers),
                selected: speaker,
                output,
                report,
            };

            if skip_grammar {
                info!("Skipping grammar checks (--skip-grammar)");
                analyze_transcript(options, &DisabledGrammarChecker, &config).await
            } else {
                let lt_config = languagetool_config(languagetool_url, language)?;
                info!("Using LanguageTool at {}", lt_config.base_url);
                let client = LanguageToolClient::new(lt_config)?;
                analyze_transcript(options, &client, &config).await
            }
        }
        Commands::Inspect { input, verbose } => {
            setup_logging(verbose);
            inspect_transcript(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// LanguageTool settings from the environment, with command-line overrides
fn languagetool_config(
    url: Option<String>,
    language: Option<String>,
) -> Result<LanguageToolConfig> {
    let mut config = LanguageToolConfig::from_env()?;
    if let Some(url) = url {
        config.base_url = url;
    }
    if let Some(language) = language {
        config.language = language;
    }
    Ok(config)
}

struct AnalyzeOptions {
    input: PathBuf,
    speakers: Vec<String>,
    selected: Option<String>,
    output: Option<PathBuf>,
    report: Option<PathBuf>,
}

async fn analyze_transcript<G: GrammarChecker>(
    options: AnalyzeOptions,
    checker: &G,
    config: &PipelineConfig,
) -> Result<()> {
    if options.speakers.is_empty() {
        anyhow::bail!("No speaker labels given");
    }

    info!(
        "Loading transcript from {:?}, analyzing {} speakers",
        options.input,
        options.speakers.len()
    );
    let analytics = run(&options.input, &options.speakers, checker, config)
        .await
        .context("Failed to read input transcript")?;

    print_dashboard(&analytics, options.selected.as_deref())?;

    if let Some(path) = &options.report {
        Dashboard::new(&analytics).write_file(path)?;
        info!("Dashboard written to {:?}", path);
    }

    if let Some(path) = &options.output {
        let source = options.input.display().to_string();
        AnalyticsReport::new(source, &options.speakers, analytics).write_json(path)?;
        info!("Report written to {:?}", path);
    }

    Ok(())
}

fn print_dashboard(analytics: &AnalyticsMapping, selected: Option<&str>) -> Result<()> {
    let dashboard = Dashboard::new(analytics);
    match selected {
        Some(speaker) => {
            let text = dashboard
                .format_speaker(speaker)
                .with_context(|| format!("Speaker {:?} was not analyzed", speaker))?;
            println!("{}", text);
        }
        None => println!("{}", dashboard.format()),
    }
    Ok(())
}

fn inspect_transcript(input: PathBuf) -> Result<()> {
    info!("Inspecting transcript from {:?}", input);
    let transcript = load(&input)?;

    let blank = transcript
        .lines()
        .iter()
        .filter(|l| l.trim().is_empty())
        .count();

    println!("Transcript");
    println!("==========");
    println!("Paragraphs: {}", transcript.len());
    println!("Blank paragraphs: {}", blank);
    println!();

    println!("Candidate speaker labels");
    println!("------------------------");
    let labels = candidate_speaker_labels(&transcript);
    if labels.is_empty() {
        println!("(none found)");
    }
    for label in &labels {
        let lines = transcript
            .lines()
            .iter()
            .filter(|l| l.starts_with(label.as_str()))
            .count();
        println!("{} {} lines", label, lines);
    }
    if !labels.is_empty() {
        println!();
        println!("Use: --speakers \"{}\"", labels.join(","));
    }

    Ok(())
}

fn load(input: &Path) -> Result<Transcript> {
    read_transcript(input).context("Failed to read input transcript")
}
