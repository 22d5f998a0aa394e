//! Command-line front-end
//!
//! Reads a transcript file, runs one synthesis request, writes the artifact
//! files and reports per-audience status. The synthesis engine itself lives
//! in the library.

use anyhow::{bail, Context};
use interview_synth::adapters::services::llm::AnthropicBackend;
use interview_synth::domain::catalog;
use interview_synth::domain::models::{
    Audience, NarrativeLength, SynthesisParameters, SynthesisRequest,
};
use interview_synth::utils::export::write_artifacts;
use interview_synth::utils::keychain::{resolve_api_key, KeychainCredentials};
use interview_synth::Synthesizer;
use std::path::PathBuf;
use std::sync::Arc;

struct CliArgs {
    transcript_path: PathBuf,
    audiences: Vec<Audience>,
    words: u32,
    headlines: u8,
    themes: Vec<String>,
    out_dir: PathBuf,
    json: bool,
}

const USAGE: &str = "Usage: interview-synth <transcript-file> --audiences <names> [options]

Options:
  --audiences <names>   Comma-separated audience names, e.g. \"CEOs,Board Directors\"
  --words <n>           Narrative word count: 100, 250 or 500 (default 100)
  --headlines <n>       Headline options per audience, 1-5 (default 1)
  --themes <labels>     Comma-separated focus themes (default none)
  --out <dir>           Output directory for artifact files (default .)
  --json                Print the full output as JSON instead of writing files
  --list-audiences      Print the audience catalog and exit";

fn parse_args() -> anyhow::Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let mut transcript_path = None;
    let mut audience_names = None;
    let mut words = 100;
    let mut headlines = 1;
    let mut themes = Vec::new();
    let mut out_dir = PathBuf::from(".");
    let mut json = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--audiences" => {
                audience_names = Some(args.next().context("--audiences needs a value")?)
            }
            "--words" => {
                words = args
                    .next()
                    .context("--words needs a value")?
                    .parse()
                    .context("--words must be a number")?
            }
            "--headlines" => {
                headlines = args
                    .next()
                    .context("--headlines needs a value")?
                    .parse()
                    .context("--headlines must be a number")?
            }
            "--themes" => {
                themes = args
                    .next()
                    .context("--themes needs a value")?
                    .split(',')
                    .map(|t| t.trim().to_string())
                    .collect()
            }
            "--out" => out_dir = PathBuf::from(args.next().context("--out needs a value")?),
            "--json" => json = true,
            "--list-audiences" => {
                for profile in catalog::all() {
                    println!("{}", profile.name());
                }
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            other if !other.starts_with("--") && transcript_path.is_none() => {
                transcript_path = Some(PathBuf::from(other));
            }
            other => bail!("unrecognized argument: {}\n\n{}", other, USAGE),
        }
    }

    let transcript_path = transcript_path.context(USAGE)?;
    let audience_names =
        audience_names.with_context(|| format!("--audiences is required\n\n{}", USAGE))?;

    // Resolve every name through the catalog before anything else runs.
    let audiences = audience_names
        .split(',')
        .map(|name| catalog::resolve(name).map(|profile| profile.audience))
        .collect::<interview_synth::Result<Vec<Audience>>>()?;

    Ok(CliArgs {
        transcript_path,
        audiences,
        words,
        headlines,
        themes,
        out_dir,
        json,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = parse_args()?;

    let transcript = std::fs::read_to_string(&args.transcript_path)
        .with_context(|| format!("failed to read {}", args.transcript_path.display()))?;

    let parameters = SynthesisParameters::new(
        NarrativeLength::from_words(args.words)?,
        args.headlines,
        args.themes,
    )?;
    let request = SynthesisRequest::new(transcript, args.audiences, parameters)?;

    let api_key = resolve_api_key(&KeychainCredentials::new())?;
    let backend = Arc::new(AnthropicBackend::new(api_key)?);
    let synthesizer = Synthesizer::new(backend);

    let output = synthesizer.synthesize(&request).await?;

    if args.json {
        println!("{}", output.to_json()?);
        return Ok(());
    }

    for result in &output.results {
        match &result.error {
            None => println!("{}: ok", result.audience),
            Some(error) => println!("{}: FAILED - {}", result.audience, error),
        }
    }

    let written = write_artifacts(&args.out_dir, &output.artifacts)?;
    for path in &written {
        println!("wrote {}", path.display());
    }

    println!(
        "{}/{} summaries generated ({} total this session)",
        output.successes(),
        output.results.len(),
        synthesizer.total_generated()
    );

    Ok(())
}
