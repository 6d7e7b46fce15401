//! Symptom triage engine — command-line front end.
//!
//! Loads the reference tables named in the config, builds the ranker and
//! remedy indices once, then answers a single request.
//!
//! Usage:
//!   triage assess "fever and cough"
//!   triage assess --lang hi --top-n 5 "bukhar aur khansi"
//!   triage assess --select fever --select cough --remedy natural
//!   triage medication "Influenza"
//!   triage remedy "Common Cold"
//!   triage symptoms [--disease Influenza]
//!   triage hospitals

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use triage_config::TriageConfig;
use triage_contracts::{
    assessment::AssessmentReport,
    error::{TriageError, TriageResult},
    language::Language,
    prediction::RankOptions,
    remedy::{MedicationInfo, RemedyAdvice, RemedyKind},
};
use triage_core::{nearby_hospitals, traits::Translator, TriageService};
use triage_corpus::{compose_query, ReferenceCorpus};
use triage_ranker::TfidfRanker;
use triage_remedy::RemedyResolver;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "triage.toml";

// ── CLI definition ────────────────────────────────────────────────────────────

/// Symptom triage: rank likely diseases for a symptom description and look up
/// remedies. Informational only; not a diagnostic tool.
#[derive(Parser)]
#[command(name = "triage", about = "Symptom triage engine")]
struct Cli {
    /// Path to a TOML config file. Defaults to ./triage.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank diseases for a symptom description.
    Assess {
        /// Free-text symptom description.
        text: Vec<String>,

        /// Symptom names to compose the query from (repeatable).
        #[arg(long = "select", conflicts_with = "text")]
        selected: Vec<String>,

        /// Language the text is written in (ISO 639-1 code).
        #[arg(long, default_value = "en")]
        lang: Language,

        /// Number of predictions to return.
        #[arg(long)]
        top_n: Option<usize>,

        /// Show each disease at most once.
        #[arg(long)]
        dedup: bool,

        /// Also show remedies for the top prediction.
        #[arg(long, value_enum)]
        remedy: Option<RemedyArg>,
    },
    /// Medication information for a disease.
    Medication { disease: String },
    /// Natural remedies for a disease.
    Remedy { disease: String },
    /// List selectable symptom names, or those flagged for one disease.
    Symptoms {
        #[arg(long)]
        disease: Option<String>,
    },
    /// List hospitals near the configured reference point.
    Hospitals,
}

#[derive(Clone, Copy, ValueEnum)]
enum RemedyArg {
    Natural,
    Medical,
}

impl From<RemedyArg> for RemedyKind {
    fn from(arg: RemedyArg) -> Self {
        match arg {
            RemedyArg::Natural => RemedyKind::Natural,
            RemedyArg::Medical => RemedyKind::Medical,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("triage error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> TriageResult<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        // Needs no reference data.
        Command::Hospitals => {
            let facilities =
                nearby_hospitals(config.facilities.latitude, config.facilities.longitude);
            if cli.json {
                return print_json(&facilities);
            }
            println!("Nearby hospitals:");
            for f in facilities {
                println!("  {:<24} {:.4}, {:.4}", f.name, f.latitude, f.longitude);
            }
            Ok(())
        }

        Command::Symptoms { disease } => {
            let corpus = ReferenceCorpus::load(&config.data)?;
            let names: Vec<&str> = match &disease {
                Some(d) => corpus.matrix().symptoms_for(d),
                None => corpus.matrix().symptom_names().iter().map(String::as_str).collect(),
            };
            if cli.json {
                return print_json(&names);
            }
            for name in names {
                println!("{name}");
            }
            Ok(())
        }

        Command::Assess { text, selected, lang, top_n, dedup, remedy } => {
            let service = build_service(&config)?;
            let query = if selected.is_empty() { text.join(" ") } else { compose_query(&selected) };

            let mut options = service.default_options();
            if let Some(n) = top_n {
                if n == 0 {
                    return Err(TriageError::InvalidInput {
                        reason: "--top-n must be at least 1".to_string(),
                    });
                }
                options = RankOptions { top_n: n, ..options };
            }
            options.dedup_diseases |= dedup;

            let report = service.assess(&query, &lang, options)?;
            let advice = match (remedy, report.primary()) {
                (Some(kind), Some(top)) => {
                    Some(service.remedies(&top.prediction.disease, kind.into()))
                }
                _ => None,
            };

            if cli.json {
                return print_json(&serde_json::json!({ "report": report, "remedies": advice }));
            }
            print_report(&report);
            if let Some(advice) = advice {
                print_advice(&advice);
            }
            println!();
            println!("{}", report.disclaimer);
            Ok(())
        }

        Command::Medication { disease } => {
            let service = build_service(&config)?;
            let info = service.get_medication(&disease);
            if cli.json {
                return print_json(&info);
            }
            print_medication(&disease, &info);
            Ok(())
        }

        Command::Remedy { disease } => {
            let service = build_service(&config)?;
            let advice = service.remedies(&disease, RemedyKind::Natural);
            if cli.json {
                return print_json(&advice);
            }
            print_advice(&advice);
            Ok(())
        }
    }
}

// ── Wiring ────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> TriageResult<TriageConfig> {
    match path {
        Some(p) => TriageConfig::from_file(p),
        None if Path::new(DEFAULT_CONFIG).exists() => {
            TriageConfig::from_file(Path::new(DEFAULT_CONFIG))
        }
        None => {
            debug!("no config file; using defaults");
            Ok(TriageConfig::default())
        }
    }
}

/// Load the corpus and translator named in `config`, then wire the service.
fn build_service(config: &TriageConfig) -> TriageResult<TriageService> {
    let corpus = ReferenceCorpus::load(&config.data)?;
    let translator = triage_translate::from_settings(&config.translation)?;
    Ok(assemble(&corpus, translator).with_default_options(config.ranking.options()))
}

/// Fit the ranker and index the remedy tables over `corpus`.
fn assemble(corpus: &ReferenceCorpus, translator: Box<dyn Translator>) -> TriageService {
    let ranker = TfidfRanker::fit(corpus.symptom_entries());
    let remedies =
        RemedyResolver::new(corpus.medications().to_vec(), corpus.natural_remedies().to_vec());

    TriageService::new(translator, Box::new(ranker), Box::new(remedies), corpus.fingerprint())
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> TriageResult<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| TriageError::InvalidInput {
        reason: format!("cannot render JSON output: {}", e),
    })?;
    println!("{text}");
    Ok(())
}

fn print_report(report: &AssessmentReport) {
    println!("Assessment");
    if report.normalized_text != report.query_text {
        println!("  (translated from {}: \"{}\")", report.language, report.normalized_text);
    }
    if report.predictions.is_empty() {
        println!("  no reference data to rank against");
    }
    for p in &report.predictions {
        println!(
            "  {:<28} {:>6.1}%  {}",
            p.prediction.disease, p.prediction.confidence, p.advice
        );
    }
}

fn print_medication(disease: &str, info: &MedicationInfo) {
    println!("Medical remedies for {disease}");
    println!("  Drug classes:  {}", info.drug_classes);
    println!("  Example drugs: {}", info.example_drugs);
    println!("  Notes:         {}", info.key_notes);
}

fn print_advice(advice: &RemedyAdvice) {
    match advice {
        RemedyAdvice::Natural { disease, remedies } => {
            println!("Natural remedies for {disease}");
            for item in remedies {
                println!("  - {item}");
            }
        }
        RemedyAdvice::Medical { disease, medication } => print_medication(disease, medication),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
