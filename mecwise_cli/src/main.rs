use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use mecwise_core::*;
use serde::{Deserialize, Serialize};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mecwise")]
#[command(about = "WHO MEC contraceptive eligibility and counseling engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text, json, csv); overrides the config file
    #[arg(long, global = true)]
    format: Option<OutputFormat>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score all 15 methods against an answers JSON object
    Evaluate {
        /// Answers file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Evaluation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Check fertility awareness-based method eligibility
    Fab {
        /// Answers file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Filter eligible methods by preference: {"eligibleMethods": [...], "filters": {...}}
    Personalize {
        /// Request file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Evaluate, then personalize the eligible methods: {"answers": {...}, "filters": {...}}
    Recommend {
        /// Request file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Evaluation date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List the MEC rule table
    Rules,

    /// List the method keys
    Methods,
}

#[derive(Deserialize)]
struct RecommendRequest {
    #[serde(default)]
    answers: AnswerState,
    #[serde(default)]
    filters: PersonalizationFilters,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Recommendation {
    mec: EvaluationResult,
    personalization: PersonalizationResult,
}

/// Resolved output settings
struct Output {
    format: OutputFormat,
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    mecwise_core::logging::init_with_level(&config.logging.level);

    let output = Output {
        format: cli.format.unwrap_or(config.output.format),
        pretty: config.output.pretty,
    };

    match cli.command {
        Commands::Evaluate { input, date } => cmd_evaluate(input.as_deref(), date, &output),
        Commands::Fab { input } => cmd_fab(input.as_deref(), &output),
        Commands::Personalize { input } => cmd_personalize(input.as_deref(), &output),
        Commands::Recommend { input, date } => cmd_recommend(input.as_deref(), date, &output),
        Commands::Rules => cmd_rules(&output),
        Commands::Methods => cmd_methods(&output),
    }
}

fn cmd_evaluate(input: Option<&Path>, date: Option<NaiveDate>, output: &Output) -> Result<()> {
    let answers: AnswerState = serde_json::from_str(&read_input(input)?)?;
    let result = run_evaluation(&answers, date);

    match output.format {
        OutputFormat::Json => print_json(&result, output.pretty),
        OutputFormat::Csv => write_mec_csv(&result, io::stdout().lock()),
        OutputFormat::Text => {
            display_evaluation(&result);
            Ok(())
        }
    }
}

fn cmd_fab(input: Option<&Path>, output: &Output) -> Result<()> {
    let answers: AnswerState = serde_json::from_str(&read_input(input)?)?;
    let result = evaluate_fab(&answers);

    match output.format {
        OutputFormat::Json => print_json(&result, output.pretty),
        OutputFormat::Csv => Err(csv_unsupported("fab")),
        OutputFormat::Text => {
            display_fab(&result);
            Ok(())
        }
    }
}

fn cmd_personalize(input: Option<&Path>, output: &Output) -> Result<()> {
    let request: serde_json::Value = serde_json::from_str(&read_input(input)?)?;
    let result = personalize_json(&request)?;

    match output.format {
        OutputFormat::Json => print_json(&result, output.pretty),
        OutputFormat::Csv => Err(csv_unsupported("personalize")),
        OutputFormat::Text => {
            display_personalization(&result);
            Ok(())
        }
    }
}

fn cmd_recommend(input: Option<&Path>, date: Option<NaiveDate>, output: &Output) -> Result<()> {
    let request: RecommendRequest = serde_json::from_str(&read_input(input)?)?;
    let mec = run_evaluation(&request.answers, date);
    let eligible = eligible_methods(&mec);
    tracing::debug!("{} methods medically eligible", eligible.len());
    let personalization = personalize(&eligible, &request.filters)?;

    match output.format {
        OutputFormat::Json => print_json(
            &Recommendation {
                mec,
                personalization,
            },
            output.pretty,
        ),
        OutputFormat::Csv => write_mec_csv(&mec, io::stdout().lock()),
        OutputFormat::Text => {
            display_evaluation(&mec);
            display_personalization(&personalization);
            Ok(())
        }
    }
}

fn cmd_rules(output: &Output) -> Result<()> {
    let table = get_default_rules();
    let problems = table.validate();
    if !problems.is_empty() {
        eprintln!("Rule table validation errors:");
        for problem in &problems {
            eprintln!("  - {}", problem);
        }
        return Err(Error::Other("Invalid rule table".into()));
    }

    match output.format {
        OutputFormat::Csv => write_rules_csv(table, io::stdout().lock()),
        OutputFormat::Json => {
            let rules: Vec<_> = table
                .rules()
                .iter()
                .map(|rule| {
                    serde_json::json!({
                        "id": rule.id,
                        "section": rule.section,
                        "priority": rule.priority,
                        "effects": rule.effects,
                    })
                })
                .collect();
            print_json(&rules, output.pretty)
        }
        OutputFormat::Text => {
            println!("{} rules\n", table.len());
            for rule in table.rules() {
                let worst = rule.effects.iter().map(|e| e.score).max();
                println!(
                    "  {:<45} {:<30} max MEC {}",
                    rule.id,
                    rule.section.title(),
                    worst.map(|s| s.to_string()).unwrap_or_else(|| "-".into())
                );
            }
            Ok(())
        }
    }
}

fn cmd_methods(output: &Output) -> Result<()> {
    match output.format {
        OutputFormat::Json => {
            let methods: Vec<_> = Method::ALL
                .iter()
                .map(|m| serde_json::json!({ "key": m.key(), "name": m.name() }))
                .collect();
            print_json(&methods, output.pretty)
        }
        OutputFormat::Csv => Err(csv_unsupported("methods")),
        OutputFormat::Text => {
            for method in Method::ALL {
                println!("  {}  {}", method.key(), method.name());
            }
            Ok(())
        }
    }
}

fn run_evaluation(answers: &AnswerState, date: Option<NaiveDate>) -> EvaluationResult {
    match date {
        Some(date) => evaluate_on(answers, date),
        None => evaluate(answers),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn csv_unsupported(command: &str) -> Error {
    Error::Config(format!("CSV output is not supported for '{}'", command))
}

fn method_list(methods: &[Method]) -> String {
    if methods.is_empty() {
        return "(none)".into();
    }
    methods
        .iter()
        .map(|m| m.key())
        .collect::<Vec<_>>()
        .join(", ")
}

fn banner(title: &str) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", title);
    println!("╰─────────────────────────────────────────╯");
    println!();
}

fn display_evaluation(result: &EvaluationResult) {
    banner("MEC EVALUATION");
    println!("  Suggested (MEC 1):       {}", method_list(&result.suggested));
    println!("  Greater benefit (MEC 2): {}", method_list(&result.greater_benefit));
    println!("  Avoid (MEC 3-4):         {}", method_list(&result.avoid));
    println!();

    for entry in &result.mec_results {
        println!(
            "  [{}] {}  {}",
            entry.score,
            entry.method_key.key(),
            entry.method_key.name()
        );
        for reason in &entry.reasons {
            println!("        → {}", reason);
        }
    }
    println!();
}

fn display_fab(result: &FabEligibilityResult) {
    banner("FAB ELIGIBILITY");

    if result.not_applicable {
        if let Some(ref message) = result.not_applicable_message {
            println!("  {}", message);
        }
        println!();
        return;
    }

    for (track, method) in [("Symptoms-based", &result.sym), ("Calendar-based", &result.cal)] {
        if let Some(method) = method {
            println!("  {}: {:?} ({})", track, method.category, method.label);
            println!("    {}", method.explanation);
            if let Some(ref action) = method.action_required {
                println!("    → {}", action);
            }
        }
    }

    if !result.advisories.is_empty() {
        println!();
        for advisory in &result.advisories {
            println!("  ℹ {}", advisory.message);
        }
    }
    println!();
}

fn display_personalization(result: &PersonalizationResult) {
    banner("PERSONALIZED OPTIONS");
    println!("  Recommended: {}", method_list(&result.recommended));

    if result.should_show_permanent_methods == Some(true) {
        println!("  (permanent methods preferred)");
    }

    for notice in &result.notices {
        println!("  ℹ {}", notice);
    }

    if !result.eliminated.is_empty() {
        println!();
        println!("  Eliminated:");
        for elimination in &result.eliminated {
            println!("    {}  {}", elimination.method.key(), elimination.reason);
        }
    }
    println!();
}
