mod battle;
mod reports;
mod runner;
mod scenario;
mod util;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use battle::{BattleArgs, print_battle, run_battle};
use runner::{LogicTester, ScenarioResult};
use scenario::{expand_scenarios, find_scenario, list_scenarios};
use util::{parse_seeds, split_csv};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "ricebowl-tester", version = "0.1.0")]
#[command(about = "Rice Bowl Battle from the terminal, plus seeded logic sweeps")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare two birth dates and print the result with a comment
    Battle(BattleArgs),
    /// Run logic scenarios across seeds and iterations
    Scenarios(ScenarioArgs),
}

#[derive(Debug, Clone, ClapArgs)]
struct ScenarioArgs {
    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Battle(args) => {
            let report = run_battle(&args)?;
            let mut out = stdout().lock();
            print_battle(&mut out, &report)?;
            out.flush()?;
        }
        Command::Scenarios(args) => {
            if maybe_list_scenarios(&args)? {
                return Ok(());
            }
            announce_banner();
            let results = run_scenarios(&args)?;
            if results.iter().any(|r| !r.passed) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn maybe_list_scenarios(args: &ScenarioArgs) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:12} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🍚 Rice Bowl Battle Tester".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

fn run_scenarios(args: &ScenarioArgs) -> Result<Vec<ScenarioResult>> {
    let start_time = Instant::now();
    let keys = expand_scenarios(&split_csv(&args.scenarios));
    let seeds = parse_seeds(&args.seeds)?;
    let results = run_logic_scenarios(args, &keys, &seeds);
    write_reports(args, &results, start_time)?;
    Ok(results)
}

fn run_logic_scenarios(args: &ScenarioArgs, keys: &[String], seeds: &[u64]) -> Vec<ScenarioResult> {
    let tester = LogicTester::new(args.verbose);
    let mut results = Vec::new();
    for key in keys {
        if let Some(scenario) = find_scenario(key) {
            results.extend(tester.run_scenario(&scenario, seeds, args.iterations));
        } else {
            eprintln!("⚠️  Unknown scenario: {}", key.yellow());
        }
    }
    results
}

fn write_reports(args: &ScenarioArgs, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report {
        ReportFormat::Json => {
            if results.is_empty() {
                writeln!(&mut output_target, "[]")?;
            } else {
                reports::generate_json_report(&mut output_target, results)?;
            }
        }
        ReportFormat::Markdown => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Rice Bowl Battle Logic Test Results\n\n_No scenarios executed._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(&mut output_target, "No logic scenarios executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "ricebowl-main-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    fn base_args() -> ScenarioArgs {
        ScenarioArgs {
            scenarios: "smoke".to_string(),
            list_scenarios: false,
            seeds: "1337".to_string(),
            iterations: 1,
            report: ReportFormat::Json,
            verbose: false,
            output: None,
        }
    }

    #[test]
    fn cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "ricebowl-tester",
            "scenarios",
            "--scenarios",
            "all",
            "--report",
            "markdown",
        ])
        .unwrap();
        match cli.command {
            Command::Scenarios(args) => {
                assert_eq!(args.scenarios, "all");
                assert_eq!(args.report, ReportFormat::Markdown);
                assert_eq!(args.iterations, 10);
            }
            Command::Battle(_) => panic!("expected scenarios"),
        }

        let cli = Cli::try_parse_from([
            "ricebowl-tester",
            "battle",
            "--me",
            "2000-01-01",
            "--opponent",
            "1990-12-31",
            "--seed",
            "9",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Battle(ref b) if b.seed == Some(9)));
    }

    #[test]
    fn invalid_birth_date_is_a_parse_error() {
        assert!(
            Cli::try_parse_from(["ricebowl-tester", "battle", "--me", "2001-02-29"]).is_err()
        );
    }

    #[test]
    fn maybe_list_scenarios_writes_to_file() {
        let path = temp_file("list");
        let args = ScenarioArgs {
            list_scenarios: true,
            output: Some(path.clone()),
            ..base_args()
        };
        assert!(maybe_list_scenarios(&args).unwrap());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Available scenarios:"));
        assert!(content.contains("stepper"));
        let _ = std::fs::remove_file(path);

        assert!(!maybe_list_scenarios(&base_args()).unwrap());
    }

    #[test]
    fn unknown_scenarios_produce_empty_reports() {
        let path = temp_file("empty");
        let args = ScenarioArgs {
            scenarios: "nope".to_string(),
            output: Some(path.clone()),
            ..base_args()
        };
        let results = run_scenarios(&args).unwrap();
        assert!(results.is_empty());
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn markdown_report_for_known_scenario() {
        let path = temp_file("md");
        let args = ScenarioArgs {
            scenarios: "day-count,matchup".to_string(),
            seeds: "1,2".to_string(),
            report: ReportFormat::Markdown,
            output: Some(path.clone()),
            ..base_args()
        };
        let results = run_scenarios(&args).unwrap();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.passed));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("| Scenario | Seed |"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn bad_seed_list_fails() {
        let args = ScenarioArgs {
            seeds: "1,abc".to_string(),
            ..base_args()
        };
        let err = run_scenarios(&args).unwrap_err();
        assert!(format!("{err:#}").contains("abc"));
    }
}
