mod browser;
mod logic;
mod scenario;
mod util;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use folio_core::AlbumCatalog;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, new_session};
use logic::{ScenarioResult, load_catalog};
use scenario::{ScenarioCtx, all_scenarios, get_scenario, list_scenarios};
use util::{artifacts_dir, capture_artifacts, split_csv};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TestMode {
    /// Offline catalog and routing checks (fast, no browser)
    Logic,
    /// Browser automation against a served build
    Browser,
    /// Run both logic and browser tests
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "folio-tester", version = "0.1.0")]
#[command(about = "Automated QA for the Folio site - catalog checks and browser automation")]
struct Args {
    /// Test mode: logic (fast), browser (visual), or both
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Album catalog to check (the file the site serves as content/albums.json)
    #[arg(long, default_value = "folio-web/static/content/albums.json")]
    catalog: PathBuf,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL the site is served from
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Artifacts directory for screenshots and DOM dumps
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

impl Args {
    const fn runs_logic(&self) -> bool {
        matches!(self.mode, TestMode::Logic | TestMode::Both)
    }

    const fn runs_browser(&self) -> bool {
        matches!(self.mode, TestMode::Browser | TestMode::Both)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let catalog = resolve_catalog(&args)?;

    let results = run_logic_scenarios(&args, &scenarios, catalog.as_deref());
    let browser_failures = run_browser_scenarios(&args, &scenarios, catalog).await;

    write_reports(&args, &results, start_time)?;

    if browser_failures > 0 || results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
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
    println!("{}", "🎛️  Folio Automated Tester".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for scenario in all_scenarios() {
            let key = scenario.key().to_string();
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

/// The catalog is required for logic checks and optional for browser runs,
/// where it only sharpens the expected filter counts.
fn resolve_catalog(args: &Args) -> Result<Option<Arc<AlbumCatalog>>> {
    match load_catalog(&args.catalog) {
        Ok(catalog) => {
            log::info!(
                "loaded {} albums from {}",
                catalog.len(),
                args.catalog.display()
            );
            Ok(Some(Arc::new(catalog)))
        }
        Err(err) if !args.runs_logic() => {
            log::warn!("browser run without catalog expectations: {err:#}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        implicit_wait_secs: 3,
        remote_hub: args.hub.clone(),
    }
}

fn run_logic_scenarios(
    args: &Args,
    scenarios: &[String],
    catalog: Option<&AlbumCatalog>,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    let Some(catalog) = catalog.filter(|_| args.runs_logic()) else {
        return results;
    };

    println!("{}", "🧠 Running Logic Checks".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };
        let result = scenario.run_logic(catalog);
        if args.verbose {
            println!(
                "  🧪 {} ({} assertions, {:?})",
                result.scenario_name.bright_white(),
                result.checks_run,
                result.duration
            );
        }
        results.push(result);
    }

    results
}

/// Returns the number of failed browser scenario runs.
async fn run_browser_scenarios(
    args: &Args,
    scenarios: &[String],
    catalog: Option<Arc<AlbumCatalog>>,
) -> usize {
    if !args.runs_browser() {
        return 0;
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let ctx = ScenarioCtx {
        base_url: args.base_url.clone(),
        verbose: args.verbose,
        catalog,
    };
    let mut failures = 0;

    for browser_name in split_csv(&args.browsers) {
        let Ok(kind) = BrowserKind::from_str(&browser_name, true) else {
            eprintln!("⚠️  Unknown browser: {}", browser_name.yellow());
            continue;
        };

        let driver = match new_session(kind, &build_browser_config(args)).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {kind:?}: {e}");
                continue;
            }
        };

        failures += run_browser_scenarios_for_driver(args, scenarios, &ctx, kind, &driver).await;
        let _ = driver.quit().await;
    }

    failures
}

async fn run_browser_scenarios_for_driver(
    args: &Args,
    scenarios: &[String],
    ctx: &ScenarioCtx,
    kind: BrowserKind,
    driver: &thirtyfour::WebDriver,
) -> usize {
    let label = kind.label();
    let mut failures = 0;

    for scenario_name in scenarios {
        let Some(scenario) = get_scenario(scenario_name) else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
            continue;
        };

        let scenario_start = Instant::now();
        match scenario.run_browser(driver, ctx).await {
            Ok(()) => {
                println!(
                    "✅ [{}] {} - {:?}",
                    label.green(),
                    scenario_name,
                    scenario_start.elapsed()
                );
            }
            Err(e) => {
                failures += 1;
                eprintln!(
                    "❌ [{}] {} - {:?}: {:#}",
                    label.red(),
                    scenario_name,
                    scenario_start.elapsed(),
                    e
                );
                let dir = artifacts_dir(&args.artifacts_dir, &label, scenario_name);
                if let Err(capture_err) = capture_artifacts(driver, &dir, &e).await {
                    log::warn!("could not save artifacts to {dir}: {capture_err:#}");
                }
            }
        }
    }

    failures
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Folio Catalog Check Results\n\n_No checks executed._"
                )?;
            } else {
                logic::reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No logic checks executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(
                &mut output_target,
                "🏁 Total time: {:?}",
                start_time.elapsed()
            )?;
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

    const SAMPLE: &str = r#"[
        {"title":"X","artist":"A","year":2024,"type":["ep"],"role":["producer"],"img":"x.jpg","url":"https://x"},
        {"title":"Y","artist":"B","year":2020,"type":["album","featured"],"role":["mixer"],"img":"y.jpg","url":"https://y"}
    ]"#;

    fn base_args() -> Args {
        Args {
            mode: TestMode::Logic,
            scenarios: "all".to_string(),
            list_scenarios: false,
            catalog: PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/../folio-web/static/content/albums.json"
            )),
            report: "json".to_string(),
            verbose: false,
            output: None,
            browsers: "chrome".to_string(),
            base_url: "http://localhost:8080/".to_string(),
            artifacts_dir: "target/test-artifacts".to_string(),
            hub: None,
            headless: HeadlessMode::Headless,
        }
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "folio-tester-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    fn sample_catalog() -> AlbumCatalog {
        AlbumCatalog::from_json(SAMPLE).expect("sample parses")
    }

    #[test]
    fn expands_all_scenarios_keyword() {
        let expanded = expand_scenarios("smoke,all");
        assert_eq!(expanded, vec!["smoke", "navigation", "filters"]);
    }

    #[test]
    fn expand_scenarios_without_all_preserves_order() {
        let expanded = expand_scenarios("filters,smoke");
        assert_eq!(expanded, vec!["filters".to_string(), "smoke".to_string()]);
    }

    #[test]
    fn logic_checks_pass_on_sample_catalog() {
        let args = base_args();
        let catalog = sample_catalog();
        let scenarios = expand_scenarios("all");
        let results = run_logic_scenarios(&args, &scenarios, Some(&catalog));
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.passed), "{results:?}");
    }

    #[test]
    fn logic_checks_flag_broken_records() {
        let args = base_args();
        let catalog = AlbumCatalog::from_json(
            r#"[{"title":"Z","artist":"C","year":2024,"role":[],"img":"z.jpg","url":""}]"#,
        )
        .expect("parses");
        let results = run_logic_scenarios(&args, &["smoke".to_string()], Some(&catalog));
        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert_eq!(results[0].failures.len(), 2);
    }

    #[test]
    fn run_logic_scenarios_skips_when_not_enabled() {
        let args = Args {
            mode: TestMode::Browser,
            ..base_args()
        };
        let catalog = sample_catalog();
        let results = run_logic_scenarios(&args, &["smoke".to_string()], Some(&catalog));
        assert!(results.is_empty());
    }

    #[test]
    fn shipped_catalog_resolves() {
        let catalog = resolve_catalog(&base_args())
            .expect("catalog loads")
            .expect("catalog present");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn missing_catalog_is_fatal_only_for_logic_runs() {
        let logic = Args {
            catalog: PathBuf::from("/nonexistent/albums.json"),
            ..base_args()
        };
        assert!(resolve_catalog(&logic).is_err());

        let browser = Args {
            mode: TestMode::Browser,
            ..logic
        };
        assert!(resolve_catalog(&browser).expect("optional").is_none());
    }

    #[test]
    fn write_reports_emits_json_output() {
        let temp = temp_path("report.json");
        let args = Args {
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("[]"));
    }

    #[test]
    fn write_reports_markdown_empty_results() {
        let temp = temp_path("report.md");
        let args = Args {
            report: "markdown".to_string(),
            output: Some(temp.clone()),
            ..base_args()
        };
        write_reports(&args, &[], Instant::now()).unwrap();
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("No checks executed"));
    }

    #[test]
    fn maybe_list_scenarios_writes_output() {
        let temp = temp_path("scenarios.txt");
        let args = Args {
            list_scenarios: true,
            output: Some(temp.clone()),
            ..base_args()
        };
        assert!(maybe_list_scenarios(&args).unwrap());
        let content = std::fs::read_to_string(temp).unwrap();
        assert!(content.contains("Available scenarios"));
        assert!(content.contains("navigation"));
    }

    #[test]
    fn maybe_list_scenarios_returns_false_when_disabled() {
        assert!(!maybe_list_scenarios(&base_args()).unwrap());
    }

    #[test]
    fn build_browser_config_respects_headless_and_hub() {
        let args = Args {
            headless: HeadlessMode::Windowed,
            hub: Some("http://remote.example".to_string()),
            ..base_args()
        };
        let cfg = build_browser_config(&args);
        assert!(!cfg.headless);
        assert_eq!(cfg.remote_hub.as_deref(), Some("http://remote.example"));
    }

    #[tokio::test]
    async fn run_browser_scenarios_skips_when_not_enabled() {
        let failures = run_browser_scenarios(&base_args(), &["smoke".to_string()], None).await;
        assert_eq!(failures, 0);
    }

    #[tokio::test]
    async fn run_browser_scenarios_ignores_unknown_browser() {
        let args = Args {
            mode: TestMode::Browser,
            browsers: "unknown".to_string(),
            ..base_args()
        };
        let failures = run_browser_scenarios(&args, &["smoke".to_string()], None).await;
        assert_eq!(failures, 0);
    }
}
