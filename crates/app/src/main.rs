mod logging;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, SiteConfig};
use storage::Storage;
use ui::{App, UiApp, build_app_context};

use crate::logging::{Verbosity, init_logging};

const DEFAULT_STORE_PATH: &str = "course-progress.json";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPath { flag: &'static str, raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPath { flag, raw } => write!(f, "invalid {flag} value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidPath { flag, raw: value });
    }
    Ok(PathBuf::from(value))
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn site_title(&self) -> String {
        self.services.config().site_title.clone()
    }

    fn services(&self) -> AppServices {
        self.services.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--store <path>] [--config <path>] [-v|-q]");
    eprintln!("  cargo run -p app -- status [--store <path>] [--config <path>]");
    eprintln!("  cargo run -p app -- reset  [--store <path>] [--config <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --store {DEFAULT_STORE_PATH}");
    eprintln!("  --config course.toml (optional)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_STORE, COURSE_CONFIG, COURSE_* config overrides, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Status,
    Reset,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "status" => Some(Self::Status),
            "reset" => Some(Self::Reset),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    store_path: PathBuf,
    config_path: Option<PathBuf>,
    verbosity: Verbosity,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut store_path = std::env::var("COURSE_STORE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from);
        let mut config_path = std::env::var("COURSE_CONFIG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut verbosity = Verbosity::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--store" => store_path = require_path(args, "--store")?,
                "--config" => config_path = Some(require_path(args, "--config")?),
                "-v" | "--verbose" => verbosity = Verbosity::Verbose,
                "-vv" | "--trace" => verbosity = Verbosity::Trace,
                "-q" | "--quiet" => verbosity = Verbosity::Quiet,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            store_path,
            config_path,
            verbosity,
        })
    }
}

fn build_services(args: &Args) -> Result<AppServices, Box<dyn std::error::Error>> {
    let config = SiteConfig::load_from(args.config_path.as_ref())?;
    let storage = Storage::json_file(&args.store_path)?;
    tracing::info!(
        store = %args.store_path.display(),
        chapters = config.total_chapters,
        "services ready"
    );
    Ok(AppServices::new(&storage, config)?)
}

fn print_status(services: &AppServices) {
    let tracker = services.progress();
    println!("{}", tracker.label());
    for entry in services.outline().entries() {
        let mark = if tracker.is_completed(&entry.file) { "x" } else { " " };
        println!("  [{mark}] {} {}", entry.file, entry.title);
    }
    if tracker.is_degraded() {
        println!("(progress store unavailable; showing in-memory state)");
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Launch the UI when no subcommand is given.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };
    if !argv.is_empty() && !argv[0].starts_with('-') {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let args = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_logging(args.verbosity);
    let services = build_services(&args)?;

    match cmd {
        Command::Ui => {
            let title = services.config().site_title.clone();
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(title)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Status => {
            print_status(&services);
            Ok(())
        }
        Command::Reset => {
            let mutation = services.progress().reset();
            println!("{}", mutation.percentage.label());
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
