use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use flashcards_core::model::{CardKind, Deck, Difficulty, FilterCriteria};
use services::DeckStore;
use storage::SpreadsheetSource;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DECK_PATH: &str = "flashcards.xlsx";
const DECK_ENV: &str = "FLASHCARDS_DECK";
const DEFAULT_LOG_FILTER: &str = "flashcards=info,services=info,storage=info,ui=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDeckPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDeckPath { raw } => write!(f, "invalid --deck value: {raw:?}"),
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

struct DesktopApp {
    deck_store: DeckStore,
    deck_label: String,
}

impl UiApp for DesktopApp {
    fn deck_store(&self) -> DeckStore {
        self.deck_store.clone()
    }

    fn deck_label(&self) -> String {
        self.deck_label.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    deck_path: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  flashcards [ui]  [--deck <path>]   open the study window");
    eprintln!("  flashcards check [--deck <path>]   validate the deck and print a summary");
    eprintln!();
    eprintln!("The deck is an .xlsx workbook or a .csv/.tsv export with the columns");
    eprintln!("  Chapter, Type, Difficulty, Question, Answer");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --deck {DEFAULT_DECK_PATH}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {DECK_ENV}, RUST_LOG");
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env_deck: Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut deck_path = env_deck
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DECK_PATH), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--deck" => {
                    let value = require_value(args, "--deck")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDeckPath { raw: value });
                    }
                    deck_path = PathBuf::from(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { deck_path })
    }
}

fn split_command(mut argv: Vec<String>) -> Result<(Command, Vec<String>), ArgsError> {
    // Default behavior: launching UI when no subcommand is provided.
    let explicit = match argv.first() {
        Some(first) if !first.starts_with('-') => Some(
            Command::from_arg(first).ok_or_else(|| ArgsError::UnknownArg(first.clone()))?,
        ),
        _ => None,
    };
    if explicit.is_some() {
        argv.remove(0);
    }
    Ok((explicit.unwrap_or(Command::Ui), argv))
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// One-screen overview printed by `check`.
fn deck_summary(deck: &Deck) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{} cards", deck.len()));

    let chapters: Vec<String> = deck.chapters().iter().map(ToString::to_string).collect();
    lines.push(format!("chapters: {}", chapters.join(", ")));

    let by_kind: Vec<String> = CardKind::ALL
        .iter()
        .map(|kind| {
            let count = deck.filter(&FilterCriteria::any().with_kind(*kind)).len();
            format!("{kind}: {count}")
        })
        .collect();
    lines.push(format!("types: {}", by_kind.join(", ")));

    let by_difficulty: Vec<String> = Difficulty::ALL
        .iter()
        .map(|difficulty| {
            let count = deck
                .filter(&FilterCriteria::any().with_difficulty(*difficulty))
                .len();
            format!("{difficulty}: {count}")
        })
        .collect();
    lines.push(format!("difficulties: {}", by_difficulty.join(", ")));

    lines.join("\n")
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if matches!(argv.first().map(String::as_str), Some("--help" | "-h")) {
        print_usage();
        return Ok(());
    }

    let (cmd, rest) = split_command(argv).inspect_err(|_| print_usage())?;
    let parsed = Args::parse(&mut rest.into_iter(), std::env::var(DECK_ENV).ok())
        .inspect_err(|_| print_usage())?;

    // Load the deck once at startup. A load failure is fatal; there is no retry.
    let source = SpreadsheetSource::new(&parsed.deck_path);
    let deck_store = DeckStore::load(&source)?;

    match cmd {
        Command::Check => {
            println!("{}", parsed.deck_path.display());
            println!("{}", deck_summary(deck_store.deck()));
            Ok(())
        }
        Command::Ui => {
            let deck_label = parsed.deck_path.file_name().map_or_else(
                || parsed.deck_path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            );
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                deck_store,
                deck_label,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Flashcards")
                    .with_always_on_top(false),
            );

            tracing::info!("launching study window");
            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
