use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use course_core::model::{FilterMode, ThemePreference};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, CatalogService, CatalogSource, CatalogStartup, Clock, ThemeService};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidCatalog { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidCatalog { raw } => write!(f, "invalid --catalog value: {raw}"),
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
    services: AppServices,
    initial_theme: ThemePreference,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> CatalogStartup {
        self.services.catalog()
    }

    fn theme(&self) -> Arc<ThemeService> {
        self.services.theme()
    }

    fn initial_theme(&self) -> ThemePreference {
        self.initial_theme
    }
}

struct Args {
    db_url: String,
    catalog: CatalogSource,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui       [--db <sqlite_url>] [--catalog <path|url>]");
    eprintln!("  cargo run -p app -- progress [--db <sqlite_url>] [--catalog <path|url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite:catalog.sqlite3");
    eprintln!("  --catalog {}", default_catalog_source());
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CATALOG_DB_URL, CATALOG_SOURCE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Progress,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "progress" => Some(Self::Progress),
            _ => None,
        }
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("CATALOG_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| normalize_sqlite_url("catalog.sqlite3".into()), normalize_sqlite_url);
        let mut catalog = CatalogSource::from_env().unwrap_or_else(default_catalog_source);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCatalog { raw: value });
                    }
                    catalog = CatalogSource::parse(&value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { db_url, catalog })
    }
}

/// The sample catalog shipped with the binary crate.
fn default_catalog_source() -> CatalogSource {
    CatalogSource::File(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/data.json"))
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    info!(db = %parsed.db_url, catalog = %parsed.catalog, ?cmd, "starting");
    let services = AppServices::new_sqlite(&parsed.db_url, &parsed.catalog, Clock::system()).await?;

    match cmd {
        Command::Ui => {
            let initial_theme = services.theme().load().await;
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                services,
                initial_theme,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Course Catalog")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Progress => match services.catalog() {
            CatalogStartup::Ready(catalog) => {
                print_progress(&catalog).await;
                Ok(())
            }
            CatalogStartup::Unavailable { reason } => Err(reason.into()),
        },
    }
}

async fn print_progress(catalog: &CatalogService) {
    let global = catalog.global_progress().await;
    println!("Progress: {global} chapters ({}%)", global.percent());
    for view in catalog.search("", FilterMode::All).await {
        let course = &view.course;
        let marker = if view.is_favorite { "❤" } else { " " };
        println!(
            "{marker} [{id}] {title:<32} {done}/{total} {percent:>3}%",
            id = course.id(),
            title = course.title(),
            done = view.progress.completed_count(),
            total = course.chapter_count(),
            percent = view.progress.percent(),
        );
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = raw.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn normalizes_relative_and_prefixed_paths() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:".into()), "sqlite::memory:");
        assert_eq!(normalize_sqlite_url("sqlite:///tmp/x.db".into()), "sqlite:///tmp/x.db");
        assert_eq!(normalize_sqlite_url("sqlite:/tmp/x.db".into()), "sqlite:///tmp/x.db");
        assert!(normalize_sqlite_url("x.db".into()).ends_with("/x.db"));
    }

    #[test]
    fn parses_db_and_catalog_flags() {
        let parsed = args(&["--db", "sqlite:/tmp/c.db", "--catalog", "https://example.com/d.json"])
            .unwrap();
        assert_eq!(parsed.db_url, "sqlite:///tmp/c.db");
        assert!(matches!(parsed.catalog, CatalogSource::Url(_)));
    }

    #[test]
    fn rejects_missing_values_and_unknown_flags() {
        assert!(matches!(
            args(&["--catalog"]),
            Err(ArgsError::MissingValue { flag: "--catalog" })
        ));
        assert!(matches!(args(&["--verbose"]), Err(ArgsError::UnknownArg(_))));
        assert!(matches!(args(&["--db", " "]), Err(ArgsError::InvalidDbUrl { .. })));
    }

    #[test]
    fn memory_database_needs_no_file() {
        assert!(prepare_sqlite_file("sqlite::memory:").is_ok());
        assert!(prepare_sqlite_file("postgres://nope").is_err());
    }
}
