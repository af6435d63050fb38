use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::UploadedFile;
use services::config::parse_timeout_secs;
use services::{
    AppServices, ConfigError, ConfigOverrides, ProcessingConfig, UploadService, load_file,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidTimeout { raw: String },
    InvalidApiUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidTimeout { raw } => write!(f, "invalid --timeout-secs value: {raw}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
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
    upload_service: Arc<UploadService>,
    service_url: String,
    initial_file: Option<UploadedFile>,
}

impl UiApp for DesktopApp {
    fn upload_service(&self) -> Arc<UploadService> {
        Arc::clone(&self.upload_service)
    }

    fn service_url(&self) -> String {
        self.service_url.clone()
    }

    fn initial_file(&self) -> Option<UploadedFile> {
        self.initial_file.clone()
    }
}

#[derive(Debug, Default)]
struct Args {
    overrides: ConfigOverrides,
    pdf: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--api-url <url>] [--timeout-secs <n>] [--pdf <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url http://localhost:8000");
    eprintln!("  --timeout-secs 60");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_API_BASE_URL, QUIZ_API_TIMEOUT_SECS, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    parsed.overrides.base_url = Some(value);
                }
                "--timeout-secs" => {
                    let value = require_value(args, "--timeout-secs")?;
                    let timeout = parse_timeout_secs(&value)
                        .map_err(|_| ArgsError::InvalidTimeout { raw: value.clone() })?;
                    parsed.overrides.timeout = Some(timeout);
                }
                "--pdf" => {
                    let value = require_value(args, "--pdf")?;
                    parsed.pdf = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    /// Flags win over `env`, which wins over defaults, one field at a time.
    fn processing_config(
        &self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ProcessingConfig, ConfigError> {
        ProcessingConfig::resolve(&self.overrides, env)
    }
}

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let config = args.processing_config(|key| std::env::var(key).ok())?;
    info!(
        url = %config.process_url(),
        timeout_secs = config.timeout().as_secs(),
        "processing endpoint configured"
    );

    let initial_file = match &args.pdf {
        Some(path) => match load_file(path).await {
            Ok(file) => Some(file),
            Err(err) => {
                // Not fatal: the user can still pick a file in the window.
                warn!(%err, "could not preload --pdf file");
                None
            }
        },
        None => None,
    };

    let services = AppServices::new_http(config)?;
    let app = DesktopApp {
        upload_service: services.upload_service(),
        service_url: services.config().base_url().to_string(),
        initial_file,
    };

    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // tao can open always-on-top on macOS dev builds.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("PDF Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
