use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AppServices, ConfigError, ContactService, SceneProvider, ShowcaseConfig};
use showcase_core::model::{AssetPath, PublicKey, SceneAssets, ServiceId, TemplateId};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, WebviewScene, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::Config(source) => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(source: ConfigError) -> Self {
        ArgsError::Config(source)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --service-id <id>          EmailJS service id (default service_p9ddpnh)");
    eprintln!("  --template-id <id>         EmailJS template id (default template_29u5xyj)");
    eprintln!("  --public-key <key>         EmailJS public key (delivery disabled without one)");
    eprintln!("  --idle-model <path>        model shown while the bar fills");
    eprintln!("  --celebration-model <path> model shown once the form unlocks");
    eprintln!("  --clicks <n>               scene hits needed to unlock the form (default 3)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  SHOWCASE_EMAILJS_BASE_URL, SHOWCASE_EMAILJS_SERVICE_ID,");
    eprintln!("  SHOWCASE_EMAILJS_TEMPLATE_ID, SHOWCASE_EMAILJS_PUBLIC_KEY,");
    eprintln!("  SHOWCASE_IDLE_MODEL, SHOWCASE_CELEBRATION_MODEL, SHOWCASE_CLICKS_TO_UNLOCK,");
    eprintln!("  RUST_LOG (default info)");
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(ShowcaseConfig),
    Help,
}

/// Applies command-line overrides on top of `config`.
fn parse_args(
    mut config: ShowcaseConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<Command, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--service-id" => {
                let value = require_value(args, "--service-id")?;
                config.email.service_id = value
                    .parse::<ServiceId>()
                    .map_err(ConfigError::from)?;
            }
            "--template-id" => {
                let value = require_value(args, "--template-id")?;
                config.email.template_id = value
                    .parse::<TemplateId>()
                    .map_err(ConfigError::from)?;
            }
            "--public-key" => {
                let value = require_value(args, "--public-key")?;
                config.email.public_key = Some(
                    value
                        .parse::<PublicKey>()
                        .map_err(ConfigError::from)?,
                );
            }
            "--idle-model" => {
                let value = require_value(args, "--idle-model")?;
                config.assets.idle = AssetPath::new(value.trim());
            }
            "--celebration-model" => {
                let value = require_value(args, "--celebration-model")?;
                config.assets.celebration = AssetPath::new(value.trim());
            }
            "--clicks" => {
                let value = require_value(args, "--clicks")?;
                config.set_clicks_to_unlock(&value, "--clicks")?;
            }
            "--help" | "-h" => return Ok(Command::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Command::Run(config))
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn clicks_to_unlock(&self) -> u32 {
        self.services.clicks_to_unlock()
    }

    fn scene_assets(&self) -> SceneAssets {
        self.services.assets().clone()
    }

    fn contact_service(&self) -> Arc<ContactService> {
        self.services.contact()
    }

    fn scene_provider(&self) -> Arc<dyn SceneProvider> {
        Arc::new(WebviewScene::new())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let env_config = ShowcaseConfig::from_env().map_err(ArgsError::from)?;
    let mut args = std::env::args().skip(1);
    let config = match parse_args(env_config, &mut args) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing();
    tracing::info!(
        service_id = %config.email.service_id,
        template_id = %config.email.template_id,
        idle = %config.assets.idle,
        celebration = %config.assets.celebration,
        clicks = config.clicks_to_unlock,
        "starting contact showcase"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        services: AppServices::from_config(&config),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Contact")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
