//! MoodTrack CLI
//!
//! Talks to the MoodTrack backend from a terminal, using the same endpoints
//! as the web forms:
//! - Create an account
//! - Log in / out
//! - Log a mood entry
//! - Show the detected timezone

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moodtrack::config::{generate_default_config, LoggingConfig};
use moodtrack::timezone;
use moodtrack::{
    AccountConfig, Config, Credentials, LoginOutcome, MoodApi, MoodEntry, ReqwestTransport,
    TimezoneReport,
};

#[derive(Parser)]
#[command(name = "moodtrack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the MoodTrack journal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Account email (overrides config)
    #[arg(long, global = true)]
    pub email: Option<String>,

    /// Account password (overrides config)
    #[arg(long, global = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account
    Signup,

    /// Check that the configured credentials are accepted
    Login,

    /// Log a mood entry
    Log {
        /// Mood rating, 0-10
        mood: f64,
        /// What's going on
        description: String,
        /// Timezone (default: detected from TZ, then UTC)
        #[arg(short, long)]
        timezone: Option<String>,
    },

    /// Log in, then log out and print where the server sent us
    Logout,

    /// Show the timezone that would be reported
    Timezone,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config loading logs before the configured subscriber exists
    let config = tracing::subscriber::with_default(bootstrap_subscriber(), || load_config(&cli))?;

    init_logging(&config.logging);

    let transport = ReqwestTransport::new(&config.client)?;
    let api = MoodApi::new(transport, config.client.clone(), config.endpoints.clone());

    match cli.command {
        Commands::Signup => {
            let credentials = credentials(&config)?;
            let reply = api.signup(&credentials).await?;
            println!("{}", reply.message);
        }

        Commands::Login => {
            login(&api, &config).await?;
            println!("Logged in as {}", credentials(&config)?.email);
        }

        Commands::Log {
            mood,
            description,
            timezone: zone,
        } => {
            if !(0.0..=10.0).contains(&mood) {
                bail!("Mood must be between 0 and 10, got {}", mood);
            }
            let tz = match zone {
                Some(zone) => timezone::resolve(Some(&zone)),
                None => timezone::detect_native(),
            };

            login(&api, &config).await?;

            let report = TimezoneReport {
                timezone: tz.clone(),
            };
            if !api.report_timezone(&report).await? {
                tracing::warn!("Backend did not accept timezone {}", tz);
            }

            let reply = api
                .submit_entry(&MoodEntry::new(mood, description, tz))
                .await?;
            println!("{}", reply.message);

            if reply.message != config.messages.entry_saved {
                std::process::exit(1);
            }
        }

        Commands::Logout => {
            login(&api, &config).await?;
            match api.logout().await? {
                Some(target) => println!("Logged out, redirected to {}", target),
                None => println!("Logged out"),
            }
        }

        Commands::Timezone => {
            println!("{}", timezone::detect_native());
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, &content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.base_url {
        config.client.base_url = url.clone();
    }

    match (&cli.email, &cli.password) {
        (Some(email), Some(password)) => {
            config.account = Some(AccountConfig {
                email: email.clone(),
                password: password.clone(),
            });
        }
        (Some(_), None) => bail!("--email needs --password"),
        (None, Some(_)) => bail!("--password needs --email"),
        (None, None) => {}
    }

    Ok(config)
}

fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodtrack=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("moodtrack={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn credentials(config: &Config) -> anyhow::Result<Credentials> {
    let account = config.account.as_ref().context(
        "No credentials: pass --email and --password, set MOODTRACK_EMAIL/MOODTRACK_PASSWORD, or add an [account] section",
    )?;
    Ok(Credentials::new(&account.email, &account.password).with_timezone(timezone::detect_native()))
}

async fn login(api: &MoodApi<ReqwestTransport>, config: &Config) -> anyhow::Result<()> {
    match api.login(&credentials(config)?).await? {
        LoginOutcome::Accepted => Ok(()),
        LoginOutcome::Rejected { message } => bail!("Login rejected: {}", message),
    }
}
