//! smartbot CLI: Command-line interface for the SmartBot demo assistant

use clap::{Parser, Subcommand};
use smartbot_engine::catalog::{
    CAPABILITIES, CAPABILITIES_PROMPT, LIMITATIONS, LIMITATIONS_PROMPT, SUGGESTIONS,
    WELCOME_CARDS, WELCOME_TAGLINE, WELCOME_TITLE,
};
use smartbot_engine::{Config, ConfigError, Conversation, Transcript};
use std::fmt::Display;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SMARTBOT_LOG";

/// Log file used by the TUI when `--log-file` is not given.
const DEFAULT_LOG_FILE: &str = "smartbot.log";

/// Terminal chat assistant demo with simulated replies
#[derive(Parser)]
#[command(name = "smartbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: .smartbot/config.json if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the simulated reply delay in milliseconds
    #[arg(long, global = true)]
    reply_delay_ms: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Run a scripted conversation and print the transcript
    Script {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Pause between steps in milliseconds
        #[arg(long, default_value = "0")]
        gap_ms: u64,

        /// Steps: say:<text>, pick:<1-4>, pick:capabilities, pick:limitations
        #[arg(required = true)]
        steps: Vec<ScriptStep>,
    },

    /// Print the welcome content and suggestion prompts
    Catalog {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// One user action in a scripted conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ScriptStep {
    /// Type a draft and submit it.
    Say(String),
    /// Press a prompt button.
    Pick(&'static str),
}

/// Errors parsing a script step.
#[derive(Debug, thiserror::Error)]
enum ScriptError {
    #[error("unknown step '{0}' (expected say:<text> or pick:<choice>)")]
    UnknownStep(String),

    #[error("suggestion '{0}' out of range (expected 1-{max})", max = SUGGESTIONS.len())]
    SuggestionOutOfRange(String),
}

impl FromStr for ScriptStep {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(text) = s.strip_prefix("say:") {
            return Ok(Self::Say(text.to_string()));
        }

        let Some(choice) = s.strip_prefix("pick:") else {
            return Err(ScriptError::UnknownStep(s.to_string()));
        };
        match choice {
            "capabilities" => Ok(Self::Pick(CAPABILITIES_PROMPT)),
            "limitations" => Ok(Self::Pick(LIMITATIONS_PROMPT)),
            _ => {
                let index: usize = choice
                    .parse()
                    .map_err(|_| ScriptError::UnknownStep(s.to_string()))?;
                index
                    .checked_sub(1)
                    .and_then(|i| SUGGESTIONS.get(i).copied())
                    .map(Self::Pick)
                    .ok_or_else(|| ScriptError::SuggestionOutOfRange(choice.to_string()))
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    if let Err(e) = init_logging(interactive, cli.log_file.as_deref()) {
        exit_with_error(e);
    }

    let config = match resolve_config(cli.config.as_deref(), cli.reply_delay_ms) {
        Ok(config) => config,
        Err(e) => exit_with_error(e),
    };

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open TUI
            let rt = match tokio::runtime::Runtime::new() {
                Ok(rt) => rt,
                Err(e) => exit_with_error(e),
            };
            if let Err(e) = rt.block_on(smartbot_tui::run_tui(&config)) {
                exit_with_error(e);
            }
        }
        Some(Commands::Script {
            json,
            gap_ms,
            steps,
        }) => {
            cmd_script(&config, &steps, json, Duration::from_millis(gap_ms));
        }
        Some(Commands::Catalog { json }) => {
            cmd_catalog(json);
        }
    }
}

fn exit_with_error(e: impl Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

/// Install the tracing subscriber.
///
/// The TUI owns the terminal, so interactive sessions always log to a file.
fn init_logging(
    interactive: bool,
    log_file: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let default_filter = if interactive { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
    let registry = tracing_subscriber::registry().with(filter);

    let path = match log_file {
        Some(path) => Some(path.to_path_buf()),
        None if interactive => Some(std::env::temp_dir().join(DEFAULT_LOG_FILE)),
        None => None,
    };

    if let Some(path) = path {
        let file = File::create(&path)?;
        registry
            .with(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}

/// Load the config file, then apply command-line overrides.
fn resolve_config(path: Option<&Path>, reply_delay_ms: Option<u64>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(&std::env::current_dir()?)?,
    };
    if let Some(ms) = reply_delay_ms {
        config.reply_delay_ms = ms;
    }
    config.validate()?;
    Ok(config)
}

/// Apply `steps` to a fresh conversation and wait for every reply.
async fn run_script(config: &Config, steps: &[ScriptStep], gap: Duration) -> Conversation {
    let mut conversation = Conversation::from_config(config);

    for (i, step) in steps.iter().enumerate() {
        if i > 0 && !gap.is_zero() {
            tokio::time::sleep(gap).await;
        }
        let now = Instant::now();
        conversation.deliver_due(now);

        match step {
            ScriptStep::Say(text) => {
                conversation.update_draft(text.as_str());
                if conversation.submit_draft(now).is_none() {
                    warn!(step = i + 1, "blank message skipped");
                }
            }
            ScriptStep::Pick(prompt) => {
                conversation.select_suggestion(*prompt, now);
            }
        }
    }

    while let Some(deadline) = conversation.next_deadline() {
        tokio::time::sleep_until(deadline).await;
        conversation.deliver_due(Instant::now());
    }

    info!(
        session = conversation.session_id(),
        messages = conversation.state().messages().len(),
        "script finished"
    );
    conversation
}

fn cmd_script(config: &Config, steps: &[ScriptStep], json: bool, gap: Duration) {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => exit_with_error(e),
    };
    let conversation = rt.block_on(run_script(config, steps, gap));
    let transcript = Transcript::capture(conversation.state(), config.assistant_name.as_str());

    if json {
        match serde_json::to_string_pretty(&transcript) {
            Ok(out) => println!("{out}"),
            Err(e) => exit_with_error(e),
        }
    } else {
        print!("{}", transcript.to_plain_text());
    }
}

fn cmd_catalog(json: bool) {
    if json {
        let cards: Vec<_> = WELCOME_CARDS
            .iter()
            .map(|card| {
                serde_json::json!({
                    "heading": card.heading,
                    "intro": card.intro,
                    "button": card.button_label,
                    "prompt": card.prompt,
                })
            })
            .collect();
        let output = serde_json::json!({
            "title": WELCOME_TITLE,
            "tagline": WELCOME_TAGLINE,
            "cards": cards,
            "capabilities": CAPABILITIES,
            "limitations": LIMITATIONS,
            "suggestions": SUGGESTIONS,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(out) => println!("{out}"),
            Err(e) => exit_with_error(e),
        }
        return;
    }

    println!("{WELCOME_TITLE}");
    println!("{WELCOME_TAGLINE}");
    for card in &WELCOME_CARDS {
        println!();
        println!("{}", card.heading);
        println!("  {}", card.intro);
        for item in card.items {
            println!("  * {item}");
        }
        println!("  [{}] sends \"{}\"", card.button_label, card.prompt);
    }
    println!();
    println!("Try asking me:");
    for (i, prompt) in SUGGESTIONS.iter().enumerate() {
        println!("  {}. {prompt}", i + 1);
    }
}
