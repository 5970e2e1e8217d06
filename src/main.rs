//! Rollcall - A Telegram bot managing sign-ups for an event.
//!
//! This is the main entry point for the Rollcall bot, which keeps the roster of a
//! single event (players and spectators) and publishes it to a Telegram group.
//!
//! # Overview
//!
//! Members of the group sign up with the inline buttons under the roster, either
//! as a player or as a spectator, and may withdraw at any time. Administrators
//! close registration, clear the roster or add someone by name.
//!
//! # Features
//!
//! - **Inline Sign-ups**: Join, spectate or leave with a single tap
//! - **Live Roster**: Every change is published to the group with the event details
//! - **Admin Commands**: `/stop`, `/reset` and `/add` are restricted to configured user ids
//! - **YAML Configuration**: Simple configuration file format with environment variable support
//!
//! # Configuration
//!
//! Create a `config.yaml` file with your settings:
//!
//! ```yaml
//! telegram:
//!   token: "123456:ABC-DEF"
//!   chat_id: -1001234567890
//!   admin_ids: [11111111]
//!
//! event:
//!   date: "Saturday 12 October"
//!   time: "19:00"
//!   place: "Central park"
//!   capacity: "12"
//!   price: "5 EUR"
//!   description: "Friendly match, bring water."
//! ```
//!
//! # Environment Variable Overrides
//!
//! Override any configuration value using environment variables with the `ROLLCALL_` prefix:
//!
//! ```bash
//! export ROLLCALL_TELEGRAM__TOKEN="123456:ABC-DEF"
//! export ROLLCALL_TELEGRAM__CHAT_ID="-1001234567890"
//! export ROLLCALL_EVENT__PRICE="free"
//! ```
//!
//! # Usage
//!
//! ```bash
//! rollcall --config config.yaml
//! ```
//!
//! # Bot Commands
//!
//! - `/start` - Open registration (in the event group)
//! - `/stop` - Close registration (admins)
//! - `/list` - Show the roster
//! - `/reset` - Clear the roster (admins)
//! - `/add <name>` - Add a player manually (admins)
//! - `/help` - Display help information
//!
//! # Architecture
//!
//! - [`bot`] - Update handling, roster locking and broadcasting
//! - [`commands`] - Command parsing and execution with permission checks
//! - [`config`] - YAML configuration loading with environment variable support
//! - [`roster`] - Roster state and event details
//! - [`telegram`] - Telegram Bot API client and long polling
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Controls logging level (default: `info`)

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use crate::{bot::Bot, config::Config};

mod bot;
mod commands;
mod config;
mod roster;
mod telegram;

/// Command-line arguments for the Rollcall bot.
///
/// Most configuration is done through the YAML file (see [`config::Config`]).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    ///
    /// Optional when the whole configuration is given with `ROLLCALL_`
    /// environment variables.
    #[arg(short, long)]
    config: Option<String>,
}

/// Main entry point for the Rollcall bot.
///
/// 1. **Logging Setup**: `info` level by default, overridable with `RUST_LOG`
/// 2. **Argument Parsing**: Parses command-line arguments using `clap`
/// 3. **Configuration Loading**: Reads the YAML file and the environment overrides
/// 4. **Bot Initialization**: Checks the token against the Bot API
/// 5. **Bot Execution**: Polls updates until the token gets rejected
///
/// Exits with a failure code if the configuration is invalid or the token is
/// rejected, at startup or later.
#[tokio::main]
async fn main() -> ExitCode {
    // Put logger at info level by default
    let env = Env::default().filter_or("RUST_LOG", "info");
    env_logger::init_from_env(env);

    info!("Starting rollcall {}...", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let bot = match Bot::new(config).await {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to initialize bot: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match bot.start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Bot stopped: {}", e);
            ExitCode::FAILURE
        }
    }
}
