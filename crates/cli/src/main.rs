//! Bebek Top Global CLI - order from the terminal.
//!
//! Runs the same cart and checkout lifecycle as the storefront against a
//! JSON file instead of a browser session.
//!
//! # Usage
//!
//! ```bash
//! # List the menu
//! bebek-cli menu
//!
//! # Build a cart
//! bebek-cli cart add 1
//! bebek-cli cart set 101 2
//! bebek-cli cart show
//!
//! # Pay by FPX and print the receipt
//! bebek-cli checkout --payment fpx --bank "Maybank2u"
//! bebek-cli receipt
//! ```
//!
//! # Commands
//!
//! - `menu` - List sets with their IDs and prices
//! - `cart show|add|set|remove` - Manage the cart
//! - `checkout` - Save selections and confirm the order
//! - `receipt` - Show the latest receipt

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use bebek_core::{OrderType, PaymentMethod};
use chrono::{FixedOffset, Utc};
use clap::{Parser, Subcommand};

mod commands;
mod file_storage;

use commands::checkout::Selections;
use file_storage::FileStorage;

#[derive(Parser)]
#[command(name = "bebek-cli")]
#[command(author, version, about = "Bebek Top Global ordering CLI")]
struct Cli {
    /// JSON file holding the cart, preferences and receipt
    #[arg(long, global = true, default_value = "bebek-storage.json")]
    store: PathBuf,

    /// UTC offset used to show receipt times
    #[arg(long, global = true, default_value = "+08:00", allow_hyphen_values = true)]
    offset: FixedOffset,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the menu
    Menu,
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Save selections and confirm the order
    Checkout {
        /// Order type (`pickup`; `delivery` is not available yet)
        #[arg(long)]
        order_type: Option<OrderType>,

        /// Payment method (`cash` or `fpx`)
        #[arg(long)]
        payment: Option<PaymentMethod>,

        /// FPX bank name, e.g. "Maybank2u"
        #[arg(long)]
        bank: Option<String>,
    },
    /// Show the latest receipt
    Receipt,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and subtotal
    Show,
    /// Add one of a set
    Add {
        /// Menu set ID
        id: i32,
    },
    /// Set a line's quantity (0 removes it)
    Set {
        /// Menu set ID
        id: i32,
        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Remove a line
    Remove {
        /// Menu set ID
        id: i32,
    },
}

fn main() {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => print_output(&output),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    let mut storage = FileStorage::open(&cli.store)?;

    let result = match cli.command {
        Commands::Menu => Ok(commands::menu::render()),
        Commands::Cart { action } => match action {
            CartAction::Show => Ok(commands::cart::show(&storage)),
            CartAction::Add { id } => commands::cart::add(&mut storage, id),
            CartAction::Set { id, quantity } => commands::cart::set(&mut storage, id, quantity),
            CartAction::Remove { id } => Ok(commands::cart::remove(&mut storage, id)),
        },
        Commands::Checkout {
            order_type,
            payment,
            bank,
        } => {
            let selections = Selections {
                order_type,
                payment,
                bank,
            };
            commands::checkout::run(
                &mut storage,
                selections,
                &mut rand::rng(),
                Utc::now(),
                cli.offset,
            )
        }
        Commands::Receipt => commands::receipt::show(&storage, cli.offset),
    };

    // Selections persist even when checkout is rejected
    storage.save()?;
    tracing::debug!(store = %storage.path().display(), "Command finished");

    Ok(result?)
}

#[allow(clippy::print_stdout)]
fn print_output(output: &str) {
    print!("{output}");
}
