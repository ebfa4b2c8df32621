//! cartwise CLI: thin driver over the Finance Brain engine.
//!
//! The interactive UI lives elsewhere; this binary just loads collaborator
//! files, runs one optimization call, and prints the result.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use cartwise_core::{optimize, CategoryPolicy};
use cartwise_intake::{parse_cart_csv, parse_cart_json, parse_profile_json};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

mod demo;
mod output;

#[derive(Parser, Debug)]
#[command(name = "cartwise", version, about = "Cart payment optimizer: pay now vs. installments")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Optimize a cart against a financial profile
    Optimize {
        /// Cart file: .json (detection/manual entry) or .csv (receipt export)
        #[arg(long)]
        cart: PathBuf,

        /// Profile JSON: balance, obligations, pay period
        #[arg(long)]
        profile: PathBuf,

        /// Decision date, YYYY-MM-DD (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Emit the recommendation as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in tight-budget sample scenario
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Optimize {
            cart,
            profile,
            today,
            json,
        } => run_optimize(&cart, &profile, today, json),
        Command::Demo => demo::run(),
    }
}

fn run_optimize(
    cart_path: &Path,
    profile_path: &Path,
    today: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    if !cart_path.exists() {
        bail!("cart file not found: {}", cart_path.display());
    }
    if !profile_path.exists() {
        bail!("profile file not found: {}", profile_path.display());
    }

    let cart_text = fs::read_to_string(cart_path)
        .with_context(|| format!("reading {}", cart_path.display()))?;
    let cart = if cart_path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
    {
        parse_cart_csv(&cart_text)?
    } else {
        parse_cart_json(&cart_text)?
    };

    let profile_text = fs::read_to_string(profile_path)
        .with_context(|| format!("reading {}", profile_path.display()))?;
    let profile = parse_profile_json(&profile_text)?;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let policy = CategoryPolicy::standard();
    let rec = optimize(&cart, &profile, &policy, today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rec)?);
    } else {
        output::print_recommendation(&rec);
    }
    Ok(())
}
