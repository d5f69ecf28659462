use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use enhancedinput::{EnhancedInput, LengthValidator, Theme};
use log::{LevelFilter, debug};

#[derive(Parser)]
#[command(version, about = "Asks for your name and greets you", long_about = None)]
struct UserArgs {
    /// Stock theme used for the prompt
    #[arg(long, default_value = "fancy", value_parser = ["default", "fancy"])]
    theme: String,

    /// JSON theme file (`{"prefix": "...", "suffix": "..."}`), overrides --theme
    #[arg(long)]
    theme_file: Option<PathBuf>,

    /// Verbose
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_theme(args: &UserArgs) -> Result<Theme> {
    if let Some(path) = &args.theme_file {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Unable to read theme file {}", path.display()))?;
        return Theme::from_json(&json)
            .with_context(|| format!("Unable to parse theme file {}", path.display()));
    }

    Theme::named(&args.theme).with_context(|| format!("Unknown theme {}", args.theme))
}

fn main() -> Result<()> {
    let args = UserArgs::parse();
    init_logging(args.verbose);

    let theme = load_theme(&args)?;
    debug!("Using theme {theme:?}");

    let mut input = EnhancedInput::new(theme);
    let length = LengthValidator::new(1, Some(20))?;

    let name = input
        .get("What is your name?", &[&length])
        .context("No name was entered")?;

    println!("Hello, {name}!");
    Ok(())
}
