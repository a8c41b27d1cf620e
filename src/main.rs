//! # vcxlist CLI Entry Point
//!
//! Reads a `.vcxproj`, prints a CMake `set()` source list on stdout.
//! Status lines (with `--verbose`) and errors go to stderr so that stdout can be
//! redirected straight into a `.cmake` file.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::io::Write;
use std::path::PathBuf;

use vcxlist::config::{self, Config, Overrides};
use vcxlist::transcode;

#[cfg(windows)]
#[link(name = "kernel32")]
unsafe extern "system" {
    fn SetConsoleOutputCP(wCodePageID: u32) -> i32;
}

#[cfg(windows)]
fn enable_windows_utf8_console() {
    unsafe {
        SetConsoleOutputCP(65001);
    }
}

#[cfg(not(windows))]
fn enable_windows_utf8_console() {}

#[derive(Parser)]
#[command(name = "vcxlist")]
#[command(about = "Print the ClCompile sources of a .vcxproj as a CMake set()", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// Project file to read [default: src/plugins/7zip/vcxproj/7ZA/7za.dll.vcxproj]
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// TOML file with input, name, item and [rewrite] settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// CMake variable holding the list [default: 7ZA_SOURCES]
    #[arg(short, long)]
    name: Option<String>,
    /// MSBuild item type to collect [default: ClCompile]
    #[arg(long)]
    item: Option<String>,
    /// Relative root to substitute [default: ../../7za/]
    #[arg(long, allow_hyphen_values = true)]
    prefix: Option<String>,
    /// Replacement for the prefix [default: ${SEVENZIP_7ZA}/]
    #[arg(long, allow_hyphen_values = true)]
    placeholder: Option<String>,
    /// Print progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            name: self.name.clone(),
            item: self.item.clone(),
            prefix: self.prefix.clone(),
            placeholder: self.placeholder.clone(),
        }
    }
}

fn main() -> Result<()> {
    enable_windows_utf8_console();

    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => Some(config::load_config_file(path)?),
        None => None,
    };
    let config = Config::resolve(file, cli.overrides())?;

    if cli.verbose {
        eprintln!(
            "{} Reading {} items from {}",
            "⚡".yellow(),
            config.item.cyan(),
            config.input.display()
        );
    }

    let list = transcode::run(&config)?;

    if cli.verbose {
        if list.is_empty() {
            eprintln!(
                "{} No {} entries found, emitting an empty list",
                "!".yellow(),
                config.item
            );
        } else {
            eprintln!(
                "{} {} sources -> {}",
                "✓".green(),
                list.len(),
                list.name.bold()
            );
        }
    }

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(list.to_string().as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write source list to stdout")?;

    Ok(())
}
