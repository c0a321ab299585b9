use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::analyzer::Analyzer;
use crate::config::Config;

mod analyzer;
mod common;
mod config;
mod controller;
mod json_reader;
mod parser;
mod transaction;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Transactions JSON file. Falls back to `transactions_file` in ~/.txlens.toml
    file: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();
    let config = Config::load();

    let file = cli
        .file
        .or(config.transactions_file)
        .context("No transactions file given on the command line or in ~/.txlens.toml")?;

    let transactions = json_reader::read_transactions(Path::new(&file))?;
    let mut analyzer = Analyzer::new(transactions);
    info!("Ready, {} transactions in memory", analyzer.transactions().len());

    let history_file = Config::history_file();
    let mut rl = DefaultEditor::new()?;
    if rl.load_history(&history_file).is_err() {
        println!("No previous history.");
    }

    let mut command_buffer: Vec<String> = vec![];
    loop {
        let readline = rl.readline("# ");
        match readline {
            Ok(line) => {
                let line = line.trim();
                let is_last = line.ends_with(';');
                if !line.is_empty() {
                    command_buffer.push(line.to_string());
                }
                if is_last {
                    let command = command_buffer.join("\n");
                    let _ = rl.add_history_entry(command.trim());

                    let command = command.trim_end_matches(';');
                    let result = controller::parse_and_run_command(&mut analyzer, command);
                    if let Err(err) = result {
                        println!("{err}");
                    }

                    command_buffer.clear();
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    rl.save_history(&history_file)?;

    Ok(())
}
