//! Picklist CLI
//!
//! Runs the interactive picker, or filters a roster non-interactively.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::HumanDuration;
use picklist::tui::TuiApp;
use picklist::{demo_roster, load_roster, Item, Picker, PickerConfig, PickerError};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Picklist - searchable multi-select list picker
///
/// Type to filter the roster by name, toggle items in and out of the
/// selection, clear the search to bring the full roster back.
#[derive(Parser)]
#[command(name = "picklist")]
#[command(author = "Picklist Contributors")]
#[command(version)]
#[command(about = "Searchable multi-select list picker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive picker and print the final selection
    Pick {
        /// Roster file: a JSON array of {id, name} objects (built-in demo
        /// roster if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Debounce delay for search commits, in milliseconds
        #[arg(long, default_value = "300")]
        delay_ms: u64,

        /// Output format for the final selection (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Filter a roster by a term and print the matches
    Filter {
        /// Roster file (demo roster if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Search term, matched case-insensitively against item names
        /// (use -- before the term if it starts with -)
        #[arg(allow_hyphen_values = true)]
        term: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Print the roster with ids
    Items {
        /// Roster file (demo roster if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    // Initialize logging
    picklist::logging::init();
    picklist::logging::info("MAIN", "picklist starting up");

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pick {
            file,
            delay_ms,
            output,
        } => cmd_pick(file.as_deref(), delay_ms, &output),

        Commands::Filter { file, term, output } => cmd_filter(file.as_deref(), &term, &output),

        Commands::Items { file } => cmd_items(file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

fn load(file: Option<&std::path::Path>) -> picklist::Result<Vec<Item>> {
    match file {
        Some(path) => {
            let items = load_roster(path)?;
            picklist::logging::info(
                "MAIN",
                &format!("loaded {} items from {}", items.len(), path.display()),
            );
            Ok(items)
        }
        None => Ok(demo_roster()),
    }
}

fn check_output_format(output: &str) -> picklist::Result<()> {
    match output {
        "text" | "json" => Ok(()),
        other => Err(PickerError::UnknownOutputFormat(other.to_string())),
    }
}

/// Interactive picker command
fn cmd_pick(file: Option<&std::path::Path>, delay_ms: u64, output: &str) -> picklist::Result<()> {
    check_output_format(output)?;
    let items = load(file)?;

    let config = PickerConfig {
        debounce_delay: Duration::from_millis(delay_ms),
        ..Default::default()
    };
    let picker = Picker::with_config(items, config);
    let mut app = TuiApp::new(picker);

    let mut terminal = ratatui::init();
    let run_result = app.run(&mut terminal);
    ratatui::restore();
    run_result?;

    let selected = app.picker.selected_items();

    if output == "json" {
        println!(
            "{}",
            serde_json::json!({
                "count": selected.len(),
                "selected": selected,
            })
        );
    } else if selected.is_empty() {
        println!("No items selected.");
    } else {
        println!(
            "{} {} selected:",
            style("\u{2713}").green().bold(),
            selected.len()
        );
        for item in selected {
            println!(
                "  {} {} {}",
                style("\u{2022}").green(),
                style(&item.name).cyan(),
                style(format!("(id {})", item.id)).dim()
            );
        }
    }

    Ok(())
}

/// One-shot filter command
fn cmd_filter(file: Option<&std::path::Path>, term: &str, output: &str) -> picklist::Result<()> {
    check_output_format(output)?;
    let items = load(file)?;

    let start = Instant::now();
    let matches = picklist::filter(&items, term);
    let elapsed = start.elapsed();

    if output == "json" {
        println!(
            "{}",
            serde_json::json!({
                "term": term,
                "total": items.len(),
                "count": matches.len(),
                "matches": matches,
            })
        );
        return Ok(());
    }

    println!(
        "{} Filtered {} items by '{}' in {}",
        style("\u{2713}").green().bold(),
        items.len(),
        style(term).yellow(),
        style(HumanDuration(elapsed)).cyan()
    );
    println!();

    if matches.is_empty() {
        println!("  No matches.");
    } else {
        for (i, item) in matches.iter().enumerate() {
            println!(
                "  {} {} {}",
                style(format!("{:3}.", i + 1)).dim(),
                style(&item.name).cyan(),
                style(format!("(id {})", item.id)).dim()
            );
        }
    }

    Ok(())
}

/// Roster inspection command
fn cmd_items(file: Option<&std::path::Path>) -> picklist::Result<()> {
    let items = load(file)?;

    println!("{} items:", items.len());
    println!();
    for item in &items {
        println!(
            "  {} {} {}",
            style("\u{2022}").green(),
            style(&item.name).cyan(),
            style(format!("(id {})", item.id)).dim()
        );
    }

    Ok(())
}
