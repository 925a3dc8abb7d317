//! Tabtex CLI - LaTeX table normalization and PDF preview compilation

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use std::time::Duration;
#[cfg(feature = "cli")]
use tabtex::{
    classify, compile_table_to_pdf, normalize_table, required_columns, wrap_document,
    EngineConfig, NormalizeOptions,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tabtex")]
#[command(author = "SciPenAI")]
#[command(version)]
#[command(about = "Tabtex - LaTeX table normalization and PDF preview compilation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Normalize a table's column definition and environment markers
    Normalize {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,

        /// Output file path (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,

        /// Emit the full standalone document instead of the bare table
        #[arg(short, long)]
        wrap: bool,

        /// Fill token used to pad missing columns
        #[arg(long, default_value_t = 'l')]
        fill: char,
    },

    /// Print the decided table variant and required column count
    Classify {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,
    },

    /// Compile a table to a preview PDF
    Compile {
        /// Input file path (reads from stdin if not provided)
        input: Option<String>,

        /// Output PDF path
        #[arg(short, long, default_value = "preview.pdf")]
        output: String,

        /// Typesetting engine executable
        #[arg(long, default_value = "pdflatex")]
        engine: String,

        /// Engine timeout in seconds
        #[arg(long, default_value_t = 60)]
        timeout: u64,

        /// Print the outcome as JSON to stdout
        #[arg(long)]
        json: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn read_input(input: Option<String>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize {
            input,
            output,
            wrap,
            fill,
        } => {
            let code = read_input(input)?;
            let options = NormalizeOptions {
                fill_token: fill,
                ..Default::default()
            };
            let table = match normalize_table(&code, &options) {
                Ok(table) => table,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };
            let result = if wrap { wrap_document(&table) } else { table };

            match output {
                Some(path) => {
                    fs::write(&path, result)?;
                    eprintln!("✓ Output written to: {}", path);
                }
                None => println!("{}", result),
            }
        }

        Commands::Classify { input } => {
            let code = read_input(input)?;
            let kind = classify(&code, &NormalizeOptions::default());
            println!("{} ({} columns)", kind, required_columns(&code));
        }

        Commands::Compile {
            input,
            output,
            engine,
            timeout,
            json,
        } => {
            let code = read_input(input)?;
            let config = EngineConfig::new(engine).with_timeout(Duration::from_secs(timeout));
            let mut outcome =
                compile_table_to_pdf(&code, &NormalizeOptions::default(), &config);

            if let Some(pdf) = outcome.pdf.take() {
                fs::write(&output, pdf)?;
                eprintln!("✓ PDF written to: {}", output);
            }

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&outcome).expect("outcome serializes")
                );
            } else {
                eprintln!("{}", outcome.message);
                for error in &outcome.errors {
                    eprintln!("---\n{}", error);
                }
            }

            if !outcome.success {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            println!("Tabtex - LaTeX table normalization and PDF preview compilation");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ tabular / tabularx / longtable selection");
            println!("  ✓ Column-definition rewriting with @{{...}} preservation");
            println!("  ✓ Standalone document wrapping");
            println!("  ✓ External engine compilation with log error extraction");
            println!();
            println!("Repository: https://github.com/scipenai/tabtex");
            println!();
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabtex --features cli");
    eprintln!("  tabtex <COMMAND> [OPTIONS]");
}
