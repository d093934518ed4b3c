//! Lyra Compiler Driver
//!
//! Command-line entry point for the JS lowering backend. Reads a serialized
//! lowering unit (symbol declarations plus root expressions), lowers every
//! root and writes the resulting JS AST as JSON. The JSON dump is a debug
//! surface; rendering JS source text is the printer's job, not ours.

use clap::{Parser, Subcommand};
use log::info;
use lyrac_backend::{ExpressionLowerer, JsExpr};
use lyrac_common::{CompilerError, ErrorReporter};
use lyrac_ir::LoweringUnit;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "lyrac")]
#[command(about = "Lyra JS lowering backend")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lower a serialized unit and emit the JS AST as JSON
    Lower {
        /// Input lowering unit (JSON)
        input: PathBuf,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Lower a unit and report diagnostics without writing output
    Check {
        /// Input lowering unit (JSON)
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Lower {
            input,
            output,
            pretty,
        } => cmd_lower(&input, output.as_deref(), pretty),
        Commands::Check { input } => cmd_check(&input),
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn load_unit(path: &Path) -> Result<LoweringUnit, CompilerError> {
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|err| CompilerError::InternalError {
        message: format!("invalid lowering unit {}: {}", path.display(), err),
    })
}

fn lower_unit(unit: &LoweringUnit) -> Result<Vec<JsExpr>, CompilerError> {
    let table = unit.symbol_table();
    let lowerer = ExpressionLowerer::new(&table);

    let mut lowered = Vec::with_capacity(unit.roots.len());
    for root in &unit.roots {
        lowered.push(lowerer.lower(root)?);
    }
    Ok(lowered)
}

fn cmd_lower(input: &Path, output: Option<&Path>, pretty: bool) -> Result<(), CompilerError> {
    let unit = load_unit(input)?;
    info!(
        "lowering {} root expressions against {} symbols",
        unit.roots.len(),
        unit.symbols.len()
    );

    let lowered = lower_unit(&unit)?;

    let json = if pretty {
        serde_json::to_string_pretty(&lowered)
    } else {
        serde_json::to_string(&lowered)
    }
    .map_err(|err| CompilerError::InternalError {
        message: format!("serializing output: {}", err),
    })?;

    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), CompilerError> {
    let unit = load_unit(input)?;
    let table = unit.symbol_table();
    let lowerer = ExpressionLowerer::new(&table);

    let mut reporter = ErrorReporter::new();
    for (index, root) in unit.roots.iter().enumerate() {
        if let Err(err) = lowerer.lower(root) {
            reporter.error(format!("root expression {}: {}", index, err));
        }
    }

    reporter.print_diagnostics();
    if reporter.has_errors() {
        return Err(CompilerError::LowerError {
            message: format!("{} root expressions failed to lower", reporter.error_count()),
        });
    }

    info!("{} root expressions lowered cleanly", unit.roots.len());
    Ok(())
}
