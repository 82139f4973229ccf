//! Propositional logic toolkit - Command Line Interface

use clap::{Parser, ValueEnum};
use propositions::{
    is_contradiction, is_tautology, Formula, OperatorSet, TruthTable, TruthTableConfig,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum Command {
    /// Check that the formula parses and print its canonical form (default)
    Check,
    /// Print the formula in Polish notation
    Polish,
    /// Print the formula's variables, one per line
    Variables,
    /// Print the formula's truth table
    Table,
    /// Classify as tautology, contradiction or contingent
    Classify,
    /// Reduce the formula to the operator set given by --to
    Reduce,
}

#[derive(Parser, Debug)]
#[command(name = "propositions")]
#[command(about = "Parse, evaluate and transform propositional formulas", long_about = None)]
#[command(version)]
struct Args {
    /// Formula text, e.g. "((p&q)->~r)"
    #[arg(value_name = "FORMULA")]
    formula: String,

    /// Subcommand to execute
    #[arg(short = 'D', long = "do", value_enum, default_value = "check")]
    command: Command,

    /// Target operator set for reduce
    #[arg(short = 't', long = "to", default_value = "nand")]
    target: OperatorSet,

    /// Read the formula in Polish notation
    #[arg(short = 'p', long = "polish-input")]
    polish_input: bool,

    /// Render truth tables with 1/0 instead of T/F
    #[arg(short = 'b', long = "binary")]
    binary: bool,

    /// Output file for the truth table (writes to stdout if not specified)
    #[arg(short = 'O', long = "out-file")]
    output_file: Option<PathBuf>,
}

fn write_table(formula: &Formula, args: &Args) -> io::Result<()> {
    let config = if args.binary {
        TruthTableConfig::binary()
    } else {
        TruthTableConfig::default()
    };
    let table = TruthTable::new(formula);
    match args.output_file {
        Some(ref path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            table.write_table(&mut writer, &config)?;
            writer.flush()
        }
        None => table.write_table(&mut io::stdout().lock(), &config),
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let parsed = if args.polish_input {
        Formula::parse_polish(&args.formula)
    } else {
        Formula::parse(&args.formula)
    };
    let formula = match parsed {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match args.command {
        Command::Check => println!("{}", formula),
        Command::Polish => println!("{}", formula.polish()),
        Command::Variables => {
            for variable in formula.variables() {
                println!("{}", variable);
            }
        }
        Command::Table => {
            if let Err(e) = write_table(&formula, &args) {
                eprintln!("Error writing truth table: {}", e);
                process::exit(1);
            }
        }
        Command::Classify => {
            let class = if is_tautology(&formula) {
                "tautology"
            } else if is_contradiction(&formula) {
                "contradiction"
            } else {
                "contingent"
            };
            println!("{}", class);
        }
        Command::Reduce => println!("{}", args.target.reduce(&formula)),
    }
}
