//! Quickbeam CLI
//!
//! Runs the interpreter on an expression and prints the result.

use anyhow::Result;
use clap::Parser;

use quickbeam::{format_result, logging, Interpreter};

/// Evaluate an integer expression tree.
#[derive(Debug, Parser)]
#[command(name = "quickbeam", version, about)]
struct Cli {
    /// Expression text (currently ignored; the fixed tree `2 + 3 * 4` is used)
    #[arg(value_name = "EXPRESSION", default_value = "2 + 3 * 4")]
    expression: String,

    /// Print the evaluated tree before the result
    #[arg(long)]
    show_tree: bool,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let interpreter = Interpreter::new();
    if cli.show_tree {
        println!("Tree: {}", interpreter.build_expression_tree(&cli.expression));
    }
    let result = interpreter.interpret(&cli.expression);
    println!("{}", format_result(result));
    Ok(())
}
