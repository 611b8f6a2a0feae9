//! Keypad Session Demo
//!
//! Replays keypad presses through a calculator session and prints the input
//! and result fields after every step.
//!
//! Run with: `cargo run --example keypad_session -- [config.json] [keys]`
//!
//! Keys: `0-9`, `+ - * /`, `=`, `C` (clear), `<` (backspace).
//! Set `RUST_LOG=kalkulator=debug` to see conversion logs.

use kalkulator::prelude::*;
use tracing_subscriber::EnvFilter;

const DEFAULT_KEYS: &str = "3 + 4 * 2 = / 0 = C 10 - 2 - 3 = 12 + < <";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if path.ends_with(".json") => {
            CalculatorConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        Some(keys) => return run(CalculatorConfig::default(), &keys),
        None => CalculatorConfig::default(),
    };
    let keys = args.next().unwrap_or_else(|| DEFAULT_KEYS.to_string());
    run(config, &keys)
}

fn run(config: CalculatorConfig, keys: &str) -> Result<(), Box<dyn std::error::Error>> {
    let actions = KeypadAction::parse_sequence(keys)
        .map_err(|key| format!("unknown key '{key}'"))?;

    println!("=== Keypad Session ===\n");
    let mut calc = Calculator::with_config(config);
    for action in actions {
        calc.handle(action);
        println!(
            "[{:>2}]  input: {:<24} result: {}",
            action.label(),
            calc.input(),
            calc.result_display()
        );
    }

    Ok(())
}
