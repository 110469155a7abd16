//! Regex walkthrough: email validation, match testing, phone substitution.
//!
//! Run:
//!   cargo run --bin pattern_demo

use std::io::{self, Write};

use query_demos::config::DemoConfig;
use query_demos::{demo, logging};

fn main() -> query_demos::Result<()> {
    logging::init();
    let config = DemoConfig::load()?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    demo::run_pattern_demo(&config.pattern, &mut input, &mut out)?;
    out.flush()?;
    Ok(())
}
