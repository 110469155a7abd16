//! Collection query walkthrough over numbers, colors and products.
//!
//! Run:
//!   cargo run --bin query_demo

use std::io::{self, Write};

use query_demos::config::DemoConfig;
use query_demos::{demo, logging};

fn main() -> query_demos::Result<()> {
    logging::init();
    let config = DemoConfig::load()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo::run_query_demo(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
