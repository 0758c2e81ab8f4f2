// Strategy example: price one order with each configured carrier.

use std::env;
use std::error::Error;
use std::process;

use cart_shipping_patterns::shipping;
use cart_shipping_patterns::{init_tracing, DemoConfig};
use colored::Colorize;

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("{} {}", "error:".bold().red(), e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let path = env::args().nth(1);
    let config = DemoConfig::load_or_default(path.as_deref())?;
    shipping::demo::run(&config)?;
    Ok(())
}
