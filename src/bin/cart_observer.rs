// Observer example: two cart observers print the item count as it changes.

use std::env;
use std::error::Error;
use std::process;
use std::rc::Rc;

use cart_shipping_patterns::observer::{self, StdoutSink};
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

    let sink = Rc::new(StdoutSink::new(config.output.color));
    observer::demo::run(&config.cart.steps, sink);
    Ok(())
}
