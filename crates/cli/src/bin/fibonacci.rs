//! Print the n-th Fibonacci number: `cargo run --bin fibonacci -- <n>`.

use rat_trig_cli::args::{parse_or_exit, FibArgs};
use rat_trig_cli::{fib_message, logging};

fn main() {
    let args: FibArgs = parse_or_exit();
    logging::init(args.verbosity.level());

    tracing::debug!("Starting crazy calculations...");
    println!("{}", fib_message(args.n));
    tracing::info!("Script ends here");
}
