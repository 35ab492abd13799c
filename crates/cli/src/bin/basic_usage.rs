//! Sample invocations of every rational-trig formula: `cargo run --bin basic-usage`.

use anyhow::Result;
use rat_trig_cli::args::{parse_or_exit, ShowcaseArgs};
use rat_trig_cli::{logging, showcase};

fn main() -> Result<()> {
    let args: ShowcaseArgs = parse_or_exit();
    logging::init(args.verbosity.level());

    let report = showcase::build();
    for line in report.mismatches() {
        tracing::error!(expr = %line.expr, value = %line.value, expected = ?line.expected, "unexpected result");
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    if let Some(out) = &args.out {
        showcase::write_report(out, &report)?;
    }
    Ok(())
}
