//! Tracing setup for the demo binaries. Logs go to stderr so stdout stays
//! clean for `--json` output.

use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

pub fn init(level: Level) {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
