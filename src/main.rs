//! Binary entrypoint that boots the conversation store.

use std::process::ExitCode;

use tonehone::start_tonehone;

/// Start the store and log the home-screen overview.
fn main() -> ExitCode {
    start_tonehone::run()
}
