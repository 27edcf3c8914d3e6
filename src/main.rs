//! Snapfeed - Main Entry Point
//!
//! Photo-sharing feed mockup: a story strip followed by post cards.

use snapfeed::app::application::run_app;
use snapfeed::helpers::init_tracing;

fn main() {
    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = init_tracing();

    tracing::info!("Starting Snapfeed...");

    run_app();
}
