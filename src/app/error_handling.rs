//! Error handling utilities

use tracing::error;

/// Exit status for any failure to read or interpret the input.
pub const GENERAL_ERROR: i32 = 1;

/// Report a fatal error on stderr and exit.
///
/// The one-line message always carries the root cause. With `verbose >= 1`
/// the cause chain is also printed one entry per line.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    eprintln!("Error: {error:#}");
    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(GENERAL_ERROR)
}
