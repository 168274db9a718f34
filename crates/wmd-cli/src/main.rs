use wmd_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr-only if
    // the state directory is unavailable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli::run_from_args() {
        eprintln!("wmd error: {:#}", err);
        std::process::exit(1);
    }
}
