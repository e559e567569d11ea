use rcd_core::logging;

mod cli;

use crate::cli::Exit;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }
    std::panic::set_hook(Box::new(|info| tracing::error!("panic: {}", info)));

    match cli::run_from_args().await {
        Ok(Exit::Finished) => {}
        Ok(Exit::Interrupted) => std::process::exit(130),
        Err(err) => {
            eprintln!("rcd error: {:#}", err);
            std::process::exit(1);
        }
    }
}
