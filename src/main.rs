use detect_media_type::cli::Cli;
use detect_media_type::commands;
use detect_media_type::error::Result;
use detect_media_type::logger;
use tracing::{debug, error};

fn main() -> Result<()> {
    let args = Cli::parse_args();

    logger::init(args.verbose)?;

    debug!("detectmediatype starting");

    match commands::detect::execute(args.drives) {
        Ok(()) => {
            debug!("Operation completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Operation failed: {}", e);
            std::process::exit(1);
        }
    }
}
