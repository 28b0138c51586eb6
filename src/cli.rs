use crate::drive::DriveLetter;
use clap::Parser;

#[derive(Parser)]
#[command(name = "detectmediatype")]
#[command(about = "Detect storage media type of logical Windows drives")]
#[command(version)]
pub struct Cli {
    /// Logical drive letters (e.g. C, D:), repeatable
    #[arg(value_name = "DRIVES", required = true, num_args = 1..)]
    pub drives: Vec<DriveLetter>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
