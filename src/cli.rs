use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the corpus text files (*.txt)
    #[arg(short, long, default_value = "static/texts")]
    pub texts: PathBuf,

    /// Band registry file (identifier<TAB>label per line); duplicate
    /// checking is disabled when omitted
    #[arg(short, long)]
    pub bands: Option<PathBuf>,

    /// Number of names to generate
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Seed the random source for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit results as JSON
    #[arg(long)]
    pub json: bool,
}
