//! Benchmark driver binary.
//!
//! Reads heap commands from stdin and writes one statistics line per heap
//! instance to the output file (or stdout when no file is given):
//!
//! ```bash
//! fibheap --variant naive --output stats.txt < commands.txt
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::str::FromStr;

use fibheap::CommandDriver;
use log::info;
use structopt::StructOpt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Standard,
    Naive,
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Variant::Standard),
            "naive" => Ok(Variant::Naive),
            other => Err(format!(
                "expected \"standard\" or \"naive\", got {other:?}"
            )),
        }
    }
}

#[derive(StructOpt)]
#[structopt(name = "fibheap", about = "Fibonacci heap step-count benchmark driver")]
struct Opts {
    /// Output file for per-heap statistics; stdout when omitted.
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// Heap variant: "standard" (cascading cuts) or "naive".
    #[structopt(short, long, default_value = "standard")]
    variant: Variant,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts = Opts::from_args();
    info!("running {:?} variant", opts.variant);

    let stdin = io::stdin();
    let mut driver = CommandDriver::new(opts.variant == Variant::Naive);

    match &opts.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            driver.run(stdin.lock(), &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            driver.run(stdin.lock(), &mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
