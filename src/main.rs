use anyhow::Context;
use clap::Parser;
use log::warn;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde_json::to_string_pretty;

use bandsmith::cli::Cli;
use bandsmith::{Corpus, GenerationResult, Generator, KnownBandSet};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let corpus = Corpus::load(&cli.texts).context("loading corpus")?;
    let known_bands = match &cli.bands {
        Some(path) => KnownBandSet::load(path).context("loading band registry")?,
        None => {
            warn!("no band registry given; duplicate checking disabled");
            KnownBandSet::empty()
        }
    };
    let generator = Generator::new(corpus, known_bands);

    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    let mut results: Vec<GenerationResult> = Vec::with_capacity(cli.count);
    for _ in 0..cli.count {
        results.push(generator.generate(rng.as_mut())?);
    }

    if cli.json {
        println!("{}", to_string_pretty(&results)?);
    } else {
        for result in &results {
            if result.is_duplicate {
                println!("{} (already taken)", result.name);
            } else {
                println!("{}", result.name);
            }
        }
    }

    Ok(())
}
