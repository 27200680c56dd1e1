use clap::{Parser, Subcommand};
use std::fs;
use std::process;
use xoshiro256_core_rs::{
    format_binary, GeneratorConfig, JumpKind, OutputVariant, RngError, SeedSource, StateDump,
    StreamAllocator, Xoshiro256,
};

#[derive(Parser)]
#[command(name = "xoshiro256")]
#[command(about = "Deterministic xoshiro256 random number engine", long_about = None)]
struct Cli {
    /// Fixed seed (expanded through SplitMix64)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// JSON generator config file (overridden by --seed / --plus)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Use the xoshiro256+ output variant
    #[arg(long, global = true)]
    plus: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print raw 64-bit outputs
    Next {
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Print samples from a distribution
    Sample {
        #[command(subcommand)]
        distribution: Distribution,

        #[arg(short = 'n', long, default_value_t = 1, global = true)]
        count: usize,
    },

    /// Print the first output of each allocated worker stream
    Streams {
        #[arg(short, long, default_value_t = 4)]
        workers: usize,

        /// Space streams by long-jump (2^192) instead of jump (2^128)
        #[arg(long)]
        long: bool,
    },

    /// Print a u64 as 64 binary digits
    Bits { value: u64 },

    /// Print the generator state
    Dump,
}

#[derive(Subcommand)]
enum Distribution {
    /// Uniform in the open interval (low, high)
    Uniform {
        #[arg(long, allow_hyphen_values = true)]
        low: f64,
        #[arg(long, allow_hyphen_values = true)]
        high: f64,
    },
    /// Exponential with the given mean
    Exponential {
        #[arg(long)]
        mean: f64,
    },
    /// Failures before the first success
    Geometric {
        #[arg(long)]
        success: f64,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_json(&fs::read_to_string(path)?)?,
        None => GeneratorConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = SeedSource::Fixed(seed);
    }
    if cli.plus {
        config.variant = OutputVariant::Plus;
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&cli)?;
    let mut rng = config.build()?;

    match cli.command {
        Commands::Next { count } => {
            for _ in 0..count {
                println!("{}", rng.next());
            }
        }
        Commands::Sample {
            distribution,
            count,
        } => {
            for _ in 0..count {
                println!("{}", sample(&mut rng, &distribution)?);
            }
        }
        Commands::Streams { workers, long } => {
            let kind = if long { JumpKind::LongJump } else { JumpKind::Jump };
            for (i, mut stream) in StreamAllocator::new(&rng, kind).take(workers).enumerate() {
                println!("{}\t{}", i, stream.next());
            }
        }
        Commands::Bits { value } => {
            println!("{}", format_binary(value));
        }
        Commands::Dump => {
            println!("{}", StateDump::new(&rng));
            if config.is_reproducible() {
                println!("config_hash = {}", config.config_hash()?);
            }
        }
    }

    Ok(())
}

fn sample(rng: &mut Xoshiro256, distribution: &Distribution) -> Result<String, RngError> {
    let line = match *distribution {
        Distribution::Uniform { low, high } => rng.uniform(low, high)?.to_string(),
        Distribution::Exponential { mean } => rng.exponential(mean)?.to_string(),
        Distribution::Geometric { success } => rng.geometric(success)?.to_string(),
    };
    Ok(line)
}
