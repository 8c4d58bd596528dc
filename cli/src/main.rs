//! Demonstration caller for the pseudo-random engine
//!
//! Shows the two properties that make pseudo-random output predictable:
//! a time seed gives a fresh sequence each run, while a known seed
//! reproduces the exact same values.

use std::env;
use std::fs;
use std::io::Write;
use std::process;

use env_logger::Builder;
use getopts::{Matches, Options};
use log::{debug, info, LevelFilter};
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

use pseudo_random_core_rs::{
    Algorithm, ConfigError, Generator, GeneratorConfig, RandomSource, RangeError, Seed,
};

const DEFAULT_COUNT: usize = 5;

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Options(#[from] getopts::Fail),

    #[error("Invalid value for --{option}: '{value}'")]
    InvalidValue { option: &'static str, value: String },

    #[error("Cannot read config file {path}: {source}")]
    ReadConfig {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Range(#[from] RangeError),
}

fn create_options() -> Options {
    let mut opts = Options::new();
    opts.optopt(
        "a",
        "algorithm",
        "generator algorithm (lcg, mt, middle_square)",
        "NAME",
    );
    opts.optopt("s", "seed", "integer seed for the listing", "SEED");
    opts.optopt("n", "count", "number of values to list", "COUNT");
    opts.optopt("c", "config", "JSON generator config file", "FILE");
    opts.optopt("", "log", "log filter (same syntax as RUST_LOG)", "FILTER");
    opts.optflag("h", "help", "print this help menu");
    opts
}

fn setup_logging(filter: &str) {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {} > {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .parse_filters(filter)
        .parse_filters(&env::var("RUST_LOG").unwrap_or_default())
        .init();
}

fn parse_number<T: std::str::FromStr>(
    matches: &Matches,
    option: &'static str,
) -> Result<Option<T>, CliError> {
    match matches.opt_str(option) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| CliError::InvalidValue { option, value }),
    }
}

/// Resolve the generator configuration from `--config` or `--algorithm`
fn load_config(matches: &Matches) -> Result<GeneratorConfig, CliError> {
    let config = match matches.opt_str("config") {
        Some(path) => {
            let json = fs::read_to_string(&path)
                .map_err(|source| CliError::ReadConfig { path: path.clone(), source })?;
            debug!("loaded generator config from {}", path);
            GeneratorConfig::from_json(&json)?
        }
        None => {
            let algorithm = match matches.opt_str("algorithm") {
                Some(name) => name.parse::<Algorithm>()?,
                None => Algorithm::MersenneTwister,
            };
            GeneratorConfig::for_algorithm(algorithm, None)
        }
    };

    let seed = parse_number::<u64>(matches, "seed")?.map(Seed::new);
    Ok(match seed {
        Some(_) => config.with_seed(seed),
        None => config,
    })
}

/// Float in [0, 1) from the operating system's entropy source
///
/// Not reproducible: there is no seed to replay.
fn os_random() -> f64 {
    f64::from(OsRng.next_u32()) / 4294967296.0
}

fn seeded(config: &GeneratorConfig, seed: u64) -> Result<Generator, CliError> {
    Ok(config.clone().with_seed(Some(Seed::new(seed))).build()?)
}

fn run(matches: &Matches) -> Result<(), CliError> {
    let config = load_config(matches)?;
    let count = parse_number::<usize>(matches, "count")?.unwrap_or(DEFAULT_COUNT);
    info!("using {} generator", config.algorithm());

    // A time seed differs on every run.
    let mut clock = config.clone().with_seed(None).build()?;
    println!("Regular random (current time as seed) : {}", clock.random());

    // Different seeds give different values.
    let mut random1 = seeded(&config, 411)?;
    let mut random2 = seeded(&config, 416)?;
    let val1 = random1.random();
    let val2 = random2.random();
    println!("random 1 = random 2 : {}", val1 == val2);
    println!("random 1 : {}, random 2 : {}", val1, val2);

    // Anyone who knows the seed can predict the output.
    random2.seed(411u32);
    let val2 = random2.random();
    println!("random 1 = random 2 : {}", val1 == val2);
    println!("random 1 : {}, random 2 : {}", val1, val2);

    // Hardware entropy cannot be predicted from a seed.
    let val1 = random1.random();
    let val2 = os_random();
    println!("random 1 = hardware random : {}", val1 == val2);
    println!("random 1 : {}, hardware random : {}", val1, val2);

    let mut listing = config.build()?;
    println!("{} values:", count);
    for (i, value) in listing.randoms(count).enumerate() {
        println!("  {:>3} : {}", i + 1, value);
    }

    let dice = (0..count)
        .map(|_| listing.randint(1, 6))
        .collect::<Result<Vec<_>, _>>()?;
    println!("dice rolls : {:?}", dice);

    Ok(())
}

fn main() {
    let opts = create_options();
    let matches = match opts.parse(env::args().skip(1)) {
        Ok(matches) => matches,
        Err(err) => {
            eprintln!("{}", CliError::from(err));
            process::exit(1)
        }
    };

    if matches.opt_present("h") {
        let program = env::args().next().unwrap_or_else(|| "prng-demo".to_owned());
        let brief = format!("Usage: {} [OPTION]...", program);
        print!("{}", opts.usage(&brief));
        return;
    }

    setup_logging(&matches.opt_str("log").unwrap_or_default());

    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
