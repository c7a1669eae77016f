use std::{
    io::{self, Write},
    process::exit,
};

use clap::{Parser, ValueEnum};
use env_logger::Builder;
use multiexp::{
    curves::{CurveParams, NamedPairing},
    error::BenchError,
    report::{SweepConfig, DEFAULT_BATCH_COUNT},
    MultiExpMethod,
};
use rand::{rngs::StdRng, SeedableRng};
use tracing::log::{self, LevelFilter};

/// The curve families that can be profiled
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Curve {
    /// MNT4-298
    #[clap(name = "mnt4-298")]
    Mnt4,
    /// BN254
    Bn254,
    /// Every family, in the order above
    All,
}

/// The optimized method profiled against the naive one
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Unsigned bucket method
    Pippenger,
    /// Signed-digit bucket method
    SignedPippenger,
}

/// Profiles naive and optimized multiexp over curve groups
#[derive(Clone, Parser, Debug)]
struct Args {
    /// The curve family to profile
    #[clap(long, value_enum, default_value = "all")]
    curve: Curve,
    /// The optimized method to profile
    #[clap(long, value_enum, default_value = "pippenger")]
    method: Method,
    /// A fixed window size for the optimized method
    #[clap(long, value_parser)]
    window_size: Option<usize>,
    /// The first exponent, instances hold 2^exponent points
    #[clap(long, value_parser, default_value_t = 2)]
    expn_start: usize,
    /// The last exponent profiled with the optimized method
    #[clap(long, value_parser, default_value_t = 20)]
    expn_end_fast: usize,
    /// The last exponent also profiled with the naive method
    #[clap(long, value_parser, default_value_t = 14)]
    expn_end_naive: usize,
    /// The number of instances per exponent
    #[clap(long, value_parser, default_value_t = DEFAULT_BATCH_COUNT)]
    batch_count: usize,
    /// Skip checking optimized answers against naive ones
    #[clap(long, takes_value = false, value_parser)]
    no_compare: bool,
    /// Seed for sampling group elements
    #[clap(long, value_parser, default_value_t = 0)]
    seed: u64,
}

impl Args {
    /// The sweep parameters described by the arguments
    fn sweep_config(&self) -> SweepConfig {
        let method = match self.method {
            Method::Pippenger => MultiExpMethod::Pippenger { window_size: self.window_size },
            Method::SignedPippenger => MultiExpMethod::SignedPippenger { window_size: self.window_size },
        };

        SweepConfig {
            expn_start: self.expn_start,
            expn_end_fast: self.expn_end_fast,
            expn_end_naive: self.expn_end_naive,
            batch_count: self.batch_count,
            compare_answers: !self.no_compare,
            method,
        }
    }
}

fn main() {
    init_logger();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{e}");
        exit(1);
    }
}

/// Profiles every selected family
fn run(args: &Args) -> Result<(), BenchError> {
    log_build_info();

    let config = args.sweep_config();
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    if matches!(args.curve, Curve::Mnt4 | Curve::All) {
        profile_family::<ark_mnt4_298::MNT4_298>(&config, &mut rng)?;
    }
    if matches!(args.curve, Curve::Bn254 | Curve::All) {
        profile_family::<ark_bn254::Bn254>(&config, &mut rng)?;
    }

    Ok(())
}

/// Sets up the family's parameters then profiles G1 and G2
fn profile_family<P: NamedPairing>(config: &SweepConfig, rng: &mut StdRng) -> Result<(), BenchError> {
    let params = CurveParams::<P>::init()?;
    let stdout = io::stdout();
    let stderr = io::stderr();

    writeln!(stdout.lock(), "Profiling {}", params.group_label("G1"))?;
    params.profile_g1(config, rng, &mut stdout.lock(), &mut stderr.lock())?;

    writeln!(stdout.lock(), "Profiling {}", params.group_label("G2"))?;
    params.profile_g2(config, rng, &mut stdout.lock(), &mut stderr.lock())?;

    Ok(())
}

/// Logs how the binary was built, timings from debug builds are not comparable
fn log_build_info() {
    log::info!(
        "multiexp v{} ({} build, parallel: {})",
        env!("CARGO_PKG_VERSION"),
        if cfg!(debug_assertions) { "debug" } else { "release" },
        cfg!(feature = "parallel")
    );
}

/// Sets up logging for the profiler
fn init_logger() {
    Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] - {}", record.level(), record.args()))
        .filter(None, LevelFilter::Info)
        .parse_default_env()
        .init();
}
