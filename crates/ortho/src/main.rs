use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use ortho::prelude::*;

fn command() -> Command {
    Command::new("ortho")
        .about("Finds where classical Gram-Schmidt on the monomial basis of L2[0, 1] loses orthogonality.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("max-iterations")
                .short('n')
                .long("max-iterations")
                .help("Highest basis degree to orthogonalize before giving up")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("150"),
        )
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .help("Cross inner product above which orthogonality counts as lost")
                .value_name("T")
                .value_parser(value_parser!(f64))
                .default_value("1.0"),
        )
        .arg(
            Arg::new("parallel-threshold")
                .long("parallel-threshold")
                .help("Sequence length from which inner products are computed in parallel")
                .value_name("P")
                .value_parser(value_parser!(usize))
                .default_value("64"),
        )
        .arg(
            Arg::new("show-sequence")
                .long("show-sequence")
                .help("Print every orthogonal polynomial once the run ends")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more detail (repeat for trace output)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log warnings and errors")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
}

fn configure(matches: &ArgMatches) -> GramConfig {
    let mut config = GramConfig::default();
    if let Some(&n) = matches.get_one::<usize>("max-iterations") {
        config = config.with_max_iterations(n);
    }
    if let Some(&t) = matches.get_one::<f64>("threshold") {
        config = config.with_cross_product_threshold(t);
    }
    if let Some(&p) = matches.get_one::<usize>("parallel-threshold") {
        config = config.with_parallel_threshold(p);
    }
    config
}

fn log_level(matches: &ArgMatches) -> log::LevelFilter {
    if matches.get_flag("quiet") {
        return log::LevelFilter::Warn;
    }
    match matches.get_count("verbose") {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let matches = command().get_matches();

    env_logger::builder()
        .format_timestamp(None)
        .filter_level(log_level(&matches))
        .parse_default_env()
        .init();

    let config = configure(&matches);
    let orthogonalizer = Orthogonalizer::new(config).context("Invalid configuration")?;
    let outcome = orthogonalizer
        .run(LogReporter)
        .context("Orthogonalization failed")?;

    if matches.get_flag("show-sequence") {
        for (i, g) in outcome.sequence.iter().enumerate() {
            println!("g_{i} = {g}");
        }
    }

    println!("{}", outcome.summary());

    Ok(())
}
