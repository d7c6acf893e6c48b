use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kundali_rs::{
    AnalyticEphemeris, ChartModel, ChartOptions, Division, KundaliConfig, KundaliError,
    YogaOptions, build_chart_with, chart_dump, dasha_dump, evaluate_yoga, evaluate_yogas,
    load_config, options_from_config, rashi_from_longitude, start_of_day,
    varga_position_by_code,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

mod args;
mod error;

use args::{BirthArgs, parse_date, parse_graha, parse_level};
use error::CliError;

#[derive(Parser)]
#[command(name = "kundali", about = "Vedic sidereal chart, dasha and yoga CLI")]
struct Cli {
    /// Config file (default: nearest kundali.toml upwards from the working directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log level: error, warn, info, debug or trace (RUST_LOG wins)
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Divisional chart as JSON, houses 1-12 with their occupants
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Division code (1, 2, 3, 4, 7, 9, 10, 12, 16, 20, 24, 27, 30, 40, 45, 60)
        #[arg(long, default_value = "1")]
        division: u16,
    },
    /// Sign-based aspects as JSON
    Aspects {
        #[command(flatten)]
        birth: BirthArgs,
        /// Division code
        #[arg(long, default_value = "1")]
        division: u16,
        /// Only this planet
        #[arg(long)]
        planet: Option<String>,
    },
    /// Vimshottari dasha: nested dump, or the period at a date
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Query date (YYYY-MM-DD); omit with --offset 0 for the full dump
        #[arg(long)]
        at: Option<String>,
        /// Periods to move from the one running at the query date
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i64,
        /// maha, antar or pratyantar
        #[arg(long, default_value = "maha")]
        level: String,
    },
    /// Yoga evaluation as JSON
    Yogas {
        #[command(flatten)]
        birth: BirthArgs,
        /// Evaluate a single yoga by name
        #[arg(long)]
        name: Option<String>,
        /// Drop absent yogas from the output
        #[arg(long)]
        present_only: bool,
    },
    /// Varga position of a sidereal longitude
    Varga {
        /// Sidereal longitude in degrees
        #[arg(long)]
        lon: f64,
        /// Division code
        #[arg(long)]
        division: u16,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal longitude in degrees
        #[arg(long)]
        lon: f64,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let handle = init_logging(level_source(env.as_deref(), cli.log_level.as_deref()))?;
    let config = load_config(cli.config.as_deref())?;
    if let Some(handle) = handle {
        handle.reload(EnvFilter::new(config.log_level()))?;
    }
    let (chart_opts, yoga_opts) = options_from_config(&config)?;
    debug!(
        ayanamsha = %chart_opts.ayanamsha,
        strength = yoga_opts.strength.predicate().name(),
        "configuration resolved"
    );

    match cli.command {
        Commands::Chart { birth, division } => {
            let chart = build(&birth, &chart_opts)?;
            print_json(&chart_dump(&chart, division)?)
        }

        Commands::Aspects {
            birth,
            division,
            planet,
        } => {
            let planet = planet.as_deref().map(parse_graha).transpose()?;
            let chart = build(&birth, &chart_opts)?;
            let records = chart
                .aspects(division, planet)
                .map_err(KundaliError::from)?;
            print_json(&records)
        }

        Commands::Dasha {
            birth,
            at,
            offset,
            level,
        } => {
            let level = parse_level(&level)?;
            let chart = build(&birth, &chart_opts)?;
            if at.is_none() && offset == 0 {
                return print_json(&dasha_dump(&chart)?);
            }
            let reference = match at {
                Some(s) => start_of_day(parse_date(&s)?),
                None => chart.birth(),
            };
            let timeline = chart.dasha()?;
            print_json(timeline.by_offset(level, reference, offset)?)
        }

        Commands::Yogas {
            birth,
            name,
            present_only,
        } => {
            let chart = build(&birth, &chart_opts)?;
            let opts = YogaOptions {
                present_only: present_only || yoga_opts.present_only,
                ..yoga_opts
            };
            match name {
                Some(n) => print_json(&evaluate_yoga(&chart, &n, &opts)?),
                None => print_json(&evaluate_yogas(&chart, &opts)?),
            }
        }

        Commands::Varga { lon, division } => {
            let pos = varga_position_by_code(lon, division)?;
            let d = Division::from_code(division)?;
            println!(
                "{} ({}): {} ({}) {:.4} deg",
                d,
                d.name(),
                pos.rashi().name(),
                pos.rashi().western_name(),
                pos.degree
            );
            Ok(())
        }

        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(lon);
            let dms = info.dms;
            println!(
                "{} ({}) - {} deg {} min {:.1} sec ({:.4} deg in rashi)",
                info.rashi.name(),
                info.rashi.western_name(),
                dms.degrees,
                dms.minutes,
                dms.seconds,
                info.degrees_in_rashi
            );
            Ok(())
        }
    }
}

fn build(birth: &BirthArgs, options: &ChartOptions) -> Result<ChartModel, CliError> {
    let inputs = birth.to_inputs(options)?;
    Ok(build_chart_with(&inputs, &AnalyticEphemeris::new())?)
}

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Where the log filter comes from: `RUST_LOG`, then `--log-level`, then the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LevelSource {
    Env(String),
    Flag(String),
    Config,
}

fn level_source(env: Option<&str>, flag: Option<&str>) -> LevelSource {
    match (env.map(str::trim).filter(|e| !e.is_empty()), flag) {
        (Some(e), _) => LevelSource::Env(e.to_string()),
        (None, Some(f)) => LevelSource::Flag(f.to_string()),
        (None, None) => LevelSource::Config,
    }
}

/// Install the subscriber before anything logs.
///
/// Returns a reload handle when the config file still has to pick the level.
fn init_logging(source: LevelSource) -> Result<Option<FilterHandle>, CliError> {
    let (directives, from_config) = match source {
        LevelSource::Env(d) | LevelSource::Flag(d) => (d, false),
        LevelSource::Config => (KundaliConfig::default().log_level(), true),
    };
    let (filter, handle) = reload::Layer::new(EnvFilter::new(directives));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;
    Ok(from_config.then_some(handle))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn log_level_precedence() {
        assert_eq!(
            level_source(Some("kundali_yoga=trace"), Some("warn")),
            LevelSource::Env("kundali_yoga=trace".into())
        );
        assert_eq!(level_source(None, Some("warn")), LevelSource::Flag("warn".into()));
        assert_eq!(level_source(Some("  "), None), LevelSource::Config);
        assert_eq!(level_source(None, None), LevelSource::Config);
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_dasha_with_negative_offset() {
        let cli = Cli::try_parse_from([
            "kundali", "dasha", "--date", "1990-01-01", "--lat", "28.6", "--lon", "77.2", "--tz",
            "+05:30", "--at", "2020-06-01", "--offset", "-1", "--level", "antar",
        ])
        .unwrap();
        match cli.command {
            Commands::Dasha { offset, level, at, .. } => {
                assert_eq!(offset, -1);
                assert_eq!(level, "antar");
                assert_eq!(at.as_deref(), Some("2020-06-01"));
            }
            _ => panic!("expected dasha"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "kundali", "rashi", "--lon", "45.5", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Commands::Rashi { .. }));
    }

    #[test]
    fn western_longitudes_parse() {
        let cli = Cli::try_parse_from([
            "kundali", "chart", "--date", "2000-06-15", "--lat", "40.7", "--lon", "-74.0", "--tz",
            "-04:00",
        ])
        .unwrap();
        match cli.command {
            Commands::Chart { birth, division } => {
                assert_eq!(birth.lon, -74.0);
                assert_eq!(birth.tz, "-04:00");
                assert_eq!(division, 1);
            }
            _ => panic!("expected chart"),
        }
    }
}
