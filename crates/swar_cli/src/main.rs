mod render;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use swar_base::{Paksha, resolve_starting_phase};
use swar_config::{Language, SwarConfig};
use swar_rs::{
    Clock, FallbackSunrise, FixedClock, Labels, ManualSunrise, SunriseProvider, SystemClock,
    TableSunrise, swar_day,
};
use swar_schedule::tattva_at;
use swar_time::{CivilDate, LocalDateTime, TimeOfDay};
use tracing::{debug, trace};

#[derive(Parser)]
#[command(name = "swar", about = "Swar Shastra daily schedule")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Label language: english or gujarati
    #[arg(long, global = true)]
    lang: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Swar flowing at sunrise for a paksha and tithi
    StartSwar {
        /// Paksha: shukla or krishna
        #[arg(long)]
        paksha: String,
        /// Sunrise tithi within the paksha (1-15)
        #[arg(long)]
        tithi: u8,
    },
    /// Full 2-hour schedule with the active swar and tattva
    Schedule {
        /// Paksha: shukla or krishna
        #[arg(long)]
        paksha: String,
        /// Sunrise tithi within the paksha (1-15)
        #[arg(long)]
        tithi: u8,
        /// Day to schedule (YYYY-MM-DD); defaults to the day containing now
        #[arg(long)]
        date: Option<String>,
        /// Sunrise override (HH:MM[:SS])
        #[arg(long)]
        sunrise: Option<String>,
        /// Local instant to evaluate (YYYY-MM-DDThh:mm[:ss]); defaults to the clock
        #[arg(long)]
        now: Option<String>,
    },
    /// Tattva active at an instant within a swar window
    Tattva {
        /// Start of the swar window (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        slot_start: String,
        /// Local instant to evaluate; defaults to the clock
        #[arg(long)]
        now: Option<String>,
    },
    /// List the tattva cycle
    Tattvas,
}

fn exit_with(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn parse_paksha(s: &str) -> Paksha {
    match s.trim().to_ascii_lowercase().as_str() {
        "shukla" | "s" => Paksha::Shukla,
        "krishna" | "k" => Paksha::Krishna,
        other => exit_with(format!("unknown paksha '{other}' (expected shukla or krishna)")),
    }
}

fn parse_local(s: &str) -> LocalDateTime {
    s.parse::<LocalDateTime>().unwrap_or_else(|e| exit_with(e))
}

fn load_config(cli: &Cli) -> SwarConfig {
    let mut config = match &cli.config {
        Some(path) => SwarConfig::load(path).unwrap_or_else(|e| {
            exit_with(format!("failed to load config {}: {e}", path.display()))
        }),
        None => SwarConfig::default(),
    };
    config.merge_env_vars().unwrap_or_else(|e| exit_with(e));
    if let Some(lang) = &cli.lang {
        config.language = lang.parse::<Language>().unwrap_or_else(|e| exit_with(e));
    }
    config
}

fn init_logging(verbose: u8, config: &SwarConfig) {
    let filter = match verbose {
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 2)
        .init();

    debug!("swar started with verbosity level: {verbose}");
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

fn clock_for(now: Option<&str>, config: &SwarConfig) -> Box<dyn Clock> {
    match now {
        Some(s) => Box::new(FixedClock(parse_local(s))),
        None => Box::new(SystemClock::new(config.utc_offset_minutes)),
    }
}

fn print_day<P: SunriseProvider, C: Clock>(
    paksha: Paksha,
    tithi: u8,
    date: Option<CivilDate>,
    provider: &P,
    clock: &C,
    labels: &Labels,
) {
    match swar_day(paksha, tithi, date, provider, clock) {
        Ok(day) => print!("{}", render::schedule(labels, &day)),
        Err(e) => exit_with(e),
    }
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(&cli);
    init_logging(cli.verbose, &config);
    let labels = Labels::for_language(config.language);

    match cli.command {
        Commands::StartSwar { paksha, tithi } => {
            let paksha = parse_paksha(&paksha);
            match resolve_starting_phase(paksha, tithi) {
                Ok(phase) => {
                    println!("{}: {}", labels.start_swar, labels.phase(phase));
                    println!("  {} swar, {} nadi", phase.swar_name(), phase.nadi_name());
                }
                Err(e) => exit_with(e),
            }
        }

        Commands::Schedule {
            paksha,
            tithi,
            date,
            sunrise,
            now,
        } => {
            let paksha = parse_paksha(&paksha);
            let date: Option<CivilDate> = date
                .as_deref()
                .map(|s| s.parse::<CivilDate>().unwrap_or_else(|e| exit_with(e)));
            let clock = clock_for(now.as_deref(), &config);
            match sunrise {
                Some(s) => {
                    let time = s.parse::<TimeOfDay>().unwrap_or_else(|e| exit_with(e));
                    debug!(sunrise = %time, "using manual sunrise");
                    print_day(paksha, tithi, date, &ManualSunrise(time), &clock, labels);
                }
                None => {
                    let table = TableSunrise::new(config.sunrise_table.clone());
                    if table.is_empty() {
                        debug!(default = %config.default_sunrise, "no sunrise table, using default");
                    } else {
                        debug!(entries = table.len(), "using sunrise table with fallback");
                    }
                    let provider = FallbackSunrise::new(table, config.default_sunrise);
                    print_day(paksha, tithi, date, &provider, &clock, labels);
                }
            }
        }

        Commands::Tattva { slot_start, now } => {
            let start = parse_local(&slot_start);
            let now = clock_for(now.as_deref(), &config).now();
            match tattva_at(&start, &now) {
                Some(info) => {
                    println!("{}", render::tattva_line(labels, &info));
                    println!("  Minute in cycle: {}/60", info.cycle_minute);
                    println!("  Start: {}", info.start);
                    println!("  End:   {}", info.end);
                }
                None => exit_with(format!(
                    "{now} is outside the 2-hour window starting {start}"
                )),
            }
        }

        Commands::Tattvas => print!("{}", render::tattva_cycle(labels)),
    }
}
