//! dtexpr - Korean date/time expression generator
//!
//! Renders moments, ranges and schedules the way a person would say them,
//! relative to a reference "now".

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use datetime_expr::{
    DayNumberStyle, ExpressionGenerator, GeneratorConfig, Moment, RelativeRule, TimeRangeEntry,
};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// dtexpr - Korean date/time expression generator
#[derive(Parser, Debug)]
#[command(name = "dtexpr")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON configuration file ({"timezone": ..., "day_numbers": ..., "relative_rule": ...})
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// IANA timezone; overrides the configuration file
    #[arg(short, long, global = true)]
    timezone: Option<String>,

    /// Day-number suffix style: always, start-only, never
    #[arg(long, global = true, value_parser = parse_day_numbers)]
    day_numbers: Option<DayNumberStyle>,

    /// Day and week distance rule: numeric, calendar
    #[arg(long, global = true, value_parser = parse_relative_rule)]
    relative_rule: Option<RelativeRule>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a moment or a range
    Generate {
        /// RFC 3339 moment, e.g. 2018-06-07T22:10:00+09:00
        moment: String,

        /// RFC 3339 range end
        #[arg(short, long)]
        end: Option<String>,

        /// RFC 3339 reference moment (default: now)
        #[arg(short, long)]
        reference: Option<String>,

        /// SCHEDULING_DIALOG or SUMMING_UP
        #[arg(short, long, default_value = "SCHEDULING_DIALOG")]
        situation: String,
    },

    /// Render a schedule from a JSON array of {"start", "end", "label"?}
    List {
        /// Input file, or "-" for stdin
        #[arg(default_value = "-")]
        input: String,

        /// RFC 3339 reference moment (default: now)
        #[arg(short, long)]
        reference: Option<String>,

        /// One fully dated line per entry instead of day groups
        #[arg(long)]
        no_aggregate: bool,
    },

    /// Print the weekday of a moment
    Weekday {
        /// RFC 3339 moment
        moment: String,

        /// Single-character form
        #[arg(long)]
        simple: bool,
    },
}

fn parse_day_numbers(s: &str) -> Result<DayNumberStyle, String> {
    s.parse().map_err(|e: datetime_expr::ExprError| e.to_string())
}

fn parse_relative_rule(s: &str) -> Result<RelativeRule, String> {
    s.parse().map_err(|e: datetime_expr::ExprError| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let generator = build_generator(&cli)?;
    debug!(timezone = generator.timezone().name(), "generator ready");

    match cli.command {
        Commands::Generate {
            moment,
            end,
            reference,
            situation,
        } => {
            let expr = generator
                .generate_from_str(&moment, end.as_deref(), reference.as_deref(), &situation)
                .context("failed to generate expression")?;
            println!("{expr}");
        }
        Commands::List {
            input,
            reference,
            no_aggregate,
        } => {
            let raw = read_input(&input)?;
            let entries: Vec<TimeRangeEntry> =
                serde_json::from_str(&raw).context("invalid schedule JSON")?;
            let reference = reference
                .as_deref()
                .map(Moment::parse)
                .transpose()
                .context("invalid reference moment")?;
            let lines = generator
                .generate_list(&entries, reference.as_ref(), !no_aggregate)
                .context("failed to generate list")?;
            for line in lines {
                println!("{line}");
            }
        }
        Commands::Weekday { moment, simple } => {
            let moment = Moment::parse(&moment).context("invalid moment")?;
            println!("{}", generator.weekday(&moment, simple));
        }
    }

    Ok(())
}

/// Configuration file first, then command-line overrides.
fn build_generator(cli: &Cli) -> Result<ExpressionGenerator> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            GeneratorConfig::from_json(&raw)?
        }
        None => GeneratorConfig::default(),
    };
    if let Some(tz) = &cli.timezone {
        config.timezone = tz.clone();
    }
    if let Some(style) = cli.day_numbers {
        config.day_numbers = style;
    }
    if let Some(rule) = cli.relative_rule {
        config.relative_rule = rule;
    }
    Ok(ExpressionGenerator::from_config(&config)?)
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
    }
}
