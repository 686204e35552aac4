mod config;
mod error;

#[cfg(feature = "plan")]
mod plan;

use clap::{Parser, Subcommand};
use isochron_briefing::BriefingClient;
use isochron_core::{
    COMMON_TIMEZONES, REFERENCE_ZONES, WallClockFields, clock_12h, from_wall_clock, offset_label,
    resolve_zone, weekday_date, zone_abbreviation,
};
use jiff::Timestamp;

use crate::config::{load_api_key, load_config, resolve_zones};

#[derive(Parser)]
#[command(name = "isn")]
#[command(about = "Timezone-aware global meeting planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[cfg(feature = "plan")]
    /// Open the interactive planner
    Plan {
        /// Your zone (IANA id)
        #[arg(long)]
        user_zone: Option<String>,

        /// Counterpart zone (IANA id)
        #[arg(long)]
        counterpart_zone: Option<String>,

        /// Model used for meeting briefs
        #[arg(short, long)]
        model: Option<String>,
    },

    /// List the zone catalog with live abbreviations and offsets
    Zones,

    /// Resolve a wall-clock time in one zone and view it in others
    Convert {
        /// Wall-clock time, e.g. "2024-06-01 09:30"
        #[arg(long)]
        time: String,

        /// Zone the time is read in (IANA id)
        #[arg(long)]
        from: String,

        /// Zones to view the instant in (defaults to the reference strip)
        #[arg(long)]
        to: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        #[cfg(feature = "plan")]
        Command::Plan {
            user_zone,
            counterpart_zone,
            model,
        } => {
            let (user, counterpart, reference) = resolve_zones(user_zone, counterpart_zone);

            // Briefs are optional; the planner runs without an API key.
            let client = load_api_key().ok().map(|key| {
                let client = BriefingClient::new(key);
                match model.or(load_config().model) {
                    Some(model) => client.with_model(model),
                    None => client,
                }
            });

            plan::run(user, counterpart, reference, client).await?;
        }
        Command::Zones => zones()?,
        Command::Convert { time, from, to } => convert(&time, &from, &to)?,
    }

    Ok(())
}

fn zones() -> anyhow::Result<()> {
    let now = Timestamp::now();
    for entry in COMMON_TIMEZONES {
        let zone = resolve_zone(entry.id)?;
        println!(
            "{:<22} {:<34} {:>5}  {}",
            entry.id,
            entry.name,
            zone_abbreviation(&zone, now),
            offset_label(&zone, now),
        );
    }
    Ok(())
}

fn convert(time: &str, from: &str, to: &[String]) -> anyhow::Result<()> {
    let dt: jiff::civil::DateTime = time
        .parse()
        .map_err(|e| anyhow::anyhow!("cannot parse '{}' as a wall-clock time: {}", time, e))?;
    let from_zone = resolve_zone(from)?;
    let instant = from_wall_clock(WallClockFields::from(dt), &from_zone)?;

    println!("{} in {} = {}", time, from, instant);
    println!();

    let targets: Vec<&str> = if to.is_empty() {
        REFERENCE_ZONES.iter().map(|z| z.id).collect()
    } else {
        to.iter().map(String::as_str).collect()
    };

    for id in targets {
        let zone = resolve_zone(id)?;
        println!(
            "  {:<22} {:>8}  {:<11}  {} {}",
            id,
            clock_12h(instant, &zone)?,
            weekday_date(instant, &zone)?,
            zone_abbreviation(&zone, instant),
            offset_label(&zone, instant),
        );
    }

    Ok(())
}
