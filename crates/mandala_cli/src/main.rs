use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use mandala_base::{
    GATE_WHEEL, NodeModel, activation_from_longitude, gate_start_longitude_deg,
    mean_node_deg, opposite_gate,
};
use mandala_core::{Body, KeplerEphemeris, LongitudeProvider};
use mandala_time::UtcTime;
use mandala_transit::{
    ALL_TRANSIT_BODIES, EphemerisRow, TransitConfig, TransitSet, ephemeris_for_month,
    gate_changes_by_row, handle_transit_request, transits_at,
};

#[derive(Parser)]
#[command(name = "mandala", about = "Human Design transit CLI")]
struct Cli {
    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Thirteen-body transits at an instant
    Transits {
        /// ISO-8601 instant (default: now, UTC)
        #[arg(long)]
        date: Option<String>,
        /// Mean node year counting: calendar or continuous
        #[arg(long, default_value = "calendar")]
        node_model: NodeModel,
        /// Print the JSON reply instead of a table
        #[arg(long)]
        json: bool,
        /// Levels to show, 1 (gate) to 5 (base)
        #[arg(long, default_value_t = 5)]
        depth: usize,
    },
    /// Encode one tropical longitude
    Activation {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Gate half a wheel away
    Opposite {
        /// Gate number (1-64)
        gate: u8,
    },
    /// Mean lunar north node
    Node {
        /// ISO-8601 instant
        #[arg(long)]
        date: String,
        /// Year counting: calendar or continuous
        #[arg(long, default_value = "calendar")]
        node_model: NodeModel,
    },
    /// Raw geocentric longitude from the built-in ephemeris
    Longitude {
        /// Body name (Sun, Moon, Mercury ... Pluto)
        #[arg(long)]
        body: String,
        /// ISO-8601 instant (default: now, UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// Daily transit table at 12:00 UTC for one month
    Ephemeris {
        /// Month as YYYY-MM
        #[arg(long)]
        month: String,
        /// Mean node year counting: calendar or continuous
        #[arg(long, default_value = "calendar")]
        node_model: NodeModel,
        /// Print rows as JSON
        #[arg(long)]
        json: bool,
        /// Levels to show, 1 (gate) to 5 (base)
        #[arg(long, default_value_t = 2)]
        depth: usize,
    },
    /// List the 64 gates with their start longitudes
    Wheel,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let eph = KeplerEphemeris::default();

    match cli.command {
        Commands::Transits {
            date,
            node_model,
            json,
            depth,
        } => cmd_transits(&eph, date.as_deref(), node_model, json, depth),
        Commands::Activation { lon } => {
            let a = activation_from_longitude(lon)
                .with_context(|| format!("cannot encode longitude {lon}"))?;
            println!("{lon} deg -> {a}");
            println!(
                "gate {}  line {}  color {}  tone {}  base {}",
                a.gate, a.line, a.color, a.tone, a.base
            );
            Ok(())
        }
        Commands::Opposite { gate } => {
            let o = opposite_gate(gate).with_context(|| format!("no opposite for gate {gate}"))?;
            println!("Gate {gate} <-> Gate {o}");
            Ok(())
        }
        Commands::Node { date, node_model } => {
            let instant = parse_instant(Some(&date))?;
            let lon = mean_node_deg(node_model, &instant);
            let north = activation_from_longitude(lon)?;
            let south = north.opposite()?;
            println!("Mean North Node ({node_model}): {lon:.4} deg");
            println!("North Node: {north}");
            println!("South Node: {south}");
            Ok(())
        }
        Commands::Longitude { body, date } => {
            let body = Body::from_name(&body).with_context(|| {
                format!("unknown body '{body}' (expected Sun, Moon, Mercury ... Pluto)")
            })?;
            let instant = parse_instant(date.as_deref())?;
            let lon = eph
                .longitude_of(body, &instant)
                .with_context(|| format!("{body} at {instant}"))?;
            println!("{body} at {instant}: {lon:.6} deg");
            Ok(())
        }
        Commands::Ephemeris {
            month,
            node_model,
            json,
            depth,
        } => cmd_ephemeris(&eph, &month, node_model, json, depth),
        Commands::Wheel => {
            for (i, &gate) in GATE_WHEEL.iter().enumerate() {
                let start = gate_start_longitude_deg(i)?;
                println!(
                    "{i:>2}  gate {gate:>2}  {start:>8.3} deg  {}  opposite {:>2}",
                    zodiac_position(start),
                    opposite_gate(gate)?
                );
            }
            Ok(())
        }
    }
}

fn parse_instant(date: Option<&str>) -> Result<UtcTime> {
    match date {
        Some(s) => s
            .parse::<UtcTime>()
            .with_context(|| format!("invalid date '{s}'")),
        None => Ok(UtcTime::now()),
    }
}

fn cmd_transits(
    eph: &KeplerEphemeris,
    date: Option<&str>,
    node_model: NodeModel,
    json: bool,
    depth: usize,
) -> Result<()> {
    let config = TransitConfig::new(node_model);

    if json {
        let reply = handle_transit_request(eph, date, &config);
        println!("{}", reply.to_json_pretty()?);
        if !reply.is_success() {
            bail!("transit request failed with status {}", reply.status_code());
        }
        return Ok(());
    }

    let instant = parse_instant(date)?;
    let set = transits_at(eph, &instant, &config)
        .with_context(|| format!("failed to calculate transits at {instant}"))?;
    println!("Transits at {}", instant.to_iso_string()?);
    print_transit_set(&set, depth);
    Ok(())
}

fn print_transit_set(set: &TransitSet, depth: usize) {
    for (body, activation) in set.entries() {
        println!("  {:<11} {}", body.name(), activation.to_string_depth(depth));
    }
    let gates: Vec<String> = set.active_gates().iter().map(u8::to_string).collect();
    println!("Active gates: {}", gates.join(", "));
    let centers: Vec<&str> = set.active_centers().iter().map(|c| c.name()).collect();
    println!("Defined centers: {}", centers.join(", "));
}

fn cmd_ephemeris(
    eph: &KeplerEphemeris,
    month: &str,
    node_model: NodeModel,
    json: bool,
    depth: usize,
) -> Result<()> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
        .with_context(|| format!("invalid month '{month}' (expected YYYY-MM)"))?;
    let config = TransitConfig::new(node_model);
    let rows = ephemeris_for_month(eph, first.year(), first.month(), &config)
        .with_context(|| format!("failed to build ephemeris for {month}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print_ephemeris_table(&rows, depth)?;
    }
    Ok(())
}

fn print_ephemeris_table(rows: &[EphemerisRow], depth: usize) -> Result<()> {
    let mut header = format!("{:<17}", "Date / 12h UTC");
    for body in ALL_TRANSIT_BODIES {
        header.push_str(&format!("{:>12}", body.name().trim_end_matches(" Node")));
    }
    println!("{header}");

    // Gate changes against the previous day are marked with '*'.
    for (row, changed) in rows.iter().zip(gate_changes_by_row(rows)) {
        let instant: UtcTime = row.date.parse()?;
        let mut line = format!(
            "{:02}.{:02}.{:04} {:02}:{:02}  ",
            instant.day, instant.month, instant.year, instant.hour, instant.minute
        );
        for (body, activation) in row.transits.entries() {
            let mark = if changed.contains(&body) { "*" } else { "" };
            line.push_str(&format!(
                "{:>12}",
                format!("{mark}{}", activation.to_string_depth(depth))
            ));
        }
        println!("{line}");
    }
    Ok(())
}

const SIGNS: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

/// `13°52'30" Scorpio` style position for a tropical longitude.
fn zodiac_position(lon: f64) -> String {
    let sign = ((lon / 30.0) as usize).min(11);
    let arcsec = ((lon - sign as f64 * 30.0) * 3600.0).round() as u32;
    format!(
        "{:>2}°{:02}'{:02}\" {}",
        arcsec / 3600,
        arcsec / 60 % 60,
        arcsec % 60,
        SIGNS[sign]
    )
}
