use std::fmt::Display;

use chrono::{NaiveDateTime, Weekday};
use clap::{Parser, Subcommand};
use graha_core::{Body, moon_longitude_deg, planet_longitude_deg, sun_longitude_deg};
use graha_rs::{Snapshot, positions_for};
use graha_time::{ALL_COUNTRY_OFFSETS, CivilInstant, ZoneSpec};
use graha_vedic_base::{
    LunarNode, ayanamsha_deg, lunar_node_deg, mean_ayanamsha_deg, planetary_hour,
    try_moon_phase_from_elongation, try_nakshatra_from_longitude, try_rashi_from_longitude,
    try_sign_from_longitude, try_tithi_from_elongation,
};
use log::LevelFilter;
use serde::Serialize;

#[derive(Parser)]
#[command(name = "graha", about = "Sun, Moon, planet longitudes and Vedic calendar values")]
struct Cli {
    /// Print JSON instead of text where a record is returned
    #[arg(long, global = true)]
    json: bool,
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full snapshot: all grahas, ayanamsha, nakshatra, phase, tithi, hora
    Positions {
        /// Local civil time (YYYY-MM-DDThh:mm)
        #[arg(long, value_parser = parse_civil)]
        date: NaiveDateTime,
        /// Latitude in degrees, north positive
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        lon: f64,
        /// Country name from the offset table (see `countries`)
        #[arg(long, conflicts_with = "offset")]
        country: Option<String>,
        /// UTC offset in hours east (e.g. 5.75)
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<f64>,
    },
    /// Julian Day for a civil time
    Jd {
        /// Local civil time (YYYY-MM-DDThh:mm)
        #[arg(long, value_parser = parse_civil)]
        date: NaiveDateTime,
        /// UTC offset in hours east
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        offset: f64,
    },
    /// Tropical longitude of the Sun
    Sun {
        /// Julian Day (UTC)
        #[arg(long)]
        jd: f64,
    },
    /// Tropical longitude of the Moon
    Moon {
        /// Julian Day (UTC)
        #[arg(long)]
        jd: f64,
    },
    /// Tropical longitude of a planet
    Planet {
        /// Mercury, Venus, Mars, Jupiter or Saturn
        name: String,
        /// Julian Day (UTC)
        #[arg(long)]
        jd: f64,
    },
    /// Rahu and Ketu longitudes
    Nodes {
        /// Julian Day (UTC)
        #[arg(long)]
        jd: f64,
    },
    /// Ayanamsha (tropical - sidereal offset)
    Ayanamsha {
        /// Julian Day (UTC)
        #[arg(long)]
        jd: f64,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Tropical zodiac sign from tropical longitude
    Sign {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Tithi from Moon - Sun elongation
    Tithi {
        /// Elongation in degrees
        #[arg(long, allow_hyphen_values = true)]
        elongation: f64,
    },
    /// Moon phase from Moon - Sun elongation
    Phase {
        /// Elongation in degrees
        #[arg(long, allow_hyphen_values = true)]
        elongation: f64,
    },
    /// Chaldean planetary hour
    Hora {
        /// Weekday, 0 = Monday .. 6 = Sunday
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..7))]
        weekday: u8,
        /// Civil hour of day, 0-23
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: u32,
    },
    /// List the country UTC offset table
    Countries,
}

fn parse_civil(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| format!("expected YYYY-MM-DDThh:mm: {e}"))
}

fn or_exit<T, E: Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

fn weekday_from_monday(n: u8) -> Weekday {
    (0..n).fold(Weekday::Mon, |wd, _| wd.succ())
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", or_exit(serde_json::to_string_pretty(value)));
}

fn print_snapshot(snap: &Snapshot) {
    println!("Instant:    {}  (JD {:.6})", snap.instant, snap.jd);
    println!(
        "Location:   {:.4}, {:.4}",
        snap.location.latitude_deg, snap.location.longitude_deg
    );
    println!("Ayanamsha:  {:.6} deg", snap.ayanamsha_deg);
    println!();
    println!(
        "{:<9} {:>10}  {:<12} {:>13}  {:<10} {:>13}",
        "Graha", "Tropical", "Sign", "in sign", "Rashi", "in rashi"
    );
    for p in &snap.positions {
        println!(
            "{:<9} {:>10.4}  {:<12} {:>13}  {:<10} {:>13}",
            p.graha.english_name(),
            p.tropical_deg,
            p.sign.sign.name(),
            p.sign.dms.to_string(),
            p.rashi.rashi.name(),
            p.rashi.dms.to_string(),
        );
    }
    println!();
    let nak = &snap.moon_nakshatra;
    println!(
        "Nakshatra:  {} pada {} (lord {}, deity {})",
        nak.nakshatra.name(),
        nak.pada,
        nak.nakshatra.lord().english_name(),
        nak.nakshatra.deity()
    );
    println!(
        "Moon phase: {} ({:.1}% lit, angle {:.2} deg)",
        snap.moon_phase.phase.name(),
        snap.moon_phase.illumination_pct,
        snap.moon_phase.phase_angle_deg
    );
    println!("Tithi:      {} (#{})", snap.tithi, snap.tithi.tithi_number);
    println!(
        "Hora:       {} (day ruler {})",
        snap.planetary_hour.ruler.english_name(),
        snap.planetary_hour.day_ruler.english_name()
    );
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Positions {
            date,
            lat,
            lon,
            country,
            offset,
        } => {
            let zone = match (country, offset) {
                (_, Some(hours)) => ZoneSpec::OffsetHours(hours),
                (Some(name), None) => ZoneSpec::Country(name),
                (None, None) => ZoneSpec::Country("Default".to_string()),
            };
            let snap = or_exit(positions_for(date, lat, lon, zone));
            if cli.json {
                print_json(&snap);
            } else {
                print_snapshot(&snap);
            }
        }

        Commands::Jd { date, offset } => {
            let instant = or_exit(CivilInstant::from_naive(date, offset));
            let jd = or_exit(instant.julian_day());
            println!("{instant}  JD {jd:.6}");
        }

        Commands::Sun { jd } => {
            println!("Sun: {:.6} deg", or_exit(sun_longitude_deg(jd)));
        }

        Commands::Moon { jd } => {
            println!("Moon: {:.6} deg", or_exit(moon_longitude_deg(jd)));
        }

        Commands::Planet { name, jd } => {
            let body: Body = or_exit(name.parse());
            println!("{body}: {:.6} deg", or_exit(planet_longitude_deg(jd, body)));
        }

        Commands::Nodes { jd } => {
            println!("Rahu: {:.6} deg", or_exit(lunar_node_deg(LunarNode::Rahu, jd)));
            println!("Ketu: {:.6} deg", or_exit(lunar_node_deg(LunarNode::Ketu, jd)));
        }

        Commands::Ayanamsha { jd } => {
            let aya = or_exit(ayanamsha_deg(jd));
            println!("Ayanamsha: {aya:.6} deg (mean {:.6})", mean_ayanamsha_deg(jd));
        }

        Commands::Rashi { lon } => {
            let info = or_exit(try_rashi_from_longitude(lon));
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "{} ({}) - {} ({:.4} deg in rashi), lord {}",
                    info.rashi.name(),
                    info.rashi.western_name(),
                    info.dms,
                    info.degrees_in_rashi,
                    info.rashi.lord().english_name()
                );
            }
        }

        Commands::Sign { lon } => {
            let info = or_exit(try_sign_from_longitude(lon));
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "{} - {} ({:.4} deg in sign), {:?} {:?}, ruler {}",
                    info.sign.name(),
                    info.dms,
                    info.degrees_in_sign,
                    info.sign.element(),
                    info.sign.quality(),
                    info.sign.ruler()
                );
            }
        }

        Commands::Nakshatra { lon } => {
            let info = or_exit(try_nakshatra_from_longitude(lon));
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "{} (index {}) - Pada {} ({:.4} deg in nakshatra, {:.4} deg in pada)",
                    info.nakshatra.name(),
                    info.nakshatra_index,
                    info.pada,
                    info.degrees_in_nakshatra,
                    info.degrees_in_pada
                );
            }
        }

        Commands::Tithi { elongation } => {
            let info = or_exit(try_tithi_from_elongation(elongation));
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "{info} (tithi {}, {} of paksha, {:.4} deg elapsed)",
                    info.tithi_number, info.tithi_in_paksha, info.degrees_in_tithi
                );
            }
        }

        Commands::Phase { elongation } => {
            let info = or_exit(try_moon_phase_from_elongation(elongation));
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "{} ({}) - {:.1}% illuminated",
                    info.phase.name(),
                    info.phase.tithi_label(),
                    info.illumination_pct
                );
            }
        }

        Commands::Hora { weekday, hour } => {
            let wd = weekday_from_monday(weekday);
            let info = or_exit(planetary_hour(wd, hour));
            if cli.json {
                print_json(&info);
            } else {
                println!(
                    "{wd} {hour:02}:00 - hour of {} (day ruler {}, slot {})",
                    info.ruler.english_name(),
                    info.day_ruler.english_name(),
                    info.hour_index
                );
            }
        }

        Commands::Countries => {
            for (name, offset) in ALL_COUNTRY_OFFSETS {
                println!("{name:<16} {offset:+.2}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minute_and_second_forms() {
        let a = parse_civil("2024-03-20T08:36").unwrap();
        let b = parse_civil("2024-03-20T08:36:00").unwrap();
        assert_eq!(a, b);
        assert!(parse_civil("2024-03-20").is_err());
    }

    #[test]
    fn weekday_numbering_starts_monday() {
        assert_eq!(weekday_from_monday(0), Weekday::Mon);
        assert_eq!(weekday_from_monday(6), Weekday::Sun);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
