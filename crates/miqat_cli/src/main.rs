use std::fmt::Display;

use chrono::Local;
use clap::{ArgAction, Parser, Subcommand};
use log::info;
use miqat_salat::{
    ALL_EVENTS, ALL_METHODS, Adjustments, AsrRatio, CalculationConfig, CalculationMethod,
    ClockTime, EventOutcome, Location, MethodConfig, Precision, PrayerCalculator, PrayerEvent,
    ScanGrid, Times, TwilightAngles, hours_to_hm, hours_to_hms, scan,
};
use miqat_solar::{qibla, qibla_dms};
use miqat_time::{
    GregorianDate, UtcOffset, gregorian_to_hijri, gregorian_to_jd, hijri_to_gregorian,
    jd_to_gregorian, jd_to_weekday,
};

#[derive(Parser)]
#[command(name = "miqat", about = "Islamic prayer times, qibla and Umm al-Qura dates")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prayer times for a location and date
    Times {
        /// Date (YYYY-MM-DD), default today
        #[arg(long, allow_hyphen_values = true)]
        date: Option<String>,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
        /// Height above terrain in meters
        #[arg(long, default_value = "0")]
        alt: f64,
        /// UTC offset in hours, default the system time zone
        #[arg(long, allow_hyphen_values = true)]
        tz: Option<f64>,
        /// Named method (see `methods`)
        #[arg(long, default_value = "mwl")]
        method: String,
        /// Explicit fajr angle in degrees, overrides --method
        #[arg(long, requires = "isha")]
        fajr: Option<f64>,
        /// Explicit isha angle in degrees, overrides --method
        #[arg(long, requires = "fajr")]
        isha: Option<f64>,
        /// Asr school: hanafi, or anything else for the majority ratio
        #[arg(long)]
        asr: Option<String>,
        /// Drop the default +2 min zuhr adjustment
        #[arg(long)]
        no_adjust: bool,
        /// Print seconds
        #[arg(long)]
        seconds: bool,
        /// Number of consecutive days
        #[arg(long, default_value = "1")]
        days: usize,
    },
    /// Qibla bearing from a location
    Qibla {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },
    /// Julian Day and weekday of a date
    Jd {
        /// Date (YYYY-MM-DD)
        #[arg(long, allow_hyphen_values = true)]
        date: String,
    },
    /// Calendar date of a Julian Day
    Calendar {
        #[arg(long)]
        jd: f64,
    },
    /// Umm al-Qura date of a Gregorian date
    Hijri {
        /// Date (YYYY-MM-DD), default today
        #[arg(long, allow_hyphen_values = true)]
        date: Option<String>,
    },
    /// Gregorian date of an Umm al-Qura date
    HijriToGregorian {
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
    },
    /// List the named calculation methods
    Methods,
    /// Count undefined events per latitude over a year
    Extremes {
        #[arg(long, default_value = "mwl")]
        method: String,
        #[arg(long)]
        asr: Option<String>,
        /// Days between samples
        #[arg(long, default_value = "5")]
        step_days: u32,
        /// Degrees between latitude rows
        #[arg(long, default_value = "1")]
        step_lat: f64,
        /// Also print latitudes where every event is defined
        #[arg(long)]
        all: bool,
    },
}

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn weekday_name(weekday: u8) -> &'static str {
    WEEKDAYS[usize::from(weekday.clamp(1, 7)) - 1]
}

fn or_exit<T, E: Display>(result: Result<T, E>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{what}: {e}");
        std::process::exit(1);
    })
}

/// Parse "YYYY-MM-DD". Years may be negative ("-0100-03-01").
fn parse_date(s: &str) -> Result<GregorianDate, String> {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s),
    };
    let parts: Vec<&str> = rest.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("year: {e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("month: {e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("day: {e}"))?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(format!("month or day out of range in {s}"));
    }
    Ok(GregorianDate::new(sign * year, month, day))
}

fn date_or_today(date: Option<&str>) -> GregorianDate {
    match date {
        Some(s) => or_exit(parse_date(s), "Invalid date"),
        None => GregorianDate::from(Local::now().date_naive()),
    }
}

fn method_config(
    method: &str,
    fajr: Option<f64>,
    isha: Option<f64>,
    asr: Option<&str>,
    no_adjust: bool,
) -> MethodConfig {
    let adjustments = no_adjust.then(Adjustments::none);
    let mut config = or_exit(MethodConfig::named(method, asr, adjustments), "Invalid method");
    if let (Some(fajr), Some(isha)) = (fajr, isha) {
        config.angles = TwilightAngles::new(fajr, isha);
    }
    config
}

fn offset_label(offset: UtcOffset) -> String {
    match offset.to_fixed_offset() {
        Some(fixed) => fixed.to_string(),
        None => format!("{}h", offset.hours()),
    }
}

fn clock_at(hours: f64, precision: Precision) -> Option<ClockTime> {
    match precision {
        Precision::Minutes => hours_to_hm(hours).map(|(hour, minute)| ClockTime {
            hour,
            minute,
            second: None,
        }),
        Precision::Seconds => hours_to_hms(hours).map(|(hour, minute, second)| ClockTime {
            hour,
            minute,
            second: Some(second),
        }),
    }
}

/// Clock time of `event`, or why there is none. Finite times outside the
/// day are shown on the neighbouring day.
fn event_label(times: &Times, event: PrayerEvent) -> String {
    if let Some(clock) = times.get(event) {
        return clock.to_string();
    }
    match times.outcome(event) {
        EventOutcome::At(hours) => {
            let (shifted, side, day) = if hours >= 0.0 {
                ((hours - 24.0).max(0.0), "after", "+1d")
            } else {
                (hours + 24.0, "before", "-1d")
            };
            match clock_at(shifted, times.precision()) {
                Some(clock) => format!("{side} midnight ({clock} {day})"),
                None => format!("-- ({hours:.4} h)"),
            }
        }
        EventOutcome::Never => "-- (never reached)".to_string(),
        EventOutcome::AlwaysPast => "-- (always exceeded)".to_string(),
    }
}

fn print_day(jd: f64, times: Times, seconds: bool) {
    let precision = if seconds {
        Precision::Seconds
    } else {
        Precision::Minutes
    };
    let times = times.with_precision(precision);

    let header = match jd_to_gregorian(jd) {
        Ok(date) => {
            let hijri = gregorian_to_hijri(date.year, date.month, date.day)
                .map(|h| format!(" / {h}"))
                .unwrap_or_default();
            format!("{date} {}{hijri}", weekday_name(jd_to_weekday(jd)))
        }
        Err(_) => format!("JD {jd}"),
    };
    println!("{header}");
    for event in ALL_EVENTS {
        println!("  {:<8} {}", event.name(), event_label(&times, event));
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Times {
            date,
            lat,
            lng,
            alt,
            tz,
            method,
            fajr,
            isha,
            asr,
            no_adjust,
            seconds,
            days,
        } => {
            let date = date_or_today(date.as_deref());
            let offset = match tz {
                Some(hours) => UtcOffset::from_hours(hours),
                None => UtcOffset::from_timezone(&Local),
            };
            info!("location {lat},{lng} h={alt} tz={}", offset_label(offset));
            let config = CalculationConfig::new(
                method_config(&method, fajr, isha, asr.as_deref(), no_adjust),
                Location::new(lat, lng, alt, offset),
            );
            let mut calc = PrayerCalculator::new(config);
            or_exit(calc.set_date(date.year, date.month, date.day), "Invalid date");
            for (i, (jd, times)) in calc.days(days).enumerate() {
                if i > 0 {
                    println!();
                }
                print_day(jd, times, seconds);
            }
        }

        Commands::Qibla { lat, lng } => {
            let deg = qibla(lat, lng);
            let dms = qibla_dms(lat, lng);
            println!(
                "{deg:.4} deg ({} deg {} min {:.1} sec) clockwise from north",
                dms.degrees, dms.minutes, dms.seconds
            );
        }

        Commands::Jd { date } => {
            let date = or_exit(parse_date(&date), "Invalid date");
            let jd = or_exit(gregorian_to_jd(date.year, date.month, date.day), "Invalid date");
            println!("JD {jd:.1} ({})", weekday_name(jd_to_weekday(jd)));
        }

        Commands::Calendar { jd } => {
            let date = or_exit(jd_to_gregorian(jd), "Invalid Julian Day");
            println!("{date} ({})", weekday_name(jd_to_weekday(jd)));
        }

        Commands::Hijri { date } => {
            let date = date_or_today(date.as_deref());
            let hijri = or_exit(
                gregorian_to_hijri(date.year, date.month, date.day),
                "Conversion failed",
            );
            println!("{hijri} ({}-day month)", hijri.month_length);
        }

        Commands::HijriToGregorian { year, month, day } => {
            let date = or_exit(hijri_to_gregorian(year, month, day), "Conversion failed");
            let weekday = or_exit(date.weekday(), "Conversion failed");
            println!("{date} ({})", weekday_name(weekday));
        }

        Commands::Methods => {
            println!("{:<14} {:>6} {:>6}  description", "name", "fajr", "isha");
            for m in ALL_METHODS {
                let a = m.angles();
                println!(
                    "{:<14} {:>6.1} {:>6.1}  {}",
                    m.name(),
                    a.fajr_deg,
                    a.isha_deg,
                    m.description()
                );
            }
        }

        Commands::Extremes {
            method,
            asr,
            step_days,
            step_lat,
            all,
        } => {
            let method_cfg = MethodConfig::new(
                or_exit(CalculationMethod::from_name(&method), "Invalid method"),
                AsrRatio::from_name(asr.as_deref()),
                Adjustments::default(),
            );
            let grid = ScanGrid {
                step_days,
                step_lat_deg: step_lat,
                ..ScanGrid::default()
            };
            let rows = or_exit(scan(&method_cfg, &grid), "Scan failed");

            print!("{:>7} {:>5}", "lat", "days");
            for event in ALL_EVENTS {
                print!(" {:>11}", event.name());
            }
            println!();
            for row in rows.iter().filter(|r| all || !r.is_regular()) {
                print!("{:>7.2} {:>5}", row.latitude_deg, row.samples);
                for event in ALL_EVENTS {
                    let cell = format!("{}/{}", row.never(event), row.always_past(event));
                    print!(" {cell:>11}");
                }
                println!();
            }
            println!("(cells: never reached / always exceeded)");
        }
    }
}
