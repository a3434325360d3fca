/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of axle-load.
 *
 * axle-load is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * axle-load is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with axle-load. If not, see <https://www.gnu.org/licenses/>.
 */


mod error;
mod settings;
mod session;
mod report;
mod export;
mod plot;
mod console;

use std::env;
use std::io;
use std::path::PathBuf;
use clap::Parser;
use tracing::{info, warn};
use utils::numeric::is_valid_percentage_str;

use crate::error::AppError;
use crate::report::LoadReport;
use crate::session::{LoadSession, SessionInputs};
use crate::settings::Settings;

fn parse_percentage(val: &str) -> Result<f64, String> {
    if val.trim().is_empty() || !is_valid_percentage_str(val) {
        return Err(format!("`{}` is not a percentage between 0 and 100", val));
    }
    val.trim().parse::<f64>().map_err(|e| e.to_string())
}

/// Quasi-static front/rear axle loads against road slope and acceleration
#[derive(Parser, Debug)]
#[command(name = "axle-load", version)]
struct Args {
    /// Settings file to load instead of axle-load-conf.toml
    #[arg(long)]
    config: Option<String>,
    /// Vehicle mass (kg)
    #[arg(long)]
    mass: Option<f64>,
    /// Centre of gravity height (m)
    #[arg(long)]
    cog_height: Option<f64>,
    /// Wheelbase (m)
    #[arg(long)]
    wheelbase: Option<f64>,
    /// Mass on the front axle (%)
    #[arg(long, value_parser = parse_percentage)]
    front_pct: Option<f64>,
    /// Mass on the rear axle (%)
    #[arg(long, value_parser = parse_percentage)]
    rear_pct: Option<f64>,
    /// Lowest sampled slope (rad)
    #[arg(long, allow_negative_numbers = true)]
    theta_min: Option<f64>,
    /// Highest sampled slope (rad)
    #[arg(long, allow_negative_numbers = true)]
    theta_max: Option<f64>,
    /// Lowest sampled acceleration (m/s^2)
    #[arg(long, allow_negative_numbers = true)]
    accel_min: Option<f64>,
    /// Highest sampled acceleration (m/s^2)
    #[arg(long, allow_negative_numbers = true)]
    accel_max: Option<f64>,
    /// Export the load grid to a csv file
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Draw the load charts to an svg file
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Print the report as json
    #[arg(long)]
    json: bool,
    /// Read set/apply/reset commands from stdin before reporting
    #[arg(short, long)]
    interactive: bool
}

impl Args {
    /// Copy any overrides onto the session inputs. Returns true if anything was set
    fn apply_overrides(&self, inputs: &mut SessionInputs) -> bool {
        let overrides = [
            (self.mass, &mut inputs.vehicle.mass),
            (self.cog_height, &mut inputs.vehicle.cog_height),
            (self.wheelbase, &mut inputs.vehicle.wheelbase),
            (self.front_pct, &mut inputs.vehicle.front_mass_pct),
            (self.rear_pct, &mut inputs.vehicle.rear_mass_pct),
            (self.theta_min, &mut inputs.ranges.theta_min),
            (self.theta_max, &mut inputs.ranges.theta_max),
            (self.accel_min, &mut inputs.ranges.accel_min),
            (self.accel_max, &mut inputs.ranges.accel_max)
        ];
        let mut changed = false;
        for (value, target) in overrides {
            if let Some(v) = value {
                *target = v;
                changed = true;
            }
        }
        changed
    }
}

fn init_logging() {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "axle_load.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }
}

fn main() -> Result<(), AppError> {
    init_logging();
    let args = Args::parse();

    let settings = match &args.config {
        Some(config_name) => Settings::load_from(config_name, true)?,
        None => Settings::load_or_default()
    };
    let mut session = LoadSession::new(&settings)?;
    if args.apply_overrides(session.pending_mut()) {
        if let Err(e) = session.apply() {
            warn!("Command line overrides rejected. {}", e.to_string());
            eprintln!("Ignoring command line overrides. {}", e);
        }
    }

    if args.interactive {
        console::run(&mut session, io::stdin().lock(), io::stdout())?;
    }

    let report = LoadReport::from_session(&session);
    match args.json {
        true => println!("{}", report.to_json()?),
        false => println!("{}", report)
    }

    if let Some(path) = &args.csv {
        export::write_grid_csv_to_path(session.grid(), path)?;
    }
    if let Some(path) = &args.svg {
        plot::draw_load_charts(&session, path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use crate::session::SessionInputs;
    use crate::settings::Settings;
    use super::Args;

    #[test]
    fn parse_overrides() {
        let args = Args::try_parse_from(["axle-load", "--mass", "1600", "--theta-min", "-0.2", "--front-pct", "55"]).unwrap();
        let mut inputs = SessionInputs::from_settings(&Settings::default());
        assert!(args.apply_overrides(&mut inputs));
        assert_eq!(inputs.vehicle.mass, 1600.0);
        assert_eq!(inputs.vehicle.front_mass_pct, 55.0);
        assert_eq!(inputs.ranges.theta_min, -0.2);
        assert_eq!(inputs.ranges.theta_max, 0.35);
    }

    #[test]
    fn no_overrides() {
        let args = Args::try_parse_from(["axle-load", "--json"]).unwrap();
        let mut inputs = SessionInputs::from_settings(&Settings::default());
        assert!(!args.apply_overrides(&mut inputs));
        assert!(args.json);
        assert_eq!(inputs, SessionInputs::from_settings(&Settings::default()));
    }

    #[test]
    fn settings_are_never_written_back() {
        assert!(Args::try_parse_from(["axle-load", "--write-config"]).is_err());
    }

    #[test]
    fn percentage_must_be_in_range() {
        assert!(Args::try_parse_from(["axle-load", "--rear-pct", "140"]).is_err());
        assert!(Args::try_parse_from(["axle-load", "--rear-pct", "abc"]).is_err());
        assert!(Args::try_parse_from(["axle-load", "--rear-pct", "0"]).is_ok());
    }
}
