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


use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};
use utils::numeric::is_valid_percentage;
use crate::error::AppError;
use crate::export::write_grid_csv_to_path;
use crate::plot::draw_load_charts;
use crate::report::LoadReport;
use crate::session::{LoadSession, SessionInputs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Mass,
    CogHeight,
    Wheelbase,
    FrontMassPct,
    RearMassPct,
    ThetaMin,
    ThetaMax,
    AccelMin,
    AccelMax
}

impl InputField {
    pub const ALL: [InputField; 9] = [
        InputField::Mass,
        InputField::CogHeight,
        InputField::Wheelbase,
        InputField::FrontMassPct,
        InputField::RearMassPct,
        InputField::ThetaMin,
        InputField::ThetaMax,
        InputField::AccelMin,
        InputField::AccelMax
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::Mass => "mass",
            InputField::CogHeight => "cog_height",
            InputField::Wheelbase => "wheelbase",
            InputField::FrontMassPct => "front_pct",
            InputField::RearMassPct => "rear_pct",
            InputField::ThetaMin => "theta_min",
            InputField::ThetaMax => "theta_max",
            InputField::AccelMin => "accel_min",
            InputField::AccelMax => "accel_max"
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            InputField::Mass => "kg",
            InputField::CogHeight | InputField::Wheelbase => "m",
            InputField::FrontMassPct | InputField::RearMassPct => "%",
            InputField::ThetaMin | InputField::ThetaMax => "rad",
            InputField::AccelMin | InputField::AccelMax => "m/s^2"
        }
    }

    pub fn from_name(name: &str) -> Option<InputField> {
        InputField::ALL.into_iter().find(|field| field.as_str() == name)
    }

    pub fn get(&self, inputs: &SessionInputs) -> f64 {
        match self {
            InputField::Mass => inputs.vehicle.mass,
            InputField::CogHeight => inputs.vehicle.cog_height,
            InputField::Wheelbase => inputs.vehicle.wheelbase,
            InputField::FrontMassPct => inputs.vehicle.front_mass_pct,
            InputField::RearMassPct => inputs.vehicle.rear_mass_pct,
            InputField::ThetaMin => inputs.ranges.theta_min,
            InputField::ThetaMax => inputs.ranges.theta_max,
            InputField::AccelMin => inputs.ranges.accel_min,
            InputField::AccelMax => inputs.ranges.accel_max
        }
    }

    pub fn set(&self, inputs: &mut SessionInputs, value: f64) {
        let target = match self {
            InputField::Mass => &mut inputs.vehicle.mass,
            InputField::CogHeight => &mut inputs.vehicle.cog_height,
            InputField::Wheelbase => &mut inputs.vehicle.wheelbase,
            InputField::FrontMassPct => &mut inputs.vehicle.front_mass_pct,
            InputField::RearMassPct => &mut inputs.vehicle.rear_mass_pct,
            InputField::ThetaMin => &mut inputs.ranges.theta_min,
            InputField::ThetaMax => &mut inputs.ranges.theta_max,
            InputField::AccelMin => &mut inputs.ranges.accel_min,
            InputField::AccelMax => &mut inputs.ranges.accel_max
        };
        *target = value;
    }

    fn accepts(&self, value: f64) -> bool {
        match self {
            InputField::FrontMassPct | InputField::RearMassPct => is_valid_percentage(value),
            _ => value.is_finite()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Show,
    Set(InputField, f64),
    Apply,
    Reset,
    Report,
    Csv(PathBuf),
    Svg(PathBuf),
    Help,
    Quit
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("unknown command `{0}`. type `help` for a list of commands")]
    UnknownCommand(String),
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("invalid value `{0}` for `{1}`")]
    InvalidValue(String, String),
    #[error("`{0}` expects {1}")]
    MissingArgument(String, &'static str)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or("").to_lowercase();
        let command = match name.as_str() {
            "show" => Command::Show,
            "apply" => Command::Apply,
            "reset" => Command::Reset,
            "report" => Command::Report,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "csv" | "svg" => {
                let path = words.next().ok_or(CommandError::MissingArgument(name.clone(), "a file path"))?;
                match name.as_str() {
                    "csv" => Command::Csv(PathBuf::from(path)),
                    _ => Command::Svg(PathBuf::from(path))
                }
            }
            "set" => {
                let field_name = words.next().ok_or(CommandError::MissingArgument(name.clone(), "a field and a value"))?;
                let field = InputField::from_name(field_name)
                    .ok_or_else(|| CommandError::UnknownField(field_name.to_string()))?;
                let raw = words.next().ok_or(CommandError::MissingArgument(name.clone(), "a value"))?;
                let value = raw.parse::<f64>()
                    .ok()
                    .filter(|v| field.accepts(*v))
                    .ok_or_else(|| CommandError::InvalidValue(raw.to_string(), field_name.to_string()))?;
                Command::Set(field, value)
            }
            _ => return Err(CommandError::UnknownCommand(line.trim().to_string()))
        };
        Ok(command)
    }
}

fn write_pending<W: Write>(session: &LoadSession, out: &mut W) -> std::io::Result<()> {
    for field in InputField::ALL {
        writeln!(out, "  {:<12} {:>10.4} {:<6} (default {})",
                 field.as_str(), field.get(session.pending()), field.unit(), field.get(session.defaults()))?;
    }
    if session.has_unapplied_edits() {
        writeln!(out, "  (unapplied changes)")?;
    }
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  show                 list the editable inputs")?;
    writeln!(out, "  set <field> <value>  edit an input. fields: {}",
             InputField::ALL.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", "))?;
    writeln!(out, "  apply                recompute the grid and operating point")?;
    writeln!(out, "  reset                restore the default inputs")?;
    writeln!(out, "  report               print the current results")?;
    writeln!(out, "  csv <path>           export the grid")?;
    writeln!(out, "  svg <path>           draw the load charts")?;
    writeln!(out, "  quit")
}

/// Read commands line by line until `quit` or end of input
pub fn run<R: BufRead, W: Write>(session: &mut LoadSession, input: R, mut out: W) -> Result<(), AppError> {
    info!("Starting interactive console");
    write_help(&mut out)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match Command::from_str(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        match command {
            Command::Show => write_pending(session, &mut out)?,
            Command::Set(field, value) => {
                field.set(session.pending_mut(), value);
            }
            Command::Apply => match session.apply() {
                Ok(_) => writeln!(out, "{}", LoadReport::from_session(session))?,
                Err(e) => writeln!(out, "apply rejected, keeping previous results. {}", e)?
            },
            Command::Reset => {
                session.reset();
                writeln!(out, "inputs reset to defaults. apply to recompute")?;
            }
            Command::Report => writeln!(out, "{}", LoadReport::from_session(session))?,
            Command::Csv(path) => match write_grid_csv_to_path(session.grid(), &path) {
                Ok(_) => writeln!(out, "grid written to {}", path.display())?,
                Err(e) => {
                    warn!("csv export failed. {}", e.to_string());
                    writeln!(out, "csv export failed. {}", e)?
                }
            },
            Command::Svg(path) => match draw_load_charts(session, &path) {
                Ok(_) => writeln!(out, "charts written to {}", path.display())?,
                Err(e) => {
                    warn!("chart drawing failed. {}", e.to_string());
                    writeln!(out, "{}", e)?
                }
            },
            Command::Help => write_help(&mut out)?,
            Command::Quit => break
        }
    }
    info!("Interactive console closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::str::FromStr;
    use crate::session::LoadSession;
    use crate::settings::Settings;
    use super::{run, Command, CommandError, InputField};

    #[test]
    fn parse_commands() {
        assert_eq!(Command::from_str("apply"), Ok(Command::Apply));
        assert_eq!(Command::from_str("  RESET "), Ok(Command::Reset));
        assert_eq!(Command::from_str("set mass 1600"), Ok(Command::Set(InputField::Mass, 1600.0)));
        assert_eq!(Command::from_str("set theta_min -0.2"), Ok(Command::Set(InputField::ThetaMin, -0.2)));
        assert_eq!(Command::from_str("csv out.csv"), Ok(Command::Csv(PathBuf::from("out.csv"))));
        assert_eq!(Command::from_str("exit"), Ok(Command::Quit));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Command::from_str("launch"), Err(CommandError::UnknownCommand("launch".to_string())));
        assert_eq!(Command::from_str("set speed 3"), Err(CommandError::UnknownField("speed".to_string())));
        assert_eq!(Command::from_str("set mass heavy"),
                   Err(CommandError::InvalidValue("heavy".to_string(), "mass".to_string())));
        assert_eq!(Command::from_str("set front_pct 120"),
                   Err(CommandError::InvalidValue("120".to_string(), "front_pct".to_string())));
        assert!(matches!(Command::from_str("set mass"), Err(CommandError::MissingArgument(_, _))));
        assert!(matches!(Command::from_str("svg"), Err(CommandError::MissingArgument(_, _))));
    }

    #[test]
    fn field_names_round_trip() {
        for field in InputField::ALL {
            assert_eq!(InputField::from_name(field.as_str()), Some(field));
        }
    }

    #[test]
    fn console_apply_and_reset() {
        let mut session = LoadSession::new(&Settings::default()).unwrap();
        let script = "set mass 2000\nset front_pct 50\nset rear_pct 50\napply\nreset\nshow\nquit\nset mass 1\n";
        let mut out: Vec<u8> = Vec::new();
        run(&mut session, Cursor::new(script), &mut out).unwrap();

        assert_eq!(session.params().mass(), 2000.0);
        assert_eq!(session.pending().vehicle.mass, 1475.0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Operating point"));
        assert!(text.contains("inputs reset to defaults"));
        assert!(text.contains("(unapplied changes)"));
    }

    #[test]
    fn console_rejected_apply() {
        let mut session = LoadSession::new(&Settings::default()).unwrap();
        let script = "set front_pct 0\nset rear_pct 0\napply\n";
        let mut out: Vec<u8> = Vec::new();
        run(&mut session, Cursor::new(script), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("apply rejected"));
        assert!((session.params().cog_to_rear() - 1.5816).abs() < 1e-9);
    }
}
