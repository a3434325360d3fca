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


use config::{Config, ConfigBuilder, ConfigError, Environment};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use axle_model::MassDistribution;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct VehicleSettings {
    pub mass: f64,
    pub cog_height: f64,
    pub wheelbase: f64,
    pub front_mass_pct: f64,
    pub rear_mass_pct: f64
}

impl VehicleSettings {
    pub fn mass_distribution(&self) -> MassDistribution {
        MassDistribution::new(self.front_mass_pct, self.rear_mass_pct)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct RangeSettings {
    pub theta_min: f64,
    pub theta_max: f64,
    pub accel_min: f64,
    pub accel_max: f64
}

impl RangeSettings {
    /// Swap any bound pair that was entered the wrong way round
    pub fn ordered(&self) -> RangeSettings {
        let (theta_min, theta_max) = match self.theta_max < self.theta_min {
            true => (self.theta_max, self.theta_min),
            false => (self.theta_min, self.theta_max)
        };
        let (accel_min, accel_max) = match self.accel_max < self.accel_min {
            true => (self.accel_max, self.accel_min),
            false => (self.accel_min, self.accel_max)
        };
        RangeSettings { theta_min, theta_max, accel_min, accel_max }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SamplingSettings {
    pub theta_steps: usize,
    pub accel_steps: usize
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct OperatingPointSettings {
    pub theta: f64,
    pub accel: f64
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Settings {
    pub vehicle: VehicleSettings,
    pub ranges: RangeSettings,
    pub sampling: SamplingSettings,
    pub operating_point: OperatingPointSettings
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            vehicle: VehicleSettings {
                mass: 1475.0,
                cog_height: 0.55,
                wheelbase: 2.636,
                front_mass_pct: 60.0,
                rear_mass_pct: 40.0
            },
            ranges: RangeSettings {
                theta_min: -0.35,
                theta_max: 0.35,
                accel_min: -10.0,
                accel_max: 10.0
            },
            sampling: SamplingSettings {
                theta_steps: 5,
                accel_steps: 100
            },
            operating_point: OperatingPointSettings {
                theta: 0.0,
                accel: 0.0
            }
        }
    }
}

impl Settings {
    const MASS: &'static str = "vehicle.mass";
    const COG_HEIGHT: &'static str = "vehicle.cog_height";
    const WHEELBASE: &'static str = "vehicle.wheelbase";
    const FRONT_MASS_PCT: &'static str = "vehicle.front_mass_pct";
    const REAR_MASS_PCT: &'static str = "vehicle.rear_mass_pct";
    const THETA_MIN: &'static str = "ranges.theta_min";
    const THETA_MAX: &'static str = "ranges.theta_max";
    const ACCEL_MIN: &'static str = "ranges.accel_min";
    const ACCEL_MAX: &'static str = "ranges.accel_max";
    const THETA_STEPS: &'static str = "sampling.theta_steps";
    const ACCEL_STEPS: &'static str = "sampling.accel_steps";
    const OP_THETA: &'static str = "operating_point.theta";
    const OP_ACCEL: &'static str = "operating_point.accel";
    pub const CONFIG_FILENAME: &'static str = "axle-load-conf";
    pub const ENV_PREFIX: &'static str = "AXLE";

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default(Settings::MASS, defaults.vehicle.mass)?
            .set_default(Settings::COG_HEIGHT, defaults.vehicle.cog_height)?
            .set_default(Settings::WHEELBASE, defaults.vehicle.wheelbase)?
            .set_default(Settings::FRONT_MASS_PCT, defaults.vehicle.front_mass_pct)?
            .set_default(Settings::REAR_MASS_PCT, defaults.vehicle.rear_mass_pct)?
            .set_default(Settings::THETA_MIN, defaults.ranges.theta_min)?
            .set_default(Settings::THETA_MAX, defaults.ranges.theta_max)?
            .set_default(Settings::ACCEL_MIN, defaults.ranges.accel_min)?
            .set_default(Settings::ACCEL_MAX, defaults.ranges.accel_max)?
            .set_default(Settings::THETA_STEPS, defaults.sampling.theta_steps as i64)?
            .set_default(Settings::ACCEL_STEPS, defaults.sampling.accel_steps as i64)?
            .set_default(Settings::OP_THETA, defaults.operating_point.theta)?
            .set_default(Settings::OP_ACCEL, defaults.operating_point.accel)
    }

    /// Load from `axle-load-conf.toml` in the working directory and `AXLE_`
    /// environment variables, e.g. `AXLE_VEHICLE__MASS=1600`
    pub fn load() -> Result<Self, ConfigError> {
        Settings::load_from(Settings::CONFIG_FILENAME, false)
    }

    pub fn load_from(config_name: &str, required: bool) -> Result<Self, ConfigError> {
        Settings::load_with_environment(config_name, required, Settings::environment())
    }

    /// `AXLE_` then the section and key joined by `__`
    fn environment() -> Environment {
        Environment::with_prefix(Settings::ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn load_with_environment(config_name: &str,
                             required: bool,
                             environment: Environment) -> Result<Self, ConfigError> {
        let settings = Settings::builder_with_defaults()?
            .add_source(config::File::with_name(config_name).required(required))
            .add_source(environment)
            .build()?;
        let ret: Settings = settings.try_deserialize()?;
        info!("Loaded settings from {}", config_name);
        Ok(ret)
    }

    /// Load settings, falling back to the built-in defaults if the sources can't be read
    pub fn load_or_default() -> Self {
        Settings::load().unwrap_or_else(|e| {
            warn!("Failed to load settings. {}", e.to_string());
            Settings::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use config::Map;
    use tempfile::tempdir;
    use super::{RangeSettings, Settings};

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let name = dir.path().join("does-not-exist");
        let settings = Settings::load_from(&name.to_string_lossy(), false).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(Settings::load_from(&name.to_string_lossy(), true).is_err());
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[vehicle]\nmass = 1600.0\nfront_mass_pct = 55.0\n\n[sampling]\ntheta_steps = 9\n").unwrap();
        let settings = Settings::load_from(&path.to_string_lossy(), true).unwrap();
        assert_eq!(settings.vehicle.mass, 1600.0);
        assert_eq!(settings.vehicle.front_mass_pct, 55.0);
        assert_eq!(settings.vehicle.rear_mass_pct, 40.0);
        assert_eq!(settings.sampling.theta_steps, 9);
        assert_eq!(settings.sampling.accel_steps, 100);
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[vehicle]\nmass = 1600.0\n").unwrap();
        let vars = Map::from([
            ("AXLE_VEHICLE__MASS".to_string(), "1700".to_string()),
            ("AXLE_SAMPLING__ACCEL_STEPS".to_string(), "25".to_string())
        ]);
        let environment = Settings::environment().source(Some(vars));
        let settings = Settings::load_with_environment(&path.to_string_lossy(), true, environment).unwrap();
        assert_eq!(settings.vehicle.mass, 1700.0);
        assert_eq!(settings.sampling.accel_steps, 25);
        assert_eq!(settings.vehicle.cog_height, 0.55);
        assert_eq!(settings.sampling.theta_steps, 5);
    }

    #[test]
    fn ranges_are_ordered() {
        let ranges = RangeSettings { theta_min: 0.3, theta_max: -0.3, accel_min: -5.0, accel_max: 5.0 };
        assert_eq!(ranges.ordered(), RangeSettings { theta_min: -0.3, theta_max: 0.3, accel_min: -5.0, accel_max: 5.0 });
        let ranges = RangeSettings { theta_min: -0.1, theta_max: 0.1, accel_min: 4.0, accel_max: -4.0 };
        assert_eq!(ranges.ordered().accel_min, -4.0);
        assert_eq!(ranges.ordered().theta_min, -0.1);
    }
}
