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


use serde::{Deserialize, Serialize};
use crate::error::{ModelError, Result};
use crate::model::GRAVITY;

fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(ModelError::InvalidParameter(name, format!("{} is not a finite number", value)));
    }
    Ok(value)
}

fn ensure_positive(name: &'static str, value: f64) -> Result<f64> {
    if ensure_finite(name, value)? <= 0.0 {
        return Err(ModelError::InvalidParameter(name, format!("{} must be greater than 0", value)));
    }
    Ok(value)
}

fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64> {
    if ensure_finite(name, value)? < 0.0 {
        return Err(ModelError::InvalidParameter(name, format!("{} must not be negative", value)));
    }
    Ok(value)
}

/// Longitudinal distances from the centre of gravity to each axle (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CogOffsets {
    pub cog_to_front: f64,
    pub cog_to_rear: f64
}

/// Percentage of the vehicle mass carried by each axle as entered by a user.
///
/// The two values don't need to add up to 100; they are normalised against
/// each other when converted into CoG offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassDistribution {
    pub front_pct: f64,
    pub rear_pct: f64
}

impl MassDistribution {
    pub fn new(front_pct: f64, rear_pct: f64) -> MassDistribution {
        MassDistribution { front_pct, rear_pct }
    }

    /// Front and rear mass fractions scaled so they sum to 1
    pub fn normalised_fractions(&self) -> Result<(f64, f64)> {
        for pct in [self.front_pct, self.rear_pct] {
            if !pct.is_finite() || pct < 0.0 {
                return Err(ModelError::InvalidPercentage(pct));
            }
        }
        let front = self.front_pct / 100.0;
        let rear = self.rear_pct / 100.0;
        let sum = front + rear;
        if sum <= 0.0 {
            return Err(ModelError::DegenerateMassSplit { front: self.front_pct, rear: self.rear_pct });
        }
        Ok((front / sum, rear / sum))
    }

    pub fn cog_offsets(&self, wheelbase: f64) -> Result<CogOffsets> {
        derive_cog_offsets(wheelbase, self.front_pct, self.rear_pct)
    }
}

/// Convert a front/rear mass split into CoG to axle distances.
///
/// The front mass fraction sets the CoG to *rear* axle distance and vice versa:
/// the more mass over the front axle, the further the CoG sits from the rear
/// axle. `lr = front_fraction * L`, `lf = rear_fraction * L`.
pub fn derive_cog_offsets(wheelbase: f64, front_pct: f64, rear_pct: f64) -> Result<CogOffsets> {
    let wheelbase = ensure_positive("wheelbase", wheelbase)?;
    let (front_fraction, rear_fraction) = MassDistribution::new(front_pct, rear_pct).normalised_fractions()?;
    Ok(CogOffsets {
        cog_to_front: rear_fraction * wheelbase,
        cog_to_rear: front_fraction * wheelbase
    })
}

/// Snapshot of the vehicle properties the load-transfer model needs.
///
/// Only constructable through validating functions so a held value always
/// has a positive mass and wheelbase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VehicleParams {
    mass: f64,
    cog_height: f64,
    wheelbase: f64,
    cog_to_front: f64,
    cog_to_rear: f64
}

impl VehicleParams {
    /// - `mass`: kg
    /// - `cog_height`: height of the CoG above the road (m)
    /// - `wheelbase`: distance between the axles (m)
    /// - `cog_to_front`/`cog_to_rear`: CoG to axle distances (m)
    pub fn new(mass: f64,
               cog_height: f64,
               wheelbase: f64,
               cog_to_front: f64,
               cog_to_rear: f64) -> Result<VehicleParams>
    {
        Ok(VehicleParams {
            mass: ensure_positive("mass", mass)?,
            cog_height: ensure_non_negative("cog_height", cog_height)?,
            wheelbase: ensure_positive("wheelbase", wheelbase)?,
            cog_to_front: ensure_non_negative("cog_to_front", cog_to_front)?,
            cog_to_rear: ensure_non_negative("cog_to_rear", cog_to_rear)?
        })
    }

    pub fn from_mass_distribution(mass: f64,
                                  cog_height: f64,
                                  wheelbase: f64,
                                  distribution: &MassDistribution) -> Result<VehicleParams>
    {
        let offsets = distribution.cog_offsets(wheelbase)?;
        VehicleParams::new(mass, cog_height, wheelbase, offsets.cog_to_front, offsets.cog_to_rear)
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn cog_height(&self) -> f64 {
        self.cog_height
    }

    pub fn wheelbase(&self) -> f64 {
        self.wheelbase
    }

    pub fn cog_to_front(&self) -> f64 {
        self.cog_to_front
    }

    pub fn cog_to_rear(&self) -> f64 {
        self.cog_to_rear
    }

    /// Static weight (N)
    pub fn weight(&self) -> f64 {
        self.mass * GRAVITY
    }

    /// The mass split implied by the CoG position. Front % = lr / L, rear % = lf / L
    pub fn mass_distribution(&self) -> MassDistribution {
        MassDistribution {
            front_pct: (self.cog_to_rear / self.wheelbase) * 100.0,
            rear_pct: (self.cog_to_front / self.wheelbase) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ModelError;
    use super::{derive_cog_offsets, MassDistribution, VehicleParams};

    #[test]
    fn front_mass_sets_rear_offset() {
        let offsets = derive_cog_offsets(2.636, 60.0, 40.0).unwrap();
        assert!((offsets.cog_to_rear - 1.5816).abs() < 1e-9);
        assert!((offsets.cog_to_front - 1.0544).abs() < 1e-9);
    }

    #[test]
    fn split_is_normalised() {
        let offsets = derive_cog_offsets(2.0, 30.0, 20.0).unwrap();
        assert!((offsets.cog_to_rear - 1.2).abs() < 1e-9);
        assert!((offsets.cog_to_front - 0.8).abs() < 1e-9);
        assert!((offsets.cog_to_front + offsets.cog_to_rear - 2.0).abs() < 1e-12);

        let offsets = derive_cog_offsets(2.636, 600.0, 400.0).unwrap();
        assert!((offsets.cog_to_rear - 1.5816).abs() < 1e-9);
    }

    #[test]
    fn zero_split_is_rejected() {
        assert_eq!(derive_cog_offsets(2.636, 0.0, 0.0),
                   Err(ModelError::DegenerateMassSplit { front: 0.0, rear: 0.0 }));
    }

    #[test]
    fn negative_or_nan_split_is_rejected() {
        assert_eq!(derive_cog_offsets(2.636, -10.0, 110.0), Err(ModelError::InvalidPercentage(-10.0)));
        assert!(derive_cog_offsets(2.636, f64::NAN, 50.0).is_err());
    }

    #[test]
    fn all_mass_on_one_axle() {
        let offsets = derive_cog_offsets(2.5, 100.0, 0.0).unwrap();
        assert_eq!(offsets.cog_to_rear, 2.5);
        assert_eq!(offsets.cog_to_front, 0.0);
    }

    #[test]
    fn derivation_rejects_bad_wheelbase() {
        assert!(matches!(derive_cog_offsets(0.0, 60.0, 40.0), Err(ModelError::InvalidParameter("wheelbase", _))));
        assert!(matches!(derive_cog_offsets(-1.0, 60.0, 40.0), Err(ModelError::InvalidParameter("wheelbase", _))));
    }

    #[test]
    fn params_validation() {
        assert!(VehicleParams::new(1475.0, 0.55, 2.636, 1.0544, 1.5816).is_ok());
        assert!(VehicleParams::new(1475.0, 0.0, 2.636, 0.0, 2.636).is_ok());
        assert!(matches!(VehicleParams::new(0.0, 0.55, 2.636, 1.0, 1.0), Err(ModelError::InvalidParameter("mass", _))));
        assert!(matches!(VehicleParams::new(1475.0, -0.1, 2.636, 1.0, 1.0), Err(ModelError::InvalidParameter("cog_height", _))));
        assert!(matches!(VehicleParams::new(1475.0, 0.55, 0.0, 1.0, 1.0), Err(ModelError::InvalidParameter("wheelbase", _))));
        assert!(matches!(VehicleParams::new(1475.0, 0.55, 2.636, -1.0, 1.0), Err(ModelError::InvalidParameter("cog_to_front", _))));
        assert!(matches!(VehicleParams::new(1475.0, 0.55, 2.636, 1.0, f64::INFINITY), Err(ModelError::InvalidParameter("cog_to_rear", _))));
    }

    #[test]
    fn mass_distribution_round_trip() {
        let params = VehicleParams::from_mass_distribution(1475.0, 0.55, 2.636, &MassDistribution::new(60.0, 40.0)).unwrap();
        let distribution = params.mass_distribution();
        assert!((distribution.front_pct - 60.0).abs() < 1e-9);
        assert!((distribution.rear_pct - 40.0).abs() < 1e-9);
    }

    #[test]
    fn weight_uses_standard_gravity() {
        let params = VehicleParams::new(1000.0, 0.5, 2.5, 1.25, 1.25).unwrap();
        assert!((params.weight() - 9810.0).abs() < 1e-9);
    }
}
