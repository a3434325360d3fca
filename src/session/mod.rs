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


use tracing::{info, warn};
use axle_model::{
    AxleLoadGrid,
    LoadTangent,
    OperatingPoint,
    SampleAxis,
    VehicleParams,
    compute_axle_load_grid,
    compute_nominal_axle_loads
};
use axle_model::Result;
use crate::settings::{OperatingPointSettings, RangeSettings, SamplingSettings, Settings, VehicleSettings};

/// The user editable part of the settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionInputs {
    pub vehicle: VehicleSettings,
    pub ranges: RangeSettings
}

impl SessionInputs {
    pub fn from_settings(settings: &Settings) -> SessionInputs {
        SessionInputs { vehicle: settings.vehicle, ranges: settings.ranges }
    }
}

/// Everything produced by one successful apply. Replaced as a whole
#[derive(Debug, Clone, PartialEq)]
pub struct Computation {
    pub inputs: SessionInputs,
    pub params: VehicleParams,
    pub grid: AxleLoadGrid,
    pub operating_point: OperatingPoint,
    pub tangent: LoadTangent
}

impl Computation {
    fn run(inputs: &SessionInputs,
           sampling: &SamplingSettings,
           operating: &OperatingPointSettings) -> Result<Computation>
    {
        let vehicle = &inputs.vehicle;
        let params = VehicleParams::from_mass_distribution(vehicle.mass,
                                                           vehicle.cog_height,
                                                           vehicle.wheelbase,
                                                           &vehicle.mass_distribution())?;
        let theta_axis = SampleAxis::new(inputs.ranges.theta_min, inputs.ranges.theta_max, sampling.theta_steps)?;
        let accel_axis = SampleAxis::new(inputs.ranges.accel_min, inputs.ranges.accel_max, sampling.accel_steps)?;

        let grid = compute_axle_load_grid(&params, &theta_axis, &accel_axis);
        let operating_point = compute_nominal_axle_loads(&params, operating.theta, operating.accel);
        let tangent = LoadTangent::at_operating_point(&params, &operating_point);
        Ok(Computation { inputs: *inputs, params, grid, operating_point, tangent })
    }
}

/// Host state for interactive exploration.
///
/// Edits go to the pending inputs. `apply` validates them and swaps in a new
/// [`Computation`]; `reset` puts the pending inputs back to the defaults and
/// leaves the current computation alone until the next apply.
pub struct LoadSession {
    defaults: SessionInputs,
    pending: SessionInputs,
    sampling: SamplingSettings,
    operating: OperatingPointSettings,
    current: Computation
}

impl LoadSession {
    pub fn new(settings: &Settings) -> Result<LoadSession> {
        let mut defaults = SessionInputs::from_settings(settings);
        defaults.ranges = defaults.ranges.ordered();
        let current = Computation::run(&defaults, &settings.sampling, &settings.operating_point)?;
        info!("Session started with {} kg vehicle", current.params.mass());
        Ok(LoadSession {
            defaults,
            pending: defaults,
            sampling: settings.sampling,
            operating: settings.operating_point,
            current
        })
    }

    pub fn pending(&self) -> &SessionInputs {
        &self.pending
    }

    pub fn pending_mut(&mut self) -> &mut SessionInputs {
        &mut self.pending
    }

    pub fn defaults(&self) -> &SessionInputs {
        &self.defaults
    }

    pub fn current(&self) -> &Computation {
        &self.current
    }

    pub fn params(&self) -> &VehicleParams {
        &self.current.params
    }

    pub fn grid(&self) -> &AxleLoadGrid {
        &self.current.grid
    }

    pub fn operating_point(&self) -> &OperatingPoint {
        &self.current.operating_point
    }

    pub fn tangent(&self) -> &LoadTangent {
        &self.current.tangent
    }

    pub fn has_unapplied_edits(&self) -> bool {
        self.pending != self.current.inputs
    }

    /// Commit the pending inputs. On failure the previous computation,
    /// including its CoG offsets, stays in place.
    pub fn apply(&mut self) -> Result<()> {
        self.pending.ranges = self.pending.ranges.ordered();
        match Computation::run(&self.pending, &self.sampling, &self.operating) {
            Ok(computation) => {
                info!("Applied vehicle parameters. lf {:.4} m, lr {:.4} m",
                      computation.params.cog_to_front(),
                      computation.params.cog_to_rear());
                self.current = computation;
                Ok(())
            }
            Err(e) => {
                warn!("Rejected apply. {}", e.to_string());
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        info!("Resetting inputs to defaults");
        self.pending = self.defaults;
    }
}
