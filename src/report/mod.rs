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


use std::fmt::{Display, Formatter};
use serde::Serialize;
use axle_model::{AxleLoads, LoadTangent, OperatingPoint};
use utils::numeric::round_float_to;
use utils::units::{newtons_to_kgf, rad_to_deg, rad_to_grade_percent};
use crate::session::LoadSession;

#[derive(Debug, Clone, Serialize)]
pub struct VehicleSummary {
    pub mass: f64,
    pub cog_height: f64,
    pub wheelbase: f64,
    pub cog_to_front: f64,
    pub cog_to_rear: f64,
    pub front_mass_pct: f64,
    pub rear_mass_pct: f64
}

#[derive(Debug, Clone, Serialize)]
pub struct GridSummary {
    pub theta_min: f64,
    pub theta_max: f64,
    pub theta_steps: usize,
    pub accel_min: f64,
    pub accel_max: f64,
    pub accel_steps: usize,
    pub min_load: Option<f64>,
    pub max_load: Option<f64>
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub vehicle: VehicleSummary,
    pub grid: GridSummary,
    pub operating_point: OperatingPoint,
    pub front_share_pct: Option<f64>,
    pub tangent: LoadTangent,
    pub tangent_max_error: AxleLoads
}

impl LoadReport {
    pub fn from_session(session: &LoadSession) -> LoadReport {
        let params = session.params();
        let grid = session.grid();
        let distribution = params.mass_distribution();
        let bounds = grid.load_bounds();
        let (theta_steps, accel_steps) = grid.shape();
        let theta = grid.theta();
        let accel = grid.accel();
        let operating_point = *session.operating_point();
        let tangent = *session.tangent();

        LoadReport {
            vehicle: VehicleSummary {
                mass: params.mass(),
                cog_height: params.cog_height(),
                wheelbase: params.wheelbase(),
                cog_to_front: params.cog_to_front(),
                cog_to_rear: params.cog_to_rear(),
                front_mass_pct: distribution.front_pct,
                rear_mass_pct: distribution.rear_pct
            },
            grid: GridSummary {
                theta_min: theta[0],
                theta_max: theta[theta_steps - 1],
                theta_steps,
                accel_min: accel[0],
                accel_max: accel[accel_steps - 1],
                accel_steps,
                min_load: bounds.map(|b| b.0),
                max_load: bounds.map(|b| b.1)
            },
            operating_point,
            front_share_pct: operating_point.loads.front_fraction().map(|f| round_float_to(f * 100.0, 2)),
            tangent,
            tangent_max_error: tangent.max_deviation(params, theta.iter())
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Display for LoadReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let vehicle = &self.vehicle;
        let grid = &self.grid;
        let point = &self.operating_point;
        writeln!(f, "Vehicle")?;
        writeln!(f, "  mass            {:>10.1} kg", vehicle.mass)?;
        writeln!(f, "  CoG height      {:>10.3} m", vehicle.cog_height)?;
        writeln!(f, "  wheelbase       {:>10.3} m", vehicle.wheelbase)?;
        writeln!(f, "  CoG to front    {:>10.4} m", vehicle.cog_to_front)?;
        writeln!(f, "  CoG to rear     {:>10.4} m", vehicle.cog_to_rear)?;
        writeln!(f, "  mass split      {:>6.2}% / {:.2}%", vehicle.front_mass_pct, vehicle.rear_mass_pct)?;
        writeln!(f, "Grid")?;
        writeln!(f, "  slope           {:.3} .. {:.3} rad ({:.1} .. {:.1} deg), {} samples",
                 grid.theta_min, grid.theta_max,
                 rad_to_deg(grid.theta_min), rad_to_deg(grid.theta_max),
                 grid.theta_steps)?;
        writeln!(f, "  acceleration    {:.2} .. {:.2} m/s^2, {} samples",
                 grid.accel_min, grid.accel_max, grid.accel_steps)?;
        if let (Some(min), Some(max)) = (grid.min_load, grid.max_load) {
            writeln!(f, "  load range      {:.1} .. {:.1} N", min, max)?;
        }
        writeln!(f, "Operating point (theta {:.3} rad / {:.1}% grade, accel {:.2} m/s^2)",
                 point.theta, rad_to_grade_percent(point.theta), point.accel)?;
        writeln!(f, "  front load      {:>10.1} N ({:.1} kgf)", point.loads.front, newtons_to_kgf(point.loads.front))?;
        writeln!(f, "  rear load       {:>10.1} N ({:.1} kgf)", point.loads.rear, newtons_to_kgf(point.loads.rear))?;
        match self.front_share_pct {
            Some(share) => writeln!(f, "  front share     {:>10.2} %", share)?,
            None => writeln!(f, "  front share            n/a")?
        }
        writeln!(f, "Tangent at operating point")?;
        writeln!(f, "  front slope     {:>10.1} N/rad", self.tangent.slope.front)?;
        writeln!(f, "  rear slope      {:>10.1} N/rad", self.tangent.slope.rear)?;
        write!(f, "  max error       {:>10.2} N front, {:.2} N rear",
               self.tangent_max_error.front, self.tangent_max_error.rear)
    }
}
