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


use serde::Serialize;
use crate::model::formula::{axle_loads, AxleLoads};
use crate::vehicle::VehicleParams;

/// The reference `(theta, accel)` pair and the axle loads it produces
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    pub theta: f64,
    pub accel: f64,
    pub loads: AxleLoads
}

impl OperatingPoint {
    pub fn front(&self) -> f64 {
        self.loads.front
    }

    pub fn rear(&self) -> f64 {
        self.loads.rear
    }
}

pub fn compute_nominal_axle_loads(params: &VehicleParams, theta: f64, accel: f64) -> OperatingPoint {
    OperatingPoint { theta, accel, loads: axle_loads(params, theta, accel) }
}
