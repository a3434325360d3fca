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
use crate::model::GRAVITY;
use crate::vehicle::VehicleParams;

/// Normal load carried by each axle (N)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AxleLoads {
    pub front: f64,
    pub rear: f64
}

impl AxleLoads {
    pub fn new(front: f64, rear: f64) -> AxleLoads {
        AxleLoads { front, rear }
    }

    pub fn total(&self) -> f64 {
        self.front + self.rear
    }

    /// Share of the total load on the front axle, `None` if the total is zero
    pub fn front_fraction(&self) -> Option<f64> {
        let total = self.total();
        if total == 0.0 {
            return None;
        }
        Some(self.front / total)
    }
}

/// Quasi-static axle loads on a slope of `theta` radians while accelerating
/// at `accel` m/s^2.
///
/// ```text
/// WF = (lr/L)*W*cos(theta) - (h/L)*m*(sin(theta) + a/g)
/// WR = (lf/L)*W*cos(theta) + (h/L)*m*(sin(theta) + a/g)
/// ```
pub fn axle_loads(params: &VehicleParams, theta: f64, accel: f64) -> AxleLoads {
    let wheelbase = params.wheelbase();
    let weight = params.weight();
    let static_share = weight * theta.cos();
    let transfer = (params.cog_height() / wheelbase) * params.mass() * (theta.sin() + accel / GRAVITY);

    AxleLoads {
        front: (params.cog_to_rear() / wheelbase) * static_share - transfer,
        rear: (params.cog_to_front() / wheelbase) * static_share + transfer
    }
}

#[cfg(test)]
mod tests {
    use crate::model::GRAVITY;
    use crate::vehicle::VehicleParams;
    use super::{axle_loads, AxleLoads};

    fn reference_vehicle() -> VehicleParams {
        VehicleParams::new(1475.0, 0.55, 2.636, 1.0544, 1.5816).unwrap()
    }

    #[test]
    fn level_and_steady_matches_static_split() {
        let params = reference_vehicle();
        let loads = axle_loads(&params, 0.0, 0.0);
        assert!((loads.front - (1.5816 / 2.636) * 1475.0 * GRAVITY).abs() < 1e-9);
        assert!((loads.rear - (1.0544 / 2.636) * 1475.0 * GRAVITY).abs() < 1e-9);
        assert!((loads.front - 8681.85).abs() < 1e-6);
        assert!((loads.rear - 5787.9).abs() < 1e-6);
        assert!(((loads.total() - params.mass() * 9.81) / (params.mass() * 9.81)).abs() < 1e-6);
    }

    #[test]
    fn acceleration_moves_load_rearwards() {
        let params = reference_vehicle();
        let steady = axle_loads(&params, 0.0, 0.0);
        let accelerating = axle_loads(&params, 0.0, 3.0);
        let braking = axle_loads(&params, 0.0, -3.0);
        assert!(accelerating.front < steady.front);
        assert!(accelerating.rear > steady.rear);
        assert!(braking.front > steady.front);
        assert!(braking.rear < steady.rear);

        let transfer = (0.55 / 2.636) * 1475.0 * (3.0 / GRAVITY);
        assert!((steady.front - accelerating.front - transfer).abs() < 1e-9);
        assert!((accelerating.total() - steady.total()).abs() < 1e-9);
    }

    #[test]
    fn slope_reduces_total_normal_load() {
        let params = reference_vehicle();
        let theta: f64 = 0.2;
        let loads = axle_loads(&params, theta, 0.0);
        assert!((loads.total() - params.weight() * theta.cos()).abs() < 1e-9);
        assert!(loads.rear > (1.0544 / 2.636) * params.weight() * theta.cos());
    }

    #[test]
    fn zero_height_has_no_transfer() {
        let params = VehicleParams::new(1000.0, 0.0, 2.5, 1.0, 1.5).unwrap();
        let level = axle_loads(&params, 0.0, 0.0);
        let accelerating = axle_loads(&params, 0.0, 8.0);
        assert_eq!(level, accelerating);
    }

    #[test]
    fn front_fraction() {
        assert_eq!(AxleLoads::new(6.0, 4.0).front_fraction(), Some(0.6));
        assert_eq!(AxleLoads::new(5.0, -5.0).front_fraction(), None);
    }
}
