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
use crate::model::GRAVITY;
use crate::model::nominal::OperatingPoint;
use crate::vehicle::VehicleParams;

/// d(load)/d(theta) of both axles at `theta_op` with acceleration held constant (N/rad).
///
/// Derived from [`axle_loads`]; the acceleration term drops out.
pub fn load_slopes(params: &VehicleParams, theta_op: f64) -> AxleLoads {
    let wheelbase = params.wheelbase();
    let weight_term = params.mass() * GRAVITY * theta_op.sin();
    let height_term = (params.cog_height() / wheelbase) * params.mass() * theta_op.cos();
    AxleLoads {
        front: -(params.cog_to_rear() / wheelbase) * weight_term - height_term,
        rear: -(params.cog_to_front() / wheelbase) * weight_term + height_term
    }
}

/// First order approximation of the axle loads against slope, anchored at an operating point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadTangent {
    pub theta_op: f64,
    pub accel_op: f64,
    pub origin: AxleLoads,
    pub slope: AxleLoads
}

impl LoadTangent {
    pub fn at_operating_point(params: &VehicleParams, point: &OperatingPoint) -> LoadTangent {
        LoadTangent {
            theta_op: point.theta,
            accel_op: point.accel,
            origin: point.loads,
            slope: load_slopes(params, point.theta)
        }
    }

    pub fn evaluate(&self, theta: f64) -> AxleLoads {
        let delta = theta - self.theta_op;
        AxleLoads {
            front: self.origin.front + self.slope.front * delta,
            rear: self.origin.rear + self.slope.rear * delta
        }
    }

    pub fn trace<'a, I>(&self, thetas: I) -> Vec<(f64, AxleLoads)>
        where I: IntoIterator<Item=&'a f64>
    {
        thetas.into_iter().map(|theta| (*theta, self.evaluate(*theta))).collect()
    }

    /// Largest absolute difference between the tangent and the nonlinear
    /// model over `thetas`, per axle
    pub fn max_deviation<'a, I>(&self, params: &VehicleParams, thetas: I) -> AxleLoads
        where I: IntoIterator<Item=&'a f64>
    {
        thetas.into_iter().fold(AxleLoads::default(), |worst, theta| {
            let linear = self.evaluate(*theta);
            let exact = axle_loads(params, *theta, self.accel_op);
            AxleLoads {
                front: worst.front.max((linear.front - exact.front).abs()),
                rear: worst.rear.max((linear.rear - exact.rear).abs())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::model::formula::axle_loads;
    use crate::model::nominal::compute_nominal_axle_loads;
    use crate::vehicle::VehicleParams;
    use super::{load_slopes, LoadTangent};

    fn reference_vehicle() -> VehicleParams {
        VehicleParams::new(1475.0, 0.55, 2.636, 1.0544, 1.5816).unwrap()
    }

    #[test]
    fn tangent_touches_model_at_operating_point() {
        let params = reference_vehicle();
        for (theta_op, accel_op) in [(0.0, 0.0), (0.12, 2.0), (-0.25, -6.0)] {
            let point = compute_nominal_axle_loads(&params, theta_op, accel_op);
            let tangent = LoadTangent::at_operating_point(&params, &point);
            let at_op = tangent.evaluate(theta_op);
            assert!((at_op.front - point.front()).abs() < 1e-9);
            assert!((at_op.rear - point.rear()).abs() < 1e-9);
        }
    }

    #[test]
    fn slopes_match_finite_difference() {
        let params = reference_vehicle();
        let step = 1e-6;
        for theta in [-0.3, -0.05, 0.0, 0.2] {
            let slopes = load_slopes(&params, theta);
            let ahead = axle_loads(&params, theta + step, 1.5);
            let behind = axle_loads(&params, theta - step, 1.5);
            let front_fd = (ahead.front - behind.front) / (2.0 * step);
            let rear_fd = (ahead.rear - behind.rear) / (2.0 * step);
            assert!((slopes.front - front_fd).abs() < 1e-3, "{} vs {}", slopes.front, front_fd);
            assert!((slopes.rear - rear_fd).abs() < 1e-3, "{} vs {}", slopes.rear, rear_fd);
        }
    }

    #[test]
    fn level_slopes_come_from_height_only() {
        let params = reference_vehicle();
        let slopes = load_slopes(&params, 0.0);
        let height_term = (0.55 / 2.636) * 1475.0;
        assert!((slopes.front + height_term).abs() < 1e-9);
        assert!((slopes.rear - height_term).abs() < 1e-9);
    }

    #[test]
    fn deviation_grows_away_from_operating_point() {
        let params = reference_vehicle();
        let point = compute_nominal_axle_loads(&params, 0.0, 0.0);
        let tangent = LoadTangent::at_operating_point(&params, &point);

        let at_op = tangent.max_deviation(&params, [0.0].iter());
        assert!(at_op.front < 1e-9 && at_op.rear < 1e-9);

        let near = tangent.max_deviation(&params, [-0.05, 0.05].iter());
        let far = tangent.max_deviation(&params, [-0.35, 0.35].iter());
        assert!(far.front > near.front);
        assert!(far.rear > near.rear);
    }

    #[test]
    fn trace_follows_samples() {
        let params = reference_vehicle();
        let point = compute_nominal_axle_loads(&params, 0.1, 0.0);
        let tangent = LoadTangent::at_operating_point(&params, &point);
        let thetas = vec![-0.1, 0.1, 0.3];
        let trace = tangent.trace(&thetas);
        assert_eq!(trace.len(), 3);
        assert_eq!(trace[1].0, 0.1);
        assert_eq!(trace[1].1, point.loads);
    }
}
