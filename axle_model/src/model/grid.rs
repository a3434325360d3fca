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


use itertools::{Itertools, MinMaxResult};
use ndarray::{Array1, Array2, ArrayView1};
use tracing::debug;
use crate::error::{ModelError, Result};
use crate::model::formula::{axle_loads, AxleLoads};
use crate::vehicle::VehicleParams;

/// A validated sampling range: `steps` evenly spaced values from `min` to `max`.
///
/// `min > max` is allowed and produces a descending sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleAxis {
    min: f64,
    max: f64,
    steps: usize
}

impl SampleAxis {
    pub fn new(min: f64, max: f64, steps: usize) -> Result<SampleAxis> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ModelError::InvalidSampling(format!("range {}..{} is not finite", min, max)));
        }
        if steps < 2 {
            return Err(ModelError::InvalidSampling(format!("{} samples requested, at least 2 are needed", steps)));
        }
        Ok(SampleAxis { min, max, steps })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Sample `i` is `min + i * (max - min) / (steps - 1)`, so the first value is exactly `min`
    pub fn samples(&self) -> Array1<f64> {
        let intervals = (self.steps - 1) as f64;
        let span = self.max - self.min;
        Array1::from_iter((0..self.steps).map(|i| self.min + i as f64 * span / intervals))
    }
}

/// One axle load series against a single independent variable
#[derive(Debug, Clone)]
pub struct LoadSlice<'a> {
    pub abscissa: ArrayView1<'a, f64>,
    pub front: ArrayView1<'a, f64>,
    pub rear: ArrayView1<'a, f64>
}

impl<'a> LoadSlice<'a> {
    pub fn front_points(&self) -> Vec<(f64, f64)> {
        self.abscissa.iter().copied().zip(self.front.iter().copied()).collect()
    }

    pub fn rear_points(&self) -> Vec<(f64, f64)> {
        self.abscissa.iter().copied().zip(self.rear.iter().copied()).collect()
    }
}

/// Front and rear axle loads sampled over slope (rows) and acceleration (columns).
///
/// `front[[i, j]]` and `rear[[i, j]]` are the loads at `theta[i]`, `accel[j]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AxleLoadGrid {
    theta: Array1<f64>,
    accel: Array1<f64>,
    front: Array2<f64>,
    rear: Array2<f64>
}

impl AxleLoadGrid {
    pub fn theta(&self) -> &Array1<f64> {
        &self.theta
    }

    pub fn accel(&self) -> &Array1<f64> {
        &self.accel
    }

    pub fn front(&self) -> &Array2<f64> {
        &self.front
    }

    pub fn rear(&self) -> &Array2<f64> {
        &self.rear
    }

    /// `(theta samples, accel samples)`
    pub fn shape(&self) -> (usize, usize) {
        (self.theta.len(), self.accel.len())
    }

    pub fn loads_at(&self, theta_idx: usize, accel_idx: usize) -> Option<AxleLoads> {
        let front = self.front.get([theta_idx, accel_idx])?;
        let rear = self.rear.get([theta_idx, accel_idx])?;
        Some(AxleLoads::new(*front, *rear))
    }

    /// Loads against slope with the acceleration held at `accel[accel_idx]`
    pub fn load_vs_slope(&self, accel_idx: usize) -> Option<LoadSlice<'_>> {
        if accel_idx >= self.accel.len() {
            return None;
        }
        Some(LoadSlice {
            abscissa: self.theta.view(),
            front: self.front.column(accel_idx),
            rear: self.rear.column(accel_idx)
        })
    }

    /// Loads against acceleration with the slope held at `theta[theta_idx]`
    pub fn load_vs_accel(&self, theta_idx: usize) -> Option<LoadSlice<'_>> {
        if theta_idx >= self.theta.len() {
            return None;
        }
        Some(LoadSlice {
            abscissa: self.accel.view(),
            front: self.front.row(theta_idx),
            rear: self.rear.row(theta_idx)
        })
    }

    /// Smallest and largest load across both axles
    pub fn load_bounds(&self) -> Option<(f64, f64)> {
        match self.front.iter().chain(self.rear.iter()).copied().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some((v, v)),
            MinMaxResult::MinMax(min, max) => Some((min, max))
        }
    }

    /// Every cell as `(theta, accel, loads)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item=(f64, f64, AxleLoads)> + '_ {
        self.front.indexed_iter().map(move |((i, j), front)| {
            (self.theta[i], self.accel[j], AxleLoads::new(*front, self.rear[[i, j]]))
        })
    }
}

/// Evaluate the axle load model over every `(theta, accel)` pair of the two axes.
///
/// The grid is rebuilt from scratch on every call.
pub fn compute_axle_load_grid(params: &VehicleParams,
                              theta_axis: &SampleAxis,
                              accel_axis: &SampleAxis) -> AxleLoadGrid
{
    let theta = theta_axis.samples();
    let accel = accel_axis.samples();
    let shape = (theta.len(), accel.len());
    debug!("Computing {}x{} axle load grid", shape.0, shape.1);

    let loads = Array2::from_shape_fn(shape, |(i, j)| axle_loads(params, theta[i], accel[j]));
    let front = loads.mapv(|l| l.front);
    let rear = loads.mapv(|l| l.rear);
    AxleLoadGrid { theta, accel, front, rear }
}
