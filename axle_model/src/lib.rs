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


pub mod error;
pub mod vehicle;
pub mod model;

pub use error::{ModelError, Result};
pub use vehicle::{CogOffsets, MassDistribution, VehicleParams, derive_cog_offsets};
pub use model::{
    AxleLoadGrid,
    AxleLoads,
    LoadSlice,
    LoadTangent,
    OperatingPoint,
    SampleAxis,
    GRAVITY,
    axle_loads,
    compute_axle_load_grid,
    compute_nominal_axle_loads
};
