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


use std::io;
use std::path::Path;
use serde::Serialize;
use tracing::info;
use axle_model::AxleLoadGrid;
use utils::units::rad_to_deg;

#[derive(Debug, Serialize)]
struct GridRow {
    theta_rad: f64,
    theta_deg: f64,
    accel_mps2: f64,
    front_n: f64,
    rear_n: f64
}

/// Write one csv record per grid cell, slope major
pub fn write_grid_csv<W: io::Write>(grid: &AxleLoadGrid, out: W) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    for (theta, accel, loads) in grid.cells() {
        writer.serialize(GridRow {
            theta_rad: theta,
            theta_deg: rad_to_deg(theta),
            accel_mps2: accel,
            front_n: loads.front,
            rear_n: loads.rear
        })?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_grid_csv_to_path(grid: &AxleLoadGrid, path: &Path) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_grid_csv(grid, file)?;
    let (rows, cols) = grid.shape();
    info!("Wrote {} grid cells to {}", rows * cols, path.display());
    Ok(())
}
