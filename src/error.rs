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

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("io error. `{0}`")]
    IoError(#[from] io::Error),
    #[error("model error. `{0}`")]
    ModelError(#[from] axle_model::ModelError),
    #[error("settings error. `{0}`")]
    SettingsError(#[from] config::ConfigError),
    #[error("csv export error. `{0}`")]
    CsvError(#[from] csv::Error),
    #[error("json encoding error. `{0}`")]
    JsonError(#[from] serde_json::Error),
    #[error("failed to draw chart. `{0}`")]
    Chart(String)
}
