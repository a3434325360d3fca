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


use std::result;

pub type Result<T> = result::Result<T, ModelError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid vehicle parameter `{0}`. `{1}`")]
    InvalidParameter(&'static str, String),
    #[error("invalid mass percentage `{0}`. must be a finite value >= 0")]
    InvalidPercentage(f64),
    #[error("degenerate mass split. front `{front}`% + rear `{rear}`% must be greater than zero")]
    DegenerateMassSplit { front: f64, rear: f64 },
    #[error("invalid sample axis. `{0}`")]
    InvalidSampling(String)
}
