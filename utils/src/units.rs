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


pub const STANDARD_GRAVITY: f64 = 9.81; // m/s^2

pub fn rad_to_deg(angle_rad: f64) -> f64 {
    angle_rad.to_degrees()
}

/// Convert a slope angle into a road grade percentage (rise over run)
pub fn rad_to_grade_percent(angle_rad: f64) -> f64 {
    angle_rad.tan() * 100.0
}

pub fn newtons_to_kgf(force_n: f64) -> f64 {
    force_n / STANDARD_GRAVITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_conversions() {
        assert!((rad_to_deg(std::f64::consts::PI) - 180.0).abs() < 1e-12);
        assert!((rad_to_deg(-0.35) + 20.0535228).abs() < 1e-6);
        assert!((rad_to_grade_percent(std::f64::consts::FRAC_PI_4) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn force_conversion() {
        assert!((newtons_to_kgf(1475.0 * STANDARD_GRAVITY) - 1475.0).abs() < 1e-9);
    }
}
