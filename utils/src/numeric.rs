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


pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

pub fn is_valid_percentage(val: f64) -> bool {
    val.is_finite() && val >= 0.0 && val <= 100.0
}

pub fn is_valid_percentage_str(val: &str) -> bool {
    if val.is_empty() {
        return true;
    }
    match val.trim().parse::<f64>() {
        Ok(v) => is_valid_percentage(v),
        Err(_) => false
    }
}

#[cfg(test)]
mod tests {
    use crate::numeric::{is_valid_percentage, is_valid_percentage_str, round_float_to};

    #[test]
    fn round_float_tests() {
        assert_eq!(round_float_to(1.23456, 2), 1.23);
        assert_eq!(round_float_to(1.235, 1), 1.2);
        assert_eq!(round_float_to(-0.15, 0), -0.0);
        assert_eq!(round_float_to(8681.8499, 1), 8681.8);
    }

    #[test]
    fn valid_percentage_tests()  {
        assert_eq!(is_valid_percentage(-0.01), false);
        assert_eq!(is_valid_percentage(0.0), true);
        assert_eq!(is_valid_percentage(59.5), true);
        assert_eq!(is_valid_percentage(100.0), true);
        assert_eq!(is_valid_percentage(100.01), false);
        assert_eq!(is_valid_percentage(f64::NAN), false);
        assert_eq!(is_valid_percentage(f64::INFINITY), false);
    }

    #[test]
    fn valid_percentage_str_tests()  {
        assert_eq!(is_valid_percentage_str(""), true);
        assert_eq!(is_valid_percentage_str("60"), true);
        assert_eq!(is_valid_percentage_str(" 40.25 "), true);
        assert_eq!(is_valid_percentage_str("-1"), false);
        assert_eq!(is_valid_percentage_str("abc"), false);
    }
}
