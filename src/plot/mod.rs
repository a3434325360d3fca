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


use std::ops::Range;
use std::path::Path;
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use tracing::info;
use utils::units::rad_to_deg;
use crate::error::AppError;
use crate::session::LoadSession;

const FRONT_COLOUR: RGBColor = RGBColor(255, 99, 71);
const REAR_COLOUR: RGBColor = RGBColor(100, 149, 237);
const FRONT_TANGENT_COLOUR: RGBColor = RGBColor(255, 179, 0);
const REAR_TANGENT_COLOUR: RGBColor = RGBColor(102, 204, 255);
const MARKER_COLOUR: RGBColor = RED;

fn chart_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Chart(e.to_string())
}

/// Axis range covering `a` and `b` with some margin, widened if the two are equal
fn padded_range(a: f64, b: f64, margin_fraction: f64) -> Range<f64> {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let span = high - low;
    if span <= f64::EPSILON {
        let pad = low.abs().max(1.0) * 0.05;
        return (low - pad)..(high + pad);
    }
    let pad = span * margin_fraction;
    (low - pad)..(high + pad)
}

/// Draw the slope and acceleration load charts side by side into an svg file
pub fn draw_load_charts(session: &LoadSession, path: &Path) -> Result<(), AppError> {
    let root = SVGBackend::new(path, (1400, 560)).into_drawing_area();
    root.fill(&BLACK.mix(0.9)).map_err(chart_error)?;
    let (left, right) = root.split_horizontally(700);
    draw_load_vs_slope(session, &left)?;
    draw_load_vs_accel(session, &right)?;
    root.present().map_err(chart_error)?;
    info!("Axle load charts written to {}", path.display());
    Ok(())
}

fn draw_load_vs_slope(session: &LoadSession, area: &DrawingArea<SVGBackend, Shift>) -> Result<(), AppError> {
    let grid = session.grid();
    let point = session.operating_point();
    let tangent = session.tangent();
    let (theta_steps, accel_steps) = grid.shape();
    let theta = grid.theta();
    let accel = grid.accel();

    let tangent_trace = tangent.trace(theta.iter());
    let (mut y_low, mut y_high) = grid.load_bounds().unwrap_or((point.front(), point.front()));
    for (_, loads) in &tangent_trace {
        y_low = y_low.min(loads.front.min(loads.rear));
        y_high = y_high.max(loads.front.max(loads.rear));
    }

    let font_desc = FontDesc::new(FontFamily::Name("sans-serif"), 20.0, FontStyle::Normal);
    let mut context = ChartBuilder::on(area)
        .margin(15)
        .caption("Axle Loads vs Slope", font_desc.color(&WHITE))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .build_cartesian_2d(padded_range(theta[0], theta[theta_steps - 1], 0.0),
                            padded_range(y_low, y_high, 0.05))
        .map_err(chart_error)?;

    context
        .configure_mesh()
        .x_label_formatter(&|x: &f64| format!("{:.2} ({:.0}°)", x, rad_to_deg(*x)))
        .x_desc("Slope (rad)")
        .y_label_formatter(&as_newtons)
        .y_desc("Axle Load (N)")
        .label_style(&WHITE)
        .bold_line_style(&WHITE.mix(0.2))
        .light_line_style(&WHITE.mix(0.1))
        .draw()
        .map_err(chart_error)?;

    for (accel_idx, stroke) in [(0, 1), (accel_steps - 1, 3)] {
        let slice = match grid.load_vs_slope(accel_idx) {
            Some(slice) => slice,
            None => continue
        };
        let accel_label = format!("a={:.2}", accel[accel_idx]);
        context
            .draw_series(LineSeries::new(slice.front_points(), FRONT_COLOUR.stroke_width(stroke)))
            .map_err(chart_error)?
            .label(format!("Front Load ({})", accel_label))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], FRONT_COLOUR.stroke_width(stroke)));
        context
            .draw_series(LineSeries::new(slice.rear_points(), REAR_COLOUR.stroke_width(stroke)))
            .map_err(chart_error)?
            .label(format!("Rear Load ({})", accel_label))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], REAR_COLOUR.stroke_width(stroke)));
    }

    context
        .draw_series(LineSeries::new(tangent_trace.iter().map(|(t, l)| (*t, l.front)), FRONT_TANGENT_COLOUR.stroke_width(2)))
        .map_err(chart_error)?
        .label("Front Linearised (OP tangent)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], FRONT_TANGENT_COLOUR.stroke_width(2)));
    context
        .draw_series(LineSeries::new(tangent_trace.iter().map(|(t, l)| (*t, l.rear)), REAR_TANGENT_COLOUR.stroke_width(2)))
        .map_err(chart_error)?
        .label("Rear Linearised (OP tangent)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], REAR_TANGENT_COLOUR.stroke_width(2)));

    draw_operating_point(&mut context, point.theta, point.front(), point.rear())?;

    context
        .configure_series_labels()
        .label_font(&WHITE)
        .background_style(&BLACK.mix(0.8))
        .border_style(&WHITE)
        .draw()
        .map_err(chart_error)?;
    Ok(())
}

fn draw_load_vs_accel(session: &LoadSession, area: &DrawingArea<SVGBackend, Shift>) -> Result<(), AppError> {
    let grid = session.grid();
    let point = session.operating_point();
    let (theta_steps, accel_steps) = grid.shape();
    let theta = grid.theta();
    let accel = grid.accel();
    let (y_low, y_high) = grid.load_bounds().unwrap_or((point.front(), point.front()));

    let font_desc = FontDesc::new(FontFamily::Name("sans-serif"), 20.0, FontStyle::Normal);
    let mut context = ChartBuilder::on(area)
        .margin(15)
        .caption("Axle Loads vs Acceleration", font_desc.color(&WHITE))
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .build_cartesian_2d(padded_range(accel[0], accel[accel_steps - 1], 0.0),
                            padded_range(y_low, y_high, 0.05))
        .map_err(chart_error)?;

    context
        .configure_mesh()
        .x_desc("Acceleration (m/s^2)")
        .y_label_formatter(&as_newtons)
        .y_desc("Axle Load (N)")
        .label_style(&WHITE)
        .bold_line_style(&WHITE.mix(0.2))
        .light_line_style(&WHITE.mix(0.1))
        .draw()
        .map_err(chart_error)?;

    for (theta_idx, stroke) in [(0, 1), (theta_steps - 1, 3)] {
        let slice = match grid.load_vs_accel(theta_idx) {
            Some(slice) => slice,
            None => continue
        };
        let theta_label = format!("theta={:.3} rad", theta[theta_idx]);
        context
            .draw_series(LineSeries::new(slice.front_points(), FRONT_COLOUR.stroke_width(stroke)))
            .map_err(chart_error)?
            .label(format!("Front Load ({})", theta_label))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], FRONT_COLOUR.stroke_width(stroke)));
        context
            .draw_series(LineSeries::new(slice.rear_points(), REAR_COLOUR.stroke_width(stroke)))
            .map_err(chart_error)?
            .label(format!("Rear Load ({})", theta_label))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], REAR_COLOUR.stroke_width(stroke)));
    }

    draw_operating_point(&mut context, point.accel, point.front(), point.rear())?;

    context
        .configure_series_labels()
        .label_font(&WHITE)
        .background_style(&BLACK.mix(0.8))
        .border_style(&WHITE)
        .draw()
        .map_err(chart_error)?;
    Ok(())
}

fn draw_operating_point<DB: DrawingBackend>(context: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
                                            x: f64,
                                            front: f64,
                                            rear: f64) -> Result<(), AppError>
{
    context
        .draw_series(std::iter::once(Circle::new((x, front), 6, MARKER_COLOUR.filled())))
        .map_err(chart_error)?
        .label("Front OP")
        .legend(|(x, y)| Circle::new((x, y), 5, MARKER_COLOUR.filled()));
    context
        .draw_series(std::iter::once(Cross::new((x, rear), 6, MARKER_COLOUR.stroke_width(2))))
        .map_err(chart_error)?
        .label("Rear OP")
        .legend(|(x, y)| Cross::new((x, y), 5, MARKER_COLOUR.stroke_width(2)));
    Ok(())
}

fn as_newtons(x: &f64) -> String {
    format!("{:.0}", x)
}
