// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns a grid of points into a grayscale image.  Every pixel depends
//! only on its own point, so the order in which they're visited makes
//! no difference to the result.

use errors::{MandelbrotError, Result};
use escape::{evaluate, EscapeResult};
use image::{Rgb, RgbImage};
use num::clamp;
use planes::{sample, Grid, Pixel, Viewport};

/// Three bytes per pixel, row by row from the top.  The three channels
/// of a pixel always hold the same value.
pub type PixelBuffer = RgbImage;

/// Everything needed to describe a render.  The defaults reproduce the
/// classic full view of the set at 1280x720.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Lower bound of the real axis.
    pub re_min: f64,
    /// Upper bound of the real axis.
    pub re_max: f64,
    /// Lower bound of the imaginary axis.
    pub im_min: f64,
    /// Upper bound of the imaginary axis.
    pub im_max: f64,
    /// Output width in pixels.
    pub width: usize,
    /// Output height in pixels.
    pub height: usize,
    /// Escape-time budget per point.
    pub max_iterations: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            re_min: -2.25,
            re_max: 0.75,
            im_min: -1.6,
            im_max: 1.6,
            width: 1280,
            height: 720,
            max_iterations: 500,
        }
    }
}

/// Map an escape result to a gray level.  Points that escape late are
/// bright; points that never escape are black.
pub fn shade(result: EscapeResult, limit: usize) -> u8 {
    match result {
        EscapeResult::Escaped(i) => {
            let level = (255.0 * (i as f64) / (limit as f64)).round();
            clamp(level, 0.0, 255.0) as u8
        }
        EscapeResult::Bounded => 0,
    }
}

fn check_budget(limit: usize) -> Result<()> {
    if limit < 1 {
        return Err(MandelbrotError::InvalidIterationBudget(limit));
    }
    Ok(())
}

/// Evaluate and shade every point of the grid.  The image has the same
/// shape as the grid.
pub fn render(grid: &Grid, limit: usize) -> Result<PixelBuffer> {
    check_budget(limit)?;
    Ok(render_checked(grid, limit))
}

fn render_checked(grid: &Grid, limit: usize) -> PixelBuffer {
    info!(
        "Rendering {}x{} points, {} iterations each",
        grid.width(),
        grid.height(),
        limit
    );

    let mut pixels = RgbImage::new(grid.width() as u32, grid.height() as u32);
    let mut interior = 0;
    for (Pixel(column, row), point) in grid.pixels() {
        let result = evaluate(point, limit);
        if result == EscapeResult::Bounded {
            interior += 1;
        }
        let level = shade(result, limit);
        pixels.put_pixel(column as u32, row as u32, Rgb([level, level, level]));
    }

    debug!("{} of {} points never escaped", interior, grid.len());
    pixels
}

/// A render whose parameters have all been checked.  Building one
/// validates the viewport, the budget, and the resolution, and samples
/// the grid; after that, rendering can't fail.
#[derive(Debug)]
pub struct MandelbrotRenderer {
    viewport: Viewport,
    grid: Grid,
    limit: usize,
}

impl MandelbrotRenderer {
    /// Validate a configuration and lay out its grid.
    pub fn new(config: &RenderConfig) -> Result<Self> {
        let viewport = Viewport::new(config.re_min, config.re_max, config.im_min, config.im_max)?;
        check_budget(config.max_iterations)?;
        let grid = sample(&viewport, config.width, config.height)?;
        Ok(MandelbrotRenderer {
            viewport,
            grid,
            limit: config.max_iterations,
        })
    }

    /// The region of the complex plane being rendered.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The sampled points, one per pixel.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Produce the image.
    pub fn render(&self) -> PixelBuffer {
        render_checked(&self.grid, self.limit)
    }
}
