// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num;

use clap::{App, Arg, ArgMatches};
use mandelbrot::{
    save_ppm, ComplexPoint, MandelbrotError, MandelbrotRenderer, RenderConfig, Viewport,
};
use num::Complex;
use std::path::PathBuf;
use std::str::FromStr;

const MAX_ITERATIONS: usize = 1_000_000;

/// Splits `s` at the first `separator` and parses both halves.
fn parse_pair<T: FromStr>(s: &str, separator: char) -> Option<(T, T)> {
    let mut halves = s.splitn(2, separator);
    let left = halves.next()?.parse().ok()?;
    let right = halves.next()?.parse().ok()?;
    Some((left, right))
}

/// "re,im" as a point on the complex plane.
fn parse_complex(s: &str) -> Option<ComplexPoint> {
    parse_pair(s, ',').map(|(re, im)| Complex::new(re, im))
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    parse_pair::<T>(s, separator)
        .map(|_| ())
        .ok_or_else(|| err.to_string())
}

// Reports a budget of zero in the same words the library uses.
fn validate_budget(s: &str) -> Result<(), String> {
    match usize::from_str(s) {
        Ok(n) if n < 1 => Err(MandelbrotError::InvalidIterationBudget(n).to_string()),
        Ok(n) if n > MAX_ITERATIONS => Err(format!(
            "Invalid iteration budget {}: must be at most {}",
            n, MAX_ITERATIONS
        )),
        Ok(_) => Ok(()),
        Err(_) => Err("Could not parse iteration count".to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const ITERATIONS: &str = "iterations";

fn args<'a>() -> ArgMatches<'a> {
    App::new("mandel")
        .version("0.1.0")
        .about("Escape-time Mandelbrot renderer, writes binary PPM")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value("testFile")
                .help("Output file name, without the .ppm suffix"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1280x720")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2.25,-1.6")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the mandelbrot space"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0.75,1.6")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the mandelbrot space"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("500")
                .validator(|s| validate_budget(&s))
                .help("Maximum number of iterations per point"),
        )
        .get_matches()
}

/// The raw command line values.  The validators have already run, so
/// these all parse.
struct Params {
    leftlower: ComplexPoint,
    rightupper: ComplexPoint,
    width: usize,
    height: usize,
    max_iterations: usize,
}

fn params(matches: &ArgMatches) -> Option<Params> {
    let (width, height) = parse_pair(matches.value_of(SIZE)?, 'x')?;
    Some(Params {
        leftlower: parse_complex(matches.value_of(LEFTLOWER)?)?,
        rightupper: parse_complex(matches.value_of(RIGHTUPPER)?)?,
        width,
        height,
        max_iterations: matches.value_of(ITERATIONS)?.parse().ok()?,
    })
}

fn run(params: &Params, output: &str) -> mandelbrot::Result<PathBuf> {
    let viewport = Viewport::from_corners(params.leftlower, params.rightupper)?;
    let (leftlower, rightupper) = (viewport.leftlower(), viewport.rightupper());
    let config = RenderConfig {
        re_min: leftlower.re,
        re_max: rightupper.re,
        im_min: leftlower.im,
        im_max: rightupper.im,
        width: params.width,
        height: params.height,
        max_iterations: params.max_iterations,
    };
    debug!("{:?}", config);

    let renderer = MandelbrotRenderer::new(&config)?;
    info!(
        "Viewport {} to {}",
        renderer.viewport().leftlower(),
        renderer.viewport().rightupper()
    );
    save_ppm(output, &renderer.render())
}

fn main() {
    env_logger::init();

    let matches = args();
    let params = match params(&matches) {
        Some(params) => params,
        None => {
            eprintln!("Could not read render parameters");
            std::process::exit(1);
        }
    };

    let output = matches.value_of(OUTPUT).unwrap_or("testFile");
    match run(&params, output) {
        Err(e) => {
            eprintln!("Render failure: {}", e);
            std::process::exit(1);
        }
        Ok(path) => info!("Done: {}", path.display()),
    }
}
