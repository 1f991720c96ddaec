// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use juliabrot::output::write_raster;
use juliabrot::{Engine, FractalError, Mode, RenderOptions};
use num::Complex;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, info};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_complex(s: &str) -> Option<Complex<f64>> {
    match parse_pair(s, ',') {
        Some((re, im)) => Some(Complex { re, im }),
        None => None,
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_positive(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(v) if v > 0.0 && v.is_finite() => Ok(()),
        _ => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const MODE: &str = "mode";
const ZOOM: &str = "zoom";
const OFFSET: &str = "offset";
const CONSTANT: &str = "constant";
const HIRES: &str = "hires";
const VERBOSE: &str = "verbose";

const HIRES_SIZE: (usize, usize) = (15360, 8640);
const HIRES_ITERATIONS: usize = 5000;

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("juliabrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot and Julia set renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (.png or .ppm)"),
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
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("256")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        200_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 200000",
                    )
                })
                .help("Maximum iterations per pixel"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in solver (default: one per CPU)"),
        )
        .arg(
            Arg::with_name(MODE)
                .required(false)
                .long(MODE)
                .short("m")
                .takes_value(true)
                .possible_values(&["mandelbrot", "julia"])
                .default_value("julia")
                .help("Which family to draw"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(false)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .default_value("1")
                .validator(|s| validate_positive(&s, "Zoom must be a positive number"))
                .help("Zoom factor"),
        )
        .arg(
            Arg::with_name(OFFSET)
                .required(false)
                .long(OFFSET)
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse offset"))
                .help("Pan offset, in unzoomed plane units"),
        )
        .arg(
            Arg::with_name(CONSTANT)
                .required(false)
                .long(CONSTANT)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("0,0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse constant"))
                .help("Seed (mandelbrot) or constant (julia)"),
        )
        .arg(
            Arg::with_name(HIRES)
                .long(HIRES)
                .help("Render at 15360x8640 with 5000 iterations"),
        )
        .arg(
            Arg::with_name(VERBOSE)
                .long(VERBOSE)
                .short("v")
                .help("Log each render pass"),
        )
        .get_matches()
}

fn run(matches: &ArgMatches) -> Result<(), FractalError> {
    let (width, height) = if matches.is_present(HIRES) {
        HIRES_SIZE
    } else {
        let size = parse_pair::<u16>(matches.value_of(SIZE).unwrap_or("1280x720"), 'x')
            .unwrap_or((1280, 720));
        (size.0 as usize, size.1 as usize)
    };
    let iterations = if matches.is_present(HIRES) {
        HIRES_ITERATIONS
    } else {
        matches
            .value_of(ITERATIONS)
            .and_then(|s| usize::from_str(s).ok())
            .unwrap_or(256)
    };
    let threads = matches
        .value_of(THREADS)
        .and_then(|s| usize::from_str(s).ok())
        .unwrap_or_else(num_cpus::get);
    let mode = match matches.value_of(MODE) {
        Some("mandelbrot") => Mode::Mandelbrot,
        _ => Mode::Julia,
    };
    let zoom = matches
        .value_of(ZOOM)
        .and_then(|s| f64::from_str(s).ok())
        .unwrap_or(1.0);
    let offset = matches
        .value_of(OFFSET)
        .and_then(parse_complex)
        .unwrap_or_else(|| Complex::new(0.0, 0.0));
    let constant = matches
        .value_of(CONSTANT)
        .and_then(parse_complex)
        .unwrap_or_else(|| Complex::new(0.0, 0.0));
    let output = Path::new(matches.value_of(OUTPUT).unwrap_or(""));

    // Reject a bad file name before spending time on the render.
    juliabrot::output::Format::from_path(output)?;

    let mut engine = Engine::new(constant, iterations, width, height)?
        .with_options(RenderOptions::with_threads(threads));
    engine.set_zoom(zoom)?;
    engine.set_offset(offset.re, offset.im)?;
    debug!(width, height, iterations, threads, ?mode, "configured");

    let started = Instant::now();
    let raster = engine.render(mode)?;
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "rendered");

    write_raster(output, raster)?;
    info!(path = %output.display(), "wrote image");
    Ok(())
}

fn main() {
    let matches = args();
    let level = if matches.is_present(VERBOSE) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
