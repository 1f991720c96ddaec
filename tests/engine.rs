// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use juliabrot::planes::Pixel;
use juliabrot::viewport::base_plane;
use juliabrot::{escape_time, remap, Engine, Mode, Palette, PlaneMapper, RenderOptions};
use num::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WIDTH: usize = 64;
const HEIGHT: usize = 36;

fn engine(fixed_point: Complex<f64>, max_iterations: usize, threads: usize) -> Engine {
    Engine::new(fixed_point, max_iterations, WIDTH, HEIGHT)
        .unwrap()
        .with_options(RenderOptions::with_threads(threads))
}

#[test]
fn remap_round_trips_for_random_intervals() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..1000 {
        let (a, b): (f64, f64) = (rng.gen_range(-10.0, 10.0), rng.gen_range(-10.0, 10.0));
        let (c, d): (f64, f64) = (rng.gen_range(-2000.0, 2000.0), rng.gen_range(-2000.0, 2000.0));
        if (a - b).abs() < 1e-3 || (c - d).abs() < 1e-3 {
            continue;
        }
        let v: f64 = rng.gen_range(-20.0, 20.0);
        let back = remap(remap(v, a, b, c, d), c, d, a, b);
        assert!((back - v).abs() < 1e-6, "{} came back as {}", v, back);
    }
}

#[test]
fn iteration_counts_stay_within_the_cap() {
    let mut rng = StdRng::seed_from_u64(42);
    for &mode in &[Mode::Mandelbrot, Mode::Julia] {
        for _ in 0..2000 {
            let point = Complex::new(rng.gen_range(-3.0, 3.0), rng.gen_range(-3.0, 3.0));
            let fixed = Complex::new(rng.gen_range(-1.0, 1.0), rng.gen_range(-1.0, 1.0));
            let (z0, c) = mode.seed(point, fixed);
            let sample = escape_time(z0, c, 100);
            assert!(sample.iterations <= 100);
            assert_eq!(sample.escaped, sample.iterations < 100);
        }
    }
}

#[test]
fn renders_are_identical_across_worker_counts() {
    for &mode in &[Mode::Mandelbrot, Mode::Julia] {
        let fixed = Complex::new(-0.8, 0.156);
        let reference = engine(fixed, 200, 1).render(mode).unwrap().clone();
        for &threads in &[2, 3, 8] {
            let mut e = engine(fixed, 200, threads);
            assert_eq!(e.render(mode).unwrap(), &reference);
            assert_eq!(e.render(mode).unwrap(), &reference);
        }
    }
}

fn assert_painted_by_count(mode: Mode, fixed: Complex<f64>) {
    let max = 80;
    let raster = engine(fixed, max, 4).render(mode).unwrap().clone();
    let plane = PlaneMapper::new(WIDTH, HEIGHT, base_plane().0, base_plane().1).unwrap();
    let palette = Palette::default();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let pixel = Pixel(x, y);
            let point = plane.pixel_to_point(&pixel);
            let sample = match mode {
                Mode::Mandelbrot => escape_time(fixed, point, max),
                Mode::Julia => escape_time(point, fixed, max),
            };
            let expected = if sample.iterations > 0 && sample.iterations < max {
                palette.colors()[sample.iterations % 16]
            } else {
                image::Rgb([0, 0, 0])
            };
            assert_eq!(raster.get(pixel), Some(expected), "{:?} at {:?}", mode, pixel);
        }
    }
}

#[test]
fn every_painted_pixel_uses_the_palette_entry_for_its_count() {
    assert_painted_by_count(Mode::Mandelbrot, Complex::new(0.0, 0.0));
}

#[test]
fn every_julia_pixel_uses_the_palette_entry_for_its_count() {
    assert_painted_by_count(Mode::Julia, Complex::new(-0.8, 0.156));
}

#[test]
fn julia_and_mandelbrot_differ_away_from_the_origin() {
    let fixed = Complex::new(-0.8, 0.156);
    let mut e = engine(fixed, 100, 2);
    let mandelbrot = e.render_mandelbrot().unwrap().clone();
    let julia = e.render_julia().unwrap().clone();
    assert_ne!(mandelbrot, julia);
}

#[test]
fn zooming_in_magnifies_the_picture() {
    let mut e = engine(Complex::new(0.0, 0.0), 100, 2);
    let wide = e.viewport().bounds();
    e.set_zoom(2.0).unwrap();
    let narrow = e.viewport().bounds();
    assert!((wide.width() / narrow.width() - 2.0).abs() < 1e-12);
    assert!((wide.height() / narrow.height() - 2.0).abs() < 1e-12);
}

#[test]
fn invalid_zoom_does_not_disturb_the_raster() {
    let mut e = engine(Complex::new(0.0, 0.0), 100, 2);
    let before = e.render_mandelbrot().unwrap().clone();
    assert!(e.set_zoom(0.0).is_err());
    assert!(e.set_zoom(-1.0).is_err());
    assert_eq!(e.raster(), &before);
    assert_eq!(e.render_mandelbrot().unwrap(), &before);
}

#[test]
fn panning_by_pixels_shifts_the_picture() {
    // At zoom 1 an eight-pixel drag moves the plane by eight columns.
    let mut e = engine(Complex::new(0.0, 0.0), 100, 2);
    let before = e.render_mandelbrot().unwrap().clone();
    e.pan_by_pixels(8.0, 0.0).unwrap();
    let after = e.render_mandelbrot().unwrap().clone();
    let mut matched = 0;
    for y in 0..HEIGHT {
        for x in 0..WIDTH - 8 {
            if before.get(Pixel(x, y)) == after.get(Pixel(x + 8, y)) {
                matched += 1;
            }
        }
    }
    // Rounding in the shifted coordinates may flip a handful of boundary pixels.
    assert!(matched * 100 >= (WIDTH - 8) * HEIGHT * 95, "only {} matched", matched);
}
