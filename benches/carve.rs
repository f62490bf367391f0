// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;

use criterion::Criterion;
use image::{Rgb, RgbImage};
use pngseam::{calculate_energy, SeamCarver};

fn sample() -> RgbImage {
    RgbImage::from_fn(96, 64, |x, y| {
        Rgb([(x * 7 + y) as u8, (y * 13) as u8, ((x ^ y) * 5) as u8])
    })
}

fn energy_benchmark(c: &mut Criterion) {
    let image = sample();
    c.bench_function("energy 96x64", move |b| {
        b.iter(|| calculate_energy(&image).unwrap())
    });
}

fn carve_benchmark(c: &mut Criterion) {
    let image = sample();
    c.bench_function("carve one seam each way 96x64", move |b| {
        b.iter(|| SeamCarver::new(&image).carve(1, 1).unwrap())
    });
}

criterion_group!(benches, energy_benchmark, carve_benchmark);
criterion_main!(benches);
