// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::f64::consts::{FRAC_PI_2, PI};

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_projection::{GeoPoint, MapFrame, ProjectionRegistry};

fn grid(lon_steps: u32, lat_steps: u32) -> Vec<(f64, f64)> {
    let span = FRAC_PI_2 - 0.01;
    let mut points = Vec::with_capacity(((lon_steps + 1) * (lat_steps + 1)) as usize);
    for i in 0..=lon_steps {
        let lambda = -PI + 2.0 * PI * f64::from(i) / f64::from(lon_steps);
        for j in 0..=lat_steps {
            let phi = -span + 2.0 * span * f64::from(j) / f64::from(lat_steps);
            points.push((lambda, phi));
        }
    }
    points
}

fn bench_projections(c: &mut Criterion) {
    let registry = ProjectionRegistry::with_builtins();
    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();
    let points = grid(72, 36);

    let mut group = c.benchmark_group("understory_projection");
    group.sample_size(50);

    for name in names {
        let Ok(projection) = registry.create(name) else {
            continue;
        };
        let projected: Vec<Point> = points
            .iter()
            .map(|&(lambda, phi)| projection.project(lambda, phi))
            .collect();

        group.bench_function(format!("project({name})"), |b| {
            b.iter(|| {
                for &(lambda, phi) in &points {
                    black_box(projection.project(black_box(lambda), black_box(phi)));
                }
            });
        });

        group.bench_function(format!("unproject({name})"), |b| {
            b.iter(|| {
                for p in &projected {
                    black_box(projection.unproject(black_box(p.x), black_box(p.y)));
                }
            });
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let registry = ProjectionRegistry::with_builtins();
    let Ok(projection) = registry.create("Eckert6") else {
        return;
    };
    let mut frame = MapFrame::new();
    frame.set_scale(500.0);
    let geo: Vec<GeoPoint> = grid(72, 36)
        .into_iter()
        .map(|(lambda, phi)| GeoPoint::new(lambda, phi).to_degrees())
        .collect();

    let mut group = c.benchmark_group("understory_projection_frame");
    group.bench_function("convert_invert(Eckert6)", |b| {
        b.iter(|| {
            for &g in &geo {
                let p = frame.convert(&projection, black_box(g));
                black_box(frame.invert(&projection, p));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_projections, bench_frame);
criterion_main!(benches);
