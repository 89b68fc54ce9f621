use criterion::{criterion_group, criterion_main, Criterion};
use sensor_tour::algorithms::nearest_neighbor::axis_sweep::closest_unvisited;
use sensor_tour::algorithms::nearest_neighbor::naive::closest_unvisited_naive;
use sensor_tour::algorithms::{build_tour_random, build_tour_with};
use sensor_tour::data::*;

use rand::Rng;
use rand::SeedableRng;

const SET_SIZE: usize = 10_000;

fn cloud(rng: &mut impl Rng, len: usize) -> Vec<Point<f64, 4>> {
  (0..len).map(|_| rng.gen()).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
  let mut set = PointSet::new(cloud(&mut rng, SET_SIZE)).unwrap();
  set.sort_by_first_coordinate();
  let source = PointId::from(SET_SIZE / 2);

  c.bench_function("closest_unvisited::<f64, 4>", |b| {
    b.iter(|| closest_unvisited(&set, source))
  });

  c.bench_function("closest_unvisited_naive::<f64, 4>", |b| {
    b.iter(|| closest_unvisited_naive(&set, source))
  });

  let pts = cloud(&mut rng, SET_SIZE);
  c.bench_function("build_tour::<f64, 4>", |b| {
    b.iter(|| build_tour_random(pts.clone(), &mut rng))
  });

  // Every point shares its first coordinate, so no scan is ever pruned.
  let flat: Vec<Point<f64, 4>> = cloud(&mut rng, 1_000)
    .into_iter()
    .map(|pt| Point::new([0.0, pt[1], pt[2], pt[3]]))
    .collect();
  c.bench_function("build_tour::<f64, 4>/shared_first_coordinate", |b| {
    b.iter(|| build_tour_with(flat.clone(), |_| 0))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
