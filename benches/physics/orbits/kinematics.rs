use std::time::Duration;

use criterion::{black_box, criterion_group, Criterion};
use orrery::config::OrreryConfig;
use orrery::entities::celestials::solar_system::SolarSystemBuilder;
use orrery::physics::orbits::kinematics::advance_all;
use orrery::physics::orbits::state::SimulationState;
use orrery::physics::util::clock::Clock;

fn bench_advance_all(c: &mut Criterion) {
    let center = OrreryConfig::default().center();
    let mut bodies = SolarSystemBuilder::new().center(center).build();
    c.bench_function("advance_all", |b| {
        b.iter(|| advance_all(black_box(&mut bodies), black_box(1.0 / 60.0), center))
    });
}

fn bench_step(c: &mut Criterion) {
    let config = OrreryConfig::default();
    let mut state = SimulationState::new(
        SolarSystemBuilder::new().center(config.center()).build(),
        &config,
    );
    let mut clock = Clock::default();
    clock.update(Duration::from_millis(16));
    c.bench_function("simulation_step", |b| {
        b.iter(|| state.step(black_box(&clock)))
    });
}

criterion_group!(benches, bench_advance_all, bench_step);
