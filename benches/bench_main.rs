use criterion::criterion_main;

mod physics;

criterion_main! {
    physics::orbits::kinematics::benches,
}
