use crate::{
    benchmark::Benchmarker, matrix::Matrix4, quaternion::UnitQuaternion, vector::Double3,
};

pub fn add_double3(benchmarker: impl Benchmarker) {
    let a = create_double3();
    let b = create_other_double3();
    benchmarker.benchmark(&mut || a + b);
}

pub fn cross_double3(benchmarker: impl Benchmarker) {
    let a = create_double3();
    let b = create_other_double3();
    benchmarker.benchmark(&mut || a ^ b);
}

pub fn normalize_double3(benchmarker: impl Benchmarker) {
    let a = create_double3();
    benchmarker.benchmark(&mut || a.normalized());
}

pub fn lerp_double3(benchmarker: impl Benchmarker) {
    let a = create_double3();
    let b = create_other_double3();
    benchmarker.benchmark(&mut || Double3::lerp(&a, &b, 0.37));
}

pub fn hermite_double3(benchmarker: impl Benchmarker) {
    let a = create_double3();
    let b = create_other_double3();
    benchmarker.benchmark(&mut || Double3::hermite(&a, &b, &b, &a, 0.37));
}

pub fn rotate_double3(benchmarker: impl Benchmarker) {
    let a = create_double3();
    let rotation = create_rotation();
    benchmarker.benchmark(&mut || Double3::transform_by_rotation(&a, &rotation));
}

pub fn transform_double3(benchmarker: impl Benchmarker) {
    let a = create_double3();
    let matrix = create_matrix();
    benchmarker.benchmark(&mut || Double3::transform(&a, &matrix));
}

pub fn transform_coordinate_double3(benchmarker: impl Benchmarker) {
    let a = create_double3();
    let matrix = Matrix4::perspective(1.2, 1.5, 0.1, 100.0);
    benchmarker.benchmark(&mut || Double3::transform_coordinate(&a, &matrix));
}

pub fn transform_all_double3(benchmarker: impl Benchmarker) {
    let vectors: Vec<_> = (0..1024)
        .map(|i| create_double3() * f64::from(i))
        .collect();
    let mut results = vec![Double3::ZERO; vectors.len()];
    let matrix = create_matrix();
    benchmarker.benchmark(&mut || {
        Double3::transform_all(&vectors, &matrix, &mut results);
        results[results.len() / 2]
    });
}

fn create_double3() -> Double3 {
    Double3::new(1.2, -3.4, 5.6)
}

fn create_other_double3() -> Double3 {
    Double3::new(-0.7, 2.5, 9.1)
}

fn create_rotation() -> UnitQuaternion {
    UnitQuaternion::from_axis_angle(&Double3::new(0.3, 0.9, -0.2), 1.3)
}

fn create_matrix() -> Matrix4 {
    Matrix4::from_scaling_rotation_translation(
        &Double3::new(1.5, 0.5, 2.0),
        &create_rotation(),
        &Double3::new(10.0, -4.0, 3.0),
    )
}
