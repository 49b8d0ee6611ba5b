//! Benchmarking of vector operations.

pub mod benchmarks;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

/// Runs a benchmark function repeatedly for a given duration and logs the
/// mean time per call.
#[derive(Clone, Debug)]
pub struct BasicBenchmarker {
    label: &'static str,
    duration: Duration,
    delayer: Delayer,
}

#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

#[allow(clippy::enum_variant_names)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Target {
    AddDouble3,
    CrossDouble3,
    NormalizeDouble3,
    LerpDouble3,
    HermiteDouble3,
    RotateDouble3,
    TransformDouble3,
    TransformCoordinateDouble3,
    TransformAllDouble3,
}

impl BasicBenchmarker {
    pub fn new(label: &'static str, duration: Duration, delayer: Delayer) -> Self {
        Self {
            label,
            duration,
            delayer,
        }
    }
}

impl Benchmarker for BasicBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.delayer.wait();
        let start = Instant::now();
        let mut iterations: u64 = 0;
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }
        let elapsed = start.elapsed().as_secs_f64();
        log::info!(
            "{}: {} iterations in {:.2} ms ({:.2} ns per iteration)",
            self.label,
            iterations,
            elapsed * 1e3,
            elapsed * 1e9 / iterations as f64,
        );
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if !remaining.is_zero() {
            log::debug!("Waiting {:.2} s before benchmarking", remaining.as_secs_f64());
            std::thread::sleep(remaining);
        }
    }
}

impl Target {
    pub const ALL: [Self; 9] = [
        Self::AddDouble3,
        Self::CrossDouble3,
        Self::NormalizeDouble3,
        Self::LerpDouble3,
        Self::HermiteDouble3,
        Self::RotateDouble3,
        Self::TransformDouble3,
        Self::TransformCoordinateDouble3,
        Self::TransformAllDouble3,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddDouble3 => "add_double3",
            Self::CrossDouble3 => "cross_double3",
            Self::NormalizeDouble3 => "normalize_double3",
            Self::LerpDouble3 => "lerp_double3",
            Self::HermiteDouble3 => "hermite_double3",
            Self::RotateDouble3 => "rotate_double3",
            Self::TransformDouble3 => "transform_double3",
            Self::TransformCoordinateDouble3 => "transform_coordinate_double3",
            Self::TransformAllDouble3 => "transform_all_double3",
        }
    }

    pub fn execute(&self, benchmarker: impl Benchmarker) {
        use benchmarks::double3;
        match self {
            Self::AddDouble3 => double3::add_double3(benchmarker),
            Self::CrossDouble3 => double3::cross_double3(benchmarker),
            Self::NormalizeDouble3 => double3::normalize_double3(benchmarker),
            Self::LerpDouble3 => double3::lerp_double3(benchmarker),
            Self::HermiteDouble3 => double3::hermite_double3(benchmarker),
            Self::RotateDouble3 => double3::rotate_double3(benchmarker),
            Self::TransformDouble3 => double3::transform_double3(benchmarker),
            Self::TransformCoordinateDouble3 => double3::transform_coordinate_double3(benchmarker),
            Self::TransformAllDouble3 => double3::transform_all_double3(benchmarker),
        }
    }
}

/// Runs the given target for at least `duration` seconds, starting no earlier
/// than `delay` seconds after this function is called.
pub fn benchmark(target: Target, duration: f64, delay: f64) {
    let start = Instant::now();

    let delayer = Delayer::new(start, delay);
    let duration = Duration::from_secs_f64(duration);

    log::info!("Running benchmark target {}", target.label());

    target.execute(BasicBenchmarker::new(target.label(), duration, delayer));
}
