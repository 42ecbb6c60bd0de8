use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a runtime profile by input length.
pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    if size <= 4_096 {
        apply_small_runtime_config(group);
    } else if size <= 65_536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.random::<i64>()).collect()
}

/// Random inclusive segment `[start, end]` of exactly `span` elements inside
/// a sequence of `len` elements.
pub fn random_segment<R: Rng + ?Sized>(rng: &mut R, len: usize, span: usize) -> (usize, usize) {
    assert!(0 < span && span <= len, "span={span} len={len}");
    let start = rng.random_range(0..=(len - span));
    (start, start + span - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_segment_stays_in_bounds() {
        let mut rng = default_rng();
        for &(len, span) in &[(1_usize, 1_usize), (8, 3), (8, 8), (1000, 17)] {
            for _ in 0..64 {
                let (start, end) = random_segment(&mut rng, len, span);
                assert!(start <= end && end < len, "start={start} end={end} len={len}");
                assert_eq!(end - start + 1, span);
            }
        }
    }

    #[test]
    fn default_rng_is_deterministic() {
        let a = random_values(&mut default_rng(), 32);
        let b = random_values(&mut default_rng(), 32);
        assert_eq!(a, b);
    }
}
