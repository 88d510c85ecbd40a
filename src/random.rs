use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// A uniform draw over `start, start + step, ...` up to `end`, multiplied by
/// `scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteppedRange {
    pub range: RangeInclusive<i32>,
    pub step: i32,
    pub scale: f32,
}

impl SteppedRange {
    pub fn new(range: RangeInclusive<i32>, step: i32, scale: f32) -> Self {
        SteppedRange { range, step, scale }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Number of distinct values this range can produce.
    pub fn len(&self) -> usize {
        if self.is_empty() || self.step <= 0 {
            return 0;
        }
        let span = i64::from(*self.range.end()) - i64::from(*self.range.start());
        usize::try_from(span / i64::from(self.step) + 1).unwrap_or(usize::MAX)
    }

    pub fn min(&self) -> f32 {
        self.value_at(0)
    }

    pub fn max(&self) -> f32 {
        self.value_at(self.len().saturating_sub(1))
    }

    fn value_at(&self, index: usize) -> f32 {
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        let value = i64::from(*self.range.start())
            .saturating_add(i64::from(self.step).saturating_mul(index));
        value as f32 * self.scale
    }

    /// Degenerate ranges (empty, or with a non-positive step) yield the
    /// scaled start value.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        let len = self.len();
        if len <= 1 {
            return self.value_at(0);
        }
        self.value_at(rng.gen_range(0..len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_len() {
        assert_eq!(SteppedRange::new(50..=140, 2, 0.1).len(), 46);
        assert_eq!(SteppedRange::new(-100..=100, 2, 0.01).len(), 101);
        assert_eq!(SteppedRange::new(10..=41, 2, 0.2).len(), 16);
        assert_eq!(SteppedRange::new(3..=3, 1, 1.0).len(), 1);
        #[allow(clippy::reversed_empty_ranges)]
        let empty = SteppedRange::new(5..=3, 1, 1.0);
        assert_eq!(empty.len(), 0);
        assert_eq!(SteppedRange::new(0..=10, 0, 1.0).len(), 0);
    }

    #[test]
    fn test_bounds() {
        let range = SteppedRange::new(10..=40, 2, 0.5);
        assert_eq!(range.min(), 5.0);
        assert_eq!(range.max(), 20.0);
    }

    #[test]
    fn test_samples_stay_on_steps() {
        let range = SteppedRange::new(-10..=10, 5, 1.0);
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..500 {
            let value = range.sample(&mut rng);
            assert!((-10.0..=10.0).contains(&value));
            assert_eq!(value % 5.0, 0.0);
            seen.insert(value as i32);
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![-10, -5, 0, 5, 10]);
    }

    #[test]
    fn test_single_value() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        assert_eq!(SteppedRange::new(4..=4, 2, 0.25).sample(&mut rng), 1.0);
    }

    #[test]
    fn test_full_i32_range() {
        let range = SteppedRange::new(i32::MIN..=i32::MAX, 1, 1.0);
        assert_eq!(range.len(), 1 << 32);
        assert_eq!(range.min(), i32::MIN as f32);
        assert_eq!(range.max(), i32::MAX as f32);

        let range = SteppedRange::new(i32::MIN..=i32::MAX, i32::MAX, 1.0);
        assert_eq!(range.len(), 3);
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let value = range.sample(&mut rng);
            assert!([i32::MIN as f32, -1.0, i32::MAX as f32 - 1.0].contains(&value));
        }
    }
}
