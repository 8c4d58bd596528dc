//! Deterministic random number generation
//!
//! Every algorithm implements [`RandomSource`]. Implementors supply seeding,
//! raw word generation and the uniform float; the bounded draws are provided
//! once, on top of `random()`, through the shared [`range`] mapper.

pub mod lcg;
pub mod middle_square;
pub mod mt19937;
pub mod range;

pub use lcg::LinearCongruentialGenerator;
pub use middle_square::MiddleSquare;
pub use mt19937::{MersenneTwister, TwistMode};
pub use range::RangeError;

use crate::core::seed::Seed;

/// Common contract for all pseudo-random generators
///
/// # Example
/// ```
/// use pseudo_random_core_rs::{MersenneTwister, RandomSource};
///
/// let mut rng = MersenneTwister::new();
/// rng.seed(123u32);
///
/// let x = rng.random();
/// assert!((0.0..1.0).contains(&x));
///
/// let die = rng.randint(1, 6).unwrap();
/// assert!((1..=6).contains(&die));
/// ```
pub trait RandomSource {
    /// Replace the generator state with one derived from `seed`
    fn reseed(&mut self, seed: Seed);

    /// Advance the state once and return the raw output word
    fn next_u32(&mut self) -> u32;

    /// Advance the state once and return a float in [0, 1)
    fn random(&mut self) -> f64;

    /// Seed from anything convertible to a [`Seed`]
    fn seed<S: Into<Seed>>(&mut self, seed: S)
    where
        Self: Sized,
    {
        self.reseed(seed.into());
    }

    /// Integer in [start, stop)
    ///
    /// Draws exactly one `random()` value. Bounds are validated first, so an
    /// invalid range leaves the state untouched.
    ///
    /// # Errors
    /// [`RangeError::EmptyRange`] if `stop <= start`.
    fn randrange(&mut self, start: i64, stop: i64) -> Result<i64, RangeError> {
        range::check(start, stop)?;
        let x = self.random();
        Ok(range::scale(x, start, stop))
    }

    /// Integer in [start, stop], i.e. `randrange(start, stop + 1)`
    ///
    /// # Errors
    /// [`RangeError::EmptyRange`] if `stop < start`, [`RangeError::Overflow`]
    /// if `stop` is `i64::MAX`.
    fn randint(&mut self, start: i64, stop: i64) -> Result<i64, RangeError> {
        let exclusive = range::inclusive_stop(start, stop)?;
        self.randrange(start, exclusive)
    }

    /// Float in [low, high)
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let x = self.random();
        range::uniform(x, low, high)
    }

    /// The next `count` values of `random()`, lazily
    ///
    /// Each element advances the state exactly as one `random()` call would.
    fn randoms(&mut self, count: usize) -> Randoms<'_, Self>
    where
        Self: Sized,
    {
        Randoms {
            source: self,
            remaining: count,
        }
    }

    /// Uniformly chosen element, or `None` for an empty slice
    fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        let len = i64::try_from(items.len()).ok()?;
        let index = self.randrange(0, len).ok()?;
        items.get(index as usize)
    }

    /// Fisher-Yates shuffle in place, one `randrange` per position
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let upper = (i + 1) as i64;
            let j = range::scale(self.random(), 0, upper) as usize;
            items.swap(i, j);
        }
    }
}

/// Finite, non-restartable sequence of `random()` draws
///
/// Created by [`RandomSource::randoms`].
#[derive(Debug)]
pub struct Randoms<'a, R: ?Sized> {
    source: &'a mut R,
    remaining: usize,
}

impl<R: RandomSource + ?Sized> Iterator for Randoms<'_, R> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.source.random())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: RandomSource + ?Sized> ExactSizeIterator for Randoms<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws so the provided methods can be checked
    /// against hand-computed results.
    struct Scripted {
        draws: Vec<f64>,
        position: usize,
    }

    impl Scripted {
        fn new(draws: &[f64]) -> Self {
            Self {
                draws: draws.to_vec(),
                position: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn reseed(&mut self, _seed: Seed) {
            self.position = 0;
        }

        fn next_u32(&mut self) -> u32 {
            (self.random() * 4294967296.0) as u32
        }

        fn random(&mut self) -> f64 {
            let value = self.draws[self.position % self.draws.len()];
            self.position += 1;
            value
        }
    }

    #[test]
    fn test_randrange_uses_one_draw() {
        let mut rng = Scripted::new(&[0.5, 0.0]);
        assert_eq!(rng.randrange(0, 10), Ok(5));
        assert_eq!(rng.position, 1);
        assert_eq!(rng.randrange(0, 10), Ok(0));
        assert_eq!(rng.position, 2);
    }

    #[test]
    fn test_randrange_error_does_not_draw() {
        let mut rng = Scripted::new(&[0.5]);
        assert_eq!(
            rng.randrange(10, 10),
            Err(RangeError::EmptyRange { start: 10, stop: 10 })
        );
        assert_eq!(rng.position, 0);
    }

    #[test]
    fn test_randint_is_inclusive() {
        let mut rng = Scripted::new(&[0.99]);
        assert_eq!(rng.randint(1, 6), Ok(6));
        assert_eq!(rng.randint(4, 4), Ok(4));
    }

    #[test]
    fn test_randint_rejects_inverted_bounds() {
        let mut rng = Scripted::new(&[0.5]);
        assert_eq!(
            rng.randint(6, 1),
            Err(RangeError::EmptyRange { start: 6, stop: 2 })
        );
    }

    #[test]
    fn test_randoms_is_exact_and_sequential() {
        let mut rng = Scripted::new(&[0.1, 0.2, 0.3]);
        let values: Vec<f64> = rng.randoms(3).collect();
        assert_eq!(values, vec![0.1, 0.2, 0.3]);
        assert_eq!(rng.randoms(0).count(), 0);
        assert_eq!(rng.randoms(7).len(), 7);
    }

    #[test]
    fn test_uniform_maps_draw() {
        let mut rng = Scripted::new(&[0.25]);
        assert_eq!(rng.uniform(2.0, 6.0), 3.0);
    }

    #[test]
    fn test_choice_empty_and_nonempty() {
        let mut rng = Scripted::new(&[0.7]);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choice(&empty), None);
        assert_eq!(rng.choice(&['a', 'b', 'c']), Some(&'c'));
    }

    #[test]
    fn test_shuffle_permutes() {
        let mut rng = Scripted::new(&[0.0]);
        let mut items = [1, 2, 3, 4];
        rng.shuffle(&mut items);
        // Every draw of 0.0 swaps position i with 0.
        assert_eq!(items, [2, 3, 4, 1]);
    }

    #[test]
    fn test_trait_object_usage() {
        let mut rng = Scripted::new(&[0.5]);
        let source: &mut dyn RandomSource = &mut rng;
        assert_eq!(source.randrange(0, 4), Ok(2));
        assert_eq!(source.random(), 0.5);
    }
}
