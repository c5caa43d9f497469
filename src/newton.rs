//! Newton-Raphson square-root approximation built from lazy iterators.
//!
//! This follows the square-root example in Hughes' "Why Functional
//! Programming Matters": an infinite sequence of approximations produced by
//! one function and a separate convergence check that consumes it. Producing
//! approximations and deciding when to stop stay independent, so either can
//! be reused or tested on its own.

use std::iter::successors;

/// Return an iterator yielding `seed`, `f(seed)`, `f(f(seed))` and so on.
///
/// The iterator is infinite; consumers are expected to bound it, for example
/// with [`within`] or [`Iterator::take`].
pub fn iterate<F>(mut f: F, seed: f64) -> impl Iterator<Item = f64>
where
    F: FnMut(f64) -> f64,
{
    successors(Some(seed), move |&x| Some(f(x)))
}

/// Return the first element of `iter` that differs from its predecessor by
/// at most `eps`.
///
/// Returns `None` if the iterator ends before two successive elements get
/// that close, or yields fewer than two elements.
pub fn within<I>(eps: f64, iter: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut iter = iter.into_iter();
    let mut prev = iter.next()?;
    for x in iter {
        if (x - prev).abs() <= eps {
            return Some(x);
        }
        prev = x;
    }
    None
}

/// Approximate the square root of `n`, starting from the guess `seed` and
/// refining with `x' = (x + n/x) / 2` until successive approximations differ
/// by at most `eps`.
///
/// `n` must be non-negative and `seed` and `eps` positive; with other inputs
/// the approximations never converge and this function does not return.
pub fn sqrt(seed: f64, eps: f64, n: f64) -> Option<f64> {
    within(eps, iterate(move |x| (x + n / x) / 2., seed))
}

#[cfg(test)]
mod tests {
    use slicebatch_testing::TestCases;

    use super::{iterate, sqrt, within};

    #[test]
    fn test_iterate() {
        let approx: Vec<f64> = iterate(|x| (x + 2. / x) / 2., 1.0)
            .take(4)
            .map(|x| (x * 1e4).round() / 1e4)
            .collect();
        assert_eq!(approx, [1.0, 1.5, 1.4167, 1.4142]);
    }

    #[test]
    fn test_within() {
        // Converges at the first pair closer than `eps`.
        assert_eq!(within(0.5, [3., 2., 1., 0.5, 0.25]), Some(0.5));

        // Never converges.
        assert_eq!(within(0.1, [3., 2., 1.]), None);

        // Too short to compare anything.
        assert_eq!(within(0.1, []), None);
        assert_eq!(within(0.1, [3.]), None);
    }

    #[test]
    fn test_sqrt() {
        #[derive(Debug)]
        struct Case {
            seed: f64,
            n: f64,
        }

        let cases = [
            Case { seed: 1.0, n: 3.0 },
            Case { seed: 2.0, n: 8.0 },
            Case { seed: 3.0, n: 15.0 },
            Case { seed: 1.0, n: 1.0 },
        ];

        let eps = 1e-4;
        cases.test_each(|&Case { seed, n }| {
            let approx = sqrt(seed, eps, n).unwrap();
            assert!(
                (approx - n.sqrt()).abs() <= eps,
                "sqrt({}) approximation {} too far from {}",
                n,
                approx,
                n.sqrt()
            );
        });
    }
}
