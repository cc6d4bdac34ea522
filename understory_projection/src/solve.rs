// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capped Newton iteration shared by the projections without a closed form.

/// Outcome of [`capped_newton`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NewtonSolve {
    /// The final iterate.
    pub value: f64,
    /// Number of correction steps applied (never more than the cap).
    pub iterations: u32,
    /// Whether the last correction was within tolerance.
    ///
    /// `false` means the cap was hit first; `value` is then the best iterate
    /// available and is still used as-is.
    pub converged: bool,
}

/// Runs `x -= step(x)` starting from `start`.
///
/// The correction starts at `+∞`, and the loop continues only while fewer
/// than `max_iterations` steps have run and the last correction satisfied
/// `|delta| > tolerance`. Hitting the cap is not an error: the last iterate
/// is returned and a trace record is emitted.
///
/// ```rust
/// use understory_projection::solve::capped_newton;
///
/// // Solve x^2 = 2.
/// let solve = capped_newton(1.0, 20, 1e-12, |x| (x * x - 2.0) / (2.0 * x));
/// assert!(solve.converged);
/// assert!((solve.value - core::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub fn capped_newton(
    start: f64,
    max_iterations: u32,
    tolerance: f64,
    mut step: impl FnMut(f64) -> f64,
) -> NewtonSolve {
    let mut value = start;
    let mut delta = f64::INFINITY;
    let mut iterations = 0;
    while iterations < max_iterations && delta.abs() > tolerance {
        delta = step(value);
        value -= delta;
        iterations += 1;
    }
    // A NaN correction also ends the loop; it did not converge either.
    let converged = delta.abs() <= tolerance;
    if !converged {
        log::trace!(
            "newton solve stopped after {iterations} iterations (last delta {delta:e}, start {start})"
        );
    }
    NewtonSolve {
        value,
        iterations,
        converged,
    }
}
