use rand::Rng;

/// Single Bernoulli trial with success probability `p`
///
/// Probabilities outside [0, 1] are clamped, so `p >= 1.0` always succeeds
/// and `p <= 0.0` (or NaN) never does.
pub fn bernoulli<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    if p.is_nan() || p <= 0.0 {
        return false;
    }
    if p >= 1.0 {
        return true;
    }
    rng.random::<f64>() < p
}

/// Uniform sample from the half-open unit interval [0, 1)
pub fn unit_interval<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Error function approximation using Abramowitz and Stegun method
///
/// Accurate to about 1.5e-7, which is plenty for the goodness-of-fit
/// checks it backs.
pub fn erf(x: f64) -> f64 {
    let a1 = 0.254_829_592_f64;
    let a2 = -0.284_496_736_f64;
    let a3 = 1.421_413_741_f64;
    let a4 = -1.453_152_027_f64;
    let a5 = 1.061_405_429_f64;
    let p = 0.327_591_1_f64;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / p.mul_add(x, 1.0);
    let y = (((((a5.mul_add(t, a4)).mul_add(t, a3)).mul_add(t, a2)).mul_add(t, a1)) * t)
        .mul_add(-(-x * x).exp(), 1.0);

    sign * y
}

/// Pearson chi-square statistic of observed counts against a uniform expectation
///
/// Returns 0.0 for empty input or when every bucket is empty.
pub fn chi_square_uniform(observed: &[usize]) -> f64 {
    let total: usize = observed.iter().sum();
    if observed.is_empty() || total == 0 {
        return 0.0;
    }
    let expected = total as f64 / observed.len() as f64;
    observed
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

/// Upper-tail probability P(X >= statistic) for X ~ chi-square(`dof`)
///
/// Uses the Wilson-Hilferty cube-root normal approximation, which is good
/// for the tens-to-thousands of degrees of freedom seen in shuffle audits.
pub fn chi_square_upper_tail(statistic: f64, dof: usize) -> f64 {
    if dof == 0 {
        return 1.0;
    }
    if statistic <= 0.0 {
        return 1.0;
    }

    let k = dof as f64;
    let spread = 2.0 / (9.0 * k);
    let z = ((statistic / k).cbrt() - (1.0 - spread)) / spread.sqrt();

    // 1/2 * erfc(z / sqrt(2))
    0.5 * (1.0 - erf(z / std::f64::consts::SQRT_2))
}
