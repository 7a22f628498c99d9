pub type Real = f32;

#[inline(always)]
pub fn lerp(a: Real, b: Real, t: Real) -> Real {
    a + (b - a) * t
}

/// Position of `value` between `a` and `b`, clamped to [0, 1].
///
/// Returns 0 for an empty interval.
#[inline]
pub fn inverse_lerp(a: Real, b: Real, value: Real) -> Real {
    let span = b - a;
    if span == 0.0 {
        0.0
    } else {
        ((value - a) / span).clamp(0.0, 1.0)
    }
}

/// Frame-rate independent exponential approach of `current` toward `target`.
///
/// `rate` is in 1/s; after `1 / rate` seconds about 63% of the gap is closed.
#[inline]
pub fn exp_smoothing(current: Real, target: Real, rate: Real, dt: Real) -> Real {
    let alpha = 1.0 - (-rate * dt).exp();
    lerp(current, target, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn inverse_lerp_clamps_outside_interval() {
        assert_eq!(inverse_lerp(500.0, 2000.0, 13534.0), 1.0);
        assert_eq!(inverse_lerp(500.0, 2000.0, 100.0), 0.0);
        assert_relative_eq!(inverse_lerp(500.0, 2000.0, 1250.0), 0.5);
    }

    #[test]
    fn inverse_lerp_empty_interval_is_zero() {
        assert_eq!(inverse_lerp(3.0, 3.0, 3.0), 0.0);
    }

    #[test]
    fn smoothing_moves_toward_target_without_overshoot() {
        let mut y = 0.0;
        for _ in 0..120 {
            let next = exp_smoothing(y, 100.0, 6.0, 1.0 / 60.0);
            assert!(next >= y && next <= 100.0);
            y = next;
        }
        assert_relative_eq!(y, 100.0, epsilon = 0.1);
    }

    #[test]
    fn smoothing_with_zero_dt_stays_put() {
        assert_eq!(exp_smoothing(42.0, 100.0, 6.0, 0.0), 42.0);
    }
}
