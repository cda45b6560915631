//! Phase warping.

/*
Phase Warping
=============

Warping bends time inside one cycle instead of bending amplitude. The phase
ramp that normally runs in a straight line from 0 to 1 is replaced by a
power curve, and the sine is read through that curve:

    output = sin(2π × warp_phase(phase, warp))

Vocabulary
----------

  phase         Position inside the cycle, [0, 1).
  warped phase  Where the sine is actually read, also [0, 1).
  warp          Bend amount in [-1, 1]. 0 leaves the ramp straight.


The Curves
----------

    warp > 0:   warped = phase ^ (1 / (1 + 2·warp))
    warp < 0:   warped = 1 - (1 - phase) ^ (1 / (1 + 2·|warp|))
    warp = 0:   warped = phase

  warped
    1 ┤        ___---‾‾        warp = +1: exponent 1/3, the curve shoots up
      │    _-‾‾                early and flattens out late
      │  _‾
      │ /                      warp = -1: exponent 1/3 on the mirrored ramp,
      │/                       flat early and steep late
    0 ┼──────────────→ phase
      0              1

Both endpoints stay pinned (0 → 0, 1 → 1), so the cycle length and pitch
never change, only where inside the cycle the sine spends its time.


Sign Convention
---------------

Positive warp runs the warped phase AHEAD of the linear phase. The positive
lobe of the sine (warped phase 0 to 0.5) is therefore crammed into the first
part of the cycle and the negative lobe is stretched across the rest:

    warp = +1:  positive lobe ends at phase 0.5³ = 0.125
    warp = -1:  positive lobe ends at phase 1 - 0.5³ = 0.875

So warp > 0 squishes the waveform LEFT, warp < 0 squishes it RIGHT.


Edge Guards
-----------

0 raised to a fractional power is 0 in IEEE arithmetic, but the base is still
kept at least WARP_EPSILON above zero so that no combination of rounding can
feed the power function a negative or zero base. The result is clamped to
PHASE_MAX, the largest double below 1, so the output range really is [0, 1).
*/

/// Smallest base passed to the power curve.
pub const WARP_EPSILON: f64 = 1e-12;

/// Largest `f64` strictly below 1.0.
pub const PHASE_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// Exponent applied by the warp curve for a given warp amount.
#[inline]
pub fn warp_exponent(warp: f64) -> f64 {
    1.0 / (1.0 + 2.0 * warp.abs())
}

/// Map a phase in `[0, 1)` to a warped phase in `[0, 1)`.
///
/// `warp = 0` returns `phase` unchanged. `warp` is expected in `[-1, 1]`;
/// NaN is treated as 0.
#[inline]
pub fn warp_phase(phase: f64, warp: f64) -> f64 {
    if warp == 0.0 || warp.is_nan() {
        return phase;
    }

    let exponent = warp_exponent(warp);
    let warped = if warp > 0.0 {
        phase.max(WARP_EPSILON).powf(exponent)
    } else {
        1.0 - (1.0 - phase).max(WARP_EPSILON).powf(exponent)
    };

    warped.clamp(0.0, PHASE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_warp_is_identity() {
        for i in 0..1000 {
            let phase = i as f64 / 1000.0;
            assert_eq!(warp_phase(phase, 0.0).to_bits(), phase.to_bits());
        }
        assert_eq!(warp_phase(PHASE_MAX, 0.0), PHASE_MAX);
    }

    #[test]
    fn test_full_positive_warp_at_half() {
        let warped = warp_phase(0.5, 1.0);
        assert!((warped - 0.5_f64.powf(1.0 / 3.0)).abs() < 1e-12);
        assert!((warped - 0.7937).abs() < 1e-4);
    }

    #[test]
    fn test_negative_warp_mirrors_positive() {
        for i in 1..100 {
            let phase = i as f64 / 100.0;
            let pos = warp_phase(phase, 0.6);
            let neg = warp_phase(1.0 - phase, -0.6);
            assert!((pos - (1.0 - neg)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_sign_convention_squishes_left() {
        // Positive warp runs ahead of the linear phase, negative warp behind.
        for i in 1..100 {
            let phase = i as f64 / 100.0;
            assert!(warp_phase(phase, 0.5) > phase);
            assert!(warp_phase(phase, -0.5) < phase);
        }
    }

    #[test]
    fn test_continuous_across_zero() {
        for i in 0..100 {
            let phase = i as f64 / 100.0;
            let tiny = 1e-9;
            assert!((warp_phase(phase, tiny) - phase).abs() < 1e-6);
            assert!((warp_phase(phase, -tiny) - phase).abs() < 1e-6);
        }
    }

    #[test]
    fn test_monotonic() {
        for &warp in &[-1.0, -0.3, 0.3, 1.0] {
            let mut previous = warp_phase(0.0, warp);
            for i in 1..1000 {
                let current = warp_phase(i as f64 / 1000.0, warp);
                assert!(current >= previous, "warp={warp} i={i}");
                previous = current;
            }
        }
    }

    #[test]
    fn test_output_range_at_edges() {
        for &warp in &[-1.0, -0.5, 0.5, 1.0] {
            for &phase in &[0.0, WARP_EPSILON, 0.5, PHASE_MAX] {
                let warped = warp_phase(phase, warp);
                assert!(warped.is_finite());
                assert!((0.0..1.0).contains(&warped), "warp={warp} phase={phase}");
            }
        }
    }

    #[test]
    fn test_nan_warp_is_identity() {
        assert_eq!(warp_phase(0.25, f64::NAN), 0.25);
    }
}
