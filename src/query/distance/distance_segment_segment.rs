//! The segment-pair closest-point solver.

use crate::query::details::{CanonicalSegmentPair, SolveEntry};
use simba::simd::SimdRealField;

/// The stages of the clamped closest-point solve.
///
/// Each stage solves one segment parameter with the other held fixed, clamps
/// it to `[0, 1]`, and hands the result to the next stage. The entry stage is
/// chosen by the classifier, depending on which operands degenerated to
/// points.
enum SolveState<T> {
    SolveT,
    SolveU { t: T },
    ResolveT { u: T },
    Finalize { t: T, u: T },
}

/// Distance between the two (inflated) canonical segments of `pair`.
///
/// Negative when the capsules overlap.
#[inline]
pub fn distance_segment_segment<T: SimdRealField>(pair: &CanonicalSegmentPair<T>) -> T {
    distance_segment_segment_with_parameters(pair).0
}

/// Same as [`distance_segment_segment`], but also returns the clamped
/// closest-point parameters `(t, u)` along `[a, b]` and `[c, d]`.
///
/// The staged solve (solve `t`, solve `u`, re-solve `t`) clamps each parameter
/// locally, so the final re-solve is not guaranteed to reach the joint global
/// optimum in every configuration. When the two segments are parallel the
/// first stage divides by a vanishing denominator; the indeterminate result is
/// pinned to a bound by the min-max projection and the solve carries on rather
/// than failing.
pub fn distance_segment_segment_with_parameters<T: SimdRealField>(
    pair: &CanonicalSegmentPair<T>,
) -> (T, T, T) {
    let d1 = &pair.b - &pair.a;
    let d2 = &pair.d - &pair.c;
    let d12 = &pair.c - &pair.a;

    let r = d1.dot(&d2);
    let s1 = d1.dot(&d12);
    let s2 = d2.dot(&d12);
    let dd1 = d1.norm_squared();
    let dd2 = d2.norm_squared();
    let denom = dd1.clone() * dd2.clone() - r.clone() * r.clone();

    let mut state = match pair.entry {
        SolveEntry::BothSegments => SolveState::SolveT,
        SolveEntry::SecondDegenerate => SolveState::ResolveT { u: T::zero() },
        SolveEntry::BothDegenerate => SolveState::Finalize {
            t: T::zero(),
            u: T::zero(),
        },
    };

    loop {
        state = match state {
            SolveState::SolveT => {
                let t_raw = (s1.clone() * dd2.clone() - s2.clone() * r.clone()) / denom.clone();
                SolveState::SolveU { t: clamp_unit(t_raw) }
            }
            SolveState::SolveU { t } => {
                let u_raw = (t.clone() * r.clone() - s2.clone()) / dd2.clone();
                SolveState::ResolveT { u: clamp_unit(u_raw) }
            }
            SolveState::ResolveT { u } => {
                let t_raw = (u.clone() * r.clone() + s1.clone()) / dd1.clone();
                SolveState::Finalize {
                    t: clamp_unit(t_raw),
                    u,
                }
            }
            SolveState::Finalize { t, u } => {
                let closest = &d1 * t.clone() - &d2 * u.clone() - &d12;
                let dist = closest.norm_squared().simd_sqrt() - pair.radius_sum.clone();
                return (dist, t, u);
            }
        };
    }
}

/// Branch-free clamp to `[0, 1]`, in the `min(1, max(0, x))` formulation.
///
/// An indeterminate input (the parallel-segment `0/0` stage) is pinned to the
/// lower bound by the lane-wise max.
#[inline]
fn clamp_unit<T: SimdRealField>(x: T) -> T {
    x.simd_max(T::zero()).simd_min(T::one())
}
