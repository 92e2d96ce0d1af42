//! SSE4.1 backend for the 4-wide blend (x86_64)
//!
//! Evaluates the bilinear blend for 4 offset pairs in `i32` lanes. The
//! final division by s^2 has no integer SIMD instruction, so the lanes
//! are widened to `f64`, divided, and truncated back with
//! `_mm_cvttpd_epi32`. For quotients up to 255 and divisors up to s^2
//! with s <= [`crate::MAX_SCALE`], the correctly-rounded f64 quotient is
//! an integer only when the exact quotient is, so truncation yields
//! exactly the scalar integer division.

use std::arch::x86_64::*;

/// Evaluate the blend for 4 lanes of (x, y) offsets.
///
/// # Safety
///
/// Caller must ensure SSE4.1 is available.
#[target_feature(enable = "sse4.1")]
pub unsafe fn blend4(s: i32, xs: [i32; 4], ys: [i32; 4], q: [i32; 4]) -> [i32; 4] {
    unsafe {
        let [q00, qs0, q0s, qss] = q;
        let s_v = _mm_set1_epi32(s);
        let x = _mm_loadu_si128(xs.as_ptr() as *const __m128i);
        let y = _mm_loadu_si128(ys.as_ptr() as *const __m128i);
        let s_minus_x = _mm_sub_epi32(s_v, x);
        let s_minus_y = _mm_sub_epi32(s_v, y);

        // left  = (s-y)*q00 + y*q0s
        // right = (s-y)*qs0 + y*qss
        let left = _mm_add_epi32(
            _mm_mullo_epi32(s_minus_y, _mm_set1_epi32(q00)),
            _mm_mullo_epi32(y, _mm_set1_epi32(q0s)),
        );
        let right = _mm_add_epi32(
            _mm_mullo_epi32(s_minus_y, _mm_set1_epi32(qs0)),
            _mm_mullo_epi32(y, _mm_set1_epi32(qss)),
        );
        let num = _mm_add_epi32(
            _mm_mullo_epi32(left, s_minus_x),
            _mm_mullo_epi32(x, right),
        );

        let quot = div_trunc(num, (s * s) as f64);
        let mut out = [0i32; 4];
        _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, quot);
        out
    }
}

/// Per-lane truncating division of 4 `i32` lanes by a constant divisor.
///
/// # Safety
///
/// Caller must ensure SSE4.1 is available.
#[target_feature(enable = "sse4.1")]
unsafe fn div_trunc(num: __m128i, divisor: f64) -> __m128i {
    unsafe {
        let d = _mm_set1_pd(divisor);
        // Lanes 0,1 and lanes 2,3, each widened to two f64.
        let lo = _mm_cvtepi32_pd(num);
        let hi = _mm_cvtepi32_pd(_mm_unpackhi_epi64(num, num));
        let qlo = _mm_cvttpd_epi32(_mm_div_pd(lo, d));
        let qhi = _mm_cvttpd_epi32(_mm_div_pd(hi, d));
        _mm_unpacklo_epi64(qlo, qhi)
    }
}
