use crate::common::{complex::Scaler, constants::LPC_MAX};
#[allow(unused_imports)]
use num_traits::real::Real;

/// Autocorrelation of a windowed frame for lags 0..r.len()
pub fn autocorrelate(wn: &[Scaler], r: &mut [Scaler]) {
    for (j, r) in r.iter_mut().enumerate() {
        *r = 0.0;
        if j < wn.len() {
            for (x, y) in wn.iter().zip(&wn[j..]) {
                *r += *x * *y;
            }
        }
    }
}

/// Finds the LPC coefficients `ak` (ak[0] = 1) of an all-pole model from the
/// autocorrelation `r` using the Levinson-Durbin recursion (Makhoul, "Linear
/// prediction, a tutorial review", 1975). The model order is `ak.len() - 1`.
///
/// A reflection coefficient outside (-1, 1) would make the filter unstable so it is
/// zeroed instead.
///
/// # Panics
///
/// If the order exceeds `LPC_MAX` or `r` is shorter than `ak`
pub fn levinson_durbin(r: &[Scaler], ak: &mut [Scaler]) {
    let order = ak.len() - 1;
    let mut a_memory = [[0.0; LPC_MAX + 1]; 2];
    let (a, a_last) = a_memory.split_at_mut(1);
    let mut a = &mut a[0];
    let mut a_last = &mut a_last[0];

    let mut e = r[0];
    for i in 1..=order {
        core::mem::swap(&mut a_last, &mut a);

        let mut sum = 0.0;
        for j in 1..i {
            sum += a_last[j] * r[i - j];
        }

        let mut k = if e != 0.0 { -(r[i] + sum) / e } else { 0.0 };
        if k.abs() > 1.0 {
            k = 0.0;
        }

        a[i] = k;
        for j in 1..i {
            a[j] = a_last[j] + k * a_last[i - j];
        }
        e *= 1.0 - k * k;
    }

    ak[0] = 1.0;
    ak[1..].copy_from_slice(&a[1..=order]);
}

// evaluates sum(coef[m - i] * T_i(x)) for the Chebyshev polynomials T_i
fn cheb_poly_eval(coef: &[Scaler], x: Scaler) -> Scaler {
    let mut sum = 0.0;
    let mut t_prev = 1.0;
    let mut t = x;
    for (i, c) in coef.iter().rev().enumerate() {
        let t_i = match i {
            0 => 1.0,
            1 => x,
            _ => {
                let t_next = 2.0 * x * t - t_prev;
                t_prev = t;
                t = t_next;
                t_next
            }
        };
        sum += *c * t_i;
    }

    sum
}

/// Converts LPC coefficients to LSPs (radians) by searching for the roots of the
/// symmetric and antisymmetric polynomials P(z) and Q(z) on the unit circle. The
/// roots of P and Q interlace, so the search alternates between them stepping
/// down in x = cos(w) from x = 1 in steps of `delta`. Each bracketed root is refined
/// by halving the interval `bisections + 1` times. The LPC order is `lsp.len()`
/// and must be even.
///
/// Returns the number of roots found. Anything less than the order means the LSPs
/// are not usable.
///
/// # Panics
///
/// If the order exceeds `LPC_MAX` or `ak` is shorter than `lsp.len() + 1`
pub fn lpc_to_lsp(ak: &[Scaler], lsp: &mut [Scaler], bisections: usize, delta: Scaler) -> usize {
    let order = lsp.len();
    let m = order / 2;

    // P'(z) = P(z) / (1 + z^-1) and Q'(z) = Q(z) / (1 - z^-1)
    let mut p = [0.0; LPC_MAX / 2 + 1];
    let mut q = [0.0; LPC_MAX / 2 + 1];
    p[0] = 1.0;
    q[0] = 1.0;
    for i in 1..=m {
        p[i] = ak[i] + ak[order + 1 - i] - p[i - 1];
        q[i] = ak[i] - ak[order + 1 - i] + q[i - 1];
    }
    for i in 0..m {
        p[i] *= 2.0;
        q[i] *= 2.0;
    }

    lsp.fill(0.0);
    let mut roots = 0;
    let mut xl: Scaler = 1.0;
    let mut xr: Scaler = 0.0;
    for (j, lsp) in lsp.iter_mut().enumerate() {
        let coef = if j % 2 == 0 { &p[..=m] } else { &q[..=m] };
        let mut psuml = cheb_poly_eval(coef, xl);

        while xr >= -1.0 {
            xr = xl - delta;
            let psumr = cheb_poly_eval(coef, xr);

            if psumr * psuml < 0.0 || psumr == 0.0 {
                roots += 1;

                let mut xm = 0.0;
                for _ in 0..=bisections {
                    xm = (xl + xr) / 2.0;
                    let psumm = cheb_poly_eval(coef, xm);
                    if psumm * psuml > 0.0 {
                        psuml = psumm;
                        xl = xm;
                    } else {
                        xr = xm;
                    }
                }

                *lsp = xm;
                xl = xm;
                break;
            }

            psuml = psumr;
            xl = xr;
        }
    }

    for lsp in lsp.iter_mut() {
        *lsp = lsp.acos();
    }

    roots
}

// multiplies the polynomial by 1 + c z^-1 + z^-2 in place
fn mul_quadratic(poly: &mut [Scaler], c: Scaler) {
    for n in (0..poly.len()).rev() {
        let mut y = poly[n];
        if n >= 1 {
            y += c * poly[n - 1];
        }
        if n >= 2 {
            y += poly[n - 2];
        }
        poly[n] = y;
    }
}

/// Converts LSPs (radians) back to LPC coefficients. P(z) is rebuilt from the even
/// LSPs and Q(z) from the odd ones as cascades of second order sections, then
/// A(z) = (P(z) + Q(z)) / 2. The order is `lsp.len()` and must be even; `ak`
/// receives order + 1 coefficients.
///
/// # Panics
///
/// If the order exceeds `LPC_MAX` or `ak` is shorter than `lsp.len() + 1`
pub fn lsp_to_lpc(lsp: &[Scaler], ak: &mut [Scaler]) {
    let order = lsp.len();
    let mut p = [0.0; LPC_MAX + 2];
    let mut q = [0.0; LPC_MAX + 2];
    p[0] = 1.0;
    q[0] = 1.0;

    for (i, pair) in lsp.chunks_exact(2).enumerate() {
        let len = 2 * i + 3;
        mul_quadratic(&mut p[..len], -2.0 * pair[0].cos());
        mul_quadratic(&mut q[..len], -2.0 * pair[1].cos());
    }

    // P(z) has a root at z = -1 and Q(z) at z = 1
    for n in (1..=order + 1).rev() {
        p[n] += p[n - 1];
        q[n] -= q[n - 1];
    }

    for (a, (p, q)) in ak[..=order].iter_mut().zip(p.iter().zip(&q)) {
        *a = (*p + *q) * 0.5;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use crate::common::constants::{LPC_ORD, LSP_DELTA1, LSP_ROOT_BISECTIONS};

    #[test]
    fn autocorrelation_lags() {
        let mut r = [0.0; 4];

        autocorrelate(&[1.0, 2.0, 3.0], &mut r);

        assert_eq!(r, [14.0, 8.0, 3.0, 0.0]);
    }

    #[test]
    fn first_order_process() {
        // autocorrelation of x[n] = 0.9 x[n-1] + e[n]
        let mut r = [0.0; LPC_ORD + 1];
        for (i, r) in r.iter_mut().enumerate() {
            *r = (0.9 as Scaler).powi(i as i32);
        }
        let mut ak = [0.0; LPC_ORD + 1];

        levinson_durbin(&r, &mut ak);

        assert_eq!(ak[0], 1.0);
        assert!((ak[1] + 0.9).abs() < 1e-5);
        for a in ak[2..].iter() {
            assert!(a.abs() < 1e-4, "{:?}", ak);
        }
    }

    #[test]
    fn silent_frame_gives_a_flat_filter() {
        let r = [0.0; LPC_ORD + 1];
        let mut ak = [0.5; LPC_ORD + 1];

        levinson_durbin(&r, &mut ak);

        assert_eq!(ak, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn lsp_lpc_round_trip() {
        let lsp = [0.1, 0.3, 0.5, 0.7, 1.0, 1.3, 1.6, 1.9, 2.2, 2.5];
        let mut ak = [0.0; LPC_ORD + 1];
        lsp_to_lpc(&lsp, &mut ak);
        assert_eq!(ak[0], 1.0);

        let mut lsp_out = [0.0; LPC_ORD];
        let roots = lpc_to_lsp(&ak, &mut lsp_out, LSP_ROOT_BISECTIONS, LSP_DELTA1);

        assert_eq!(roots, LPC_ORD);
        for (x, y) in lsp.iter().zip(lsp_out.iter()) {
            assert!((x - y).abs() < 0.01, "{:?}", lsp_out);
        }
    }

    #[test]
    fn flat_filter_has_evenly_spaced_lsps() {
        let mut ak = [0.0; LPC_ORD + 1];
        ak[0] = 1.0;
        let mut lsp = [0.0; LPC_ORD];

        let roots = lpc_to_lsp(&ak, &mut lsp, LSP_ROOT_BISECTIONS, LSP_DELTA1);

        // P(z) = 1 + z^-11 and Q(z) = 1 - z^-11 have roots every pi / 11
        assert_eq!(roots, LPC_ORD);
        for (i, lsp) in lsp.iter().enumerate() {
            let expected = (i + 1) as Scaler * core::f32::consts::PI / 11.0;
            assert!((lsp - expected).abs() < 0.01, "{:?}", lsp);
        }
    }

    #[test]
    fn second_order_sections() {
        // a single LSP pair at +-pi/2 gives P = (1 + z^-1)(1 + z^-2), Q = (1 - z^-1)(1 + z^-2)
        let lsp = [core::f32::consts::FRAC_PI_2, core::f32::consts::FRAC_PI_2];
        let mut ak = [0.0; 3];

        lsp_to_lpc(&lsp, &mut ak);

        assert!((ak[0] - 1.0).abs() < 1e-6);
        assert!(ak[1].abs() < 1e-6);
        assert!((ak[2] - 1.0).abs() < 1e-6);
    }
}
