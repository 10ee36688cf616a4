//! Math operations for REDLINE
//!
//! Straight pass-through to `f64`'s own functions. Domain errors follow
//! IEEE 754 (`sqrt(-1.0)` is NaN, `log(0.0)` is `-inf`); nothing here fails.

pub const PI: f64 = std::f64::consts::PI;
pub const E: f64 = std::f64::consts::E;

// =============================================================================
// Unary Functions
// =============================================================================

pub fn abs(x: f64) -> f64 {
    x.abs()
}

pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

pub fn sin(x: f64) -> f64 {
    x.sin()
}

pub fn cos(x: f64) -> f64 {
    x.cos()
}

pub fn tan(x: f64) -> f64 {
    x.tan()
}

/// Natural logarithm
pub fn log(x: f64) -> f64 {
    x.ln()
}

pub fn log10(x: f64) -> f64 {
    x.log10()
}

pub fn exp(x: f64) -> f64 {
    x.exp()
}

pub fn floor(x: f64) -> f64 {
    x.floor()
}

pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

/// Round half away from zero (`round(2.5) == 3.0`, `round(-2.5) == -3.0`)
pub fn round(x: f64) -> f64 {
    x.round()
}

// =============================================================================
// Binary Functions
// =============================================================================

pub fn pow(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// Smaller of two values; `b` when the comparison fails (NaN)
pub fn min(a: f64, b: f64) -> f64 {
    if a < b { a } else { b }
}

/// Larger of two values; `b` when the comparison fails (NaN)
pub fn max(a: f64, b: f64) -> f64 {
    if a > b { a } else { b }
}

// =============================================================================
// C ABI
// =============================================================================

macro_rules! export_unary {
    ($($name:ident => $f:ident),* $(,)?) => {
        $(
            #[unsafe(no_mangle)]
            pub extern "C" fn $name(x: f64) -> f64 {
                $f(x)
            }
        )*
    };
}

macro_rules! export_binary {
    ($($name:ident => $f:ident),* $(,)?) => {
        $(
            #[unsafe(no_mangle)]
            pub extern "C" fn $name(a: f64, b: f64) -> f64 {
                $f(a, b)
            }
        )*
    };
}

export_unary! {
    rl_math_abs => abs,
    rl_math_sqrt => sqrt,
    rl_math_sin => sin,
    rl_math_cos => cos,
    rl_math_tan => tan,
    rl_math_log => log,
    rl_math_log10 => log10,
    rl_math_exp => exp,
    rl_math_floor => floor,
    rl_math_ceil => ceil,
    rl_math_round => round,
}

export_binary! {
    rl_math_pow => pow,
    rl_math_min => min,
    rl_math_max => max,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_unary_functions() {
        assert_eq!(abs(-3.5), 3.5);
        assert_eq!(sqrt(16.0), 4.0);
        assert!(sqrt(-1.0).is_nan());
        assert!((sin(PI / 2.0) - 1.0).abs() < EPS);
        assert!((cos(0.0) - 1.0).abs() < EPS);
        assert!(tan(0.0).abs() < EPS);
        assert!((log(E) - 1.0).abs() < EPS);
        assert_eq!(log(0.0), f64::NEG_INFINITY);
        assert!((log10(1000.0) - 3.0).abs() < EPS);
        assert!((exp(1.0) - E).abs() < EPS);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(floor(-1.5), -2.0);
        assert_eq!(ceil(-1.5), -1.0);
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -3.0);
        assert_eq!(round(2.4), 2.0);
    }

    #[test]
    fn test_binary_functions() {
        assert_eq!(pow(2.0, 10.0), 1024.0);
        assert_eq!(min(1.0, 2.0), 1.0);
        assert_eq!(max(1.0, 2.0), 2.0);
        assert_eq!(min(f64::NAN, 2.0), 2.0);
    }

    #[test]
    fn test_ffi_exports() {
        assert_eq!(rl_math_sqrt(9.0), 3.0);
        assert_eq!(rl_math_round(0.5), 1.0);
        assert_eq!(rl_math_pow(3.0, 2.0), 9.0);
        assert_eq!(rl_math_max(-1.0, -2.0), -1.0);
    }
}
