//! Scalar to text conversion
//!
//! Every REDLINE scalar has one canonical text form, used by `print` and by
//! string concatenation in generated code:
//!
//! | Type | Form |
//! |------|------|
//! | int | decimal, `-` for negatives |
//! | bool | `true` / `false` |
//! | float | shortest form that reads back to the same value; whole values drop the fraction (`3`), non-finite values are `inf`, `-inf`, `NaN` |
//! | text | unchanged |

use crate::cstring::into_c_string;
use std::borrow::Cow;
use std::ffi::c_char;

/// A value with a canonical REDLINE text form
pub trait ScalarText {
    fn to_text(&self) -> Cow<'_, str>;
}

macro_rules! impl_scalar_text_display {
    ($($t:ty),*) => {
        $(
            impl ScalarText for $t {
                fn to_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

// Float Display is already shortest-roundtrip and prints `3` for 3.0
impl_scalar_text_display!(i32, i64, u32, u64, usize, char, f32, f64);

impl ScalarText for bool {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

impl ScalarText for str {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl ScalarText for String {
    fn to_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

/// Canonical text of any scalar
pub fn to_text<T: ScalarText + ?Sized>(value: &T) -> String {
    value.to_text().into_owned()
}

/// Host-language `a + b` where either side may be a non-text scalar
pub fn concat<A, B>(a: &A, b: &B) -> String
where
    A: ScalarText + ?Sized,
    B: ScalarText + ?Sized,
{
    let (a, b) = (a.to_text(), b.to_text());
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(&a);
    out.push_str(&b);
    out
}

/// Convert Int to String (free with `rl_string_free`)
#[unsafe(no_mangle)]
pub extern "C" fn rl_int_to_string(value: i64) -> *mut c_char {
    into_c_string(to_text(&value))
}

/// Convert Float to String (free with `rl_string_free`)
#[unsafe(no_mangle)]
pub extern "C" fn rl_float_to_string(value: f64) -> *mut c_char {
    into_c_string(to_text(&value))
}

/// Convert Bool to String (free with `rl_string_free`)
#[unsafe(no_mangle)]
pub extern "C" fn rl_bool_to_string(value: bool) -> *mut c_char {
    into_c_string(to_text(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cstring::test_support::take_c_string;

    #[test]
    fn test_int_text() {
        assert_eq!(to_text(&42i64), "42");
        assert_eq!(to_text(&-7i32), "-7");
        assert_eq!(to_text(&0u64), "0");
        assert_eq!(to_text(&i64::MIN), "-9223372036854775808");
    }

    #[test]
    fn test_bool_text() {
        assert_eq!(to_text(&true), "true");
        assert_eq!(to_text(&false), "false");
    }

    #[test]
    fn test_float_text() {
        assert_eq!(to_text(&3.0f64), "3");
        assert_eq!(to_text(&0.1f64), "0.1");
        assert_eq!(to_text(&-2.5f64), "-2.5");
        assert_eq!(to_text(&1e21f64), "1000000000000000000000");
        assert_eq!(to_text(&f64::INFINITY), "inf");
        assert_eq!(to_text(&f64::NEG_INFINITY), "-inf");
        assert_eq!(to_text(&f64::NAN), "NaN");
        assert_eq!(to_text(&0.5f32), "0.5");
    }

    #[test]
    fn test_float_text_reads_back() {
        for x in [0.1, 1.0 / 3.0, 123456.789, -1e-9, f64::MAX] {
            let text = to_text(&x);
            assert_eq!(text.parse::<f64>().unwrap(), x);
        }
    }

    #[test]
    fn test_text_is_unchanged() {
        assert_eq!(to_text("hello"), "hello");
        assert_eq!(to_text(&String::from("wörld")), "wörld");
        assert_eq!(to_text(&'x'), "x");
    }

    #[test]
    fn test_concat_mixed_scalars() {
        assert_eq!(concat("score: ", &10i64), "score: 10");
        assert_eq!(concat(&2.5f64, " units"), "2.5 units");
        assert_eq!(concat("done=", &true), "done=true");
        assert_eq!(concat("", ""), "");
    }

    #[test]
    fn test_ffi_conversions() {
        unsafe {
            assert_eq!(take_c_string(rl_int_to_string(-12)), "-12");
            assert_eq!(take_c_string(rl_float_to_string(4.0)), "4");
            assert_eq!(take_c_string(rl_bool_to_string(true)), "true");
        }
    }
}
