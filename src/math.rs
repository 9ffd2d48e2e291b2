//! The arithmetic helpers used by the hello demo.
//!
//! The plain integer functions wrap on overflow, the same in every
//! build profile. The
//! `checked_*` variants report overflow and division by zero as errors
//! and are what the demo calls with configured operands.

use anyhow::bail;

pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Raise `base` to `exp`, wrapping on overflow. `power(x, 0)` is 1.
pub fn power(base: i32, exp: u32) -> i32 {
    base.wrapping_pow(exp)
}

pub fn divide(a: f64, b: f64) -> f64 {
    a / b
}

pub fn checked_multiply(a: i32, b: i32) -> anyhow::Result<i32> {
    match a.checked_mul(b) {
        Some(x) => Ok(x),
        None => bail!("{a} * {b} overflows i32"),
    }
}

pub fn checked_power(base: i32, exp: u32) -> anyhow::Result<i32> {
    match base.checked_pow(exp) {
        Some(x) => Ok(x),
        None => bail!("{base}^{exp} overflows i32"),
    }
}

pub fn checked_divide(a: f64, b: f64) -> anyhow::Result<f64> {
    if b == 0.0 {
        bail!("cannot divide {a} by zero");
    }
    let q = a / b;
    if !q.is_finite() {
        bail!("{a} / {b} is not a finite number");
    }
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_cases() {
        assert_eq!(multiply(5, 3), 15);
        assert_eq!(power(2, 8), 256);
        assert_eq!(divide(10.0, 4.0), 2.5);
    }

    #[test]
    fn test_power_edges() {
        assert_eq!(power(7, 0), 1);
        assert_eq!(power(0, 0), 1);
        assert_eq!(power(-2, 3), -8);
        assert_eq!(power(1, 1000), 1);
    }

    #[test]
    fn test_checked_agrees_with_plain() {
        assert_eq!(checked_multiply(5, 3).unwrap(), multiply(5, 3));
        assert_eq!(checked_power(2, 8).unwrap(), power(2, 8));
        assert_eq!(checked_divide(10.0, 4.0).unwrap(), divide(10.0, 4.0));
    }

    #[test]
    fn test_checked_overflow() {
        assert!(checked_multiply(i32::MAX, 2).is_err());
        assert!(checked_power(2, 31).is_err());
        assert_eq!(checked_power(2, 30).unwrap(), 1 << 30);
        assert_eq!(checked_power(-2, 31).unwrap(), i32::MIN);
    }

    #[test]
    fn test_power_huge_exponent() {
        assert_eq!(checked_power(1, u32::MAX).unwrap(), 1);
        assert_eq!(checked_power(0, u32::MAX).unwrap(), 0);
        assert_eq!(checked_power(-1, u32::MAX).unwrap(), -1);
        assert_eq!(checked_power(-1, u32::MAX - 1).unwrap(), 1);
        assert!(checked_power(2, u32::MAX).is_err());
        assert_eq!(power(1, u32::MAX), 1);
        assert_eq!(power(-1, u32::MAX), -1);
    }

    #[test]
    fn test_plain_wraps() {
        assert_eq!(multiply(i32::MAX, 2), -2);
        assert_eq!(multiply(i32::MIN, -1), i32::MIN);
        assert_eq!(power(2, 31), i32::MIN);
        assert_eq!(power(2, 32), 0);
    }

    #[test]
    fn test_checked_divide_by_zero() {
        let err = checked_divide(1.0, 0.0).unwrap_err();
        assert!(err.to_string().contains("by zero"));
        assert!(checked_divide(f64::MAX, 0.5).is_err());
    }
}
