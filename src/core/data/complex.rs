use std::ops::{Add, Div, Mul};

use serde::Serialize;

pub const I: Complex = Complex { real: 0.0, imag: 1.0 };
pub const ONE: Complex = Complex { real: 1.0, imag: 0.0 };

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Complex {
    #[serde(rename = "re")]
    pub real: f64,
    #[serde(rename = "im")]
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn modulus(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn argument(&self) -> f64 {
        self.imag.atan2(self.real)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    /// Principal fourth root, taken in polar form: `r^(1/4) * e^(i*phi/4)`.
    #[must_use]
    pub fn fourth_root(&self) -> Self {
        let r = self.modulus().powf(0.25);
        let phi = self.argument() / 4.0;

        Self {
            real: r * phi.cos(),
            imag: r * phi.sin(),
        }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Div for Complex {
    type Output = Self;

    /// Dividing by exactly zero yields `(+inf, +inf)` instead of failing.
    /// Callers are expected to reject the non-finite result.
    fn div(self, other: Self) -> Self {
        let denominator = other.magnitude_squared();

        if denominator == 0.0 {
            return Self {
                real: f64::INFINITY,
                imag: f64::INFINITY,
            };
        }

        Self {
            real: (self.real * other.real + self.imag * other.imag) / denominator,
            imag: (self.imag * other.real - self.real * other.imag) / denominator,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_close(actual: Complex, expected: Complex) {
        assert!(
            (actual.real - expected.real).abs() < EPSILON
                && (actual.imag - expected.imag).abs() < EPSILON,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_real_and_imag() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_modulus() {
        assert_eq!(Complex::new(3.0, 4.0).modulus(), 5.0);
        assert_eq!(Complex::new(0.0, 0.0).modulus(), 0.0);
    }

    #[test]
    fn test_argument() {
        assert_eq!(Complex::new(-1.0, 0.0).argument(), std::f64::consts::PI);
        assert_eq!(Complex::new(0.0, 1.0).argument(), std::f64::consts::FRAC_PI_2);
        assert_eq!(Complex::new(0.0, 0.0).argument(), 0.0);
    }

    #[test]
    fn test_add() {
        let result = Complex::new(1.0, 2.0) + Complex::new(-3.0, -7.0);
        assert_eq!(result, Complex::new(-2.0, -5.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let result = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert_eq!(result, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_mul_by_i_rotates_quarter_turn() {
        let result = Complex::new(2.0, 3.0) * I;
        assert_eq!(result, Complex::new(-3.0, 2.0));
    }

    #[test]
    fn test_div() {
        // (-5 + 10i) / (3 + 4i) = 1 + 2i
        let result = Complex::new(-5.0, 10.0) / Complex::new(3.0, 4.0);
        assert_close(result, Complex::new(1.0, 2.0));
    }

    #[test]
    fn test_div_by_zero_returns_infinite_sentinel() {
        let result = Complex::new(1.0, 1.0) / Complex::new(0.0, 0.0);

        assert_eq!(result.real, f64::INFINITY);
        assert_eq!(result.imag, f64::INFINITY);
        assert!(!result.is_finite());
    }

    #[test]
    fn test_fourth_root_of_positive_real() {
        assert_close(Complex::new(16.0, 0.0).fourth_root(), Complex::new(2.0, 0.0));
    }

    #[test]
    fn test_fourth_root_of_negative_real_takes_principal_branch() {
        // -16 = 16 e^(i*pi), principal root is 2 e^(i*pi/4)
        let expected = Complex::new(2.0_f64.sqrt(), 2.0_f64.sqrt());
        assert_close(Complex::new(-16.0, 0.0).fourth_root(), expected);
    }

    #[test]
    fn test_fourth_root_of_zero_is_zero() {
        assert_eq!(Complex::new(0.0, 0.0).fourth_root(), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_fourth_root_raised_to_fourth_power_round_trips() {
        let z = Complex::new(0.3, -1.7);
        let root = z.fourth_root();
        let squared = root * root;

        assert_close(squared * squared, z);
    }

    #[test]
    fn test_is_finite() {
        assert!(Complex::new(1.0, -2.0).is_finite());
        assert!(!Complex::new(f64::NAN, 0.0).is_finite());
        assert!(!Complex::new(0.0, f64::NEG_INFINITY).is_finite());
    }

    #[test]
    fn test_serializes_as_re_im() {
        let json = serde_json::to_string(&Complex::new(1.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"re":1.5,"im":-2.0}"#);
    }
}
