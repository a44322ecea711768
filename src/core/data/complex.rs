use std::ops::{Add, Mul};

/// Exponents with zero fractional part up to this magnitude are evaluated
/// by repeated multiplication rather than the polar form, keeping `z^2`
/// exact for the default power.
const MAX_FAST_INTEGER_EXPONENT: f64 = 64.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    pub const ONE: Self = Self {
        real: 1.0,
        imag: 0.0,
    };

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }

    /// Raises to an integer power by binary exponentiation. Negative
    /// exponents invert the result; `z.powi(0)` is one for every `z`,
    /// including zero.
    #[must_use]
    pub fn powi(self, exponent: i32) -> Self {
        let mut result = Self::ONE;
        let mut base = self;
        let mut n = exponent.unsigned_abs();

        while n > 0 {
            if n & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            n >>= 1;
        }

        if exponent < 0 {
            let denominator = result.magnitude_squared();
            result = Self {
                real: result.real / denominator,
                imag: -result.imag / denominator,
            };
        }

        result
    }

    /// Raises to a real power on the principal branch: `r^p · e^{ipθ}`.
    ///
    /// Integer-valued exponents of small magnitude take the exact
    /// repeated-multiplication path, so `z.powf(2.0)` equals `z * z`
    /// bit-for-bit. The polar form gives `0^p = 0` for `p > 0` and a
    /// non-finite result for `p < 0`; NaN components propagate.
    #[must_use]
    pub fn powf(self, exponent: f64) -> Self {
        if exponent.fract() == 0.0 && exponent.abs() <= MAX_FAST_INTEGER_EXPONENT {
            return self.powi(exponent as i32);
        }

        let radius = self.magnitude_squared().sqrt();
        let theta = self.imag.atan2(self.real);
        let scaled = radius.powf(exponent);
        let angle = theta * exponent;

        Self {
            real: scaled * angle.cos(),
            imag: scaled * angle.sin(),
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
