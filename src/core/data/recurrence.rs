use crate::core::data::complex::Complex;

/// Snapshot of the user-adjustable recurrence `z ← z^power + c`.
///
/// Deliberately unvalidated: any finite or non-finite constant and exponent
/// produce a defined iteration field, so degenerate choices are not errors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RecurrenceParams {
    pub c: Complex,
    pub power: f64,
}

impl RecurrenceParams {
    #[must_use]
    pub fn new(c: Complex, power: f64) -> Self {
        Self { c, power }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_degenerate_values() {
        let params = RecurrenceParams::new(
            Complex {
                real: 1e300,
                imag: -1e300,
            },
            -3.5,
        );

        assert_eq!(params.power, -3.5);
        assert_eq!(params.c.real, 1e300);
    }
}
