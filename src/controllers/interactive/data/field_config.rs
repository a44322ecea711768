use crate::core::colour_mapping::map::ColourMap;
use crate::core::evaluator::EscapeTimeEvaluator;

/// An immutable render request: the evaluator snapshot plus the colour map
/// to apply to its output.
pub struct FieldConfig {
    evaluator: EscapeTimeEvaluator,
    colour_map: Box<dyn ColourMap>,
}

impl FieldConfig {
    #[must_use]
    pub fn new(evaluator: EscapeTimeEvaluator, colour_map: Box<dyn ColourMap>) -> Self {
        Self {
            evaluator,
            colour_map,
        }
    }

    #[must_use]
    pub fn evaluator(&self) -> &EscapeTimeEvaluator {
        &self.evaluator
    }

    #[must_use]
    pub fn colour_map(&self) -> &Box<dyn ColourMap> {
        &self.colour_map
    }
}

impl PartialEq for FieldConfig {
    fn eq(&self, other: &Self) -> bool {
        self.evaluator == other.evaluator && self.colour_map.kind() == other.colour_map.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_mapping::factory::colour_map_factory;
    use crate::core::colour_mapping::kinds::ColourMapKinds;
    use crate::core::data::complex::Complex;
    use crate::core::data::grid::GridSpec;
    use crate::core::data::recurrence::RecurrenceParams;
    use crate::core::data::sample_window::SampleWindow;

    fn evaluator(budget: u32) -> EscapeTimeEvaluator {
        EscapeTimeEvaluator::new(
            SampleWindow::new(-2.0, 2.0, -2.0, 2.0).unwrap(),
            GridSpec::new(4, 4).unwrap(),
            budget,
            RecurrenceParams::new(Complex::ZERO, 2.0),
        )
        .unwrap()
    }

    #[test]
    fn test_equal_when_evaluator_and_kind_match() {
        let a = FieldConfig::new(
            evaluator(10),
            colour_map_factory(ColourMapKinds::HeatGradient, 10),
        );
        let b = FieldConfig::new(
            evaluator(10),
            colour_map_factory(ColourMapKinds::HeatGradient, 10),
        );

        assert!(a == b);
    }

    #[test]
    fn test_not_equal_when_budget_differs() {
        let a = FieldConfig::new(
            evaluator(10),
            colour_map_factory(ColourMapKinds::HeatGradient, 10),
        );
        let b = FieldConfig::new(
            evaluator(11),
            colour_map_factory(ColourMapKinds::HeatGradient, 11),
        );

        assert!(a != b);
    }

    #[test]
    fn test_not_equal_when_colour_map_kind_differs() {
        let a = FieldConfig::new(
            evaluator(10),
            colour_map_factory(ColourMapKinds::HeatGradient, 10),
        );
        let b = FieldConfig::new(
            evaluator(10),
            colour_map_factory(ColourMapKinds::BlueWhiteGradient, 10),
        );

        assert!(a != b);
    }
}
