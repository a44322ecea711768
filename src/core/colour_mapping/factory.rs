use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::map::ColourMap;
use crate::core::colour_mapping::maps::blue_white_gradient::BlueWhiteGradient;
use crate::core::colour_mapping::maps::heat_gradient::HeatGradient;

#[must_use]
pub fn colour_map_factory(kind: ColourMapKinds, max_iterations: u32) -> Box<dyn ColourMap> {
    match kind {
        ColourMapKinds::HeatGradient => Box::new(HeatGradient::new(max_iterations)),
        ColourMapKinds::BlueWhiteGradient => Box::new(BlueWhiteGradient::new(max_iterations)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(
            ColourMapKinds::ALL.first(),
            Some(&ColourMapKinds::default())
        );
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourMapKinds::ALL {
            let map = colour_map_factory(kind, 256);
            assert_eq!(map.kind(), kind);
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourMapKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
