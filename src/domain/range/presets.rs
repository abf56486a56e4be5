//! Preset tables and preset matching

use super::{PresetKind, PriceBounds, RangePreset, Tier};

const STABLE_PRESET: RangePreset =
    RangePreset::new(PresetKind::Stable, 0.984, 1.016, Tier::VeryLow, Tier::High);

const VOLATILE_PRESETS: [RangePreset; 4] = [
    RangePreset::new(PresetKind::Full, 0.0, f64::INFINITY, Tier::VeryLow, Tier::VeryLow),
    RangePreset::new(PresetKind::Safe, 0.8, 1.4, Tier::Low, Tier::Low),
    RangePreset::new(PresetKind::Normal, 0.9, 1.2, Tier::Medium, Tier::Medium),
    RangePreset::new(PresetKind::Risk, 0.95, 1.1, Tier::High, Tier::High),
];

/// Relative tolerance used when matching typed bounds against a preset.
const MATCH_TOLERANCE: f64 = 1e-9;

/// Presets offered for a pair, in display order.
pub fn derive_presets(is_stablecoin_pair: bool) -> Vec<RangePreset> {
    if is_stablecoin_pair {
        vec![STABLE_PRESET]
    } else {
        VOLATILE_PRESETS.to_vec()
    }
}

/// Find the preset whose bounds at `current_price` equal `bounds`.
/// `None` means the bounds form a custom range.
pub fn match_preset(
    presets: &[RangePreset],
    bounds: &PriceBounds,
    current_price: f64,
) -> Option<PresetKind> {
    presets
        .iter()
        .find(|preset| {
            let expected = preset.bounds(current_price);
            approx_eq(expected.lower, bounds.lower) && approx_eq(expected.upper, bounds.upper)
        })
        .map(|preset| preset.kind)
}

fn approx_eq(a: f64, b: f64) -> bool {
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }
    (a - b).abs() <= MATCH_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_pair_gets_single_preset() {
        let presets = derive_presets(true);
        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].kind, PresetKind::Stable);
        assert_eq!(presets[0].min, 0.984);
        assert_eq!(presets[0].max, 1.016);
        assert_eq!(presets[0].risk, Tier::VeryLow);
        assert_eq!(presets[0].profit, Tier::High);
    }

    #[test]
    fn test_volatile_pair_presets_in_order() {
        let presets = derive_presets(false);
        let kinds: Vec<PresetKind> = presets.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![PresetKind::Full, PresetKind::Safe, PresetKind::Normal, PresetKind::Risk]
        );

        let multipliers: Vec<(f64, f64)> = presets.iter().map(|p| (p.min, p.max)).collect();
        assert_eq!(
            multipliers,
            vec![(0.0, f64::INFINITY), (0.8, 1.4), (0.9, 1.2), (0.95, 1.1)]
        );

        let tiers: Vec<(Tier, Tier)> = presets.iter().map(|p| (p.risk, p.profit)).collect();
        assert_eq!(
            tiers,
            vec![
                (Tier::VeryLow, Tier::VeryLow),
                (Tier::Low, Tier::Low),
                (Tier::Medium, Tier::Medium),
                (Tier::High, Tier::High),
            ]
        );
    }

    #[test]
    fn test_presets_are_deterministic() {
        assert_eq!(derive_presets(false), derive_presets(false));
        assert_eq!(derive_presets(true), derive_presets(true));
    }

    #[test]
    fn test_every_preset_has_min_below_max() {
        for preset in derive_presets(false).into_iter().chain(derive_presets(true)) {
            assert!(preset.min < preset.max, "{} has min >= max", preset.kind);
        }
    }

    #[test]
    fn test_match_preset() {
        let presets = derive_presets(false);
        let normal = PriceBounds::new(1800.0 * 0.9, 1800.0 * 1.2);
        assert_eq!(match_preset(&presets, &normal, 1800.0), Some(PresetKind::Normal));

        let full = PriceBounds::new(0.0, f64::INFINITY);
        assert_eq!(match_preset(&presets, &full, 1800.0), Some(PresetKind::Full));

        let custom = PriceBounds::new(1500.0, 2500.0);
        assert_eq!(match_preset(&presets, &custom, 1800.0), None);
    }
}
