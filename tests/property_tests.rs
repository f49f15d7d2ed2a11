use ergosurg::config::ScoringWeights;
use ergosurg::core_types::{GripType, HandSize, Material, ParameterBounds, ToolParameters};
use ergosurg::scorer::Scorer;
use proptest::prelude::*;

// --- STRATEGIES ---

fn arb_material() -> impl Strategy<Value = Material> {
    prop_oneof![
        Just(Material::Steel),
        Just(Material::Polymer),
        Just(Material::Silicone)
    ]
}

fn arb_hand() -> impl Strategy<Value = HandSize> {
    prop_oneof![
        Just(HandSize::Small),
        Just(HandSize::Medium),
        Just(HandSize::Large)
    ]
}

fn arb_grip() -> impl Strategy<Value = Option<GripType>> {
    prop_oneof![
        Just(None),
        Just(Some(GripType::Power)),
        Just(Some(GripType::Pinch))
    ]
}

// Wider than the sliders: the scorer must stay bounded for any input
prop_compose! {
    fn arb_params()(
        diameter in -10.0..80.0f32,
        curvature in -10.0..60.0f32,
        handle_length in 0.0..300.0f32,
        grip_force in 0.0..200.0f32,
        material in arb_material(),
        hand_size in arb_hand(),
        grip in arb_grip()
    ) -> ToolParameters {
        ToolParameters { diameter, curvature, handle_length, grip_force, material, hand_size, grip }
    }
}

prop_compose! {
    fn arb_slider_params()(
        diameter in 5.0..=45.0f32,
        curvature in 0.0..=30.0f32,
        handle_length in 80.0..=200.0f32,
        grip_force in 10.0..=100.0f32,
        material in arb_material(),
        hand_size in arb_hand(),
        grip in arb_grip()
    ) -> ToolParameters {
        ToolParameters { diameter, curvature, handle_length, grip_force, material, hand_size, grip }
    }
}

fn in_index_range(v: f32) -> bool {
    (0.0..=100.0).contains(&v)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_indices_always_bounded(p in arb_params()) {
        let m = Scorer::default().score(&p);
        prop_assert!(in_index_range(m.comfort), "comfort {}", m.comfort);
        prop_assert!(in_index_range(m.precision), "precision {}", m.precision);
        prop_assert!(in_index_range(m.stability), "stability {}", m.stability);
        prop_assert!(in_index_range(m.score), "score {}", m.score);
    }

    #[test]
    fn test_any_float_input_stays_bounded(
        diameter in any::<f32>(),
        curvature in any::<f32>(),
        handle_length in any::<f32>(),
        grip_force in any::<f32>(),
        material in arb_material(),
        grip in arb_grip()
    ) {
        let p = ToolParameters { diameter, curvature, handle_length, grip_force, material, grip, ..Default::default() };
        let m = Scorer::default().score(&p);
        prop_assert!(in_index_range(m.comfort), "comfort {}", m.comfort);
        prop_assert!(in_index_range(m.precision), "precision {}", m.precision);
        prop_assert!(in_index_range(m.stability), "stability {}", m.stability);
        prop_assert!(in_index_range(m.score), "score {}", m.score);
    }

    #[test]
    fn test_bounds_clamp_any_float_onto_slider(v in any::<f32>()) {
        let b = ParameterBounds::STANDARD;
        let p = b.clamp(ToolParameters { diameter: v, curvature: v, handle_length: v, grip_force: v, ..Default::default() });
        prop_assert!(p.diameter >= b.diameter.min && p.diameter <= b.diameter.max);
        prop_assert!(p.curvature >= b.curvature.min && p.curvature <= b.curvature.max);
        prop_assert!(p.handle_length >= b.handle_length.min && p.handle_length <= b.handle_length.max);
        prop_assert!(p.grip_force >= b.grip_force.min && p.grip_force <= b.grip_force.max);
    }

    #[test]
    fn test_slider_inputs_give_finite_pressure(p in arb_slider_params()) {
        let m = Scorer::default().score(&p);
        prop_assert!(m.pressure.is_finite());
        prop_assert!(m.pressure > 0.0);
    }

    #[test]
    fn test_deterministic_bits(p in arb_params()) {
        let scorer = Scorer::default();
        let a = scorer.score(&p);
        let b = scorer.score(&p);
        prop_assert_eq!(a.comfort.to_bits(), b.comfort.to_bits());
        prop_assert_eq!(a.precision.to_bits(), b.precision.to_bits());
        prop_assert_eq!(a.stability.to_bits(), b.stability.to_bits());
        prop_assert_eq!(a.pressure.to_bits(), b.pressure.to_bits());
        prop_assert_eq!(a.score.to_bits(), b.score.to_bits());
    }

    #[test]
    fn test_fast_and_debug_paths_agree(p in arb_params()) {
        let scorer = Scorer::default();
        let fast = scorer.score(&p);
        let rich = scorer.score_debug(&p).metrics;
        prop_assert_eq!(fast, rich);
    }

    #[test]
    fn test_comfort_strictly_decreases_with_deviation(
        hand in arb_hand(),
        near in 0.5..10.0f32,
        gap in 0.5..10.0f32,
        above in any::<bool>()
    ) {
        // Steel, straight handle: no comfort bonuses, raw comfort stays inside (0, 100)
        let scorer = Scorer::default();
        let base = ToolParameters::builder().hand_size(hand).build();
        let ideal = scorer.ideal_diameter(&base);
        let sign = if above { 1.0 } else { -1.0 };

        let close = ToolParameters { diameter: ideal + sign * near, ..base };
        let far = ToolParameters { diameter: ideal + sign * (near + gap), ..base };

        prop_assert!(scorer.score(&close).comfort > scorer.score(&far).comfort);
    }

    #[test]
    fn test_comfort_never_increases_with_deviation(
        p in arb_slider_params(),
        gap in 0.0..20.0f32
    ) {
        let scorer = Scorer::default();
        let ideal = scorer.ideal_diameter(&p);
        let dev = (p.diameter - ideal).abs();
        let further = ToolParameters { diameter: ideal + dev + gap, ..p };
        let here = ToolParameters { diameter: ideal + dev, ..p };
        prop_assert!(scorer.score(&here).comfort >= scorer.score(&further).comfort);
    }

    #[test]
    fn test_pressure_increases_with_force(
        p in arb_slider_params(),
        low in 10.0..90.0f32,
        step in 0.5..10.0f32
    ) {
        let scorer = Scorer::default();
        let light = ToolParameters { grip_force: low, ..p };
        let heavy = ToolParameters { grip_force: low + step, ..p };
        prop_assert!(scorer.score(&heavy).pressure > scorer.score(&light).pressure);
    }

    #[test]
    fn test_custom_weights_stay_bounded(
        p in arb_params(),
        slope in 0.0..20.0f32,
        base in -50.0..200.0f32
    ) {
        let weights = ScoringWeights {
            comfort_deviation_slope: slope,
            precision_base: base,
            ..Default::default()
        };
        let m = Scorer::new(weights).score(&p);
        prop_assert!(in_index_range(m.comfort));
        prop_assert!(in_index_range(m.precision));
        prop_assert!(in_index_range(m.score));
    }
}

#[test]
fn test_slider_corners_are_finite() {
    let b = ParameterBounds::STANDARD;
    let scorer = Scorer::default();
    for diameter in [b.diameter.min, b.diameter.max] {
        for handle_length in [b.handle_length.min, b.handle_length.max] {
            for grip_force in [b.grip_force.min, b.grip_force.max] {
                for curvature in [b.curvature.min, b.curvature.max] {
                    let p = ToolParameters {
                        diameter,
                        curvature,
                        handle_length,
                        grip_force,
                        ..Default::default()
                    };
                    let m = scorer.score(&p);
                    assert!(m.pressure.is_finite());
                    assert!(in_index_range(m.score));
                }
            }
        }
    }
}
