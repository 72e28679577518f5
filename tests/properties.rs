//! Property tests over the whole trait space.

use proptest::prelude::*;
use sporeform::creature::body::MAX_RESOLUTION;
use sporeform::prelude::*;

fn unit() -> impl Strategy<Value = f32> {
    0.0f32..=1.0
}

fn trait_vector() -> impl Strategy<Value = TraitVector> {
    (unit(), unit(), unit(), unit()).prop_map(|(a, b, c, d)| TraitVector::new(a, b, c, d))
}

fn within(v: f32, lo: f32, hi: f32) -> bool {
    v >= lo - 1e-5 && v <= hi + 1e-5
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn creature_generation_is_deterministic(
        traits in trait_vector(),
        seed in any::<u32>(),
        sessions in 0i64..2000,
    ) {
        let params = CreatureParams { seed, traits, palette: Palette::default() };
        let a = generate_creature(&params, sessions);
        let b = generate_creature(&params, sessions);
        prop_assert_eq!(a.body_buffers.position_bytes(), b.body_buffers.position_bytes());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn derived_scalars_stay_in_range(
        traits in trait_vector(),
        seed in any::<u32>(),
        sessions in 0i64..5000,
    ) {
        let params = CreatureParams { seed, traits, palette: Palette::default() };
        let c = generate_creature(&params, sessions);

        prop_assert!(within(c.body.radius, 0.15, 0.28));
        prop_assert!(within(c.body.irregularity, 0.02, 0.2));
        prop_assert!(c.body.resolution <= MAX_RESOLUTION);
        prop_assert!(within(c.body.membrane.opacity, 0.5, 0.9));
        prop_assert!(within(c.body.membrane.thickness, 0.02, 0.06));
        prop_assert!(within(c.body.membrane.breath_amplitude, 0.01, 0.05));
        prop_assert!(within(c.body.membrane.breath_rate, 6.0 / 60.0, 16.0 / 60.0));
        prop_assert_eq!(c.body.nucleus.is_some(), c.maturity.has_nucleus);
        if let Some(nucleus) = &c.body.nucleus {
            prop_assert!(within(nucleus.size, 0.2 * c.body.radius, 0.35 * c.body.radius));
            prop_assert!(within(nucleus.pulse_rate, 0.5, 2.0));
            prop_assert!(nucleus.offset.length() <= 0.3 * c.body.radius + 1e-5);
        }

        prop_assert!(c.eyes.len() as u32 <= c.maturity.max_eyes);
        prop_assert!(!c.eyes.is_empty());
        for eye in &c.eyes {
            prop_assert!(within(eye.size, 0.035 * 0.85, 0.085));
            prop_assert!(within(eye.behavior.blink_rate, 3.0, 20.0));
            prop_assert!(within(eye.behavior.gaze_range, 0.3, 1.0));
            prop_assert!(within(eye.iris.fiber_density, 0.3, 1.0));
            prop_assert!(within(eye.pupil.base_size, 0.3, 0.5));
            let (lo, hi) = eye.pupil.dilation_range;
            prop_assert!(lo <= eye.pupil.base_size && eye.pupil.base_size <= hi);
            prop_assert!(within(eye.behavior.blink_duration, 0.12, 0.25));
            prop_assert!(within(eye.behavior.gaze_speed, 0.5, 2.0));
        }

        if c.maturity.appendage_complexity == 0 {
            prop_assert!(c.appendages.is_empty());
        }
        for app in &c.appendages {
            let table = app.kind.params();
            prop_assert!(within(app.thickness, table.thickness.0, table.thickness.1));
            prop_assert!(within(app.length, table.length.0 * 0.8, table.length.1 * 1.3));
            prop_assert!(within(app.taper, table.taper.0, table.taper.1));
            prop_assert!((table.segments.0..=table.segments.1).contains(&app.segments));
            prop_assert!(within(
                app.wave.amplitude,
                table.wave_amplitude * 0.5,
                table.wave_amplitude * 1.5
            ));
            prop_assert!(within(app.wave.speed, 0.5, 2.0));
            prop_assert_eq!(app.wave.frequency, table.wave_frequency);
        }

        let style = &c.style;
        for scalar in [
            style.fractal_detail,
            style.prismatic_shift,
            style.glow_intensity,
            style.subsurface_scatter,
            style.eerie_intensity,
            style.desaturation,
        ] {
            prop_assert!(within(scalar, 0.0, 1.0), "{style:?}");
        }

        prop_assert!(c.body_buffers.positions.iter().all(|v| v.is_finite()));
        prop_assert!(c.appendage_buffers.positions.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn aggregated_traits_are_in_unit_cube(
        words in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..10),
        seed in any::<u32>(),
    ) {
        let t = aggregate_traits(&words, seed);
        for axis in t.to_array() {
            prop_assert!((0.0..=1.0).contains(&axis));
        }
    }

    #[test]
    fn maturity_is_monotonic(a in 0i64..100_000, b in 0i64..100_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify_maturity(hi).dominates(&classify_maturity(lo)));
    }

    #[test]
    fn flow_velocity_is_unit_or_zero(
        u in -1.0f32..2.0,
        v in -1.0f32..2.0,
        time in 0.0f32..100.0,
    ) {
        let len = FlowField::default().velocity(Vec2::new(u, v), time).length();
        prop_assert!(len == 0.0 || (len - 1.0).abs() < 1e-3);
    }
}
