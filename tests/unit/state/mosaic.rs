//! Tests for lazy layout regeneration and style-only updates

#[cfg(test)]
mod tests {
    use mosaictile::MosaicError;
    use mosaictile::state::{MosaicState, SizeBounds};
    use mosaictile::style::{BlankFraction, Palette, ShapeKind};

    fn state(seed: u64) -> MosaicState {
        let bounds = SizeBounds::new(20.0, 80.0).expect("valid bounds");
        MosaicState::new(seed, 320.0, 240.0, bounds).expect("valid canvas")
    }

    #[test]
    fn test_first_access_generates_once() {
        let mut state = state(1);
        assert!(state.needs_regeneration());
        assert_eq!(state.generation(), 0);

        let count = state.layout().expect("layout").len();
        assert!(count > 0);
        assert_eq!(state.generation(), 1);

        state.layout().expect("layout");
        assert_eq!(state.generation(), 1);
        assert!(!state.needs_regeneration());
    }

    #[test]
    fn test_style_changes_keep_layout() {
        let mut state = state(2);
        let before = state.layout().expect("layout").clone();

        state.set_palette(Palette::parse("#111,#222").expect("valid palette"));
        state.set_blank_fraction(BlankFraction::from_fraction(0.5));
        state.set_kind(ShapeKind::Ellipse);
        assert!(!state.needs_regeneration());

        let styled = state.styled_shapes().expect("styled");
        assert_eq!(state.generation(), 1);
        assert_eq!(state.layout().expect("layout"), &before);
        assert_eq!(styled.len(), before.len());
        assert_eq!(
            styled.iter().filter(|shape| shape.is_blank()).count(),
            before.len() / 2
        );
        assert!(styled.iter().all(|shape| shape.kind == ShapeKind::Ellipse));
    }

    #[test]
    fn test_geometry_changes_regenerate() {
        let mut state = state(3);
        state.layout().expect("layout");

        state.set_canvas(320.0, 240.0).expect("same canvas");
        assert!(!state.needs_regeneration());

        state.set_canvas(200.0, 200.0).expect("valid canvas");
        assert!(state.needs_regeneration());
        let area = state.layout().expect("layout").total_area();
        assert!((area - 40_000.0).abs() < f64::EPSILON);
        assert_eq!(state.generation(), 2);

        state.set_min_size(30.0).expect("valid min");
        assert!(state.needs_regeneration());
        state.styled_shapes().expect("styled");
        assert_eq!(state.generation(), 3);

        state.set_stop_probability(0.5).expect("valid probability");
        assert!(state.needs_regeneration());
    }

    #[test]
    fn test_stop_probability_override_reaches_partition() {
        let mut state = state(12);
        state.set_stop_probability(0.0).expect("valid probability");

        // Never stopping early leaves only shapes too small to split
        let layout = state.layout().expect("layout");
        assert!(layout.shapes().iter().all(|shape| {
            shape.rect.width < 40.0 && shape.rect.height < 40.0
        }));
        assert_eq!(layout.trace().stopped_within_max, 0);
    }

    #[test]
    fn test_size_coupling_through_state() {
        let mut state = state(4);
        state.set_min_size(100.0).expect("valid min");
        assert!((state.bounds().max() - 100.0).abs() < f64::EPSILON);

        state.set_max_size(10.0).expect("valid max");
        assert!((state.bounds().min() - 10.0).abs() < f64::EPSILON);

        let layout = state.layout().expect("layout");
        assert!(layout.shapes().iter().all(|shape| {
            shape.rect.width >= 10.0 && shape.rect.height >= 10.0
        }));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = state(9);
        let mut second = state(9);
        for _ in 0..3 {
            let a = first.regenerate().expect("layout").clone();
            let b = second.regenerate().expect("layout").clone();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let bounds = SizeBounds::new(20.0, 80.0).expect("valid bounds");
        assert!(matches!(
            MosaicState::new(0, f64::NAN, 100.0, bounds),
            Err(MosaicError::InvalidParameter { .. })
        ));

        let mut state = state(5);
        assert!(state.set_stop_probability(1.5).is_err());
        assert!(state.set_min_size(0.0).is_err());
        assert!(state.set_canvas(f64::INFINITY, 10.0).is_err());
    }

    #[test]
    fn test_failed_regeneration_keeps_previous_layout() {
        let bounds = SizeBounds::new(1.0, 1.0).expect("valid bounds");
        let mut state = MosaicState::new(6, 4.0, 4.0, bounds).expect("valid canvas");
        let before = state.layout().expect("small canvas").clone();
        assert_eq!(before.len(), 16);

        // A canvas this size with unit shapes exceeds the leaf guard
        state.set_canvas(2_000.0, 1_000.0).expect("valid canvas");
        assert!(matches!(
            state.layout(),
            Err(MosaicError::LimitExceeded { .. })
        ));
        assert!(state.needs_regeneration());
        assert_eq!(state.current_layout(), &before);
        assert_eq!(state.generation(), 1);
    }
}
