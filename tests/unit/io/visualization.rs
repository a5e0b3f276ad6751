//! Tests for blank-fraction sweep recording and GIF export

#[cfg(test)]
mod tests {
    use image::AnimationDecoder;
    use image::codecs::gif::GifDecoder;
    use mosaictile::MosaicError;
    use mosaictile::io::visualization::BlankSweep;
    use mosaictile::partition::regenerate_layout;
    use mosaictile::style::{Palette, ShapeKind};
    use rand::{SeedableRng, rngs::StdRng};
    use std::fs::File;
    use std::io::BufReader;
    use tempfile::TempDir;

    #[test]
    fn test_sweep_blank_counts_are_monotone() {
        let mut rng = StdRng::seed_from_u64(11);
        let layout = regenerate_layout(120.0, 80.0, 10.0, 30.0, &mut rng).expect("layout");
        let palette = Palette::parse("#264653,#e76f51").expect("palette");

        let sweep = BlankSweep::record(&layout, &palette, ShapeKind::Rectangle, 4, 0.0)
            .expect("sweep");

        assert_eq!(sweep.frame_count(), 5);
        let counts = sweep.blank_counts();
        assert_eq!(counts.first(), Some(&0));
        assert_eq!(counts.last(), Some(&layout.len()));
        assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_zero_steps_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let layout = regenerate_layout(40.0, 40.0, 10.0, 20.0, &mut rng).expect("layout");
        let result = BlankSweep::record(&layout, &Palette::default(), ShapeKind::Ellipse, 0, 0.0);
        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "steps",
                ..
            })
        ));
    }

    #[test]
    fn test_export_gif_writes_every_frame() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("sweep").join("anim.gif");

        let mut rng = StdRng::seed_from_u64(2);
        let layout = regenerate_layout(32.0, 24.0, 4.0, 12.0, &mut rng).expect("layout");
        let palette = Palette::parse("#111,#888").expect("palette");
        let sweep =
            BlankSweep::record(&layout, &palette, ShapeKind::Ellipse, 3, 1.0).expect("sweep");

        sweep.export_gif(&path, 10).expect("export");

        let file = File::open(&path).expect("gif exists");
        let decoder = GifDecoder::new(BufReader::new(file)).expect("valid gif");
        let frames = decoder.into_frames().collect_frames().expect("frames");
        assert_eq!(frames.len(), 4);

        let (numer, denom) = frames[0].delay().numer_denom_ms();
        assert!(numer / denom.max(1) >= 50);
    }
}
