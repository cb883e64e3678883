mod tests {
    use pixel_composer::lut::{CalibrationLut, LUT_ENTRIES};
    use pixel_composer::{BlendWeights, ComposerConfig, PixelComposer, Rgb, pack_grb};

    const FRAME: [Rgb; 2] = [
        Rgb { r: 128, g: 0, b: 0 },
        Rgb { r: 64, g: 0, b: 0 },
    ];

    #[test]
    fn test_compose_packs_every_led() {
        let mut composer: PixelComposer<4> = PixelComposer::new(ComposerConfig::default());
        let frame = [Rgb { r: 1, g: 2, b: 3 }; 4];

        let out = composer.compose(BlendWeights::fully_prev(), &frame, &frame);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|&word| word == pack_grb(1, 2, 3)));
    }

    #[test]
    fn test_compose_truncates_to_shortest_frame() {
        let mut composer: PixelComposer<8> = PixelComposer::new(ComposerConfig::default());
        let prev = [Rgb { r: 9, g: 9, b: 9 }; 8];
        let next = [Rgb { r: 9, g: 9, b: 9 }; 5];

        let out = composer.compose(BlendWeights::fully_prev(), &prev, &next);
        assert_eq!(out.len(), 5);

        let mut small: PixelComposer<2> = PixelComposer::new(ComposerConfig::default());
        let out = small.compose(BlendWeights::fully_prev(), &prev, &next);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_residuals_are_per_led() {
        let mut composer: PixelComposer<2> = PixelComposer::new(ComposerConfig::default());
        let weights = BlendWeights::fully_prev();

        // LED 0 sits between two output steps and alternates; LED 1 maps
        // exactly and stays put
        let out = composer.compose(weights, &FRAME, &FRAME);
        assert_eq!(out[0], pack_grb(129, 0, 0));
        assert_eq!(out[1], pack_grb(64, 0, 0));

        let out = composer.compose(weights, &FRAME, &FRAME);
        assert_eq!(out[0], pack_grb(127, 0, 0));
        assert_eq!(out[1], pack_grb(64, 0, 0));

        assert_eq!(composer.residual(1), [0; 3]);
    }

    #[test]
    fn test_reset_residuals() {
        let mut composer: PixelComposer<2> = PixelComposer::new(ComposerConfig::default());
        let weights = BlendWeights::fully_prev();

        let out = composer.compose(weights, &FRAME, &FRAME);
        assert_eq!(out[0], pack_grb(129, 0, 0));

        composer.reset_residuals();
        let out = composer.compose(weights, &FRAME, &FRAME);
        assert_eq!(out[0], pack_grb(129, 0, 0));
    }

    #[test]
    fn test_interpolation_disabled_uses_next_frame() {
        let config = ComposerConfig {
            interpolation: false,
            ..ComposerConfig::default()
        };
        let mut composer: PixelComposer<1> = PixelComposer::new(config);

        let prev = [Rgb {
            r: 255,
            g: 255,
            b: 255,
        }];
        let next = [Rgb {
            r: 10,
            g: 20,
            b: 30,
        }];

        // fully-prev weights are overridden while interpolation is off
        let out = composer.compose(BlendWeights::fully_prev(), &prev, &next);
        assert_eq!(out[0], pack_grb(10, 20, 30));
    }

    #[test]
    fn test_dithering_disabled_is_stateless() {
        let config = ComposerConfig {
            dithering: false,
            ..ComposerConfig::default()
        };
        let mut composer: PixelComposer<2> = PixelComposer::new(config);
        let weights = BlendWeights::fully_prev();

        for _ in 0..3 {
            let out = composer.compose(weights, &FRAME, &FRAME);
            assert_eq!(out[0], pack_grb(129, 0, 0));
            assert_eq!(out[1], pack_grb(64, 0, 0));
        }
        assert_eq!(composer.residual(0), [0; 3]);
    }

    #[test]
    fn test_set_lut_takes_effect_next_refresh() {
        let mut composer: PixelComposer<2> = PixelComposer::new(ComposerConfig::default());
        let weights = BlendWeights::fully_prev();
        let frame = [Rgb { r: 64, g: 64, b: 64 }; 2];

        let out = composer.compose(weights, &frame, &frame);
        assert_eq!(out[0], pack_grb(64, 64, 64));

        composer.set_lut(CalibrationLut {
            r: [0; LUT_ENTRIES],
            g: [0; LUT_ENTRIES],
            b: [0; LUT_ENTRIES],
        });
        let out = composer.compose(weights, &frame, &frame);
        assert_eq!(out[0], pack_grb(0, 0, 0));
    }
}
