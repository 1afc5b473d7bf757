mod tests {
    use strip_actors::color::{
        BLACK, Palette, PaletteError, Rgb, blend, decay, mask_pattern, rgb_from_u32,
        rgb_to_u32, rotate_right, smooth_apply,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const ODD: Rgb = Rgb { r: 1, g: 128, b: 77 };

    #[test]
    fn test_blend_endpoints() {
        assert_eq!(blend(RED, BLUE, 0.0), RED);
        assert_eq!(blend(RED, BLUE, 1.0), BLUE);
        assert_eq!(blend(WHITE, BLACK, 1.0), BLACK);
        assert_eq!(blend(WHITE, BLACK, 0.0), WHITE);
    }

    #[test]
    fn test_blend_clamps_weight() {
        assert_eq!(blend(RED, BLUE, 2.5), BLUE);
        assert_eq!(blend(RED, BLUE, -1.0), RED);
        assert_eq!(blend(RED, BLUE, f32::NAN), RED);
    }

    #[test]
    fn test_blend_midpoint_rounds() {
        assert_eq!(blend(BLACK, WHITE, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(blend(RED, BLUE, 0.5), Rgb::new(128, 0, 128));
        assert_eq!(blend(BLACK, Rgb::new(200, 100, 0), 0.25), Rgb::new(50, 25, 0));
    }

    #[test]
    fn test_blend_with_itself_is_identity() {
        for color in [BLACK, WHITE, RED, ODD, Rgb::new(1, 1, 1)] {
            for step in 0..=20 {
                let weight = step as f32 / 20.0;
                assert_eq!(blend(color, color, weight), color);
            }
        }
    }

    #[test]
    fn test_blend_stays_between_inputs() {
        let pairs = [(RED, BLUE), (BLACK, WHITE), (ODD, GREEN), (WHITE, ODD)];
        for (a, b) in pairs {
            for step in 0..=100 {
                let mixed = blend(a, b, step as f32 / 100.0);
                assert!(mixed.r >= a.r.min(b.r) && mixed.r <= a.r.max(b.r));
                assert!(mixed.g >= a.g.min(b.g) && mixed.g <= a.g.max(b.g));
                assert!(mixed.b >= a.b.min(b.b) && mixed.b <= a.b.max(b.b));
            }
        }
    }

    #[test]
    fn test_smooth_apply_extremes() {
        let desired = [RED, GREEN, BLUE, WHITE];
        let mut leds = [BLACK; 4];

        smooth_apply(&mut leds, &desired, 0.0);
        assert_eq!(leds, desired);

        smooth_apply(&mut leds, &desired, 1.0);
        assert_eq!(leds, [WHITE, RED, GREEN, BLUE]);
    }

    #[test]
    fn test_smooth_apply_halfway_wraps_first_pixel() {
        let desired = [BLACK, BLACK, WHITE];
        let mut leds = [RED; 3];
        smooth_apply(&mut leds, &desired, 0.5);
        let grey = Rgb::new(128, 128, 128);
        assert_eq!(leds, [grey, BLACK, grey]);
    }

    #[test]
    fn test_mask_pattern() {
        let source = [WHITE, Rgb::new(128, 64, 32), BLACK];
        let mut target = [BLACK; 3];
        mask_pattern(&source, &mut target, Rgb::new(255, 128, 0));
        assert_eq!(
            target,
            [Rgb::new(255, 128, 0), Rgb::new(128, 32, 0), BLACK]
        );
    }

    #[test]
    fn test_rotate_right() {
        let mut leds = [RED, GREEN, BLUE, WHITE];
        rotate_right(&mut leds);
        assert_eq!(leds, [WHITE, RED, GREEN, BLUE]);

        let mut empty: [Rgb; 0] = [];
        rotate_right(&mut empty);
    }

    #[test]
    fn test_decay_floors_at_zero() {
        assert_eq!(decay(Rgb::new(10, 3, 0), 5), Rgb::new(5, 0, 0));
        assert_eq!(decay(WHITE, 0), WHITE);
    }

    #[test]
    fn test_u32_packing() {
        assert_eq!(rgb_from_u32(0x12_34_56), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(rgb_to_u32(Rgb::new(0xFF, 0xC0, 0xCB)), 0xFF_C0_CB);
        assert_eq!(rgb_to_u32(rgb_from_u32(0xAB_CD_EF)), 0xAB_CD_EF);
    }

    #[test]
    fn test_palette_construction() {
        assert_eq!(Palette::new(&[]), Err(PaletteError::Empty));
        assert_eq!(
            Palette::new(&[RED; 17]),
            Err(PaletteError::Overflow { capacity: 16 })
        );

        let palette = Palette::new(&[RED, GREEN]).unwrap();
        assert_eq!(palette.as_slice(), &[RED, GREEN]);
        assert_eq!(palette.len(), 2);

        assert_eq!(Palette::single(BLUE).as_slice(), &[BLUE]);
        assert_eq!(Palette::from_array([RED, BLUE]).as_slice(), &[RED, BLUE]);
    }
}
