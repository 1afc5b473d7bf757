mod tests {
    use strip_actors::{
        actor::{
            Actor, ActorSlot, ActorTimer, AnimationActor, ChaoticPatternMovementActor,
            ChaoticPatternMovementWithRandomTrailActor, DecayingSplashesActor, PatternActor,
            ProportionalColorsActor, RandomFillActor, RandomSelectorShifterActor,
            RandomSelectorSmoothShifterActor, RandomShifterActor, RandomSmoothBlenderActor,
            ShiftRandomColorsActor, SingleColorActor, SingleColorGradientActor,
            SMOOTH_LEVEL, SingleRandomSmoothBlenderActor, SmoothPatternActor,
        },
        color::{BLACK, Palette, Pattern, Rgb},
        presets::{BLIP, BLUE, FIREWORK, GREEN, RAINBOW, RED, WHITE},
        random::ScriptedSource,
    };

    const GREY: Rgb = Rgb {
        r: 128,
        g: 128,
        b: 128,
    };

    /// Advance `actor` `steps` times, one `period` apart, after `from`
    fn run<A: Actor<N>, const N: usize>(
        actor: &mut A,
        leds: &mut [Rgb; N],
        rng: &mut ScriptedSource<'_>,
        from: u32,
        period: u32,
        steps: u32,
    ) {
        for i in 1..=steps {
            actor.advance(from + i * period, leds, rng);
        }
    }

    #[test]
    fn test_timer_due_after_period() {
        let timer = ActorTimer::new(10);
        assert!(!timer.is_due(0));
        assert!(!timer.is_due(9));
        assert!(timer.is_due(10));
        assert!(timer.is_due(1_000_000));
    }

    #[test]
    fn test_timer_across_clock_wraparound() {
        let timer = ActorTimer::starting_at(10, u32::MAX - 3);
        assert!(!timer.is_due(u32::MAX));
        assert!(!timer.is_due(5));
        assert!(timer.is_due(6));
    }

    #[test]
    fn test_timer_postpone_holds_extra_time() {
        let mut timer = ActorTimer::new(10);
        timer.postpone(1000, 500);
        assert_eq!(timer.last_fire(), 1000);
        assert!(!timer.is_due(1010));
        assert!(!timer.is_due(1509));
        assert!(timer.is_due(1510));

        // The pause only applies once
        timer.mark_fired(1510);
        assert!(timer.is_due(1520));
    }

    #[test]
    fn test_slot_names_and_conversion() {
        let slot: ActorSlot<4> = SingleColorActor::<4>::new(RED).into();
        assert_eq!(slot.name(), "single_color");
        assert_eq!(slot.timer().period, 1000);

        let slot: ActorSlot<4> = PatternActor::<4>::new(Pattern::single(RED)).into();
        assert_eq!(slot.name(), "pattern");
        assert_eq!(slot.timer().period, 50);

        let slot: ActorSlot<4> = AnimationActor::<4>::new(&FIREWORK, 1).into();
        assert_eq!(slot.name(), "animation");
    }

    #[test]
    fn test_slot_advance_dispatches() {
        let mut slot: ActorSlot<3> = SingleColorActor::<3>::new(BLUE).into();
        let mut leds = [BLACK; 3];
        let mut rng = ScriptedSource::new(&[]);
        slot.advance(0, &mut leds, &mut rng);
        assert_eq!(leds, [BLUE; 3]);

        let mut leds = [BLACK; 3];
        slot.draw(0, &mut leds);
        assert_eq!(leds, [BLUE; 3]);
    }

    #[test]
    fn test_selector_shifter_rotates_once_per_period() {
        let palette = Palette::from_array([RED, GREEN, BLUE]);
        let mut rng = ScriptedSource::new(&[0, 0, 1, 2, 0, 1, 2, 0, 1, 2]);
        let mut actor = RandomSelectorShifterActor::<10>::new(&palette, &mut rng);
        let mut leds = [BLACK; 10];

        actor.advance(0, &mut leds, &mut rng);
        assert_eq!(leds, [RED, RED, GREEN, BLUE, RED, GREEN, BLUE, RED, GREEN, BLUE]);

        actor.advance(10, &mut leds, &mut rng);
        assert_eq!(leds, [BLUE, RED, RED, GREEN, BLUE, RED, GREEN, BLUE, RED, GREEN]);

        // Not due yet: redraw only
        actor.advance(15, &mut leds, &mut rng);
        assert_eq!(leds, [BLUE, RED, RED, GREEN, BLUE, RED, GREEN, BLUE, RED, GREEN]);

        actor.advance(20, &mut leds, &mut rng);
        assert_eq!(leds, [GREEN, BLUE, RED, RED, GREEN, BLUE, RED, GREEN, BLUE, RED]);
    }

    #[test]
    fn test_draw_is_idempotent() {
        let palette = Palette::from_array([RED, GREEN, BLUE]);
        let mut rng = ScriptedSource::new(&[2, 0, 1, 1]);
        let actor = RandomSelectorSmoothShifterActor::<4>::new(&palette, &mut rng);

        let mut first = [WHITE; 4];
        actor.draw(0, &mut first);
        let mut second = first;
        actor.draw(0, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_pattern_moves_forward() {
        let mut actor = PatternActor::<10>::new(Pattern::from_array([RED, GREEN]));
        let mut leds = [BLACK; 10];
        let mut rng = ScriptedSource::new(&[]);

        actor.draw(0, &mut leds);
        assert_eq!(&leds[..3], &[RED, GREEN, BLACK]);

        actor.advance(50, &mut leds, &mut rng);
        assert_eq!(actor.position(), 1);
        assert_eq!(leds[1], RED);
        assert_eq!(leds[2], GREEN);
    }

    #[test]
    fn test_pattern_backward_wraps() {
        let mut actor = PatternActor::<10>::new(Pattern::from_array([RED, GREEN])).with_step(-1);
        let mut leds = [BLACK; 10];
        let mut rng = ScriptedSource::new(&[]);

        actor.advance(50, &mut leds, &mut rng);
        assert_eq!(actor.position(), 9);
        assert_eq!(leds[9], RED);
        assert_eq!(leds[0], GREEN);
    }

    #[test]
    fn test_pattern_repeat_with_gap() {
        let actor = PatternActor::<10>::new(Pattern::from_array([RED, GREEN])).with_repeat(2);
        let mut leds = [WHITE; 10];
        actor.draw(0, &mut leds);
        assert_eq!(
            leds,
            [RED, GREEN, WHITE, WHITE, RED, GREEN, WHITE, WHITE, RED, GREEN]
        );
    }

    #[test]
    fn test_blip_drawn_once() {
        let actor = PatternActor::<10>::new(BLIP);
        let mut leds = [RED; 10];
        actor.draw(0, &mut leds);
        assert_eq!(&leds[..7], BLIP.as_slice());
        assert_eq!(leds[3], Rgb::new(0x40, 0x40, 0x40));
        assert_eq!(&leds[7..], &[RED; 3]);
    }

    #[test]
    fn test_smooth_pattern_repeating_covers_strip() {
        let mut actor = SmoothPatternActor::<6>::repeating(Pattern::from_array([RED, GREEN]));
        let mut leds = [BLACK; 6];
        let mut rng = ScriptedSource::new(&[]);

        actor.draw(0, &mut leds);
        assert_eq!(leds, [RED, GREEN, RED, GREEN, RED, GREEN]);

        run(&mut actor, &mut leds, &mut rng, 0, 1, u32::from(SMOOTH_LEVEL / 2));
        assert_eq!(actor.position(), 0);
        assert_eq!(leds, [Rgb::new(128, 128, 0); 6]);

        actor = SmoothPatternActor::<6>::repeating(Pattern::from_array([RED, GREEN]));
        run(&mut actor, &mut leds, &mut rng, 0, 1, u32::from(SMOOTH_LEVEL));
        assert_eq!(actor.position(), 1);
        assert_eq!(leds, [GREEN, RED, GREEN, RED, GREEN, RED]);
    }

    #[test]
    fn test_smooth_pattern_glides() {
        let mut actor = SmoothPatternActor::<5>::new(Pattern::single(WHITE));
        let mut leds = [BLACK; 5];
        let mut rng = ScriptedSource::new(&[]);

        actor.advance(0, &mut leds, &mut rng);
        assert_eq!(leds, [WHITE, BLACK, BLACK, BLACK, BLACK]);

        run(&mut actor, &mut leds, &mut rng, 0, 1, 10);
        assert_eq!(actor.position(), 0);
        assert_eq!(leds, [GREY, GREY, BLACK, BLACK, BLACK]);

        actor = SmoothPatternActor::<5>::new(Pattern::single(WHITE));
        run(&mut actor, &mut leds, &mut rng, 0, 1, 20);
        assert_eq!(actor.position(), 1);
        assert_eq!(leds[1], WHITE);
    }

    #[test]
    fn test_chaotic_walks_to_target() {
        let mut actor = ChaoticPatternMovementActor::<10>::new(Pattern::single(RED));
        let mut leds = [BLACK; 10];
        let mut rng = ScriptedSource::new(&[3, 1]);

        // Standing on the initial target: pick a new one and rest
        actor.advance(1, &mut leds, &mut rng);
        assert_eq!(actor.position(), 0);
        assert_eq!(actor.target(), 3);
        assert_eq!(actor.timer().period, 100);

        actor.advance(50, &mut leds, &mut rng);
        assert_eq!(actor.position(), 0);

        actor.advance(101, &mut leds, &mut rng);
        assert_eq!(actor.position(), 1);
        assert_eq!(actor.timer().period, 1);

        actor.advance(102, &mut leds, &mut rng);
        actor.advance(103, &mut leds, &mut rng);
        assert_eq!(actor.position(), 3);
        assert_eq!(actor.target(), 1);
        assert_eq!(leds[3], RED);

        actor.advance(203, &mut leds, &mut rng);
        assert_eq!(actor.position(), 2);
    }

    #[test]
    fn test_chaotic_trail_follows_pattern() {
        let mut actor =
            ChaoticPatternMovementWithRandomTrailActor::<10>::new(Pattern::from_array([RED, RED]));
        let mut leds = [BLACK; 10];
        let mut rng = ScriptedSource::new(&[5, 1, 2, 3]);

        actor.advance(1, &mut leds, &mut rng);
        assert_eq!(actor.position(), 0);
        assert_eq!(actor.trail(), Rgb::new(1, 2, 3));
        assert_eq!(actor.timer().period, 10);

        actor.advance(11, &mut leds, &mut rng);
        assert_eq!(actor.position(), 1);
        assert_eq!(leds[0], Rgb::new(1, 2, 3));
        assert_eq!(&leds[1..3], &[RED, RED]);
    }

    #[test]
    fn test_chaotic_trail_behind_backward_move() {
        let mut actor =
            ChaoticPatternMovementWithRandomTrailActor::<10>::new(Pattern::from_array([RED, RED]));
        let mut leds = [BLACK; 10];
        let mut rng = ScriptedSource::new(&[5, 1, 2, 3, 2, 4, 5, 6]);

        actor.advance(1, &mut leds, &mut rng);
        for now in 11..=15 {
            actor.advance(now, &mut leds, &mut rng);
        }
        assert_eq!(actor.position(), 5);
        assert_eq!(actor.trail(), Rgb::new(4, 5, 6));

        // Heading back toward pixel 2: the trail sits after the pattern
        actor.advance(25, &mut leds, &mut rng);
        assert_eq!(actor.position(), 4);
        assert_eq!(&leds[4..6], &[RED, RED]);
        assert_eq!(leds[6], Rgb::new(4, 5, 6));
        assert_eq!(leds[7], BLACK);
    }

    #[test]
    fn test_random_fill_is_ready_at_construction() {
        let mut rng = ScriptedSource::new(&[1, 2, 3, 4, 5, 6]);
        let mut actor = RandomFillActor::<4>::new(&mut rng);
        let mut leds = [BLACK; 4];

        actor.advance(100, &mut leds, &mut rng);
        assert_eq!(
            leds,
            [
                Rgb::new(1, 2, 3),
                Rgb::new(4, 5, 6),
                Rgb::new(1, 2, 3),
                Rgb::new(4, 5, 6)
            ]
        );
        assert!(!actor.timer().is_due(4999));
    }

    #[test]
    fn test_random_shifter_feeds_start() {
        let mut actor = RandomShifterActor::<3>::new();
        let mut leds = [WHITE; 3];
        let mut rng = ScriptedSource::new(&[1, 2, 3, 4, 5, 6]);

        actor.advance(0, &mut leds, &mut rng);
        assert_eq!(leds, [BLACK; 3]);

        actor.advance(5, &mut leds, &mut rng);
        assert_eq!(leds, [Rgb::new(1, 2, 3), BLACK, BLACK]);

        actor.advance(10, &mut leds, &mut rng);
        assert_eq!(leds, [Rgb::new(4, 5, 6), Rgb::new(1, 2, 3), BLACK]);
    }

    #[test]
    fn test_selector_smooth_shifter() {
        let palette = Palette::from_array([RED, GREEN, BLUE, WHITE]);
        let mut rng = ScriptedSource::new(&[0, 1, 2, 3]);
        let mut actor = RandomSelectorSmoothShifterActor::<4>::new(&palette, &mut rng);
        let mut leds = [BLACK; 4];

        run(&mut actor, &mut leds, &mut rng, 0, 10, 5);
        assert_eq!(leds[1], Rgb::new(128, 128, 0));
        assert_eq!(leds[0], Rgb::new(255, 128, 128));

        let mut actor = RandomSelectorSmoothShifterActor::<4>::new(&palette, &mut rng);
        run(&mut actor, &mut leds, &mut rng, 0, 10, 10);
        assert_eq!(leds, [WHITE, RED, GREEN, BLUE]);
    }

    #[test]
    fn test_random_smooth_blender() {
        let palette = Palette::from_array([RED, BLUE]);
        let mut rng = ScriptedSource::new(&[0, 1]);
        let seed = [BLACK, WHITE];
        let mut actor = RandomSmoothBlenderActor::<2>::new(palette, &seed, &mut rng);
        let mut leds = [GREEN; 2];

        actor.draw(0, &mut leds);
        assert_eq!(leds, seed);

        run(&mut actor, &mut leds, &mut rng, 0, 100, 25);
        assert_eq!(leds, [Rgb::new(128, 0, 0), Rgb::new(128, 128, 255)]);

        run(&mut actor, &mut leds, &mut rng, 2500, 100, 50);
        assert_eq!(leds, [RED, BLUE]);
    }

    #[test]
    fn test_single_blender_reaches_target_and_holds() {
        let mut rng = ScriptedSource::new(&[]);
        let seed = [BLACK; 3];
        let mut actor =
            SingleRandomSmoothBlenderActor::<3>::new(Palette::single(RED), &seed, &mut rng);
        let mut leds = [BLACK; 3];
        assert_eq!(actor.target(), RED);

        run(&mut actor, &mut leds, &mut rng, 0, 10, 249);
        assert_eq!(leds, [RED; 3]);

        actor.advance(2500, &mut leds, &mut rng);
        assert_eq!(leds, [RED; 3]);
        assert!(!actor.timer().is_due(12_509));
        assert!(actor.timer().is_due(12_510));
    }

    #[test]
    fn test_single_blender_switches_color() {
        let palette = Palette::from_array([RED, BLUE]);
        let mut rng = ScriptedSource::new(&[0, 0, 0, 1]);
        let mut actor = SingleRandomSmoothBlenderActor::<2>::new(palette, &[BLACK; 2], &mut rng);
        let mut leds = [BLACK; 2];

        run(&mut actor, &mut leds, &mut rng, 0, 10, 125);
        assert_eq!(actor.target(), RED);
        assert_eq!(leds[0].g, 0);
        assert!(leds[0].r > 100 && leds[0].r < 160);

        run(&mut actor, &mut leds, &mut rng, 1250, 10, 125);
        assert_eq!(actor.target(), BLUE);
        assert_eq!(leds, [RED; 2]);
    }

    #[test]
    fn test_gradient() {
        let actor = SingleColorGradientActor::<4>::new(Rgb::new(200, 100, 0));
        let mut leds = [WHITE; 4];
        actor.draw(0, &mut leds);
        assert_eq!(
            leds,
            [
                BLACK,
                Rgb::new(50, 25, 0),
                Rgb::new(100, 50, 0),
                Rgb::new(150, 75, 0)
            ]
        );
    }

    #[test]
    fn test_proportional_two_colors() {
        let actor = ProportionalColorsActor::<5>::new(Palette::from_array([BLACK, WHITE]));
        let mut leds = [RED; 5];
        actor.draw(0, &mut leds);
        let levels: [u8; 5] = leds.map(|c| c.r);
        assert_eq!(levels, [0, 51, 102, 153, 204]);
    }

    #[test]
    fn test_proportional_rainbow() {
        let actor = ProportionalColorsActor::<12>::new(RAINBOW);
        let mut leds = [BLACK; 12];
        actor.draw(0, &mut leds);
        for (i, color) in RAINBOW.as_slice().iter().take(6).enumerate() {
            assert_eq!(leds[i * 2], *color);
        }
        assert_eq!(leds[2], Rgb::new(0xFF, 0x7F, 0x00));
        assert_ne!(leds[11], leds[10]);
    }

    #[test]
    fn test_proportional_three_colors() {
        let actor = ProportionalColorsActor::<4>::new(Palette::from_array([RED, GREEN, BLUE]));
        let mut leds = [BLACK; 4];
        actor.draw(0, &mut leds);
        assert_eq!(
            leds,
            [RED, Rgb::new(128, 128, 0), GREEN, Rgb::new(0, 128, 128)]
        );

        let single = ProportionalColorsActor::<4>::new(Palette::single(GREEN));
        single.draw(0, &mut leds);
        assert_eq!(leds, [GREEN; 4]);
    }

    #[test]
    fn test_splashes_decay_then_light() {
        let seed = [Rgb::new(10, 10, 10); 4];
        let mut actor = DecayingSplashesActor::<4>::new(1, 5, Palette::single(RED), &seed);
        let mut leds = [BLACK; 4];
        let mut rng = ScriptedSource::new(&[2]);

        actor.advance(5, &mut leds, &mut rng);
        let dim = Rgb::new(5, 5, 5);
        assert_eq!(leds, [dim, dim, RED, dim]);

        actor.advance(10, &mut leds, &mut rng);
        assert_eq!(leds, [BLACK, BLACK, RED, BLACK]);
    }

    #[test]
    fn test_markers_swing_out_from_middle() {
        let palette = Palette::from_array([RED, BLUE]);
        let mut rng = ScriptedSource::new(&[0, 0, 1]);
        let mut actor = ShiftRandomColorsActor::<100>::new(palette, &mut rng);
        let mut leds = [BLACK; 100];

        actor.draw(0, &mut leds);
        assert_eq!(leds[25], RED);
        assert_eq!(leds[75], RED);

        actor.advance(50, &mut leds, &mut rng);
        assert_eq!(leds[24], RED);
        assert_eq!(leds[74], RED);

        actor.advance(100, &mut leds, &mut rng);
        assert_eq!(leds[26], RED);
        assert_eq!(leds[76], RED);

        run(&mut actor, &mut leds, &mut rng, 100, 50, 50);
        assert_eq!(actor.color(), BLUE);
    }

    #[test]
    fn test_markers_skip_partial_segment() {
        let mut rng = ScriptedSource::new(&[]);
        let actor = ShiftRandomColorsActor::<60>::new(Palette::single(GREEN), &mut rng);
        let mut leds = [BLACK; 60];
        actor.draw(0, &mut leds);
        assert_eq!(leds.iter().filter(|&&c| c == GREEN).count(), 1);
    }

    #[test]
    fn test_animation_places_frames() {
        let mut actor = AnimationActor::<20>::new(&FIREWORK, 2);
        let mut leds = [BLACK; 20];
        let mut rng = ScriptedSource::new(&[4, 7]);
        assert_eq!(actor.concurrency(), 2);

        actor.advance(20, &mut leds, &mut rng);
        assert_eq!(&leds[4..13], FIREWORK.frames()[0].image);

        actor.advance(40, &mut leds, &mut rng);
        assert_eq!(&leds[7..16], FIREWORK.frames()[0].image);
    }

    #[test]
    fn test_animation_concurrency_clamped() {
        assert_eq!(AnimationActor::<20>::new(&FIREWORK, 0).concurrency(), 1);
        assert_eq!(AnimationActor::<20>::new(&FIREWORK, 100).concurrency(), 16);
    }

    #[test]
    fn test_animation_larger_than_strip_is_noop() {
        let mut actor = AnimationActor::<5>::new(&FIREWORK, 1);
        let mut leds = [GREEN; 5];
        let mut rng = ScriptedSource::new(&[0]);
        actor.advance(20, &mut leds, &mut rng);
        assert_eq!(leds, [GREEN; 5]);
    }
}
