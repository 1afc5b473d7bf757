//! Strategy rotation
//!
//! A strategy is a recipe for building one actor. The [`Scheduler`] owns
//! the single live actor and swaps it for a freshly built one whenever the
//! rotation period runs out.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    actor::{
        ActorSlot, DecayingSplashesActor, PatternActor, RandomSelectorSmoothShifterActor,
        ShiftRandomColorsActor, SingleRandomSmoothBlenderActor,
    },
    color::{BLACK, Palette, Pattern, Rgb, mask_pattern},
    presets,
    random::{RandomSource, pick, pick_other},
};

const STRATEGY_NAME_MASKED_PATTERN: &str = "masked_pattern";
const STRATEGY_NAME_COLOR_SPLASHES: &str = "color_splashes";
const STRATEGY_NAME_SINGLE_COLOR_SPLASHES: &str = "single_color_splashes";
const STRATEGY_NAME_SINGLE_COLOR_BLEND: &str = "single_color_blend";
const STRATEGY_NAME_SHIFTING_MARKERS: &str = "shifting_markers";
const STRATEGY_NAME_SMOOTH_SHIFTER: &str = "smooth_shifter";

const STRATEGY_ID_MASKED_PATTERN: u8 = 0;
const STRATEGY_ID_COLOR_SPLASHES: u8 = 1;
const STRATEGY_ID_SINGLE_COLOR_SPLASHES: u8 = 2;
const STRATEGY_ID_SINGLE_COLOR_BLEND: u8 = 3;
const STRATEGY_ID_SHIFTING_MARKERS: u8 = 4;
const STRATEGY_ID_SMOOTH_SHIFTER: u8 = 5;

/// Default time a strategy stays on screen
pub const DEFAULT_ROTATION_PERIOD: Duration = Duration::from_secs(30);

/// Gap between copies of the masked pattern
const MASKED_PATTERN_GAP: usize = 40;

/// Strategies taking part in the rotation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Strategy {
    /// Comet pattern tinted with a random palette color, tiled and moving
    MaskedPattern = STRATEGY_ID_MASKED_PATTERN,
    /// Splashes in all palette colors
    ColorSplashes = STRATEGY_ID_COLOR_SPLASHES,
    /// Splashes in one random palette color
    SingleColorSplashes = STRATEGY_ID_SINGLE_COLOR_SPLASHES,
    /// Whole strip cross-fading between palette colors
    SingleColorBlend = STRATEGY_ID_SINGLE_COLOR_BLEND,
    /// Markers sweeping out of each segment
    ShiftingMarkers = STRATEGY_ID_SHIFTING_MARKERS,
    /// Random palette picks gliding along the strip
    SmoothShifter = STRATEGY_ID_SMOOTH_SHIFTER,
}

/// Parameters the strategies are built from
#[derive(Debug, Clone)]
pub struct RotationConfig {
    /// Time each strategy stays on screen
    pub period: Duration,
    /// Palette shared by all strategies
    pub palette: Palette,
    /// Pattern used by [`Strategy::MaskedPattern`]
    pub pattern: Pattern,
    /// Splashes added per step
    pub splash_amount: u32,
    /// Splash fade per step
    pub splash_speed: u8,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_ROTATION_PERIOD,
            palette: presets::COLORS,
            pattern: presets::COMET,
            splash_amount: 1,
            splash_speed: 5,
        }
    }
}

impl Strategy {
    pub const ALL: [Self; 6] = [
        Self::MaskedPattern,
        Self::ColorSplashes,
        Self::SingleColorSplashes,
        Self::SingleColorBlend,
        Self::ShiftingMarkers,
        Self::SmoothShifter,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            STRATEGY_ID_MASKED_PATTERN => Self::MaskedPattern,
            STRATEGY_ID_COLOR_SPLASHES => Self::ColorSplashes,
            STRATEGY_ID_SINGLE_COLOR_SPLASHES => Self::SingleColorSplashes,
            STRATEGY_ID_SINGLE_COLOR_BLEND => Self::SingleColorBlend,
            STRATEGY_ID_SHIFTING_MARKERS => Self::ShiftingMarkers,
            STRATEGY_ID_SMOOTH_SHIFTER => Self::SmoothShifter,
            _ => return None,
        })
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MaskedPattern => STRATEGY_NAME_MASKED_PATTERN,
            Self::ColorSplashes => STRATEGY_NAME_COLOR_SPLASHES,
            Self::SingleColorSplashes => STRATEGY_NAME_SINGLE_COLOR_SPLASHES,
            Self::SingleColorBlend => STRATEGY_NAME_SINGLE_COLOR_BLEND,
            Self::ShiftingMarkers => STRATEGY_NAME_SHIFTING_MARKERS,
            Self::SmoothShifter => STRATEGY_NAME_SMOOTH_SHIFTER,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|strategy| strategy.as_str() == s)
    }

    /// Build the actor for this strategy
    ///
    /// `seed` is the picture currently on the strip; fading strategies
    /// start from it. `single_color` is the last color shown on its own;
    /// single-color strategies pick a different one and store it back.
    pub fn build<const N: usize, R: RandomSource>(
        self,
        config: &RotationConfig,
        seed: &[Rgb; N],
        single_color: &mut Option<Rgb>,
        rng: &mut R,
    ) -> ActorSlot<N> {
        let palette = config.palette;
        match self {
            Self::MaskedPattern => {
                let mask = pick(palette.as_slice(), rng).unwrap_or(BLACK);
                let mut pattern = config.pattern;
                mask_pattern(config.pattern.as_slice(), pattern.as_mut_slice(), mask);
                PatternActor::new(pattern)
                    .with_repeat(MASKED_PATTERN_GAP)
                    .into()
            }
            Self::ColorSplashes => DecayingSplashesActor::new(
                config.splash_amount,
                config.splash_speed,
                palette,
                seed,
            )
            .into(),
            Self::SingleColorSplashes => {
                let color = pick_other(palette.as_slice(), *single_color, rng).unwrap_or(BLACK);
                *single_color = Some(color);
                DecayingSplashesActor::new(
                    config.splash_amount,
                    config.splash_speed,
                    Palette::single(color),
                    seed,
                )
                .into()
            }
            Self::SingleColorBlend => {
                SingleRandomSmoothBlenderActor::new(palette, seed, rng).into()
            }
            Self::ShiftingMarkers => ShiftRandomColorsActor::new(palette, rng).into(),
            Self::SmoothShifter => RandomSelectorSmoothShifterActor::new(&palette, rng).into(),
        }
    }
}

/// Owner of the single live actor
#[derive(Debug, Clone)]
pub struct Scheduler<const N: usize> {
    config: RotationConfig,
    actor: Option<ActorSlot<N>>,
    strategy: Option<Strategy>,
    single_color: Option<Rgb>,
    started: u32,
}

impl<const N: usize> Scheduler<N> {
    pub const fn new(config: RotationConfig) -> Self {
        Self {
            config,
            actor: None,
            strategy: None,
            single_color: None,
            started: 0,
        }
    }

    pub const fn config(&self) -> &RotationConfig {
        &self.config
    }

    pub const fn actor(&self) -> Option<&ActorSlot<N>> {
        self.actor.as_ref()
    }

    /// Strategy picked by the last rotation
    ///
    /// Manual overrides do not change it.
    pub const fn strategy(&self) -> Option<Strategy> {
        self.strategy
    }

    pub const fn started(&self) -> u32 {
        self.started
    }

    /// Last color shown on its own, by a fade command or single-color splashes
    pub const fn single_color(&self) -> Option<Rgb> {
        self.single_color
    }

    pub fn set_single_color(&mut self, color: Rgb) {
        self.single_color = Some(color);
    }

    fn period_ms(&self) -> u32 {
        u32::try_from(self.config.period.as_millis()).unwrap_or(u32::MAX)
    }

    /// Check if the current actor should be rotated out at `now`
    pub fn is_expired(&self, now: u32) -> bool {
        self.actor.is_none() || now.wrapping_sub(self.started) > self.period_ms()
    }

    /// Rotate to a new strategy if the current one has expired
    ///
    /// The next strategy is never the same as the previous one. Returns
    /// the strategy that was switched to.
    pub fn update<R: RandomSource>(
        &mut self,
        now: u32,
        seed: &[Rgb; N],
        rng: &mut R,
    ) -> Option<Strategy> {
        if !self.is_expired(now) {
            return None;
        }
        let next = pick_other(&Strategy::ALL, self.strategy, rng)?;

        #[cfg(feature = "esp32-log")]
        println!("[Scheduler.update] switching to strategy {}", next.as_str());

        self.actor = Some(next.build(&self.config, seed, &mut self.single_color, rng));
        self.strategy = Some(next);
        self.started = now;
        Some(next)
    }

    /// Install a specific actor right away and restart the rotation timer
    pub fn replace(&mut self, actor: ActorSlot<N>, now: u32) {
        self.actor = Some(actor);
        self.started = now;
    }

    /// Drop the current actor; the next update rotates immediately
    pub fn clear(&mut self) {
        self.actor = None;
    }

    /// Restart the rotation timer without touching the actor
    pub fn touch(&mut self, now: u32) {
        self.started = now;
    }

    /// Advance the current actor, if any
    pub fn advance<R: RandomSource>(&mut self, now: u32, leds: &mut [Rgb; N], rng: &mut R) {
        if let Some(actor) = self.actor.as_mut() {
            actor.advance(now, leds, rng);
        }
    }
}
