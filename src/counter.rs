//! Counter Animation
//!
//! Tick arithmetic for the counter view, kept free of browser calls.

/// Base label color, an opacity suffix is appended to it
pub const BASE_LABEL_COLOR: &str = "#008000";
/// Opacity suffix before the first tick
pub const INITIAL_OPACITY_HEX: &str = "30";
/// Opacity stops updating once the counter reaches this value
pub const OPACITY_CAP: u32 = 200;
const OPACITY_OFFSET: u32 = 50;

/// Delay applied to every emission of the periodic trigger
pub const START_DELAY_MS: u32 = 3000;
/// Period of the trigger
pub const TICK_PERIOD_MS: u32 = 2000;

pub const MIN_INCREMENT: u32 = 1;
pub const MAX_INCREMENT: u32 = 9;

/// Opacity suffix for a counter value, `None` once the cap is reached
pub fn opacity_hex_for(value: u32) -> Option<String> {
    if value < OPACITY_CAP {
        Some(format!("{:x}", value + OPACITY_OFFSET))
    } else {
        None
    }
}

/// Map a uniform sample in `[0, 1)` to an increment in `1..=9`
pub fn increment_from_unit(sample: f64) -> u32 {
    let span = (MAX_INCREMENT - MIN_INCREMENT + 1) as f64;
    let step = (sample * span).floor() as u32 + MIN_INCREMENT;
    step.clamp(MIN_INCREMENT, MAX_INCREMENT)
}

/// Source of per-tick increments
pub trait IncrementSource {
    fn next_increment(&mut self) -> u32;
}

/// Increments drawn from `Math.random()`
#[derive(Clone, Copy, Default)]
pub struct MathRandom;

impl IncrementSource for MathRandom {
    fn next_increment(&mut self) -> u32 {
        increment_from_unit(js_sys::Math::random())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    value: u32,
    opacity_hex: String,
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterState {
    pub fn new() -> Self {
        Self {
            value: 0,
            opacity_hex: INITIAL_OPACITY_HEX.to_string(),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn opacity_hex(&self) -> &str {
        &self.opacity_hex
    }

    /// CSS color for the label: base color plus opacity suffix
    pub fn label_color(&self) -> String {
        format!("{}{}", BASE_LABEL_COLOR, self.opacity_hex)
    }

    /// Apply one tick. Returns the new counter value.
    pub fn advance(&mut self, increment: u32) -> u32 {
        self.value = self.value.saturating_add(increment);
        if let Some(hex) = opacity_hex_for(self.value) {
            self.opacity_hex = hex;
        }
        self.value
    }

    pub fn tick(&mut self, source: &mut impl IncrementSource) -> u32 {
        self.advance(source.next_increment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Sequence(Vec<u32>);

    impl IncrementSource for Sequence {
        fn next_increment(&mut self) -> u32 {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_initial_label_color() {
        let state = CounterState::new();
        assert_eq!(state.value(), 0);
        assert_eq!(state.label_color(), "#00800030");
    }

    #[test]
    fn test_opacity_follows_counter() {
        let mut state = CounterState::new();
        state.advance(5);
        assert_eq!(state.opacity_hex(), "37");
        state.advance(9);
        assert_eq!(state.opacity_hex(), "40");
        assert_eq!(state.label_color(), "#00800040");
    }

    #[test]
    fn test_opacity_freezes_at_cap() {
        let mut state = CounterState::new();
        state.advance(195);
        assert_eq!(state.opacity_hex(), "f5");

        state.advance(5);
        assert_eq!(state.value(), 200);
        assert_eq!(state.opacity_hex(), "f5");

        state.advance(9);
        assert_eq!(state.opacity_hex(), "f5");
    }

    #[test]
    fn test_tick_uses_source() {
        let mut state = CounterState::new();
        let mut source = Sequence(vec![3, 1, 9]);
        assert_eq!(state.tick(&mut source), 3);
        assert_eq!(state.tick(&mut source), 4);
        assert_eq!(state.tick(&mut source), 13);
    }

    #[test]
    fn test_increment_bounds() {
        assert_eq!(increment_from_unit(0.0), 1);
        assert_eq!(increment_from_unit(0.999_999), 9);
        assert_eq!(increment_from_unit(1.0), 9);
    }

    proptest! {
        #[test]
        fn opacity_is_hex_of_value_plus_offset(v in 0u32..OPACITY_CAP) {
            prop_assert_eq!(opacity_hex_for(v), Some(format!("{:x}", v + 50)));
            prop_assert_eq!(opacity_hex_for(v).unwrap().len(), 2);
        }

        #[test]
        fn opacity_not_computed_at_or_above_cap(v in OPACITY_CAP..100_000u32) {
            prop_assert_eq!(opacity_hex_for(v), None);
        }

        #[test]
        fn increment_stays_in_range(sample in 0.0f64..1.0) {
            let step = increment_from_unit(sample);
            prop_assert!((MIN_INCREMENT..=MAX_INCREMENT).contains(&step));
        }

        #[test]
        fn counter_is_sum_of_draws(draws in proptest::collection::vec(1u32..=9, 0..80)) {
            let mut state = CounterState::new();
            let mut last_below_cap = INITIAL_OPACITY_HEX.to_string();
            for d in &draws {
                let value = state.advance(*d);
                if value < OPACITY_CAP {
                    last_below_cap = format!("{:x}", value + 50);
                }
            }
            prop_assert_eq!(state.value(), draws.iter().sum::<u32>());
            prop_assert_eq!(state.opacity_hex(), last_below_cap.as_str());
        }
    }
}
