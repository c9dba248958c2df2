/// Tunable parameters for combat resolution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaConfig {
    /// Base power of every attack before the attack/defense ratio and
    /// effectiveness multiplier are applied.
    pub base_power: f64,
    /// Upper bound on turns per combat. Reaching it is an error.
    pub max_turns: u32,
}

impl ArenaConfig {
    pub const DEFAULT_BASE_POWER: f64 = 50.0;
    pub const DEFAULT_MAX_TURNS: u32 = 10_000;

    pub const fn new() -> Self {
        Self {
            base_power: Self::DEFAULT_BASE_POWER,
            max_turns: Self::DEFAULT_MAX_TURNS,
        }
    }

    #[must_use]
    pub const fn with_base_power(mut self, base_power: f64) -> Self {
        self.base_power = base_power;
        self
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new()
    }
}
