//! Player tunables.

/// Every tunable of the simulation, with the reference engine's defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerConfig {
    /// Slipperiness of the ground when a verb does not override it.
    pub ground_slipperiness: f32,
    /// Velocity added along the facing on a sprint jump tick.
    pub sprint_jump_boost: f32,
    /// Velocity components below this are zeroed each tick.
    pub inertia_threshold: f32,
    /// `1` enables single-axis inertia; any other value disables it.
    pub inertia_axis: u8,
    /// Speed potion level.
    pub speed: i16,
    /// Slowness potion level.
    pub slow: i16,
    /// Sneaking takes effect one tick late.
    pub sneak_delay: bool,
    /// Airborne sprint acceleration follows the previous tick's sprint flag.
    pub air_sprint_delay: bool,
    /// Walking backwards: input direction and jump boost are negated.
    pub reverse: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            ground_slipperiness: 0.6,
            sprint_jump_boost: 0.2,
            inertia_threshold: 0.005,
            inertia_axis: 1,
            speed: 0,
            slow: 0,
            sneak_delay: false,
            air_sprint_delay: true,
            reverse: false,
        }
    }
}
