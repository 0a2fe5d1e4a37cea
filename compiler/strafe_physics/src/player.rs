//! Player state and the canonical per-tick update.

use std::f64::consts::PI;

use glam::DVec2;
use tracing::trace;

use crate::{Inputs, Modifiers, PlayerConfig, SinTable};

/// Movement state for a verb, set explicitly by every [`Player::travel`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MoveState {
    /// The tick a jump is pressed: ground acceleration plus sprint boost.
    Jumping,
    Grounded,
    Airborne,
}

/// Parameters of one [`Player::travel`] call.
///
/// Built with named fields over [`MoveArgs::new`]:
///
/// ```
/// use strafe_physics::{MoveArgs, MoveState};
/// let args = MoveArgs { duration: 4, sprinting: true, ..MoveArgs::new(MoveState::Grounded) };
/// assert_eq!(args.slipperiness, None);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MoveArgs {
    /// Number of ticks; zero or negative moves nothing.
    pub duration: i32,
    /// Absolute facing for every tick. `None` follows the player's facing.
    pub rotation: Option<f32>,
    /// Added to the facing (or to `rotation`). Exactly 45 forces [`Inputs::STRAFE`].
    pub rotation_offset: f32,
    /// Defaults to [`PlayerConfig::ground_slipperiness`].
    pub slipperiness: Option<f32>,
    pub sprinting: bool,
    pub sneaking: bool,
    /// Defaults to [`PlayerConfig::speed`].
    pub speed: Option<i16>,
    /// Defaults to [`PlayerConfig::slow`].
    pub slow: Option<i16>,
    pub state: MoveState,
    pub inputs: Inputs,
}

impl MoveArgs {
    /// One tick in `state`, holding forward, with every optional unset.
    pub fn new(state: MoveState) -> Self {
        MoveArgs {
            duration: 1,
            rotation: None,
            rotation_offset: 0.0,
            slipperiness: None,
            sprinting: false,
            sneaking: false,
            speed: None,
            slow: None,
            state,
            inputs: Inputs::FORWARD,
        }
    }
}

/// Flags carried from one tick into the next.
#[derive(Copy, Clone, PartialEq, Debug)]
struct History {
    slipperiness: f32,
    sprinting: bool,
    sneaking: bool,
    in_web: bool,
}

/// Resolved per-call values shared by every tick of a `travel`.
struct Tick {
    rotation: Option<f32>,
    rotation_offset: f32,
    slipperiness: f32,
    sprinting: bool,
    sneaking: bool,
    speed: i16,
    slow: i16,
    boost: f32,
    inputs: Inputs,
}

/// Simulated player. Plain value state; copy it to branch a simulation.
#[derive(Copy, Clone, Debug)]
pub struct Player {
    /// `y` holds the world z coordinate.
    pub position: DVec2,
    /// `y` holds the world z velocity.
    pub velocity: DVec2,
    /// Facing in degrees, stored unwrapped.
    pub rotation: f32,
    pub last_rotation: f32,
    pub last_turn: f32,
    pub state: MoveState,
    pub modifiers: Modifiers,
    pub config: PlayerConfig,
    history: History,
    trig: &'static SinTable,
}

/// Drag applied to the acceleration so that ground speed is independent of
/// slipperiness: `0.6 * 0.91` cubed.
#[allow(clippy::excessive_precision)]
const GROUND_DRAG_COMPENSATION: f32 = 0.16277136;
const FLUID_MULTIPLIER: f32 = 0.02;
const AIR_MULTIPLIER: f32 = 0.02;
#[allow(clippy::excessive_precision)]
const DEGREES_TO_RADIANS: f32 = 0.017453292;
const LADDER_SPEED: f64 = 0.15;

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        Player {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            rotation: 0.0,
            last_rotation: 0.0,
            last_turn: 0.0,
            state: MoveState::Jumping,
            modifiers: Modifiers::empty(),
            config,
            history: History {
                slipperiness: 0.6,
                sprinting: false,
                sneaking: false,
                in_web: false,
            },
            trig: SinTable::global(),
        }
    }

    /// Zero position and velocity. Facing, modifiers and history are kept.
    pub fn reset(&mut self) {
        self.position = DVec2::ZERO;
        self.velocity = DVec2::ZERO;
    }

    /// Move the position back to the origin, keeping momentum.
    pub fn reset_position(&mut self) {
        self.position = DVec2::ZERO;
    }

    pub fn has_modifier(&self, modifier: Modifiers) -> bool {
        self.modifiers.contains(modifier)
    }

    /// Sneaking as it affects this tick under the sneak-delay switch.
    fn effectively_sneaking(&self, sneaking: bool) -> bool {
        if self.config.sneak_delay {
            self.history.sneaking
        } else {
            sneaking
        }
    }

    /// Sprinting as it affects airborne acceleration under the
    /// air-sprint-delay switch.
    fn sprint_carries(&self, sprinting: bool) -> bool {
        if self.config.air_sprint_delay {
            self.history.sprinting
        } else {
            sprinting
        }
    }

    /// The canonical movement primitive: `args.duration` ticks in
    /// `args.state`.
    pub fn travel(&mut self, args: MoveArgs) {
        let mut slipperiness = args
            .slipperiness
            .unwrap_or(self.config.ground_slipperiness);
        if self.has_modifier(Modifiers::WATER) {
            slipperiness = 0.8 / 0.91;
        } else if self.has_modifier(Modifiers::LAVA) {
            slipperiness = 0.5 / 0.91;
        }

        let inputs = if args.rotation_offset == 45.0 {
            Inputs::STRAFE
        } else {
            args.inputs
        };

        self.state = args.state;
        if self.effectively_sneaking(args.sneaking) && self.has_modifier(Modifiers::LAVA) {
            self.state = MoveState::Airborne;
        }

        let boost = if self.config.reverse {
            -self.config.sprint_jump_boost
        } else {
            self.config.sprint_jump_boost
        };

        let tick = Tick {
            rotation: args.rotation.map(|rotation| rotation + args.rotation_offset),
            rotation_offset: args.rotation_offset,
            slipperiness,
            sprinting: args.sprinting,
            sneaking: args.sneaking,
            speed: args.speed.unwrap_or(self.config.speed),
            slow: args.slow.unwrap_or(self.config.slow),
            boost,
            inputs,
        };
        for _ in 0..args.duration {
            self.update(&tick);
        }
        trace!(
            state = ?self.state,
            ticks = args.duration,
            x = self.position.x,
            z = self.position.y,
            "travel"
        );
    }

    fn update(&mut self, tick: &Tick) {
        let rotation = tick
            .rotation
            .unwrap_or(self.rotation + tick.rotation_offset);

        self.position += self.velocity;

        if self.has_modifier(Modifiers::SOULSAND) {
            self.velocity *= 0.4;
        }

        let mut direction = tick.inputs.direction(self.config.reverse);

        self.velocity *= 0.91 * f64::from(self.history.slipperiness);

        if self.config.inertia_axis == 1 {
            let threshold = f64::from(self.config.inertia_threshold);
            if self.velocity.x.abs() < threshold || self.history.in_web {
                self.velocity.x = 0.0;
            }
            if self.velocity.y.abs() < threshold || self.history.in_web {
                self.velocity.y = 0.0;
            }
        }

        if self.state == MoveState::Jumping && tick.sprinting {
            let facing = rotation * DEGREES_TO_RADIANS;
            self.velocity.x -= f64::from(self.trig.sin(facing) * tick.boost);
            self.velocity.y += f64::from(self.trig.cos(facing) * tick.boost);
        }

        if self.has_modifier(Modifiers::BLOCK) {
            direction *= 0.2;
        }
        if self.effectively_sneaking(tick.sneaking) {
            direction *= 0.3;
        }
        direction *= 0.98;

        let multiplier = self.movement_multiplier(tick);
        let distance = direction.length_squared();
        if distance > 0.0 {
            direction *= multiplier / distance.sqrt().max(1.0);
            let yaw = (f64::from(rotation) * PI / 180.0) as f32;
            let sin_yaw = self.trig.sin(yaw);
            let cos_yaw = self.trig.cos(yaw);
            // direction.x is forward, direction.y is strafe
            self.velocity.x += f64::from(direction.y * cos_yaw - direction.x * sin_yaw);
            self.velocity.y += f64::from(direction.x * cos_yaw + direction.y * sin_yaw);
        }

        if self.has_modifier(Modifiers::WEB) {
            self.velocity *= 0.25;
        }
        if self.has_modifier(Modifiers::LADDER) {
            self.velocity = self
                .velocity
                .clamp(DVec2::splat(-LADDER_SPEED), DVec2::splat(LADDER_SPEED));
        }

        self.history = History {
            slipperiness: tick.slipperiness,
            sprinting: tick.sprinting,
            sneaking: tick.sneaking,
            in_web: self.has_modifier(Modifiers::WEB),
        };
        self.last_turn = rotation - self.last_rotation;
        self.last_rotation = rotation;
    }

    /// Acceleration applied along the input direction this tick.
    fn movement_multiplier(&self, tick: &Tick) -> f32 {
        if self.modifiers.intersects(Modifiers::WATER | Modifiers::LAVA) {
            return FLUID_MULTIPLIER;
        }
        match self.state {
            MoveState::Airborne => {
                if self.sprint_carries(tick.sprinting) {
                    AIR_MULTIPLIER + AIR_MULTIPLIER * 0.3
                } else {
                    AIR_MULTIPLIER
                }
            }
            MoveState::Grounded | MoveState::Jumping => {
                let mut multiplier = 0.1_f32;
                if tick.speed > 0 {
                    multiplier *= 1.0 + 0.2 * f32::from(tick.speed);
                }
                if tick.slow > 0 {
                    multiplier *= (1.0 - 0.15 * f32::from(tick.slow)).max(0.0);
                }
                if tick.sprinting {
                    multiplier *= 1.3;
                }
                let drag = 0.91 * tick.slipperiness;
                multiplier * (GROUND_DRAG_COMPENSATION / (drag * drag * drag))
            }
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new(PlayerConfig::default())
    }
}

#[cfg(test)]
mod tests;
