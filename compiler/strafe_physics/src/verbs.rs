//! Named movement verbs as fixed parameterizations of [`Player::travel`].
//!
//! Composite verbs split their duration and pass explicit input masks to
//! each part; nothing is saved and restored on the player.

use std::f64::consts::PI;

use glam::DVec2;

use crate::{Inputs, MoveArgs, MoveState, Player};

/// Keys and flags held for every tick of a verb.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Stride {
    pub sprinting: bool,
    pub sneaking: bool,
    pub inputs: Inputs,
    /// Absolute facing for the whole verb.
    pub rotation: Option<f32>,
    /// Face 45 degrees further and hold forward-left.
    pub strafe45: bool,
}

impl Stride {
    pub fn walk() -> Self {
        Stride {
            sprinting: false,
            sneaking: false,
            inputs: Inputs::FORWARD,
            rotation: None,
            strafe45: false,
        }
    }

    pub fn sprint() -> Self {
        Stride {
            sprinting: true,
            ..Stride::walk()
        }
    }

    /// No keys held.
    pub fn stop() -> Self {
        Stride {
            inputs: Inputs::empty(),
            ..Stride::walk()
        }
    }

    fn args(self, state: MoveState, duration: i32) -> MoveArgs {
        MoveArgs {
            duration,
            rotation: self.rotation,
            rotation_offset: if self.strafe45 { 45.0 } else { 0.0 },
            sprinting: self.sprinting,
            sneaking: self.sneaking,
            inputs: self.inputs,
            ..MoveArgs::new(state)
        }
    }
}

impl Player {
    /// `duration` ground ticks.
    pub fn ground(&mut self, duration: i32, stride: Stride) {
        self.travel(stride.args(MoveState::Grounded, duration));
    }

    /// `duration` airborne ticks; the air has slipperiness 1.0.
    pub fn air(&mut self, duration: i32, stride: Stride) {
        self.travel(MoveArgs {
            slipperiness: Some(1.0),
            ..stride.args(MoveState::Airborne, duration)
        });
    }

    /// One jump tick, then `duration - 1` airborne ticks.
    ///
    /// A sprint jump tick keeps the plain facing so the boost points
    /// forward; the 45 degree strafe starts on the first airborne tick.
    pub fn jump(&mut self, duration: i32, stride: Stride) {
        if duration <= 0 {
            return;
        }
        let jump_tick = Stride {
            strafe45: stride.strafe45 && !stride.sprinting,
            ..stride
        };
        self.travel(jump_tick.args(MoveState::Jumping, 1));
        self.air(duration - 1, stride);
    }

    /// Jump with no keys held for `delay` ticks, then air movement with
    /// `stride` for the rest. A zero delay is a plain jump.
    pub fn pessi(&mut self, duration: i32, delay: i32, stride: Stride) {
        if delay <= 0 {
            self.jump(duration, stride);
            return;
        }
        if duration <= 0 {
            return;
        }
        let delay = delay.min(duration);
        self.jump(delay, Stride::stop());
        self.air(duration - delay, stride);
    }

    /// Walk-jump for `delay` ticks, then sprint in the air for the rest.
    ///
    /// A zero delay is a sprint jump; a negative delay moves nothing.
    pub fn force_momentum(&mut self, duration: i32, delay: i32, stride: Stride) {
        let sprint = Stride {
            sprinting: true,
            ..stride
        };
        if delay < 0 {
            return;
        }
        if delay == 0 {
            self.jump(duration, sprint);
            return;
        }
        let delay = delay.min(duration.max(0));
        self.jump(
            delay,
            Stride {
                sprinting: false,
                ..stride
            },
        );
        self.air(duration - delay, sprint);
    }

    /// Sprint jump holding forward-left, turned by the optimal strafe
    /// angle, then sprint in the air for the rest.
    pub fn strafe_jump(&mut self, duration: i32, stride: Stride) {
        if duration <= 0 {
            return;
        }
        let angle = self.optimal_strafe_angle(stride.sneaking);
        self.travel(MoveArgs {
            rotation: stride.rotation,
            rotation_offset: angle,
            sprinting: true,
            sneaking: stride.sneaking,
            inputs: Inputs::STRAFE,
            ..MoveArgs::new(MoveState::Jumping)
        });
        self.air(
            duration - 1,
            Stride {
                sprinting: true,
                ..stride
            },
        );
    }

    /// Angle in degrees between facing and velocity after one forward-left
    /// sprint jump tick from rest at facing 0.
    ///
    /// Turning the facing by this angle makes the jump tick's velocity point
    /// straight along the original facing.
    pub fn optimal_strafe_angle(&self, sneaking: bool) -> f32 {
        let mut trial = *self;
        trial.position = DVec2::ZERO;
        trial.velocity = DVec2::ZERO;
        trial.rotation = 0.0;
        trial.travel(MoveArgs {
            sprinting: true,
            sneaking,
            inputs: Inputs::STRAFE,
            ..MoveArgs::new(MoveState::Jumping)
        });
        (180.0 * trial.velocity.x.atan2(trial.velocity.y) / PI).abs() as f32
    }

    /// `duration` walking ground ticks.
    pub fn walk(&mut self, duration: i32, rotation: Option<f32>) {
        self.ground(
            duration,
            Stride {
                rotation,
                ..Stride::walk()
            },
        );
    }

    /// `duration` sprinting ground ticks.
    pub fn sprint(&mut self, duration: i32, rotation: Option<f32>) {
        self.ground(
            duration,
            Stride {
                rotation,
                ..Stride::sprint()
            },
        );
    }
}
