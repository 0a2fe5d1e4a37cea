//! Brute-force search for the smallest turn that keeps a sprint inside a
//! bound.
//!
//! The finder sprints straight until the player leaves `size_z`, predicts
//! the facing that would end exactly on the bound, quantizes it to a sine
//! table index and then steps the index one unit at a time until the same
//! number of sprint ticks stays inside. Every trial runs on a fresh player.

use thiserror::Error;
use tracing::debug;

use crate::trig::RADIANS_TO_INDEX;
use crate::{Player, PlayerConfig};

/// Index steps in a quarter turn; no useful angle lies further out.
const QUARTER_TURN_STEPS: u32 = 16384;

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct StratFinder {
    /// Distance along z the run must stay within.
    pub size_z: f64,
    /// Turn left (negative rotation) instead of right.
    pub left: bool,
    /// Give up when a straight sprint needs more ticks than this.
    pub max_ticks: i32,
    pub config: PlayerConfig,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Strategy {
    /// Sprint ticks of the run.
    pub ticks: i32,
    /// Sine table index of the facing (negative when turning left).
    pub angle_index: i32,
    /// Facing in degrees, `360 * angle_index / 65536`.
    pub rotation: f32,
    /// Index steps taken after the predicted angle.
    pub adjustments: u32,
    /// z position after the run at `rotation`.
    pub final_z: f64,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum StratError {
    #[error("target size must be a positive number, got {0}")]
    InvalidSize(f64),
    #[error("a straight sprint does not pass {size_z} within {max_ticks} ticks")]
    OutOfReach { size_z: f64, max_ticks: i32 },
    #[error("no facing within a quarter turn keeps {ticks} ticks inside {size_z}")]
    NoAngle { size_z: f64, ticks: i32 },
}

impl StratFinder {
    pub fn new(size_z: f64) -> Self {
        StratFinder {
            size_z,
            left: true,
            max_ticks: 1000,
            config: PlayerConfig::default(),
        }
    }

    pub fn find(&self) -> Result<Strategy, StratError> {
        if !(self.size_z.is_finite() && self.size_z > 0.0) {
            return Err(StratError::InvalidSize(self.size_z));
        }

        let mut player = Player::new(self.config);
        let mut ticks = 0;
        while player.position.y.abs() <= self.size_z {
            if ticks >= self.max_ticks {
                return Err(StratError::OutOfReach {
                    size_z: self.size_z,
                    max_ticks: self.max_ticks,
                });
            }
            player.sprint(1, Some(0.0));
            ticks += 1;
        }

        let predicted = (self.size_z / player.position.y).acos() as f32;
        let mut angle_index = (predicted * RADIANS_TO_INDEX) as i32 & 0xFFFF;
        if self.left {
            angle_index = -angle_index;
        }
        debug!(ticks, angle_index, "predicted facing");

        let step = if self.left { -1 } else { 1 };
        let mut adjustments = 0;
        let mut final_z = self.trial(ticks, angle_index);
        while final_z.abs() >= self.size_z {
            if adjustments >= QUARTER_TURN_STEPS {
                return Err(StratError::NoAngle {
                    size_z: self.size_z,
                    ticks,
                });
            }
            angle_index += step;
            adjustments += 1;
            final_z = self.trial(ticks, angle_index);
        }

        Ok(Strategy {
            ticks,
            angle_index,
            rotation: index_to_degrees(angle_index),
            adjustments,
            final_z,
        })
    }

    /// z after `ticks` sprint ticks from rest at the facing of `angle_index`.
    fn trial(&self, ticks: i32, angle_index: i32) -> f64 {
        let mut player = Player::new(self.config);
        player.sprint(ticks, Some(index_to_degrees(angle_index)));
        player.position.y
    }
}

/// Facing in degrees for a sine table index.
pub fn index_to_degrees(angle_index: i32) -> f32 {
    (360.0 * f64::from(angle_index) / 65536.0) as f32
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
