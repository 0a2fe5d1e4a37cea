//! Environmental modifiers and movement inputs.

use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Environmental conditions that override normal drag and acceleration.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Modifiers: u8 {
        /// Slipperiness 0.8/0.91, liquid acceleration.
        const WATER = 1 << 0;
        /// Slipperiness 0.5/0.91, liquid acceleration; sneaking forces airborne.
        const LAVA = 1 << 1;
        /// Velocity x0.25 every tick; the next tick drops all inertia.
        const WEB = 1 << 2;
        /// Input direction x0.2 (using an item or blocking).
        const BLOCK = 1 << 3;
        /// Each velocity axis clamped to +-0.15.
        const LADDER = 1 << 4;
        /// Velocity x0.4 before drag.
        const SOULSAND = 1 << 5;
    }
}

bitflags! {
    /// Movement keys held during a verb.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Inputs: u8 {
        /// `w`
        const FORWARD = 1 << 0;
        /// `s`
        const BACK = 1 << 1;
        /// `a`
        const LEFT = 1 << 2;
        /// `d`
        const RIGHT = 1 << 3;
    }
}

impl Inputs {
    /// Forward and left, the mask of every 45 degree strafe verb.
    pub const STRAFE: Inputs = Inputs::FORWARD.union(Inputs::LEFT);

    /// Parse a mask such as `wa`. Unknown letters are returned separately.
    pub fn from_mask(mask: &str) -> (Inputs, Vec<char>) {
        let mut inputs = Inputs::empty();
        let mut unknown = Vec::new();
        for c in mask.chars() {
            match c {
                'w' => inputs |= Inputs::FORWARD,
                's' => inputs |= Inputs::BACK,
                'a' => inputs |= Inputs::LEFT,
                'd' => inputs |= Inputs::RIGHT,
                other => unknown.push(other),
            }
        }
        (inputs, unknown)
    }

    /// Raw input direction: `x` is forward, `y` is strafe (left positive).
    pub fn direction(self, reverse: bool) -> Vec2 {
        let axis = |positive: Inputs, negative: Inputs| {
            f32::from(u8::from(self.contains(positive))) - f32::from(u8::from(self.contains(negative)))
        };
        let direction = Vec2::new(
            axis(Inputs::FORWARD, Inputs::BACK),
            axis(Inputs::LEFT, Inputs::RIGHT),
        );
        if reverse {
            -direction
        } else {
            direction
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_masks() {
        assert_eq!(Inputs::from_mask("wa"), (Inputs::STRAFE, vec![]));
        assert_eq!(Inputs::from_mask(""), (Inputs::empty(), vec![]));
        assert_eq!(
            Inputs::from_mask("sxd"),
            (Inputs::BACK | Inputs::RIGHT, vec!['x'])
        );
    }

    #[test]
    fn opposite_keys_cancel() {
        assert_eq!(Inputs::all().direction(false), Vec2::ZERO);
        assert_eq!(Inputs::STRAFE.direction(false), Vec2::new(1.0, 1.0));
        assert_eq!(Inputs::FORWARD.direction(true), Vec2::new(-1.0, 0.0));
    }
}
