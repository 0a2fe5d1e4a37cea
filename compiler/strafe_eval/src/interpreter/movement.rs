//! Movement verb dispatch.
//!
//! Each verb descriptor becomes a [`Stride`] plus a call to the matching
//! player verb. Arguments: duration (default 1), then the composite delay
//! where the verb has one, then an absolute rotation.

use strafe_ir::{CallExpr, Gait, Motion, VerbKind};
use strafe_physics::{Inputs, Stride};
use tracing::debug;

use super::Interpreter;
use crate::EvalError;

impl<'a> Interpreter<'a> {
    pub(super) fn call_verb(&mut self, verb: VerbKind, call: &'a CallExpr) -> Result<(), EvalError> {
        let args = self.eval_args(call)?;
        let inputs = self.resolve_inputs(call);
        let duration = args.int(0).unwrap_or(1);

        match verb {
            VerbKind::Move(shape) => {
                let stride = Stride {
                    sprinting: shape.gait == Gait::Sprint,
                    sneaking: shape.sneak,
                    inputs: if shape.gait == Gait::Stop {
                        Inputs::empty()
                    } else {
                        inputs
                    },
                    rotation: args.float(1),
                    strafe45: shape.strafe45,
                };
                match shape.motion {
                    Motion::Ground => self.player.ground(duration, stride),
                    Motion::Jump => self.player.jump(duration, stride),
                    Motion::Air => self.player.air(duration, stride),
                }
            }
            VerbKind::Pessi { sprint, strafe45 } => {
                let delay = args.int(1).unwrap_or(0);
                let stride = Stride {
                    sprinting: sprint,
                    inputs,
                    rotation: args.float(2),
                    strafe45,
                    ..Stride::walk()
                };
                self.player.pessi(duration, delay, stride);
            }
            VerbKind::ForceMomentum { strafe45 } => {
                let delay = args.int(1).unwrap_or(0);
                if delay < 0 {
                    self.warn(&format!(
                        "`{}` delay {delay} is negative, nothing moved",
                        call.name
                    ));
                }
                let stride = Stride {
                    inputs,
                    rotation: args.float(2),
                    strafe45,
                    ..Stride::walk()
                };
                self.player.force_momentum(duration, delay, stride);
            }
            VerbKind::StrafeJump { sneak, strafe45 } => {
                let stride = Stride {
                    sprinting: true,
                    sneaking: sneak,
                    inputs,
                    rotation: args.float(1),
                    strafe45,
                };
                self.player.strafe_jump(duration, stride);
            }
        }

        debug!(
            verb = %call.name,
            duration,
            x = self.player.position.x,
            z = self.player.position.y,
            "moved"
        );
        self.report_state();
        Ok(())
    }

    /// Input mask of a call: `.xyz` when given, forward otherwise.
    fn resolve_inputs(&self, call: &CallExpr) -> Inputs {
        let mask = match call.inputs.as_deref() {
            None | Some("") => return Inputs::FORWARD,
            Some(mask) => mask,
        };
        let (inputs, unknown) = Inputs::from_mask(mask);
        for key in unknown {
            self.warn(&format!("unknown input `{key}` in `{}.{mask}`", call.name));
        }
        inputs
    }
}
