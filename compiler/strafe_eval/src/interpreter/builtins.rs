//! Non-movement builtins: output, player setters and configuration.

use strafe_ir::{Builtin, CallExpr};
use strafe_physics::Modifiers;

use super::args::CallArgs;
use super::Interpreter;
use crate::{format_significant, EvalError};

impl<'a> Interpreter<'a> {
    pub(super) fn call_builtin(
        &mut self,
        builtin: Builtin,
        call: &'a CallExpr,
    ) -> Result<(), EvalError> {
        let args = self.eval_args(call)?;
        match builtin {
            Builtin::OutX => self.report_axis("X", self.player.position.x, &args),
            Builtin::OutZ => self.report_axis("Z", self.player.position.y, &args),
            Builtin::OutVx => self.report_axis("Vx", self.player.velocity.x, &args),
            Builtin::OutVz => self.report_axis("Vz", self.player.velocity.y, &args),
            Builtin::SetX => {
                if let Some(x) = args.float(0) {
                    self.player.position.x = f64::from(x);
                }
            }
            Builtin::SetZ => {
                if let Some(z) = args.float(0) {
                    self.player.position.y = f64::from(z);
                }
            }
            Builtin::SetVx => {
                if let Some(vx) = args.float(0) {
                    self.player.velocity.x = f64::from(vx);
                }
            }
            Builtin::SetVz => {
                if let Some(vz) = args.float(0) {
                    self.player.velocity.y = f64::from(vz);
                }
            }
            Builtin::Facing => {
                if let Some(angle) = args.float_or(0, 0.0) {
                    self.player.rotation = angle;
                }
            }
            Builtin::Print => {
                let line = args
                    .present()
                    .map(|value| value.render(self.precision))
                    .collect::<String>();
                self.print.println(&line);
            }
            Builtin::Reset => self.player.reset_position(),
            Builtin::Precision => {
                if let Some(digits) = args.int(0) {
                    match usize::try_from(digits) {
                        Ok(digits) if digits > 0 => self.precision = digits,
                        _ => self.warn(&format!("precision must be positive, got {digits}")),
                    }
                }
            }
            Builtin::Slip => {
                if let Some(slip) = args.float(0) {
                    self.player.config.ground_slipperiness = slip;
                }
            }
            Builtin::Speed => {
                if let Some(level) = self.effect_level(&args) {
                    self.player.config.speed = level;
                }
            }
            Builtin::Slowness => {
                if let Some(level) = self.effect_level(&args) {
                    self.player.config.slow = level;
                }
            }
            Builtin::Water => self.toggle_modifier(Modifiers::WATER, &args),
            Builtin::Lava => self.toggle_modifier(Modifiers::LAVA, &args),
            Builtin::Web => self.toggle_modifier(Modifiers::WEB, &args),
            Builtin::Block => self.toggle_modifier(Modifiers::BLOCK, &args),
            Builtin::Ladder => self.toggle_modifier(Modifiers::LADDER, &args),
            Builtin::Soulsand => self.toggle_modifier(Modifiers::SOULSAND, &args),
            Builtin::SneakDelay => {
                if let Some(on) = args.flag_or(0, true) {
                    self.player.config.sneak_delay = on;
                }
            }
            Builtin::AirSprintDelay => {
                if let Some(on) = args.flag_or(0, true) {
                    self.player.config.air_sprint_delay = on;
                }
            }
            Builtin::Reverse => {
                if let Some(on) = args.flag_or(0, true) {
                    self.player.config.reverse = on;
                }
            }
            Builtin::Inertia => {
                if let Some(on) = args.flag_or(0, true) {
                    self.player.config.inertia_axis = u8::from(on);
                }
            }
        }
        Ok(())
    }

    /// `out*`: the current value, or the signed offset to a target.
    ///
    /// With a target the line reads `label: target - delta` when the target
    /// is ahead and `label: target + delta` when it is behind.
    fn report_axis(&self, label: &str, current: f64, args: &CallArgs<'_>) {
        let fmt = |value: f64| format_significant(value, self.precision);
        if args.is_empty() {
            self.print.println(&format!("{label}: {}", fmt(current)));
            return;
        }
        let Some(target) = args.number(0) else {
            return;
        };
        let offset = target.as_f64().unwrap_or(current);
        let (sign, delta) = if offset >= current {
            ('-', offset - current)
        } else {
            ('+', current - offset)
        };
        self.print.println(&format!(
            "{label}: {} {sign} {}",
            target.render(self.precision),
            fmt(delta)
        ));
    }

    fn toggle_modifier(&mut self, modifier: Modifiers, args: &CallArgs<'_>) {
        if let Some(on) = args.flag_or(0, true) {
            self.player.modifiers.set(modifier, on);
        }
    }

    fn effect_level(&self, args: &CallArgs<'_>) -> Option<i16> {
        let level = args.int(0)?;
        match i16::try_from(level) {
            Ok(level) => Some(level),
            Err(_) => {
                self.warn(&format!("effect level {level} is out of range"));
                None
            }
        }
    }
}
