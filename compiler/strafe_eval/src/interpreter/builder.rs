//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use rustc_hash::FxHashMap;
use strafe_physics::{Player, PlayerConfig};

use super::{Interpreter, DEFAULT_PRECISION, MAX_CALL_DEPTH};
use crate::{stdout_handler, Environment, SharedPrintHandler};

/// Builder for creating Interpreter instances.
///
/// ```
/// use strafe_eval::{buffer_handler, InterpreterBuilder};
///
/// let print = buffer_handler();
/// let interpreter = InterpreterBuilder::new()
///     .precision(4)
///     .print_handler(print.clone())
///     .build();
/// assert_eq!(interpreter.precision(), 4);
/// ```
pub struct InterpreterBuilder {
    player_config: PlayerConfig,
    precision: usize,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            player_config: PlayerConfig::default(),
            precision: DEFAULT_PRECISION,
            print_handler: None,
            max_call_depth: MAX_CALL_DEPTH,
        }
    }

    /// Set the configuration of the simulated player.
    #[must_use]
    pub fn player_config(mut self, config: PlayerConfig) -> Self {
        self.player_config = config;
        self
    }

    /// Set the number of significant digits in printed numbers.
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision.max(1);
        self
    }

    /// Set where output and diagnostics go. Default is stdout/stderr.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Set the nesting limit for user function calls.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn build<'a>(self) -> Interpreter<'a> {
        Interpreter {
            player: Player::new(self.player_config),
            env: Environment::new(),
            functions: FxHashMap::default(),
            precision: self.precision,
            print: self.print_handler.unwrap_or_else(stdout_handler),
            call_depth: 0,
            max_call_depth: self.max_call_depth,
        }
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
