//! Command-line flags.

use strafe_eval::{InterpreterBuilder, DEFAULT_PRECISION};
use strafe_physics::{PlayerConfig, StratFinder};
use thiserror::Error;

/// Settings collected from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub player: PlayerConfig,
    /// Significant digits in printed numbers.
    pub precision: usize,
    /// Bound for `strafe find`.
    pub size_z: Option<f64>,
    /// Turn right instead of left in `strafe find`.
    pub right: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            player: PlayerConfig::default(),
            precision: DEFAULT_PRECISION,
            size_z: None,
            right: false,
        }
    }
}

impl RunOptions {
    /// An interpreter builder carrying these settings.
    pub fn interpreter(&self) -> InterpreterBuilder {
        InterpreterBuilder::new()
            .player_config(self.player)
            .precision(self.precision)
    }

    /// A strategy finder for `size_z`, carrying these settings.
    pub fn finder(&self, size_z: f64) -> StratFinder {
        StratFinder {
            left: !self.right,
            config: self.player,
            ..StratFinder::new(size_z)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("unknown option '{0}'")]
    Unknown(String),
    #[error("option '--{0}' needs a value")]
    MissingValue(&'static str),
    #[error("invalid value '{value}' for '--{flag}'")]
    InvalidValue { flag: &'static str, value: String },
}

/// Split `args` into options and positional arguments.
///
/// Valued flags take `--flag=value`; `--size` also accepts its value as the
/// next argument. Anything not starting with `--` is positional.
pub fn parse_options(args: &[String]) -> Result<(RunOptions, Vec<String>), OptionError> {
    let mut options = RunOptions::default();
    let mut positional = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        i += 1;
        if !arg.starts_with("--") {
            positional.push(arg.clone());
        } else if let Some(value) = arg.strip_prefix("--slip=") {
            options.player.ground_slipperiness = parse_value("slip", value)?;
        } else if let Some(value) = arg.strip_prefix("--speed=") {
            options.player.speed = parse_value("speed", value)?;
        } else if let Some(value) = arg.strip_prefix("--slow=") {
            options.player.slow = parse_value("slow", value)?;
        } else if let Some(value) = arg.strip_prefix("--precision=") {
            let precision: usize = parse_value("precision", value)?;
            if precision == 0 {
                return Err(invalid("precision", value));
            }
            options.precision = precision;
        } else if let Some(value) = arg.strip_prefix("--size=") {
            options.size_z = Some(parse_value("size", value)?);
        } else if arg == "--size" {
            let value = args.get(i).ok_or(OptionError::MissingValue("size"))?;
            options.size_z = Some(parse_value("size", value)?);
            i += 1;
        } else if arg == "--sneak-delay" {
            options.player.sneak_delay = true;
        } else if arg == "--no-air-sprint-delay" {
            options.player.air_sprint_delay = false;
        } else if arg == "--reverse" {
            options.player.reverse = true;
        } else if arg == "--right" {
            options.right = true;
        } else {
            return Err(OptionError::Unknown(arg.clone()));
        }
    }
    Ok((options, positional))
}

fn parse_value<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, OptionError> {
    value.parse().map_err(|_| invalid(flag, value))
}

#[cold]
fn invalid(flag: &'static str, value: &str) -> OptionError {
    OptionError::InvalidValue {
        flag,
        value: value.to_string(),
    }
}
