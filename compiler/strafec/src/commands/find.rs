//! `find`: search for the facing that keeps a sprint inside a bound.

use strafe_eval::format_significant;
use strafe_physics::Strategy;
use tracing::info;

use crate::{OptionError, RunError, RunOptions};

pub fn find_strategy(options: &RunOptions) -> Result<Strategy, RunError> {
    let size_z = options.size_z.ok_or(OptionError::MissingValue("size"))?;
    let strategy = options.finder(size_z).find()?;
    info!(
        ticks = strategy.ticks,
        angle_index = strategy.angle_index,
        adjustments = strategy.adjustments,
        "strategy found"
    );
    Ok(strategy)
}

/// Printable report of a strategy, numbers at `precision` significant digits.
pub fn format_strategy(strategy: &Strategy, precision: usize) -> String {
    format!(
        "Ticks: {}\nAngle index: {}\nRotation: {}\nAdjustments: {}\nZ: {}\n",
        strategy.ticks,
        strategy.angle_index,
        format_significant(f64::from(strategy.rotation), precision),
        strategy.adjustments,
        format_significant(strategy.final_z, precision),
    )
}
