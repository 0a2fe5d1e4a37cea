//! Fixed-point trigonometry.

use std::f64::consts::PI;
use std::fmt;
use std::sync::OnceLock;

const TABLE_SIZE: usize = 65536;
const INDEX_MASK: i32 = 0xFFFF;
/// Table entries per radian (65536 / 2pi) as the reference engine rounds it.
#[allow(clippy::excessive_precision)]
pub(crate) const RADIANS_TO_INDEX: f32 = 10430.378;
/// A quarter period, added to the index to turn sine into cosine.
const QUARTER_TURN: f32 = 16384.0;

/// Precomputed sine values, indexed by a quantized angle.
///
/// Built once per process and shared read-only through [`SinTable::global`].
pub struct SinTable {
    values: Box<[f32]>,
}

impl SinTable {
    fn build() -> Self {
        let values = (0..TABLE_SIZE)
            .map(|i| (PI * 2.0 * i as f64 / TABLE_SIZE as f64).sin() as f32)
            .collect();
        SinTable { values }
    }

    /// The process-wide table.
    pub fn global() -> &'static SinTable {
        static TABLE: OnceLock<SinTable> = OnceLock::new();
        TABLE.get_or_init(SinTable::build)
    }

    /// Table index for an angle in radians, masked into `0..65536`.
    #[inline]
    pub fn index(radians: f32) -> usize {
        ((radians * RADIANS_TO_INDEX) as i32 & INDEX_MASK) as usize
    }

    #[inline]
    pub fn sin(&self, radians: f32) -> f32 {
        self.values[Self::index(radians)]
    }

    #[inline]
    pub fn cos(&self, radians: f32) -> f32 {
        let index = ((radians * RADIANS_TO_INDEX + QUARTER_TURN) as i32 & INDEX_MASK) as usize;
        self.values[index]
    }
}

impl fmt::Debug for SinTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinTable")
            .field("len", &self.values.len())
            .finish()
    }
}
