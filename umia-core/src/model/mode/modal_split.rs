use super::{CanonicalMode, ModeValues};

/// portion of a combined option attributed to its first mode
pub const PRIMARY_SHARE: f64 = 0.8;
/// portion of a combined option attributed to its second mode
pub const SECONDARY_SHARE: f64 = 0.2;

/// attribution rule of one raw mode onto the canonical modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalSplit {
    Direct(CanonicalMode),
    Combined {
        primary: CanonicalMode,
        secondary: CanonicalMode,
    },
}

impl ModalSplit {
    pub fn combined(primary: CanonicalMode, secondary: CanonicalMode) -> ModalSplit {
        ModalSplit::Combined { primary, secondary }
    }

    /// adds `share` to the accumulator following this split. the full share
    /// is always distributed, so totals are preserved.
    pub fn distribute(&self, share: f64, acc: &mut ModeValues<f64>) {
        match self {
            ModalSplit::Direct(mode) => acc[*mode] += share,
            ModalSplit::Combined { primary, secondary } => {
                acc[*primary] += share * PRIMARY_SHARE;
                acc[*secondary] += share * SECONDARY_SHARE;
            }
        }
    }
}
