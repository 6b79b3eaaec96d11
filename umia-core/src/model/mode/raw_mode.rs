use super::{CanonicalMode, ModalSplit};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the 13 travel options a persona rates. single-mode options map directly
/// onto a [`CanonicalMode`], combined options (e.g. PT-Walk) are split
/// between a primary and a secondary mode.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RawMode {
    Mod,
    Car,
    Bike,
    Walk,
    Mm,
    PtMod,
    PtBike,
    PtWalk,
    PtMm,
    ModWalk,
    ModMm,
    CarWalk,
    MmWalk,
}

impl RawMode {
    pub const COUNT: usize = 13;

    /// all raw modes in table column order
    pub const ALL: [RawMode; RawMode::COUNT] = [
        RawMode::Mod,
        RawMode::Car,
        RawMode::Bike,
        RawMode::Walk,
        RawMode::Mm,
        RawMode::PtMod,
        RawMode::PtBike,
        RawMode::PtWalk,
        RawMode::PtMm,
        RawMode::ModWalk,
        RawMode::ModMm,
        RawMode::CarWalk,
        RawMode::MmWalk,
    ];

    /// display label used in tables and reports
    pub fn label(&self) -> &'static str {
        match self {
            RawMode::Mod => "MoD",
            RawMode::Car => "Car",
            RawMode::Bike => "Bike",
            RawMode::Walk => "Walk",
            RawMode::Mm => "MM",
            RawMode::PtMod => "PT-MoD",
            RawMode::PtBike => "PT-Bike",
            RawMode::PtWalk => "PT-Walk",
            RawMode::PtMm => "PT-MM",
            RawMode::ModWalk => "MoD-Walk",
            RawMode::ModMm => "MoD-MM",
            RawMode::CarWalk => "Car-Walk",
            RawMode::MmWalk => "MM-Walk",
        }
    }

    /// how a share of this raw mode is attributed to the canonical modes.
    pub fn split(&self) -> ModalSplit {
        use CanonicalMode as C;
        match self {
            RawMode::Mod => ModalSplit::Direct(C::Mod),
            RawMode::Car => ModalSplit::Direct(C::Car),
            RawMode::Bike => ModalSplit::Direct(C::Bike),
            RawMode::Walk => ModalSplit::Direct(C::Walk),
            RawMode::Mm => ModalSplit::Direct(C::Mm),
            RawMode::PtMod => ModalSplit::combined(C::Pt, C::Mod),
            RawMode::PtBike => ModalSplit::combined(C::Pt, C::Bike),
            RawMode::PtWalk => ModalSplit::combined(C::Pt, C::Walk),
            RawMode::PtMm => ModalSplit::combined(C::Pt, C::Mm),
            RawMode::ModWalk => ModalSplit::combined(C::Mod, C::Walk),
            RawMode::ModMm => ModalSplit::combined(C::Mod, C::Mm),
            RawMode::CarWalk => ModalSplit::combined(C::Car, C::Walk),
            RawMode::MmWalk => ModalSplit::combined(C::Mm, C::Walk),
        }
    }

    pub fn is_combined(&self) -> bool {
        matches!(self.split(), ModalSplit::Combined { .. })
    }
}

impl Display for RawMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod test {
    use super::RawMode;

    #[test]
    fn test_serde_names() {
        let names = RawMode::ALL
            .iter()
            .map(|m| serde_json::to_string(m).expect("test invariant failed"))
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                "\"mod\"",
                "\"car\"",
                "\"bike\"",
                "\"walk\"",
                "\"mm\"",
                "\"pt_mod\"",
                "\"pt_bike\"",
                "\"pt_walk\"",
                "\"pt_mm\"",
                "\"mod_walk\"",
                "\"mod_mm\"",
                "\"car_walk\"",
                "\"mm_walk\""
            ]
        );
    }

    #[test]
    fn test_combined_modes() {
        let combined = RawMode::ALL.iter().filter(|m| m.is_combined()).count();
        assert_eq!(combined, 8);
        assert!(!RawMode::Mm.is_combined());
        assert!(RawMode::MmWalk.is_combined());
    }
}
