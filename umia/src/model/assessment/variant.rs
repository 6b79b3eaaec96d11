use serde::Serialize;
use std::fmt::Display;
use umia_core::model::entity::{Intervention, ScenarioId};

/// the baseline ratings or the ratings adjusted by one intervention.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Variant {
    Baseline,
    Intervention { index: usize, name: String },
}

impl Variant {
    pub fn intervention(index: usize, intervention: &Intervention) -> Variant {
        Variant::Intervention {
            index,
            name: intervention.short_name().to_string(),
        }
    }

    /// suffix letter: a for the baseline, b and c for the interventions
    pub fn letter(&self) -> char {
        match self {
            Variant::Baseline => 'a',
            Variant::Intervention { index, .. } => (b'b' + (*index as u8)) as char,
        }
    }

    /// label of a scenario under this variant, such as "S1a" or "S1b: MoD"
    pub fn scenario_label(&self, scenario: ScenarioId) -> String {
        match self {
            Variant::Baseline => format!("{scenario}{}", self.letter()),
            Variant::Intervention { name, .. } => format!("{scenario}{}: {name}", self.letter()),
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Baseline => write!(f, "baseline"),
            Variant::Intervention { name, .. } => write!(f, "{name}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Variant::Baseline.scenario_label(ScenarioId(0)), "S1a");
        let ebike = Variant::Intervention {
            index: 1,
            name: String::from("eBike"),
        };
        assert_eq!(ebike.scenario_label(ScenarioId(2)), "S3c: eBike");
    }
}
