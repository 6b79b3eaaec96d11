use super::ModalDistances;
use umia_core::model::{
    entity::Persona,
    mode::{ModeValues, RawModeValues},
    rating::ModeRatings,
    table::RatingTable,
    validation::ValidationError,
};

/// decimals kept on per-mode distances
pub const DISTANCE_DECIMALS: i32 = 1;

/// divides each rating by the row sum. returns None for a row of zeros,
/// which has no defined share.
pub fn normalize(ratings: &ModeRatings) -> Option<RawModeValues<f64>> {
    let total: u32 = ratings.iter().map(|(_, r)| r.value() as u32).sum();
    if total == 0 {
        return None;
    }
    Some(ratings.map(|r| r.value() as f64 / total as f64))
}

/// attributes raw-mode fractions to the six canonical modes. combined
/// options give 80% to their first mode and 20% to their second.
pub fn redistribute(fractions: &RawModeValues<f64>) -> ModeValues<f64> {
    fractions
        .iter()
        .fold(ModeValues::default(), |mut acc, (mode, share)| {
            mode.split().distribute(share, &mut acc);
            acc
        })
}

/// canonical mode shares of a rating row, summing to 1, or None when the
/// row is all zeros.
pub fn canonical_shares(ratings: &ModeRatings) -> Option<ModeValues<f64>> {
    normalize(ratings).map(|fractions| redistribute(&fractions))
}

/// share x daily distance, rounded to [`DISTANCE_DECIMALS`]
pub fn distances(shares: &ModeValues<f64>, distance_km: f64) -> ModeValues<f64> {
    shares.map(|share| round_to(share * distance_km, DISTANCE_DECIMALS))
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// resolves every rating row into km per canonical mode. a row of zeros
/// resolves to zero km in every mode and is reported in `zero_rows`; it
/// does not affect the other cells.
pub fn resolve(ratings: &RatingTable, personas: &[Persona]) -> Result<ModalDistances, ValidationError> {
    if personas.len() != ratings.n_personas() {
        return Err(ValidationError::ShapeMismatch {
            left_personas: ratings.n_personas(),
            left_scenarios: ratings.n_scenarios(),
            right_personas: personas.len(),
            right_scenarios: ratings.n_scenarios(),
        });
    }
    let mut zero_rows = vec![];
    let table = ratings.map(|key, row| match canonical_shares(row) {
        Some(shares) => distances(&shares, personas[key.persona.0].distance_km),
        None => {
            zero_rows.push(*key);
            ModeValues::default()
        }
    });
    Ok(ModalDistances { table, zero_rows })
}

#[cfg(test)]
mod test {
    use super::*;
    use umia_core::model::{
        entity::{PersonaId, ScenarioId},
        mode::{CanonicalMode, RawMode},
        rating::Rating,
        table::{CellKey, CellTable},
        validation::Percent,
    };

    fn persona(distance_km: f64) -> Persona {
        Persona {
            id: PersonaId(0),
            name: String::from("test"),
            description: String::new(),
            image: None,
            distance_km,
            body_mass_kg: 70.0,
            weight: Percent::FULL,
        }
    }

    fn ratings(values: [i64; 13]) -> ModeRatings {
        RawModeValues::from_array(values.map(|v| Rating::try_from(v).expect("test invariant failed")))
    }

    #[test]
    fn test_shares_sum_to_one() {
        let rows = [
            [2, 3, 0, 0, 0, 3, 1, 3, 1, 1, 0, 3, 0],
            [3, 0, 4, 4, 3, 1, 4, 4, 4, 1, 0, 0, 4],
            [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4],
        ];
        for row in rows {
            let shares = canonical_shares(&ratings(row)).expect("test invariant failed");
            assert!((shares.total() - 1.0).abs() < 1e-9, "shares of {row:?} sum to {}", shares.total());
            assert!(shares.iter().all(|(_, s)| s >= 0.0));
        }
    }

    #[test]
    fn test_combined_split() {
        // only PT-Walk rated: 80% PT, 20% walk
        let shares = canonical_shares(&ratings([0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0]))
            .expect("test invariant failed");
        assert!((shares[CanonicalMode::Pt] - 0.8).abs() < 1e-12);
        assert!((shares[CanonicalMode::Walk] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_mm_walk_keeps_its_mm_share() {
        // MM-Walk follows the same 80/20 rule as every combined option, so
        // no distance is lost: 80% MM, 20% walk
        let shares = canonical_shares(&ratings([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2]))
            .expect("test invariant failed");
        assert!((shares[CanonicalMode::Mm] - 0.8).abs() < 1e-12);
        assert!((shares[CanonicalMode::Walk] - 0.2).abs() < 1e-12);
        let km = distances(&shares, 10.0);
        assert_eq!(km[CanonicalMode::Mm], 8.0);
        assert_eq!(km[CanonicalMode::Walk], 2.0);
        assert_eq!(km.iter().map(|(_, v)| v).sum::<f64>(), 10.0);
    }

    #[test]
    fn test_zero_row_has_no_share() {
        assert!(normalize(&ModeRatings::default()).is_none());
    }

    #[test]
    fn test_distances_mod_car() {
        let mut row = ModeRatings::default();
        row[RawMode::Mod] = Rating::RatherLikely;
        row[RawMode::Car] = Rating::Likely;
        let shares = canonical_shares(&row).expect("test invariant failed");
        let km = distances(&shares, 60.0);
        assert_eq!(km[CanonicalMode::Mod], 24.0);
        assert_eq!(km[CanonicalMode::Car], 36.0);
        assert_eq!(km[CanonicalMode::Walk], 0.0);
    }

    #[test]
    fn test_resolve_idempotent_with_zero_row() {
        let table = CellTable::from_fn(2, 2, |key| {
            if key == CellKey::new(PersonaId(1), ScenarioId(0)) {
                ModeRatings::default()
            } else {
                ratings([1, 2, 0, 0, 0, 0, 0, 3, 0, 0, 0, 1, 0])
            }
        });
        let personas = vec![persona(12.0), persona(7.0)];
        let first = resolve(&table, &personas).expect("test invariant failed");
        let second = resolve(&table, &personas).expect("test invariant failed");
        assert_eq!(first, second);
        assert_eq!(first.zero_rows, vec![CellKey::new(PersonaId(1), ScenarioId(0))]);
        let zero = first
            .table
            .get(&CellKey::new(PersonaId(1), ScenarioId(0)))
            .expect("test invariant failed");
        assert_eq!(zero.total(), 0.0);
        let other = first
            .table
            .get(&CellKey::new(PersonaId(1), ScenarioId(1)))
            .expect("test invariant failed");
        assert!(other.total() > 0.0);
    }

    #[test]
    fn test_resolve_persona_count_mismatch() {
        let table = CellTable::from_fn(2, 2, |_| ModeRatings::default());
        assert!(resolve(&table, &[persona(1.0)]).is_err());
    }
}
