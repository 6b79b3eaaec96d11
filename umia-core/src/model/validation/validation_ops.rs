use super::{Percent, ValidationError, MAX_ENTITY_COUNT, MIN_ENTITY_COUNT};
use itertools::Itertools;

/// confirms a scenario or persona count lies within the supported range
pub fn check_entity_count(entity: &str, count: usize) -> Result<(), ValidationError> {
    if (MIN_ENTITY_COUNT..=MAX_ENTITY_COUNT).contains(&count) {
        Ok(())
    } else {
        Err(ValidationError::CountOutOfRange {
            entity: entity.to_string(),
            count,
            min: MIN_ENTITY_COUNT,
            max: MAX_ENTITY_COUNT,
        })
    }
}

/// distances and body masses must be finite and non-negative
pub fn check_quantity(field: &str, name: &str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidQuantity {
            field: field.to_string(),
            name: name.to_string(),
            value,
        })
    }
}

/// a likelihood or weight of a named entity as a [`Percent`]
pub fn check_percent(field: &str, name: &str, value: i64) -> Result<Percent, ValidationError> {
    Percent::try_from(value).map_err(|e| ValidationError::InvalidValue {
        field: field.to_string(),
        name: name.to_string(),
        reason: e.to_string(),
    })
}

pub fn check_text(field: &str, name: &str, text: &str, max: usize) -> Result<(), ValidationError> {
    let length = text.chars().count();
    if length > max {
        Err(ValidationError::TextTooLong {
            field: field.to_string(),
            name: name.to_string(),
            length,
            max,
        })
    } else {
        Ok(())
    }
}

/// names are used to reference scenarios and personas from rating rows,
/// so they must be present and unique.
pub fn check_names<'a>(
    entity: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let names = names.into_iter().map(str::trim).collect_vec();
    if names.iter().any(|n| n.is_empty()) {
        return Err(ValidationError::EmptyName {
            entity: entity.to_string(),
        });
    }
    match names.iter().duplicates().next() {
        Some(name) => Err(ValidationError::DuplicateName {
            entity: entity.to_string(),
            name: name.to_string(),
        }),
        None => Ok(()),
    }
}

pub fn percent_sum(values: impl IntoIterator<Item = Percent>) -> u32 {
    values.into_iter().map(|p| p.value() as u32).sum()
}

/// the likelihood invariant. a violation is returned rather than raised so
/// the caller can decide how strictly to treat it.
pub fn check_likelihood_sum(
    values: impl IntoIterator<Item = Percent>,
) -> Option<ValidationError> {
    let sum = percent_sum(values);
    (sum != 100).then_some(ValidationError::LikelihoodSum { sum })
}

pub fn check_weight_sum(values: impl IntoIterator<Item = Percent>) -> Option<ValidationError> {
    let sum = percent_sum(values);
    (sum != 100).then_some(ValidationError::PersonaWeightSum { sum })
}
