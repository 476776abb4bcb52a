//! Feature Encoder - Raw Form Answers To Feature Vector
//!
//! Pure function of its input and the fixed mapping table:
//! {"YES":1, "NO":0, "MALE":1, "FEMALE":0}, age passes through unchanged.
//!
//! The encoder reindexes to the schema the adapter reports, never to an
//! assumed order. The shell constrains inputs with its widgets; the domain
//! checks here are the last-resort defense, not the primary validation.

use serde::{Deserialize, Serialize};

use super::layout::{field_kind, FieldKind, FEATURE_COUNT};
use super::schema::FeatureSchema;
use super::vector::FeatureVector;
use crate::constants::{AGE_MAX, AGE_MIN};
use crate::error::{ScreenError, ScreenResult};

// ============================================================================
// RAW ANSWERS
// ============================================================================

/// One form field's raw value, discarded after encoding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAnswer {
    pub field: String,
    pub value: RawValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    /// Integer slider value (age)
    Age(i64),
    /// Two-valued select: YES/NO or MALE/FEMALE
    Choice(String),
}

impl RawAnswer {
    pub fn age(field: impl Into<String>, value: i64) -> Self {
        Self {
            field: field.into(),
            value: RawValue::Age(value),
        }
    }

    pub fn choice(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: RawValue::Choice(value.into()),
        }
    }
}

// ============================================================================
// ENCODING
// ============================================================================

/// Encode raw answers into the schema's exact order
///
/// Requires exactly one answer per schema field; missing, duplicate and
/// unknown fields are `InvalidInput` naming the offender.
pub fn encode(answers: &[RawAnswer], schema: &FeatureSchema) -> ScreenResult<FeatureVector> {
    if schema.len() != FEATURE_COUNT {
        return Err(ScreenError::ModelUnavailable(format!(
            "Classifier schema has {} columns, expected {}",
            schema.len(),
            FEATURE_COUNT
        )));
    }

    for answer in answers {
        if !schema.names().iter().any(|n| n == &answer.field) {
            return Err(ScreenError::invalid_input(
                &answer.field,
                "not part of the screening form",
            ));
        }
    }

    let mut values = [0.0f32; FEATURE_COUNT];

    for (index, name) in schema.names().iter().enumerate() {
        let mut matches = answers.iter().filter(|a| &a.field == name);

        let answer = matches
            .next()
            .ok_or_else(|| ScreenError::invalid_input(name, "missing answer"))?;

        if matches.next().is_some() {
            return Err(ScreenError::invalid_input(name, "answered more than once"));
        }

        values[index] = encode_value(name, &answer.value)?;
    }

    Ok(FeatureVector::stamped(
        values,
        schema.version(),
        schema.hash(),
    ))
}

/// Encode a single value according to its field kind
fn encode_value(field: &str, value: &RawValue) -> ScreenResult<f32> {
    match (field_kind(field), value) {
        (FieldKind::Age, RawValue::Age(age)) => {
            if !(AGE_MIN..=AGE_MAX).contains(age) {
                return Err(ScreenError::invalid_input(
                    field,
                    format!("age {} outside [{}, {}]", age, AGE_MIN, AGE_MAX),
                ));
            }
            Ok(*age as f32)
        }
        (FieldKind::Age, RawValue::Choice(_)) => {
            Err(ScreenError::invalid_input(field, "expected an integer age"))
        }
        (FieldKind::Sex, RawValue::Choice(choice)) => match choice.as_str() {
            "MALE" => Ok(1.0),
            "FEMALE" => Ok(0.0),
            other => Err(ScreenError::invalid_input(
                field,
                format!("'{}' is not one of MALE/FEMALE", other),
            )),
        },
        (FieldKind::YesNo, RawValue::Choice(choice)) => match choice.as_str() {
            "YES" => Ok(1.0),
            "NO" => Ok(0.0),
            other => Err(ScreenError::invalid_input(
                field,
                format!("'{}' is not one of YES/NO", other),
            )),
        },
        (_, RawValue::Age(_)) => {
            Err(ScreenError::invalid_input(field, "expected a choice value"))
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::layout::FEATURE_LAYOUT;

    fn all_no(age: i64) -> Vec<RawAnswer> {
        FEATURE_LAYOUT
            .iter()
            .map(|&name| match field_kind(name) {
                FieldKind::Age => RawAnswer::age(name, age),
                FieldKind::Sex => RawAnswer::choice(name, "FEMALE"),
                FieldKind::YesNo => RawAnswer::choice(name, "NO"),
            })
            .collect()
    }

    #[test]
    fn test_encode_all_no() {
        let vector = encode(&all_no(25), &FeatureSchema::canonical()).unwrap();
        assert_eq!(vector.get_by_name("AGE"), Some(25.0));
        for name in &FEATURE_LAYOUT[1..] {
            assert_eq!(vector.get_by_name(name), Some(0.0));
        }
    }

    #[test]
    fn test_encode_reindexes_to_schema_order() {
        let mut names: Vec<&str> = FEATURE_LAYOUT.to_vec();
        names.reverse();
        let schema = FeatureSchema::from_names(&names);

        let vector = encode(&all_no(42), &schema).unwrap();

        // AGE is the last schema column now, and the stamp is the schema's
        assert_eq!(vector.values[FEATURE_COUNT - 1], 42.0);
        assert_eq!(vector.layout_hash, schema.hash());
        assert!(schema.validate_vector(&vector).is_ok());
    }

    #[test]
    fn test_encode_rejects_out_of_range_age() {
        for bad in [0, 101, -7] {
            let err = encode(&all_no(bad), &FeatureSchema::canonical()).unwrap_err();
            match err {
                ScreenError::InvalidInput { field, .. } => assert_eq!(field, "AGE"),
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_encode_rejects_bad_choice() {
        let mut answers = all_no(30);
        answers[2] = RawAnswer::choice("SMOKING", "MAYBE");

        let err = encode(&answers, &FeatureSchema::canonical()).unwrap_err();
        match err {
            ScreenError::InvalidInput { field, reason } => {
                assert_eq!(field, "SMOKING");
                assert!(reason.contains("MAYBE"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_rejects_sex_value_on_symptom_field() {
        let mut answers = all_no(30);
        answers[4] = RawAnswer::choice("ANXIETY", "MALE");
        let err = encode(&answers, &FeatureSchema::canonical()).unwrap_err();
        assert!(matches!(err, ScreenError::InvalidInput { .. }));
    }

    #[test]
    fn test_encode_rejects_missing_field() {
        let mut answers = all_no(30);
        answers.pop();

        let err = encode(&answers, &FeatureSchema::canonical()).unwrap_err();
        match err {
            ScreenError::InvalidInput { field, reason } => {
                assert_eq!(field, "CHEST_PAIN");
                assert!(reason.contains("missing"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_rejects_duplicate_field() {
        let mut answers = all_no(30);
        answers.push(RawAnswer::choice("SMOKING", "YES"));

        let err = encode(&answers, &FeatureSchema::canonical()).unwrap_err();
        assert!(matches!(err, ScreenError::InvalidInput { .. }));
    }

    #[test]
    fn test_encode_rejects_unknown_field() {
        let mut answers = all_no(30);
        answers.push(RawAnswer::choice("SNORING", "YES"));

        let err = encode(&answers, &FeatureSchema::canonical()).unwrap_err();
        match err {
            ScreenError::InvalidInput { field, .. } => assert_eq!(field, "SNORING"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
