use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("slot index {index} is out of range; expected 1..={max}")]
    InvalidSlot { index: u8, max: u8 },

    #[error("unknown variant '{name}'; expected one of: {}", expected.join(", "))]
    UnknownVariant { name: String, expected: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_slot_message() {
        let err = DefinitionError::InvalidSlot { index: 9, max: 8 };
        assert_eq!(
            err.to_string(),
            "slot index 9 is out of range; expected 1..=8"
        );
    }

    #[test]
    fn unknown_variant_message() {
        let err = DefinitionError::UnknownVariant {
            name: "latest".into(),
            expected: vec!["creator-bound".into(), "skeleton".into()],
        };
        assert_eq!(
            err.to_string(),
            "unknown variant 'latest'; expected one of: creator-bound, skeleton"
        );
    }
}
