use thiserror::Error;

/// Error returned while emitting a rules document.
///
/// Rule definition problems surface earlier as
/// [`DefinitionError`](crate::DefinitionError) from [`Slot::new`](crate::Slot::new)
/// or `Variant::from_str`.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_is_transparent() {
        let err = RulesError::from(std::io::Error::other("stdout closed"));
        assert_eq!(err.to_string(), "stdout closed");
    }
}
