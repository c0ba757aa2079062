use std::fmt;
use std::str::FromStr;

use super::document::RulesDocument;
use super::error::DefinitionError;

/// The selectable rule policies.
///
/// The variants encode different, mutually inconsistent access policies and
/// are kept side by side rather than merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Rides only. Creation must set exactly `createdBy` to the caller;
    /// claims may touch only the owner field.
    #[default]
    CreatorBound,
    /// Static skeleton with open read/update on rides and no generated clauses.
    Skeleton,
    /// Rides plus scores. Claims also record the slot position.
    Positional,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::CreatorBound, Variant::Skeleton, Variant::Positional];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Variant::CreatorBound => "creator-bound",
            Variant::Skeleton => "skeleton",
            Variant::Positional => "positional",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Variant::CreatorBound => {
                "rides only; creator-bound create; claims touch the owner field only"
            }
            Variant::Skeleton => "static skeleton; open read/update on rides; no generated clauses",
            Variant::Positional => {
                "rides and scores; authenticated read; claims also set the slot position"
            }
        }
    }

    /// Build the rules document for this variant.
    #[must_use]
    pub fn document(self) -> RulesDocument {
        crate::variants::document(self)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| DefinitionError::UnknownVariant {
                name: s.to_owned(),
                expected: Self::ALL.iter().map(|v| v.name().to_owned()).collect(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for v in Variant::ALL {
            assert_eq!(v.to_string().parse::<Variant>(), Ok(v));
        }
    }

    #[test]
    fn default_is_creator_bound() {
        assert_eq!(Variant::default(), Variant::CreatorBound);
    }

    #[test]
    fn unknown_name_lists_expected() {
        let err = "current".parse::<Variant>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown variant 'current'; expected one of: creator-bound, skeleton, positional"
        );
    }
}
