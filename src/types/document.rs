use std::fmt;

use super::clause::UpdateGuard;
use super::expr::Expr;

/// Operations an `allow` statement can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Create,
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Read => write!(f, "read"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
        }
    }
}

/// Condition attached to an `allow` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `if true`
    Always,
    /// `if <expr>` on a single line.
    Expr(Expr),
    /// The multi-line generated update block.
    Guard(UpdateGuard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allow {
    pub operations: Vec<Operation>,
    pub condition: Condition,
}

impl Allow {
    #[must_use]
    pub fn new(operations: &[Operation], condition: Condition) -> Self {
        Self {
            operations: operations.to_vec(),
            condition,
        }
    }
}

/// A `match /<collection>/{<wildcard>}` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionMatch {
    pub collection: String,
    pub wildcard: String,
    /// Comment line emitted before the first `allow`.
    pub note: Option<String>,
    pub allows: Vec<Allow>,
}

impl CollectionMatch {
    #[must_use]
    pub fn new(collection: &str, wildcard: &str) -> Self {
        Self {
            collection: collection.to_owned(),
            wildcard: wildcard.to_owned(),
            note: None,
            allows: Vec::new(),
        }
    }

    #[must_use]
    pub fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_owned());
        self
    }

    #[must_use]
    pub fn allow(mut self, operations: &[Operation], condition: Condition) -> Self {
        self.allows.push(Allow::new(operations, condition));
        self
    }
}

/// A complete rules file: version, service and the collection matches under
/// `/databases/{database}/documents`, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesDocument {
    pub rules_version: String,
    pub service: String,
    pub collections: Vec<CollectionMatch>,
}

impl RulesDocument {
    /// An empty Firestore rules document (`rules_version = '2'`).
    #[must_use]
    pub fn firestore() -> Self {
        Self {
            rules_version: "2".to_owned(),
            service: "cloud.firestore".to_owned(),
            collections: Vec::new(),
        }
    }

    #[must_use]
    pub fn collection(mut self, collection: CollectionMatch) -> Self {
        self.collections.push(collection);
        self
    }

    /// The update guards in this document, in emission order.
    pub fn guards(&self) -> impl Iterator<Item = &UpdateGuard> {
        self.collections
            .iter()
            .flat_map(|c| c.allows.iter())
            .filter_map(|a| match &a.condition {
                Condition::Guard(g) => Some(g),
                _ => None,
            })
    }

    /// Total number of generated clauses across all guards.
    #[must_use]
    pub fn clause_count(&self) -> usize {
        self.guards().map(|g| g.clauses.len()).sum()
    }
}
