use super::expr::{Expr, Operand, path};
use super::slot::Slot;

/// Which action a generated clause permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    /// The requester sets themselves as the slot owner.
    Claim,
    /// The slot owner changes the slot's name field.
    SetName,
    /// The slot owner changes the slot's score field.
    SetScore,
}

/// Fields a claim may write besides enforcing ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimPolicy {
    /// Only `player{n}` may change.
    OwnerOnly,
    /// `player{n}` and `player{n}Position` may change, and the position must
    /// equal the slot index.
    WithPosition,
}

/// One generated disjunct of the update guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub kind: ClauseKind,
    pub slot: Slot,
    pub condition: Expr,
}

impl Clause {
    /// The comment line emitted above the clause.
    #[must_use]
    pub fn comment(&self) -> String {
        match self.kind {
            ClauseKind::Claim => format!("allow this person to claim {}", self.slot),
            ClauseKind::SetName => {
                format!("this person is {} and is setting their name", self.slot)
            }
            ClauseKind::SetScore => {
                format!("this person is {} and is setting their score", self.slot)
            }
        }
    }
}

/// The generated `allow update` condition: an authentication requirement
/// conjoined with the disjunction of every clause.
///
/// Clauses are kept in emission order. A guard without clauses renders as a
/// plain `if <requires>;` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGuard {
    pub requires: Expr,
    pub clauses: Vec<Clause>,
}

impl UpdateGuard {
    /// Guard that requires `request.auth != null`.
    #[must_use]
    pub fn authenticated(clauses: Vec<Clause>) -> Self {
        Self {
            requires: path("request.auth").neq(Operand::Null),
            clauses,
        }
    }

    /// Collapse into a single expression: `requires && (c1 || c2 || ..)`.
    #[must_use]
    pub fn to_expr(&self) -> Expr {
        let any = self
            .clauses
            .iter()
            .map(|c| c.condition.clone().group())
            .reduce(Expr::or);
        match any {
            Some(any) => self.requires.clone().and(any),
            None => self.requires.clone(),
        }
    }

    /// Number of clauses of the given kind.
    #[must_use]
    pub fn count(&self, kind: ClauseKind) -> usize {
        self.clauses.iter().filter(|c| c.kind == kind).count()
    }
}
