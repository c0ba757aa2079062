mod clause;
mod document;
mod error;
mod expr;
mod slot;
mod variant;

pub use clause::{ClaimPolicy, Clause, ClauseKind, UpdateGuard};
pub use document::{Allow, CollectionMatch, Condition, Operation, RulesDocument};
pub use error::DefinitionError;
pub use expr::{CompareOp, Expr, Operand, PathExpr, has_only, path};
pub use slot::{SLOT_COUNT, Slot};
pub use variant::Variant;
