mod clauses;
mod error;
mod render;
mod types;
mod variants;

pub use clauses::{claim, set_name, set_score, update_guard};
pub use error::RulesError;
pub use types::{
    Allow, ClaimPolicy, Clause, ClauseKind, CollectionMatch, CompareOp, Condition,
    DefinitionError, Expr, Operand, Operation, PathExpr, RulesDocument, SLOT_COUNT, Slot,
    UpdateGuard, Variant, has_only, path,
};

/// Render `variant` and write it to `out`.
///
/// # Errors
///
/// Returns [`RulesError::Io`] if writing fails.
pub fn emit(variant: Variant, out: &mut impl std::io::Write) -> Result<(), RulesError> {
    tracing::info!(%variant, "emitting rules");
    variant.document().write_to(out)?;
    Ok(())
}
