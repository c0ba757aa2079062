use tracing::debug;

use crate::types::{
    ClaimPolicy, Clause, ClauseKind, Expr, PathExpr, Slot, UpdateGuard, has_only, path,
};

/// Path of the document as it would look after the write.
pub(crate) const INCOMING: &str = "request.resource.data";
/// Path of the document as currently stored.
pub(crate) const EXISTING: &str = "resource.data";
pub(crate) const AUTH_UID: &str = "request.auth.uid";

fn incoming(field: &str) -> PathExpr {
    path(INCOMING).child(field)
}

fn existing(field: &str) -> PathExpr {
    path(EXISTING).child(field)
}

fn uid() -> PathExpr {
    path(AUTH_UID)
}

/// The requester becomes the owner of `slot`, touches only the fields the
/// policy allows, and does not already own any other slot.
#[must_use]
pub fn claim(slot: Slot, policy: ClaimPolicy) -> Clause {
    let owner = slot.owner_field();
    let mut condition = Expr::All(vec![incoming(&owner).eq(uid())]);
    condition = match policy {
        ClaimPolicy::OwnerOnly => condition.and(has_only(INCOMING, [owner])),
        ClaimPolicy::WithPosition => {
            let position = slot.position_field();
            condition
                .and(incoming(&position).eq(i64::from(slot.index())))
                .and(has_only(INCOMING, [owner, position]))
        }
    };
    for peer in slot.peers() {
        condition = condition.and(existing(&peer.owner_field()).neq(uid()));
    }
    Clause {
        kind: ClauseKind::Claim,
        slot,
        condition,
    }
}

/// The current owner of `slot` changes only its name field.
#[must_use]
pub fn set_name(slot: Slot) -> Clause {
    owner_writes(slot, ClauseKind::SetName, slot.name_field())
}

/// The current owner of `slot` changes only its score field.
#[must_use]
pub fn set_score(slot: Slot) -> Clause {
    owner_writes(slot, ClauseKind::SetScore, slot.score_field())
}

fn owner_writes(slot: Slot, kind: ClauseKind, field: String) -> Clause {
    let condition = existing(&slot.owner_field())
        .eq(uid())
        .and(has_only(INCOMING, [field]));
    Clause {
        kind,
        slot,
        condition,
    }
}

/// All claim clauses, then all set-name clauses, then all set-score clauses,
/// each group in ascending slot order.
#[must_use]
pub fn update_guard(policy: ClaimPolicy) -> UpdateGuard {
    let mut clauses = Vec::with_capacity(3 * Slot::all().count());
    clauses.extend(Slot::all().map(|s| claim(s, policy)));
    debug!(?policy, count = clauses.len(), "generated claim clauses");
    clauses.extend(Slot::all().map(set_name));
    clauses.extend(Slot::all().map(set_score));
    debug!(total = clauses.len(), "generated owner clauses");
    UpdateGuard::authenticated(clauses)
}
