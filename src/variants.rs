use crate::clauses::{AUTH_UID, INCOMING, update_guard};
use crate::types::{
    ClaimPolicy, CollectionMatch, Condition, Expr, Operand, Operation, RulesDocument, Variant,
    has_only, path,
};

pub(crate) fn document(variant: Variant) -> RulesDocument {
    match variant {
        Variant::CreatorBound => creator_bound(),
        Variant::Skeleton => skeleton(),
        Variant::Positional => positional(),
    }
}

fn authenticated() -> Expr {
    path("request.auth").neq(Operand::Null)
}

fn created_by_caller() -> Expr {
    path(INCOMING).child("createdBy").eq(path(AUTH_UID))
}

fn scores() -> CollectionMatch {
    CollectionMatch::new("scores", "score").allow(&[Operation::Read], Condition::Always)
}

fn creator_bound() -> RulesDocument {
    let create = authenticated()
        .and(created_by_caller())
        .and(has_only(INCOMING, ["createdBy"]))
        .group();
    RulesDocument::firestore().collection(
        CollectionMatch::new("rides", "ride")
            .note("add rules later")
            .allow(&[Operation::Read, Operation::Create], Condition::Expr(create))
            .allow(
                &[Operation::Update],
                Condition::Guard(update_guard(ClaimPolicy::OwnerOnly)),
            ),
    )
}

fn skeleton() -> RulesDocument {
    RulesDocument::firestore().collection(scores()).collection(
        CollectionMatch::new("rides", "ride")
            .allow(&[Operation::Read, Operation::Update], Condition::Always)
            .allow(&[Operation::Create], Condition::Expr(authenticated())),
    )
}

fn positional() -> RulesDocument {
    let create = authenticated().and(created_by_caller()).group();
    RulesDocument::firestore().collection(scores()).collection(
        CollectionMatch::new("rides", "ride")
            .allow(&[Operation::Read], Condition::Expr(authenticated()))
            .allow(&[Operation::Create], Condition::Expr(create))
            .allow(
                &[Operation::Update],
                Condition::Guard(update_guard(ClaimPolicy::WithPosition)),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection_names(doc: &RulesDocument) -> Vec<&str> {
        doc.collections.iter().map(|c| c.collection.as_str()).collect()
    }

    #[test]
    fn creator_bound_has_rides_only() {
        let doc = document(Variant::CreatorBound);
        assert_eq!(collection_names(&doc), vec!["rides"]);
        assert_eq!(doc.clause_count(), 24);
    }

    #[test]
    fn skeleton_has_no_guard() {
        let doc = document(Variant::Skeleton);
        assert_eq!(collection_names(&doc), vec!["scores", "rides"]);
        assert_eq!(doc.guards().count(), 0);
    }

    #[test]
    fn positional_has_scores_and_guard() {
        let doc = document(Variant::Positional);
        assert_eq!(collection_names(&doc), vec!["scores", "rides"]);
        assert_eq!(doc.guards().count(), 1);
        assert_eq!(doc.clause_count(), 24);
    }

    #[test]
    fn creator_bound_create_restricts_fields() {
        let doc = document(Variant::CreatorBound);
        let allow = &doc.collections[0].allows[0];
        match &allow.condition {
            Condition::Expr(e) => assert_eq!(
                e.to_string(),
                "(request.auth != null && \
                 request.resource.data.createdBy == request.auth.uid && \
                 request.resource.data.keys().hasOnly([\"createdBy\"]))"
            ),
            other => panic!("expected Expr, got {other:?}"),
        }
    }
}
