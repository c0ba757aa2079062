use rides_rules::{
    ClaimPolicy, Clause, CollectionMatch, Condition, Operation, RulesDocument, Slot, UpdateGuard,
    claim, set_score,
};

fn main() {
    // Two-player table: only slots 1 and 2 get clauses.
    let slots: Vec<Slot> = [1, 2]
        .into_iter()
        .map(Slot::new)
        .collect::<Result<_, _>>()
        .expect("valid slot indices");

    let mut clauses: Vec<Clause> = slots
        .iter()
        .map(|s| claim(*s, ClaimPolicy::OwnerOnly))
        .collect();
    clauses.extend(slots.iter().copied().map(set_score));

    let doc = RulesDocument::firestore().collection(
        CollectionMatch::new("duels", "duel")
            .allow(&[Operation::Read], Condition::Always)
            .allow(
                &[Operation::Update],
                Condition::Guard(UpdateGuard::authenticated(clauses)),
            ),
    );

    print!("{doc}");
}
