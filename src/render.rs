use std::fmt::{self, Write as _};
use std::io;

use tracing::info;

use crate::types::{Allow, CollectionMatch, Condition, RulesDocument, UpdateGuard};

const INDENT: &str = "  ";

fn pad(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

fn write_operations(f: &mut fmt::Formatter<'_>, allow: &Allow) -> fmt::Result {
    for (i, op) in allow.operations.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{op}")?;
    }
    Ok(())
}

fn write_allow(f: &mut fmt::Formatter<'_>, allow: &Allow, depth: usize) -> fmt::Result {
    pad(f, depth)?;
    f.write_str("allow ")?;
    write_operations(f, allow)?;
    match &allow.condition {
        Condition::Always => writeln!(f, ": if true;"),
        Condition::Expr(expr) => writeln!(f, ": if {expr};"),
        Condition::Guard(guard) if guard.clauses.is_empty() => {
            writeln!(f, ": if {};", guard.requires)
        }
        Condition::Guard(guard) => {
            writeln!(f, ": if (")?;
            write_guard(f, guard, depth + 1)?;
            pad(f, depth + 1)?;
            writeln!(f, ");")
        }
    }
}

fn write_guard(f: &mut fmt::Formatter<'_>, guard: &UpdateGuard, depth: usize) -> fmt::Result {
    pad(f, depth)?;
    writeln!(f, "// begin generated rules")?;
    pad(f, depth)?;
    writeln!(f, "{} &&", guard.requires)?;
    pad(f, depth + 1)?;
    writeln!(f, "(")?;
    let last = guard.clauses.len().saturating_sub(1);
    for (i, clause) in guard.clauses.iter().enumerate() {
        pad(f, depth + 1)?;
        writeln!(f, "// {}", clause.comment())?;
        pad(f, depth + 1)?;
        write!(f, "({})", clause.condition)?;
        if i < last {
            f.write_str(" ||")?;
        }
        f.write_char('\n')?;
    }
    pad(f, depth + 1)?;
    writeln!(f, ")")
}

fn write_collection(
    f: &mut fmt::Formatter<'_>,
    collection: &CollectionMatch,
    depth: usize,
) -> fmt::Result {
    pad(f, depth)?;
    writeln!(
        f,
        "match /{}/{{{}}} {{",
        collection.collection, collection.wildcard
    )?;
    if let Some(note) = &collection.note {
        pad(f, depth + 1)?;
        writeln!(f, "// {note}")?;
    }
    for allow in &collection.allows {
        write_allow(f, allow, depth + 1)?;
    }
    pad(f, depth)?;
    writeln!(f, "}}")
}

impl fmt::Display for RulesDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rules_version = '{}';", self.rules_version)?;
        writeln!(f, "service {} {{", self.service)?;
        pad(f, 1)?;
        writeln!(f, "match /databases/{{database}}/documents {{")?;
        for collection in &self.collections {
            write_collection(f, collection, 2)?;
        }
        pad(f, 1)?;
        writeln!(f, "}}")?;
        writeln!(f, "}}")
    }
}

impl RulesDocument {
    /// Render and write the whole document.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `out`.
    pub fn write_to(&self, out: &mut impl io::Write) -> io::Result<()> {
        let text = self.to_string();
        info!(
            collections = self.collections.len(),
            clauses = self.clause_count(),
            bytes = text.len(),
            "rendered rules document"
        );
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Operation, path};

    #[test]
    fn empty_document() {
        let doc = RulesDocument::firestore();
        assert_eq!(
            doc.to_string(),
            "rules_version = '2';\n\
             service cloud.firestore {\n  \
               match /databases/{database}/documents {\n  \
               }\n\
             }\n"
        );
    }

    #[test]
    fn collection_with_note_and_allows() {
        let doc = RulesDocument::firestore().collection(
            CollectionMatch::new("scores", "score")
                .note("open")
                .allow(&[Operation::Read, Operation::Create], Condition::Always)
                .allow(
                    &[Operation::Update],
                    Condition::Expr(path("request.auth").neq(crate::types::Operand::Null)),
                ),
        );
        let text = doc.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[3], "    match /scores/{score} {");
        assert_eq!(lines[4], "      // open");
        assert_eq!(lines[5], "      allow read, create: if true;");
        assert_eq!(lines[6], "      allow update: if request.auth != null;");
        assert_eq!(lines[7], "    }");
    }

    #[test]
    fn empty_guard_renders_requirement_only() {
        let doc = RulesDocument::firestore().collection(
            CollectionMatch::new("rides", "ride")
                .allow(&[Operation::Update], Condition::Guard(UpdateGuard::authenticated(vec![]))),
        );
        assert!(doc
            .to_string()
            .contains("      allow update: if request.auth != null;\n"));
    }

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_propagates() {
        let err = RulesDocument::firestore().write_to(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn emit_surfaces_write_failure_as_io() {
        for variant in crate::Variant::ALL {
            match crate::emit(variant, &mut ClosedPipe) {
                Err(crate::RulesError::Io(e)) => {
                    assert_eq!(e.kind(), io::ErrorKind::BrokenPipe);
                }
                other => panic!("{variant}: expected Io error, got {other:?}"),
            }
        }
    }

    #[test]
    fn write_to_matches_display() {
        let doc = RulesDocument::firestore();
        let mut out = Vec::new();
        doc.write_to(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), doc.to_string());
    }
}
