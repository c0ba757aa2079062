use std::fmt;

/// Right- or left-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A dotted document path such as `request.auth.uid`.
    Path(String),
    /// The `null` literal.
    Null,
    /// An integer literal.
    Int(i64),
}

/// Comparison operators used by the generated rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Neq,
}

/// Rule-language expression AST.
///
/// `All` and `Any` are flat n-ary conjunctions and disjunctions so that long
/// chains render without nested parentheses. Use [`Expr::Group`] where the
/// output needs explicit parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Compare {
        lhs: Operand,
        op: CompareOp,
        rhs: Operand,
    },
    /// `<target>.keys().hasOnly([..])`
    HasOnly { target: String, keys: Vec<String> },
    All(Vec<Expr>),
    Any(Vec<Expr>),
    Group(Box<Expr>),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Path(p) => write!(f, "{p}"),
            Operand::Null => write!(f, "null"),
            Operand::Int(i) => write!(f, "{i}"),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq => write!(f, "=="),
            CompareOp::Neq => write!(f, "!="),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Compare { lhs, op, rhs } => write!(f, "{lhs} {op} {rhs}"),
            Expr::HasOnly { target, keys } => {
                write!(f, "{target}.keys().hasOnly([")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{key}\"")?;
                }
                write!(f, "])")
            }
            Expr::All(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " && ")?;
                    }
                    // `||` binds looser than `&&`.
                    match item {
                        Expr::Any(_) => write!(f, "({item})")?,
                        _ => write!(f, "{item}")?,
                    }
                }
                Ok(())
            }
            Expr::Any(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " || ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Expr::Group(inner) => write!(f, "({inner})"),
        }
    }
}

impl Expr {
    /// Conjoin `other`, extending `self` in place when it is already an `All`.
    #[must_use]
    pub fn and(self, other: Expr) -> Expr {
        match self {
            Expr::All(mut items) => {
                items.push(other);
                Expr::All(items)
            }
            first => Expr::All(vec![first, other]),
        }
    }

    /// Disjoin `other`, extending `self` in place when it is already an `Any`.
    #[must_use]
    pub fn or(self, other: Expr) -> Expr {
        match self {
            Expr::Any(mut items) => {
                items.push(other);
                Expr::Any(items)
            }
            first => Expr::Any(vec![first, other]),
        }
    }

    /// Wrap in explicit parentheses.
    #[must_use]
    pub fn group(self) -> Expr {
        Expr::Group(Box::new(self))
    }
}

impl From<PathExpr> for Operand {
    fn from(p: PathExpr) -> Self {
        Operand::Path(p.path)
    }
}

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Int(v)
    }
}

/// Intermediate builder for path comparisons.
/// Created by [`path()`]; requires a comparison method to produce an [`Expr`].
#[derive(Debug, Clone)]
pub struct PathExpr {
    path: String,
}

impl PathExpr {
    /// Append a `.segment` to the path.
    #[must_use]
    pub fn child(mut self, segment: &str) -> Self {
        self.path.push('.');
        self.path.push_str(segment);
        self
    }

    #[must_use]
    pub fn eq(self, rhs: impl Into<Operand>) -> Expr {
        Expr::Compare {
            lhs: Operand::Path(self.path),
            op: CompareOp::Eq,
            rhs: rhs.into(),
        }
    }

    #[must_use]
    pub fn neq(self, rhs: impl Into<Operand>) -> Expr {
        Expr::Compare {
            lhs: Operand::Path(self.path),
            op: CompareOp::Neq,
            rhs: rhs.into(),
        }
    }
}

#[must_use]
pub fn path(path: &str) -> PathExpr {
    PathExpr {
        path: path.to_owned(),
    }
}

#[must_use]
pub fn has_only<I, S>(target: &str, keys: I) -> Expr
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Expr::HasOnly {
        target: target.to_owned(),
        keys: keys.into_iter().map(Into::into).collect(),
    }
}
