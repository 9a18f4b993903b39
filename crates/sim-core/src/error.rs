use thiserror::Error;

/// Errors raised when resolving a density selection against the catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The identifier matches no catalog option and is not the custom
    /// sentinel. The mutators leave state unchanged when returning this.
    #[error("selection '{value}' matches no {kind} option")]
    UnknownSelection { kind: SubstanceKind, value: String },
}

/// Which of the two option catalogs a selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstanceKind {
    Liquid,
    Solid,
}

impl std::fmt::Display for SubstanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubstanceKind::Liquid => write!(f, "liquid"),
            SubstanceKind::Solid => write!(f, "solid"),
        }
    }
}
