use serde::{Deserialize, Serialize};

use crate::criteria::{Column, JoinKind};

/// A join definition: `<KIND> JOIN right.table ON left = right`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub kind: JoinKind,
    /// Column on the already-selected side.
    pub left: Column,
    /// Column on the joined table; its qualifier names the table to join.
    pub right: Column,
}

impl Join {
    pub fn new(kind: JoinKind, left: impl Into<Column>, right: impl Into<Column>) -> Self {
        Self {
            kind,
            left: left.into(),
            right: right.into(),
        }
    }
}
