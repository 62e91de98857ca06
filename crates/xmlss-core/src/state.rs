//! Generator state machine
//!
//! The document generator moves through a fixed directed graph of states.
//! Every public operation first asks for a transition; an edge that is not
//! in the graph is rejected with [`Error::InvalidTransition`].
//!
//! ```text
//! Initialization ──► CleanDocument ──► Done
//!                      ▲       │
//!                      │       ▼
//!         WritingSheetRows ◄── WritingSheet ◄──► WritingColumns
//!            ▲     │
//!            │     ▼
//!          WritingRow ◄──► WritingCell
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// A node in the generator's transition graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorState {
    /// Styles may still be created; nothing has been written
    Initialization,
    /// Document header and styles written, between sheets
    CleanDocument,
    /// Inside a `<Column>` section
    WritingColumns,
    /// Worksheet opened, before any row
    WritingSheet,
    /// Between rows of a worksheet
    WritingSheetRows,
    /// Inside an open `<Row>`
    WritingRow,
    /// Writing a single cell
    WritingCell,
    /// Document closed (terminal)
    Done,
}

impl GeneratorState {
    /// All states, in declaration order
    pub const ALL: [GeneratorState; 8] = [
        GeneratorState::Initialization,
        GeneratorState::CleanDocument,
        GeneratorState::WritingColumns,
        GeneratorState::WritingSheet,
        GeneratorState::WritingSheetRows,
        GeneratorState::WritingRow,
        GeneratorState::WritingCell,
        GeneratorState::Done,
    ];

    /// States reachable from this one in a single transition
    pub fn next_states(self) -> &'static [GeneratorState] {
        use GeneratorState::*;
        match self {
            Initialization => &[CleanDocument],
            CleanDocument => &[WritingSheet, Done],
            WritingSheet => &[WritingColumns, WritingSheetRows],
            WritingColumns => &[WritingSheet],
            WritingSheetRows => &[WritingRow, CleanDocument],
            WritingRow => &[WritingSheetRows, WritingCell],
            WritingCell => &[WritingRow],
            Done => &[],
        }
    }

    /// Check whether `to` is a legal next state
    pub fn can_transition_to(self, to: GeneratorState) -> bool {
        self.next_states().contains(&to)
    }

    /// Validate a transition, returning the new state
    ///
    /// The receiver is left untouched on failure; callers assign the
    /// returned state only when the edge exists.
    pub fn transition(self, to: GeneratorState) -> Result<GeneratorState> {
        if self.can_transition_to(to) {
            log::trace!("state {} -> {}", self, to);
            Ok(to)
        } else {
            Err(self.invalid(to))
        }
    }

    /// Require that the machine currently sits in `expected`
    ///
    /// Used by operations that do not move the machine but are only legal in
    /// one state (style creation).
    pub fn require(self, expected: GeneratorState) -> Result<()> {
        if self == expected {
            Ok(())
        } else {
            Err(self.invalid(expected))
        }
    }

    /// Check if this is the terminal state
    pub fn is_terminal(self) -> bool {
        self.next_states().is_empty()
    }

    /// Get the state name
    pub fn as_str(self) -> &'static str {
        match self {
            GeneratorState::Initialization => "Initialization",
            GeneratorState::CleanDocument => "CleanDocument",
            GeneratorState::WritingColumns => "WritingColumns",
            GeneratorState::WritingSheet => "WritingSheet",
            GeneratorState::WritingSheetRows => "WritingSheetRows",
            GeneratorState::WritingRow => "WritingRow",
            GeneratorState::WritingCell => "WritingCell",
            GeneratorState::Done => "Done",
        }
    }

    fn invalid(self, to: GeneratorState) -> Error {
        Error::InvalidTransition {
            from: self,
            to,
            allowed: self.next_states().to_vec(),
        }
    }
}

impl fmt::Display for GeneratorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use GeneratorState::*;

    const EDGES: [(GeneratorState, GeneratorState); 11] = [
        (Initialization, CleanDocument),
        (CleanDocument, WritingSheet),
        (CleanDocument, Done),
        (WritingSheet, WritingColumns),
        (WritingSheet, WritingSheetRows),
        (WritingColumns, WritingSheet),
        (WritingSheetRows, WritingRow),
        (WritingSheetRows, CleanDocument),
        (WritingRow, WritingSheetRows),
        (WritingRow, WritingCell),
        (WritingCell, WritingRow),
    ];

    #[test]
    fn test_every_edge_succeeds() {
        for (from, to) in EDGES {
            assert_eq!(from.transition(to).unwrap(), to, "{from} -> {to}");
        }
    }

    #[test]
    fn test_every_non_edge_fails() {
        for from in GeneratorState::ALL {
            for to in GeneratorState::ALL {
                if EDGES.contains(&(from, to)) {
                    continue;
                }
                let err = from.transition(to).unwrap_err();
                match err {
                    Error::InvalidTransition {
                        from: f,
                        to: t,
                        allowed,
                    } => {
                        assert_eq!(f, from);
                        assert_eq!(t, to);
                        assert_eq!(allowed, from.next_states());
                    }
                    other => panic!("unexpected error for {from} -> {to}: {other}"),
                }
            }
        }
    }

    #[test]
    fn test_done_is_terminal() {
        assert!(Done.is_terminal());
        assert!(GeneratorState::ALL
            .iter()
            .filter(|s| **s != Done)
            .all(|s| !s.is_terminal()));
    }

    #[test]
    fn test_require() {
        assert!(Initialization.require(Initialization).is_ok());
        let err = CleanDocument.require(Initialization).unwrap_err();
        assert!(err.to_string().contains("from CleanDocument to Initialization"));
        assert!(err.to_string().contains("WritingSheet, Done"));
    }
}
