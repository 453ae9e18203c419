//! Algorithm catalogs and the tagged result shared by both simulators.
//!
//! Each simulator names its algorithms with a closed enum implementing
//! [`Algorithm`]. Running a simulator always yields a [`Simulation`]:
//! either a completed result, an explicit `NotImplemented` for algorithms
//! that are listed but not simulated, or the catalog when the identifier
//! was empty or unknown.

use serde::Serialize;

/// Width of the identifier column in help tables.
pub const CATALOG_CODE_WIDTH: usize = 10;

/// A named scheduling algorithm belonging to one simulator.
pub trait Algorithm: Copy + Sized + 'static {
    /// Every algorithm in display order.
    const ALL: &'static [Self];

    /// Short identifier typed by the user (e.g. "fcfs").
    fn code(self) -> &'static str;

    /// Descriptive name (e.g. "First-Come, First-Served").
    fn name(self) -> &'static str;

    /// Looks up an algorithm by identifier, ignoring case and surrounding
    /// whitespace. Empty or unknown identifiers yield `None`.
    fn parse(identifier: &str) -> Option<Self> {
        let identifier = identifier.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.code().eq_ignore_ascii_case(identifier))
    }

    /// Catalog of every algorithm, for help output.
    fn catalog() -> Vec<CatalogEntry> {
        Self::ALL
            .iter()
            .map(|a| CatalogEntry {
                code: a.code(),
                name: a.name(),
            })
            .collect()
    }
}

/// One row of an algorithm help table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Identifier.
    pub code: &'static str,
    /// Descriptive name.
    pub name: &'static str,
}

impl CatalogEntry {
    /// Renders the row as `"  <code padded to CATALOG_CODE_WIDTH><name>"`.
    pub fn render(&self) -> String {
        format!(
            "  {:<width$}{}",
            self.code,
            self.name,
            width = CATALOG_CODE_WIDTH
        )
    }
}

/// Outcome of asking a simulator to run an algorithm identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Simulation<A, T> {
    /// The algorithm ran.
    Completed {
        /// Algorithm that produced `output`.
        algorithm: A,
        /// Simulator output.
        output: T,
    },
    /// The algorithm is recognised but has no simulation.
    NotImplemented(A),
    /// The identifier was empty or unknown; no simulation was run.
    Unknown {
        /// Valid identifiers with descriptive names.
        catalog: Vec<CatalogEntry>,
    },
}

impl<A: Algorithm, T> Simulation<A, T> {
    /// Builds the `Unknown` variant for `A`'s catalog.
    pub fn unknown() -> Self {
        Self::Unknown {
            catalog: A::catalog(),
        }
    }

    /// Simulator output, if the algorithm ran.
    pub fn output(&self) -> Option<&T> {
        match self {
            Self::Completed { output, .. } => Some(output),
            _ => None,
        }
    }

    /// Whether the algorithm ran.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}
