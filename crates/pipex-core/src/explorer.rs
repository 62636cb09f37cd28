use crate::catalog::StageCatalog;
use crate::error::{ExplorerError, Result};
use crate::stage::Stage;

// ---------------------------------------------------------------------------
// ExplorerState
// ---------------------------------------------------------------------------

/// Transient selection state. At most one stage is expanded at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplorerState {
    expanded: Option<u32>,
}

// ---------------------------------------------------------------------------
// StageExplorer
// ---------------------------------------------------------------------------

/// Accordion over a stage catalog: all stages collapsed, except at most one.
///
/// `select` is the only mutation. It is a toggle: selecting the expanded
/// stage collapses it, selecting any other stage expands it and collapses
/// whatever was open before.
#[derive(Debug, Clone)]
pub struct StageExplorer {
    catalog: StageCatalog,
    state: ExplorerState,
}

impl StageExplorer {
    /// Catalog invariants (non-empty, unique ids) were already enforced by
    /// `StageCatalog::new`, so construction cannot fail.
    pub fn new(catalog: StageCatalog) -> Self {
        Self {
            catalog,
            state: ExplorerState::default(),
        }
    }

    pub fn catalog(&self) -> &StageCatalog {
        &self.catalog
    }

    /// Toggle the expansion of `id`.
    ///
    /// Returns the newly expanded stage, or `None` if the call collapsed it.
    /// An unknown id fails with `StageNotFound` and leaves the selection
    /// untouched.
    pub fn select(&mut self, id: u32) -> Result<Option<&Stage>> {
        if self.catalog.get(id).is_none() {
            return Err(ExplorerError::StageNotFound(id));
        }
        if self.state.expanded == Some(id) {
            self.state.expanded = None;
            return Ok(None);
        }
        self.state.expanded = Some(id);
        Ok(self.catalog.get(id))
    }

    /// The currently expanded stage, if any. Pure read.
    pub fn current_selection(&self) -> Option<&Stage> {
        self.state.expanded.and_then(|id| self.catalog.get(id))
    }

    pub fn is_expanded(&self, id: u32) -> bool {
        self.state.expanded == Some(id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::Stage;

    fn explorer() -> StageExplorer {
        let stages = vec![
            Stage::new(1, "Source", "s", "d", &[]),
            Stage::new(2, "Build", "s", "d", &[]),
            Stage::new(3, "Test", "s", "d", &[]),
        ];
        StageExplorer::new(StageCatalog::new(stages).unwrap())
    }

    #[test]
    fn starts_with_nothing_expanded() {
        let ex = explorer();
        assert!(ex.current_selection().is_none());
    }

    #[test]
    fn select_expands_stage() {
        let mut ex = explorer();
        let expanded = ex.select(2).unwrap();
        assert_eq!(expanded.unwrap().title, "Build");
        assert_eq!(ex.current_selection().unwrap().id, 2);
    }

    #[test]
    fn select_twice_collapses() {
        let mut ex = explorer();
        ex.select(2).unwrap();
        let second = ex.select(2).unwrap();
        assert!(second.is_none());
        assert!(ex.current_selection().is_none());
    }

    #[test]
    fn at_most_one_expanded() {
        let mut ex = explorer();
        ex.select(1).unwrap();
        ex.select(3).unwrap();
        assert_eq!(ex.current_selection().unwrap().id, 3);
        assert!(!ex.is_expanded(1));
        assert!(ex.is_expanded(3));
    }

    #[test]
    fn unknown_id_fails_without_mutating() {
        let mut ex = explorer();
        ex.select(2).unwrap();

        let err = ex.select(99).unwrap_err();
        assert!(matches!(err, ExplorerError::StageNotFound(99)));
        // Selection is exactly what it was before the failed call
        assert_eq!(ex.current_selection().unwrap().id, 2);
    }

    #[test]
    fn unknown_id_fails_when_nothing_expanded() {
        let mut ex = explorer();
        assert!(ex.select(99).is_err());
        assert!(ex.current_selection().is_none());
    }

    #[test]
    fn builtin_walkthrough() {
        // The example scenario: select, toggle off, then a bad id
        let mut ex = StageExplorer::new(StageCatalog::builtin());
        assert!(ex.current_selection().is_none());

        ex.select(2).unwrap();
        assert_eq!(ex.current_selection().unwrap().title, "Build");

        ex.select(2).unwrap();
        assert!(ex.current_selection().is_none());

        assert!(ex.select(99).is_err());
        assert!(ex.current_selection().is_none());
    }
}
