use crate::models::holding::Holding;
use crate::models::selection::SelectionSet;
use crate::storage::manager::SelectionStorage;
use crate::storage::traits::KeyValueStore;

/// Hook run after every selection mutation with the full new selection.
pub trait SelectionObserver: Send {
    fn on_mutate(&mut self, selection: &SelectionSet);
}

/// Observer that writes the whole selection to a key-value store.
/// Write failures are logged and swallowed; the in-memory selection stays
/// authoritative for the session.
pub struct PersistSelection {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl PersistSelection {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

impl SelectionObserver for PersistSelection {
    fn on_mutate(&mut self, selection: &SelectionSet) {
        if let Err(e) = SelectionStorage::save(self.store.as_ref(), &self.key, selection) {
            tracing::warn!(
                store = self.store.name(),
                key = %self.key,
                error = %e,
                "failed to persist selection"
            );
        }
    }
}

/// Owns the session's selection set. All mutations go through here so that
/// observers (persistence in particular) see every change.
pub struct SelectionManager {
    selection: SelectionSet,
    observers: Vec<Box<dyn SelectionObserver>>,
}

impl std::fmt::Debug for SelectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionManager")
            .field("selection", &self.selection)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SelectionManager {
    /// An empty selection with no observers.
    pub fn new() -> Self {
        Self {
            selection: SelectionSet::new(),
            observers: Vec::new(),
        }
    }

    /// Restore the selection persisted under `key` and keep persisting to
    /// the same store on every mutation.
    ///
    /// A missing key, unreadable store or malformed payload all start the
    /// session with an empty selection.
    pub fn initialize(store: Box<dyn KeyValueStore>, key: &str) -> Self {
        let selection = SelectionStorage::load_or_empty(store.as_ref(), key);
        let mut manager = Self {
            selection,
            observers: Vec::new(),
        };
        manager.add_observer(Box::new(PersistSelection::new(store, key)));
        manager
    }

    pub fn add_observer(&mut self, observer: Box<dyn SelectionObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Include or exclude one id. Ids not in the portfolio are accepted;
    /// they never match a holding. An empty id is ignored.
    pub fn toggle(&mut self, id: &str, included: bool) {
        if id.is_empty() {
            tracing::debug!("ignoring toggle of empty holding id");
            return;
        }
        if included {
            self.selection.insert(id);
        } else {
            self.selection.remove(id);
        }
        tracing::debug!(id, included, count = self.selection.len(), "selection toggled");
        self.notify();
    }

    /// `true` replaces the selection with every id in `holdings`
    /// (the whole portfolio, not just visible rows); `false` clears it.
    pub fn select_all(&mut self, included: bool, holdings: &[Holding]) {
        if included {
            self.selection = holdings.iter().map(|h| h.id.as_str()).collect();
        } else {
            self.selection.clear();
        }
        tracing::debug!(included, count = self.selection.len(), "select all");
        self.notify();
    }

    /// Push the current selection to every observer without changing it.
    pub fn flush(&mut self) {
        self.notify();
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.on_mutate(&self.selection);
        }
    }
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new()
    }
}
