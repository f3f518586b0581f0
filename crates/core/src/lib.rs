pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use chrono::{DateTime, Utc};
use models::{
    capital_gains::CapitalGainsSnapshot,
    dashboard::{GainsCard, HarvestingDashboard, LoadState, GAINS_MISSING_MESSAGE, LOAD_FAILED_MESSAGE},
    harvest::HarvestResult,
    holding::Holding,
    selection::SelectionSet,
    settings::Settings,
    table::{SortState, TableView, ViewLimit},
};
use providers::traits::PortfolioProvider;
use services::{
    harvesting_service::HarvestingService, projection_service::ProjectionService,
    selection_service::SelectionManager,
};
use storage::traits::KeyValueStore;

use errors::CoreError;

/// Main entry point for the tax-harvesting core library.
/// Holds the session state (portfolio, gains snapshot, selection, table
/// view options) and the collaborators needed to refresh and persist it.
///
/// Lifecycle: [`TaxHarvester::init`] → [`TaxHarvester::refresh`] (any number
/// of times, also as the retry after a failure) → [`TaxHarvester::teardown`].
///
/// Refreshes are not deduplicated. Every mutation takes `&mut self`, so
/// within one session they are serialized by the borrow checker; hosts
/// that share a harvester behind a lock and start overlapping refreshes
/// get last-write-wins.
///
/// Dropping a [`refresh`](Self::refresh) future before it completes puts
/// the load state back to what it was before the call; no data is replaced.
#[must_use]
pub struct TaxHarvester {
    settings: Settings,
    provider: Box<dyn PortfolioProvider>,
    holdings: Vec<Holding>,
    capital_gains: Option<CapitalGainsSnapshot>,
    selection: SelectionManager,
    load_state: LoadState,
    sort: SortState,
    view_all: bool,
    last_refreshed: Option<DateTime<Utc>>,
    harvesting_service: HarvestingService,
    projection_service: ProjectionService,
}

/// Holds `LoadState::Loading` for the duration of a refresh and restores
/// the previous state if the refresh is dropped before it settles.
struct LoadingGuard<'a> {
    slot: &'a mut LoadState,
    previous: Option<LoadState>,
}

impl<'a> LoadingGuard<'a> {
    fn enter(slot: &'a mut LoadState) -> Self {
        let previous = std::mem::replace(slot, LoadState::Loading);
        Self {
            slot,
            previous: Some(previous),
        }
    }

    fn settle(mut self, state: LoadState) {
        self.previous = None;
        *self.slot = state;
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            tracing::debug!(state = ?previous, "refresh dropped before completion, restoring load state");
            *self.slot = previous;
        }
    }
}

impl std::fmt::Debug for TaxHarvester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaxHarvester")
            .field("provider", &self.provider.name())
            .field("holdings", &self.holdings.len())
            .field("capital_gains", &self.capital_gains.is_some())
            .field("selected", &self.selection.selection().len())
            .field("load_state", &self.load_state)
            .field("sort", &self.sort)
            .field("view_all", &self.view_all)
            .finish()
    }
}

impl TaxHarvester {
    /// Start a session: validate settings and restore the persisted selection.
    /// No data is fetched until [`refresh`](Self::refresh) is called.
    pub fn init(
        settings: Settings,
        provider: Box<dyn PortfolioProvider>,
        store: Box<dyn KeyValueStore>,
    ) -> Result<Self, CoreError> {
        settings.validate()?;
        let selection = SelectionManager::initialize(store, &settings.selection_key);
        tracing::info!(
            provider = provider.name(),
            restored = selection.selection().len(),
            "tax harvesting session started"
        );

        Ok(Self {
            settings,
            provider,
            holdings: Vec::new(),
            capital_gains: None,
            selection,
            load_state: LoadState::Idle,
            sort: SortState::default(),
            view_all: false,
            last_refreshed: None,
            harvesting_service: HarvestingService::new(),
            projection_service: ProjectionService::new(),
        })
    }

    /// Fetch holdings and the gains snapshot together.
    ///
    /// Both must succeed: on any failure neither is replaced and the session
    /// moves to `LoadState::Failed` with a user-facing message. Calling this
    /// again is the retry. If the returned future is dropped mid-flight the
    /// previous load state is restored.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        let loading = LoadingGuard::enter(&mut self.load_state);

        let fetched = futures_util::future::try_join(
            self.provider.fetch_holdings(),
            self.provider.fetch_capital_gains(),
        )
        .await;

        match fetched {
            Ok((holdings, capital_gains)) => {
                tracing::info!(
                    provider = self.provider.name(),
                    holdings = holdings.len(),
                    "portfolio refreshed"
                );
                self.holdings = holdings;
                self.capital_gains = Some(capital_gains);
                loading.settle(LoadState::Ready);
                self.last_refreshed = Some(Utc::now());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(provider = self.provider.name(), error = %e, "portfolio refresh failed");
                loading.settle(LoadState::Failed(LOAD_FAILED_MESSAGE.to_string()));
                Err(CoreError::DataUnavailable(e.to_string()))
            }
        }
    }

    /// End the session: write the selection one last time and hand it back.
    pub fn teardown(mut self) -> SelectionSet {
        self.selection.flush();
        tracing::info!(selected = self.selection.selection().len(), "tax harvesting session ended");
        self.selection.selection().clone()
    }

    // ── Selection ───────────────────────────────────────────────────

    /// Mark or unmark one holding for sale. Persisted immediately.
    pub fn toggle(&mut self, id: &str, included: bool) {
        self.selection.toggle(id, included);
    }

    /// Select every holding in the portfolio, or clear the selection.
    pub fn select_all(&mut self, included: bool) {
        self.selection.select_all(included, &self.holdings);
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionSet {
        self.selection.selection()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// `true` when the portfolio is non-empty and every holding is selected.
    #[must_use]
    pub fn all_selected(&self) -> bool {
        !self.holdings.is_empty() && self.holdings.iter().all(|h| self.selection.is_selected(&h.id))
    }

    /// Quantity that would be sold for a holding: its full position if
    /// selected, `None` otherwise.
    #[must_use]
    pub fn amount_to_sell(&self, id: &str) -> Option<f64> {
        if !self.selection.is_selected(id) {
            return None;
        }
        self.holdings
            .iter()
            .find(|h| h.id == id)
            .map(|h| h.quantity_held)
    }

    // ── Table View ──────────────────────────────────────────────────

    /// Activate the short-term gain column header. Returns the new state.
    pub fn advance_sort(&mut self) -> SortState {
        self.sort = self.sort.advance();
        self.sort
    }

    #[must_use]
    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn set_view_all(&mut self, view_all: bool) {
        self.view_all = view_all;
    }

    #[must_use]
    pub fn view_all(&self) -> bool {
        self.view_all
    }

    /// Holdings rows for the table, honoring the sort and view-all state.
    #[must_use]
    pub fn table(&self) -> TableView<'_> {
        let limit = if self.view_all {
            ViewLimit::All
        } else {
            ViewLimit::Preview(self.settings.preview_rows)
        };
        self.projection_service.project(&self.holdings, self.sort, limit)
    }

    // ── Evaluation ──────────────────────────────────────────────────

    /// Run the harvesting calculation against the current state.
    /// Always succeeds; with no data loaded the result is all zeros.
    #[must_use]
    pub fn evaluate(&self) -> HarvestResult {
        self.harvesting_service.compute(
            self.capital_gains.as_ref(),
            &self.holdings,
            self.selection.selection(),
        )
    }

    /// Everything needed to render one frame.
    ///
    /// Returns `DataUnavailable` if the last refresh failed or no gains
    /// snapshot has been loaded; check [`load_state`](Self::load_state) for
    /// the loading indicator.
    pub fn dashboard(&self) -> Result<HarvestingDashboard<'_>, CoreError> {
        if let Some(msg) = self.load_state.error() {
            return Err(CoreError::DataUnavailable(msg.to_string()));
        }
        let pre_gains = self
            .capital_gains
            .ok_or_else(|| CoreError::DataUnavailable(GAINS_MISSING_MESSAGE.to_string()))?;

        let result = self.evaluate();

        Ok(HarvestingDashboard {
            pre: GainsCard {
                gains: pre_gains,
                total: result.pre_total,
            },
            post: GainsCard {
                gains: result.projected(),
                total: result.post_total,
            },
            result,
            savings: result.show_savings.then_some(result.savings),
            table: self.table(),
            sort: self.sort,
            all_selected: self.all_selected(),
        })
    }

    // ── State Inspection ────────────────────────────────────────────

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    #[must_use]
    pub fn capital_gains(&self) -> Option<&CapitalGainsSnapshot> {
        self.capital_gains.as_ref()
    }

    /// Time of the last successful refresh.
    #[must_use]
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
