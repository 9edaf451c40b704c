use crate::core::loader::{DataLoader, LoadOutcome};
use crate::core::view::FilterView;
use crate::core::{
    DocumentView, Facility, FacilitySource, FilterState, Indicator, MapSettings, MapWidget,
    Rendering, ViewSettings,
};

/// Owns the facility list, the filter inputs and both render targets.
///
/// Every user event goes through one of the methods below and ends in a full
/// re-render.
pub struct LocatorApp<S: FacilitySource, M: MapWidget, D: DocumentView> {
    loader: DataLoader<S>,
    view: FilterView,
    map_settings: MapSettings,
    map: M,
    document: D,
    facilities: Vec<Facility>,
    filter: FilterState,
    rendering: Rendering,
}

impl<S: FacilitySource, M: MapWidget, D: DocumentView> LocatorApp<S, M, D> {
    pub fn new(
        source: S,
        mut map: M,
        document: D,
        map_settings: MapSettings,
        view_settings: ViewSettings,
    ) -> Self {
        map.set_view(map_settings.center, map_settings.zoom);

        Self {
            loader: DataLoader::new(source),
            view: FilterView::new(view_settings),
            map_settings,
            map,
            document,
            facilities: Vec::new(),
            filter: FilterState::default(),
            rendering: Rendering::default(),
        }
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn loader(&self) -> &DataLoader<S> {
        &self.loader
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn rendering(&self) -> &Rendering {
        &self.rendering
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_parts(self) -> (M, D) {
        (self.map, self.document)
    }

    /// Fetches the list again and re-renders, whatever the outcome.
    pub async fn reload(&mut self) -> &Rendering {
        self.begin_load();
        let outcome = self.loader.load().await;
        self.apply_load(outcome)
    }

    /// Hides a previous error and shows the loading indicator.
    pub fn begin_load(&mut self) {
        self.document.hide(Indicator::Error);
        self.document
            .show(Indicator::Loading, &self.view.settings().loading_message);
    }

    /// Replaces the current list with the outcome of a load.
    ///
    /// Outcomes may be applied in any order; the last one applied wins and
    /// the list is never a mix of two responses.
    pub fn apply_load(&mut self, outcome: LoadOutcome) -> &Rendering {
        self.facilities = outcome.facilities;

        if outcome.error.is_some() {
            self.document
                .show(Indicator::Error, &self.view.settings().error_message);
        } else {
            self.document.hide(Indicator::Error);
        }

        self.document.hide(Indicator::Loading);
        self.render()
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> &Rendering {
        self.filter.query = query.into();
        self.render()
    }

    pub fn set_accessible_only(&mut self, accessible_only: bool) -> &Rendering {
        self.filter.accessible_only = accessible_only;
        self.render()
    }

    pub fn toggle_accessible_only(&mut self) -> &Rendering {
        self.set_accessible_only(!self.filter.accessible_only)
    }

    /// Recenters the map on the card at `index` (zero-based).
    ///
    /// Returns `false` without touching the map when the index is out of
    /// range or the facility has no usable coordinates.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(focus) = self.rendering.cards.get(index).and_then(|card| card.focus) else {
            tracing::debug!("Card {} has no focus point", index);
            return false;
        };

        self.map.set_view(focus, self.map_settings.focus_zoom);
        true
    }

    pub fn render(&mut self) -> &Rendering {
        self.rendering =
            self.view
                .render(&self.facilities, &self.filter, &mut self.map, &mut self.document);
        &self.rendering
    }
}
