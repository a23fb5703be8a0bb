//! The application state container and its transition rules.
//!
//! One `AppState` exists per session and is the single source of truth the
//! presentation layer reads every frame. All mutation goes through the named
//! operations below; every operation is total — a guard that fails, an
//! unknown id, an out-of-range scalar all resolve to a defined result
//! (usually "nothing changes"), never a panic or an error value.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::climate::{interpolate, ClimateField, ClimateVector};
use crate::collection::{builtin_catalog, CollectionItem};
use crate::station::Station;

/// Which presentation subtree is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Landing,
    Map,
    Transition,
    Roaming,
}

/// How `current_climate` is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    /// Manual per-field writes through [`AppState::set_climate_param`].
    Direct,
    /// Climate derived solely from route interpolation at the current progress.
    RouteDriven,
}

/// Camera stance hint for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Tourist,
    God,
}

/// The selected journey endpoints. `end` is only meaningful once `start`
/// is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub start: Option<Station>,
    pub end: Option<Station>,
}

impl Route {
    /// Both endpoints selected.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Progress threshold past which the transition phase may hand off to
/// roaming.
pub const ARRIVAL_THRESHOLD: f64 = 0.95;

/// Session state. See the crate docs for the read/write contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    phase: Phase,
    route: Route,
    progress: f64,
    control_mode: ControlMode,
    current_climate: ClimateVector,
    collection: Vec<CollectionItem>,
    view_mode: ViewMode,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: Phase::Landing,
            route: Route::default(),
            progress: 0.0,
            control_mode: ControlMode::Direct,
            current_climate: ClimateVector::default(),
            collection: Vec::new(),
            view_mode: ViewMode::God,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Read accessors ───────────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn control_mode(&self) -> ControlMode {
        self.control_mode
    }

    pub fn climate(&self) -> &ClimateVector {
        &self.current_climate
    }

    pub fn collection(&self) -> &[CollectionItem] {
        &self.collection
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    // ── Phase transitions ────────────────────────────────────────────────

    /// Attempt a phase transition. Returns whether the phase changed.
    ///
    /// Only the transitions in the table below exist; anything else —
    /// including a guard failure — leaves the state untouched. A disabled
    /// "proceed" button that is clicked programmatically must do nothing.
    ///
    /// | from       | to         | guard                  | side effect          |
    /// |------------|------------|------------------------|----------------------|
    /// | landing    | map        |                        |                      |
    /// | map        | transition | route complete         | route-driven control |
    /// | transition | roaming    | progress ≥ 0.95        | collection seeded    |
    /// | transition | map        |                        |                      |
    /// | roaming    | transition |                        |                      |
    pub fn set_phase(&mut self, next: Phase) -> bool {
        let allowed = match (self.phase, next) {
            (Phase::Landing, Phase::Map) => true,
            (Phase::Map, Phase::Transition) => self.route.is_complete(),
            (Phase::Transition, Phase::Roaming) => self.progress >= ARRIVAL_THRESHOLD,
            (Phase::Transition, Phase::Map) => true,
            (Phase::Roaming, Phase::Transition) => true,
            _ => false,
        };
        if !allowed {
            debug!(from = ?self.phase, requested = ?next, "phase transition rejected");
            return false;
        }

        debug!(from = ?self.phase, to = ?next, "phase transition");
        self.phase = next;

        match next {
            Phase::Transition if self.control_mode == ControlMode::Direct => {
                // Entering the journey disables manual override.
                self.set_direct_control(false);
            }
            Phase::Roaming => {
                self.initialize_collection(builtin_catalog());
            }
            _ => {}
        }
        true
    }

    // ── Station selection ────────────────────────────────────────────────

    /// Apply one click of the selection protocol.
    ///
    /// No start yet: the click sets the start. Start without end: the click
    /// sets the end — selecting the start again is allowed and yields a
    /// degenerate zero-length route. Full route: the click begins a fresh
    /// cycle with itself as the new start; a route is replaced whole, never
    /// edited.
    pub fn select_station(&mut self, station: &Station) {
        match (&self.route.start, &self.route.end) {
            (None, _) => {
                debug!(id = %station.id, "route start selected");
                self.route.start = Some(station.clone());
                self.route.end = None;
            }
            (Some(_), None) => {
                debug!(id = %station.id, "route end selected");
                self.route.end = Some(station.clone());
            }
            (Some(_), Some(_)) => {
                debug!(id = %station.id, "route reset, new start selected");
                self.route.start = Some(station.clone());
                self.route.end = None;
            }
        }
    }

    // ── Climate control ──────────────────────────────────────────────────

    /// Set journey progress. In route-driven mode with a complete route the
    /// current climate is recomputed immediately; otherwise the scalar is
    /// stored as-is. `t` is not clamped.
    pub fn set_progress(&mut self, t: f64) {
        self.progress = t;
        self.recompute_climate();
    }

    /// Toggle manual override. Leaving route-driven mode freezes the climate
    /// at its last computed value; entering it re-syncs the climate to the
    /// current progress.
    pub fn set_direct_control(&mut self, enabled: bool) {
        self.control_mode = if enabled { ControlMode::Direct } else { ControlMode::RouteDriven };
        debug!(mode = ?self.control_mode, "control mode set");
        self.recompute_climate();
    }

    /// Overwrite exactly one climate field, leaving the rest untouched.
    /// Only honoured in direct mode; route-driven climate is interpolation's
    /// alone.
    pub fn set_climate_param(&mut self, field: ClimateField, value: f64) {
        if self.control_mode != ControlMode::Direct {
            trace!(?field, value, "climate write ignored outside direct mode");
            return;
        }
        self.current_climate.set(field, value);
    }

    fn recompute_climate(&mut self) {
        if self.control_mode != ControlMode::RouteDriven {
            return;
        }
        if let (Some(start), Some(end)) = (&self.route.start, &self.route.end) {
            self.current_climate = interpolate(&start.climate, &end.climate, self.progress);
            trace!(t = self.progress, "climate recomputed from route");
        }
    }

    // ── Collection ───────────────────────────────────────────────────────

    /// Seed the collection catalog. Idempotent: once the session holds any
    /// items, re-entering the roaming phase (or calling this again) keeps
    /// existing items and their collected flags.
    pub fn initialize_collection(&mut self, items: Vec<CollectionItem>) {
        if self.collection.is_empty() {
            debug!(count = items.len(), "collection initialized");
            self.collection = items;
        }
    }

    /// Mark an item collected. Unknown ids and already-collected items are
    /// no-ops.
    pub fn collect_item(&mut self, id: &str) {
        if let Some(item) = self.collection.iter_mut().find(|i| i.id == id) {
            if !item.collected {
                debug!(id, "item collected");
                item.collected = true;
            }
        }
    }

    // ── View ─────────────────────────────────────────────────────────────

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Tourist => ViewMode::God,
            ViewMode::God => ViewMode::Tourist,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::station::StationCatalog;

    fn catalog() -> StationCatalog {
        StationCatalog::builtin()
    }

    fn state_with_route(start: &str, end: &str) -> AppState {
        let catalog = catalog();
        let mut state = AppState::new();
        assert!(state.set_phase(Phase::Map));
        state.select_station(catalog.get(start).unwrap());
        state.select_station(catalog.get(end).unwrap());
        state
    }

    #[test]
    fn session_starts_at_landing_with_defaults() {
        let state = AppState::new();
        assert_eq!(state.phase(), Phase::Landing);
        assert_eq!(state.control_mode(), ControlMode::Direct);
        assert_eq!(*state.climate(), ClimateVector::default());
        assert!(state.route().start.is_none());
        assert!(state.collection().is_empty());
    }

    #[test]
    fn selection_protocol_three_clicks() {
        let catalog = catalog();
        let mut state = AppState::new();
        state.set_phase(Phase::Map);

        state.select_station(catalog.get("suzhou").unwrap());
        assert_eq!(state.route().start.as_ref().unwrap().id, "suzhou");
        assert!(state.route().end.is_none());

        state.select_station(catalog.get("pingyao").unwrap());
        assert_eq!(state.route().end.as_ref().unwrap().id, "pingyao");

        state.select_station(catalog.get("lhasa").unwrap());
        assert_eq!(state.route().start.as_ref().unwrap().id, "lhasa");
        assert!(state.route().end.is_none(), "third click begins a fresh cycle");
    }

    #[test]
    fn degenerate_same_station_route_is_permitted() {
        let catalog = catalog();
        let mut state = AppState::new();
        state.set_phase(Phase::Map);
        let suzhou = catalog.get("suzhou").unwrap();
        state.select_station(suzhou);
        state.select_station(suzhou);
        assert!(state.route().is_complete());

        state.set_phase(Phase::Transition);
        state.set_progress(0.5);
        assert_eq!(*state.climate(), suzhou.climate, "zero-length route is constant");
    }

    #[test]
    fn map_to_transition_requires_a_complete_route() {
        let catalog = catalog();
        let mut state = AppState::new();
        state.set_phase(Phase::Map);
        state.select_station(catalog.get("suzhou").unwrap());

        assert!(!state.set_phase(Phase::Transition));
        assert_eq!(state.phase(), Phase::Map, "guard failure leaves phase unchanged");
        assert_eq!(state.control_mode(), ControlMode::Direct);
    }

    #[test]
    fn entering_transition_switches_to_route_driven() {
        let mut state = state_with_route("suzhou", "pingyao");
        assert!(state.set_phase(Phase::Transition));
        assert_eq!(state.control_mode(), ControlMode::RouteDriven);
        // Mode entry syncs climate to the current progress (0 → start vector).
        assert_eq!(state.climate().rainfall, 1200.0);
    }

    #[test]
    fn undefined_transitions_are_no_ops() {
        let mut state = AppState::new();
        assert!(!state.set_phase(Phase::Roaming));
        assert!(!state.set_phase(Phase::Transition));
        assert!(!state.set_phase(Phase::Landing));
        assert_eq!(state.phase(), Phase::Landing);

        state.set_phase(Phase::Map);
        assert!(!state.set_phase(Phase::Landing), "no way back to landing");
        assert!(!state.set_phase(Phase::Map), "self-transition is not defined");
    }

    #[test]
    fn arrival_guard_gates_roaming() {
        let mut state = state_with_route("suzhou", "pingyao");
        state.set_phase(Phase::Transition);

        state.set_progress(0.9);
        assert!(!state.set_phase(Phase::Roaming));
        assert_eq!(state.phase(), Phase::Transition);

        state.set_progress(0.95);
        assert!(state.set_phase(Phase::Roaming));
        // Climate sits at-or-near the destination vector.
        let pingyao = catalog().get("pingyao").unwrap().clone();
        let gap = (state.climate().rainfall - pingyao.climate.rainfall).abs();
        let span = (1200.0_f64 - 450.0).abs();
        assert!(gap / span <= 0.0501, "rainfall gap {gap} too wide");
    }

    #[test]
    fn back_transitions_keep_the_route() {
        let mut state = state_with_route("suzhou", "pingyao");
        state.set_phase(Phase::Transition);
        assert!(state.set_phase(Phase::Map));
        assert!(state.route().is_complete(), "going back does not clear the route");

        assert!(state.set_phase(Phase::Transition));
        state.set_progress(1.0);
        state.set_phase(Phase::Roaming);
        assert!(state.set_phase(Phase::Transition));
        assert_eq!(state.phase(), Phase::Transition);
    }

    #[test]
    fn progress_drives_climate_only_with_a_full_route() {
        let catalog = catalog();
        let mut state = AppState::new();
        state.set_phase(Phase::Map);
        state.select_station(catalog.get("suzhou").unwrap());
        state.set_direct_control(false);

        let before = *state.climate();
        state.set_progress(0.7);
        assert_eq!(*state.climate(), before, "no full route, no recompute");
        assert_eq!(state.progress(), 0.7, "the scalar itself is stored");

        state.select_station(catalog.get("pingyao").unwrap());
        state.set_progress(0.5);
        assert_eq!(state.climate().rainfall, 825.0);
        assert_eq!(state.climate().altitude, 402.5);
    }

    #[test]
    fn direct_mode_freezes_interpolated_climate() {
        let mut state = state_with_route("suzhou", "pingyao");
        state.set_phase(Phase::Transition);
        state.set_progress(0.5);
        let frozen = *state.climate();

        state.set_direct_control(true);
        state.set_progress(1.0);
        assert_eq!(*state.climate(), frozen, "direct mode ignores progress");

        state.set_climate_param(ClimateField::Rainfall, 42.0);
        assert_eq!(state.climate().rainfall, 42.0);
        assert_eq!(state.climate().humidity, frozen.humidity);
    }

    #[test]
    fn climate_writes_are_ignored_in_route_driven_mode() {
        let mut state = state_with_route("suzhou", "pingyao");
        state.set_phase(Phase::Transition);
        state.set_progress(0.25);
        let derived = *state.climate();

        state.set_climate_param(ClimateField::Defense, 10.0);
        assert_eq!(*state.climate(), derived);
    }

    #[test]
    fn climate_writes_accept_out_of_range_values() {
        let mut state = AppState::new();
        state.set_climate_param(ClimateField::Rainfall, -500.0);
        state.set_climate_param(ClimateField::Defense, 99.0);
        assert_eq!(state.climate().rainfall, -500.0);
        assert_eq!(state.climate().defense, 99.0);
    }

    #[test]
    fn collection_survives_roaming_reentry() {
        let mut state = state_with_route("suzhou", "pingyao");
        state.set_phase(Phase::Transition);
        state.set_progress(1.0);
        state.set_phase(Phase::Roaming);
        assert_eq!(state.collection().len(), 5);

        state.collect_item("dougong");
        state.collect_item("dougong"); // repeat is a no-op
        state.collect_item("no-such-item"); // unknown is a no-op
        let collected: Vec<&str> = state
            .collection()
            .iter()
            .filter(|i| i.collected)
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(collected, vec!["dougong"]);

        state.set_phase(Phase::Transition);
        state.set_phase(Phase::Roaming);
        assert_eq!(state.collection().len(), 5, "re-entry must not duplicate");
        assert!(
            state.collection().iter().any(|i| i.id == "dougong" && i.collected),
            "re-entry must not reset collected flags"
        );
    }

    #[test]
    fn view_mode_toggles_between_stances() {
        let mut state = AppState::new();
        assert_eq!(state.view_mode(), ViewMode::God);
        state.toggle_view_mode();
        assert_eq!(state.view_mode(), ViewMode::Tourist);
        state.toggle_view_mode();
        assert_eq!(state.view_mode(), ViewMode::God);
    }
}
