//! Browser bindings for the postroad core.
//!
//! Exposes the session state container and the derived-value functions to
//! the JS presentation layer. Values cross the boundary as plain JS objects
//! via `serde-wasm-bindgen`; mutation flows back through the named methods
//! only.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use postroad_core::climate::{ClimateField, ClimateVector};
use postroad_core::form::FormParams;
use postroad_core::narration::journey_narration;
use postroad_core::state::{AppState, Phase};
use postroad_core::station::StationCatalog;
use postroad_core::{crossed_boundaries, mutation_index};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// One session of the journey application.
#[wasm_bindgen]
pub struct JourneyApp {
    state: AppState,
    catalog: StationCatalog,
}

#[wasm_bindgen]
impl JourneyApp {
    /// Start a session over the builtin station catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> JourneyApp {
        JourneyApp { state: AppState::new(), catalog: StationCatalog::builtin() }
    }

    /// Start a session over a custom station registry (JSON array of
    /// station records).
    pub fn with_registry(registry_json: &str) -> Result<JourneyApp, JsValue> {
        let catalog = StationCatalog::from_json(registry_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid registry: {e}")))?;
        Ok(JourneyApp { state: AppState::new(), catalog })
    }

    // ── Catalog reads ────────────────────────────────────────────────────

    /// All stations, in catalog order.
    pub fn stations(&self) -> Result<JsValue, JsValue> {
        let stations: Vec<_> = self.catalog.iter().collect();
        to_js(&stations)
    }

    // ── State reads ──────────────────────────────────────────────────────

    pub fn phase(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.phase())
    }

    pub fn route(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.route())
    }

    pub fn progress(&self) -> f64 {
        self.state.progress()
    }

    pub fn control_mode(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.control_mode())
    }

    pub fn climate(&self) -> Result<JsValue, JsValue> {
        to_js(self.state.climate())
    }

    pub fn collection(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.collection())
    }

    pub fn view_mode(&self) -> Result<JsValue, JsValue> {
        to_js(&self.state.view_mode())
    }

    /// The three derived geometry parameters for the current climate.
    pub fn form_params(&self) -> Result<JsValue, JsValue> {
        to_js(&FormParams::from_climate(self.state.climate()))
    }

    // ── Mutators ─────────────────────────────────────────────────────────

    /// Attempt a phase transition (`"landing" | "map" | "transition" |
    /// "roaming"`). Returns whether the phase changed; an undefined or
    /// guarded-off transition returns false without touching state.
    pub fn set_phase(&mut self, phase: JsValue) -> Result<bool, JsValue> {
        let phase: Phase = serde_wasm_bindgen::from_value(phase)
            .map_err(|e| JsValue::from_str(&format!("Invalid phase: {e}")))?;
        Ok(self.state.set_phase(phase))
    }

    /// One click of the station-selection protocol. Unknown ids are no-ops;
    /// returns whether the id resolved to a station.
    pub fn select_station(&mut self, id: &str) -> bool {
        match self.catalog.get(id) {
            Some(station) => {
                let station = station.clone();
                self.state.select_station(&station);
                true
            }
            None => false,
        }
    }

    pub fn set_progress(&mut self, t: f64) {
        self.state.set_progress(t);
    }

    pub fn set_direct_control(&mut self, enabled: bool) {
        self.state.set_direct_control(enabled);
    }

    /// Overwrite one climate field (`"rainfall"`, `"humidity"`, …) in direct
    /// mode.
    pub fn set_climate_param(&mut self, field: JsValue, value: f64) -> Result<(), JsValue> {
        let field: ClimateField = serde_wasm_bindgen::from_value(field)
            .map_err(|e| JsValue::from_str(&format!("Invalid field: {e}")))?;
        self.state.set_climate_param(field, value);
        Ok(())
    }

    pub fn collect_item(&mut self, id: &str) {
        self.state.collect_item(id);
    }

    pub fn toggle_view_mode(&mut self) {
        self.state.toggle_view_mode();
    }

    // ── Derived journey values ───────────────────────────────────────────

    /// Mutation index between two catalog stations; undefined if either id
    /// is unknown.
    pub fn mutation_index_between(&self, a: &str, b: &str) -> Option<u32> {
        let a = self.catalog.get(a)?;
        let b = self.catalog.get(b)?;
        Some(mutation_index(&a.climate, &b.climate))
    }

    /// Boundary-crossing messages between two catalog stations, in check
    /// order; empty if either id is unknown.
    pub fn boundary_messages(&self, a: &str, b: &str) -> Vec<JsValue> {
        let (Some(a), Some(b)) = (self.catalog.get(a), self.catalog.get(b)) else {
            return Vec::new();
        };
        crossed_boundaries(&a.climate, &b.climate)
            .into_iter()
            .map(|c| JsValue::from_str(c.message()))
            .collect()
    }

    /// Narration segments for the currently selected route; empty until the
    /// route is complete.
    pub fn narration(&self) -> Result<JsValue, JsValue> {
        let route = self.state.route();
        let segments = match (&route.start, &route.end) {
            (Some(start), Some(end)) => journey_narration(start, end),
            _ => Vec::new(),
        };
        to_js(&segments)
    }
}

impl Default for JourneyApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutation index between two raw climate vectors (JS objects).
#[wasm_bindgen]
pub fn mutation_index_of(a: JsValue, b: JsValue) -> Result<u32, JsValue> {
    let a: ClimateVector = serde_wasm_bindgen::from_value(a)
        .map_err(|e| JsValue::from_str(&format!("Invalid climate: {e}")))?;
    let b: ClimateVector = serde_wasm_bindgen::from_value(b)
        .map_err(|e| JsValue::from_str(&format!("Invalid climate: {e}")))?;
    Ok(mutation_index(&a, &b))
}

/// Derived form parameters for a raw climate vector (JS object).
#[wasm_bindgen]
pub fn form_params_of(climate: JsValue) -> Result<JsValue, JsValue> {
    let climate: ClimateVector = serde_wasm_bindgen::from_value(climate)
        .map_err(|e| JsValue::from_str(&format!("Invalid climate: {e}")))?;
    to_js(&FormParams::from_climate(&climate))
}
