//! Climate-to-form core for the postroad journey visualization.
//!
//! A visitor picks two stations — named locations, each carrying a climate
//! vector and a vernacular building style — and scrubs a progress scalar
//! along the route between them. This crate owns everything with actual
//! semantics behind that interaction:
//!
//!   - the six-dimensional [`climate::ClimateVector`] and its per-field
//!     linear [`climate::interpolate`],
//!   - the [`station::StationCatalog`] of reference locations,
//!   - the [`mutation::mutation_index`] dissimilarity score and
//!     [`mutation::crossed_boundaries`] threshold detector,
//!   - the [`form`] derivations mapping climate to roof pitch, eaves
//!     overhang, and window openness,
//!   - the [`state::AppState`] container mediating phases, route selection,
//!     control modes, and the collection mini-game,
//!   - [`narration`] segments and the [`collection`] catalog.
//!
//! Rendering, UI, and assets live entirely outside: the presentation layer
//! reads state and derived values each frame and feeds user input back
//! through the `AppState` operations. Every operation here is synchronous,
//! deterministic, and total.

pub mod climate;
pub mod collection;
pub mod coords;
pub mod form;
pub mod mutation;
pub mod narration;
pub mod station;
pub mod state;

pub use climate::{interpolate, ClimateField, ClimateVector};
pub use form::{eaves_overhang_meters, roof_pitch_degrees, window_openness, FormParams};
pub use mutation::{crossed_boundaries, mutation_index, BoundaryCrossing};
pub use state::{AppState, ControlMode, Phase, Route, ViewMode};
pub use station::{CatalogError, Station, StationCatalog};
