//! Interactive controls for a package documentation ("unit") page: the
//! readme expand/collapse panel, directory-table activation, copy buttons,
//! and the view options that depend on optional page sections.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod gate;
pub mod readme;
mod setup;
pub mod table;

pub use clipboard::{activate_copy_controls, ClipboardActivator};
pub use config::{CompiledSelectors, Selectors, UnitPageConfig};
pub use error::SetupError;
pub use gate::{apply_feature_gates, FeatureGate, GateOutcome};
pub use readme::{DisclosureEvent, DisclosureState, ReadmeBinding, ReadmeController, ReadmeSections};
pub use setup::{init, UnitPage};
pub use table::{activate_expandable_tables, TableActivator};
