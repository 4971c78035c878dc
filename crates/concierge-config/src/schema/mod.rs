//! Configuration schema types for Concierge.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod endpoint;
mod history;
mod system;
mod widget;

pub use endpoint::*;
pub use history::*;
pub use system::*;
pub use widget::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Concierge.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct ConciergeConfig {
    pub endpoint: EndpointConfig,
    pub history: HistoryConfig,
    pub widget: WidgetConfig,
    pub logging: LoggingConfig,
}
