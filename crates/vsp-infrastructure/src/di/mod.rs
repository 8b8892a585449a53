//! Composition root
//!
//! ```text
//! AppConfig ─▶ ProviderSlots::resolve ─▶ registry ─▶ Arc<dyn StorageProvider>
//!                     │
//!                     └─▶ SlotMetricsAggregator ─▶ AppContext
//! ```

pub mod bootstrap;
pub mod resolver;

pub use bootstrap::{AppContext, init_app};
pub use resolver::{ProviderSlots, ResolvedSlot};
