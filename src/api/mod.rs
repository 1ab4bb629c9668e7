mod dispatcher;
mod equidistant_selector;
mod json_contract;
mod label_sizing;
mod overlap_selector;
mod selection_config;
mod step_sampler;
mod tick_selector;
mod validation;

pub use dispatcher::select_ticks;
pub use json_contract::{TICK_DECISIONS_JSON_SCHEMA_V1, TickDecisionsJsonContractV1};
pub use selection_config::{SelectionPolicy, SymbolicPolicy, TickSelectionConfig};
pub use step_sampler::sample_ticks;
pub use tick_selector::TickSelector;
