pub mod backend;
pub mod types;

pub use backend::{Backend, HttpBackend};
pub use types::{
    AnalyzeRequest, EntryOptimization, OptimizeEntryRequest, SetAlertRequest,
    SimulateTradeRequest, SimulationAuditRequest, WatchlistAddRequest,
};
