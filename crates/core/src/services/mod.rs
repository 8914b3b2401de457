pub mod analysis_service;
pub mod chart_service;
pub mod search_service;

pub use analysis_service::{AnalysisService, RequestTicket};
pub use chart_service::{ChartOptions, ChartSeries, ChartService, EmaOverlay};
pub use search_service::SearchService;
