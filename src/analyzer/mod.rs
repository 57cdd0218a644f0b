pub mod charts;
pub mod dashboard;
pub mod stats;

pub use charts::{chart_data, CategoryCount, ChartData, MonthlyCount};
pub use dashboard::{
    calculate_stats, calculate_stats_with_config, DashboardStats, SatisfacaoDistribuicao,
};
