//! # Berth Calculation Engine
//!
//! 航線產生與逐日模擬評估引擎

pub mod costing;
pub mod evaluator;
pub mod generation;
pub mod search_space;
pub mod simulation;

// Re-export 主要類型
pub use costing::CostCalculator;
pub use evaluator::RouteEvaluator;
pub use generation::RoutePlanGenerator;
pub use search_space::candidate_route_count;
pub use simulation::ScheduleSimulator;
