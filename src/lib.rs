//! # Berth Planner
//!
//! 運穀船泊位航線最佳化引擎的 facade crate：
//! 重新匯出核心模型、計算引擎、最佳化器與檔案匯入匯出。

pub use berth_core::{
    CachedRate, ExchangeRateProvider, FixedRate, PlanSnapshot, PlannerError, PlannerSettings,
    Route, RouteEvaluation, Silo, StopDetail, INFEASIBLE_COST,
};

pub use berth_calc::{
    candidate_route_count, CostCalculator, RouteEvaluator, RoutePlanGenerator, ScheduleSimulator,
};

pub use berth_optimizer::{OptimizationResult, RankingCalculator, RouteOptimizer};

pub use berth_io::{
    load_silos_from_path, load_silos_from_str, save_snapshot, snapshot_file_name, snapshot_to_json,
    IoError, SiloFile, SiloRecord,
};
