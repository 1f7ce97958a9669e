//! # Berth Core
//!
//! 核心資料模型與類型定義

pub mod currency;
pub mod evaluation;
pub mod route;
pub mod settings;
pub mod silo;
pub mod snapshot;

// Re-export 主要類型
pub use currency::{CachedRate, ExchangeRateProvider, FixedRate};
pub use evaluation::{RouteEvaluation, StopDetail, INFEASIBLE_COST};
pub use route::Route;
pub use settings::PlannerSettings;
pub use silo::Silo;
pub use snapshot::PlanSnapshot;

/// 規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("找不到筒倉: {0}")]
    SiloNotFound(String),

    #[error("無效的匯率: {0}")]
    InvalidExchangeRate(rust_decimal::Decimal),

    #[error("無效的規劃設定: {0}")]
    InvalidSettings(String),

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
