//! # Berth Optimizer
//!
//! 航線最佳化運行協調（產生、平行評估、排名）

pub mod optimizer;
pub mod ranking;

// Re-export 主要類型
pub use optimizer::RouteOptimizer;
pub use ranking::RankingCalculator;

use berth_core::RouteEvaluation;

/// 最佳化運行結果
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// 可行航線，依 USD 成本遞增排序（平手保持產生順序）
    pub ranked: Vec<RouteEvaluation>,

    /// 評估過的候補總數
    pub total_candidates: usize,

    /// 可行航線數
    pub feasible_count: usize,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl OptimizationResult {
    /// 取得前 n 名結果
    pub fn top(&self, n: usize) -> &[RouteEvaluation] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// 取得最便宜的可行航線
    pub fn best(&self) -> Option<&RouteEvaluation> {
        self.ranked.first()
    }

    /// 檢查是否沒有任何可行航線
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}
