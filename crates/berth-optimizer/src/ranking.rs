//! 航線排名

use berth_core::RouteEvaluation;

/// 排名計算器
pub struct RankingCalculator;

impl RankingCalculator {
    /// 過濾可行航線並依 USD 成本遞增排序
    ///
    /// `sort_by` 是穩定排序：同成本的航線保持產生順序。
    pub fn rank(evaluations: Vec<RouteEvaluation>) -> Vec<RouteEvaluation> {
        let mut feasible: Vec<RouteEvaluation> =
            evaluations.into_iter().filter(|e| e.feasible).collect();

        feasible.sort_by(|a, b| a.total_cost_usd.cmp(&b.total_cost_usd));

        feasible
    }
}
