//! 航線最佳化器

use std::collections::BTreeMap;

use berth_calc::{candidate_route_count, RouteEvaluator, RoutePlanGenerator};
use berth_core::{
    ExchangeRateProvider, PlannerError, PlannerSettings, Result, Route, RouteEvaluation, Silo,
};
use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::{OptimizationResult, RankingCalculator};

/// 航線最佳化器
///
/// 持有筒倉映射、規劃設定與匯率供應者，對一次運行執行完整流程：
/// 候補產生 → 平行評估 → 可行過濾與排名。筒倉以 `BTreeMap` 保存，
/// 名稱排序決定候補產生順序，使平手排名具確定性。
pub struct RouteOptimizer {
    /// 筒倉映射（名稱 → 筒倉）
    silos: BTreeMap<String, Silo>,

    /// 規劃設定
    settings: PlannerSettings,

    /// 匯率供應者
    rate_provider: Box<dyn ExchangeRateProvider>,
}

impl RouteOptimizer {
    /// 創建新的航線最佳化器
    pub fn new(
        silos: BTreeMap<String, Silo>,
        settings: PlannerSettings,
        rate_provider: Box<dyn ExchangeRateProvider>,
    ) -> Self {
        Self {
            silos,
            settings,
            rate_provider,
        }
    }

    /// 由筒倉列表創建（名稱重複時後者覆蓋前者）
    pub fn from_silos(
        silos: Vec<Silo>,
        settings: PlannerSettings,
        rate_provider: Box<dyn ExchangeRateProvider>,
    ) -> Self {
        let map = silos.into_iter().map(|s| (s.name.clone(), s)).collect();
        Self::new(map, settings, rate_provider)
    }

    /// 產生所有候補航線
    pub fn generate_route_plans(&self) -> Vec<Route> {
        let silo_names: Vec<String> = self.silos.keys().cloned().collect();
        RoutePlanGenerator::generate(&silo_names, self.settings.max_berth_changes)
    }

    /// 評估單一航線（供自行驅動評估的呼叫端使用）
    pub fn evaluate_route(&self, route: &Route) -> Result<RouteEvaluation> {
        let rate = self.checked_rate()?;
        let evaluator = self.build_evaluator(rate);
        evaluator.evaluate_route(route, self.settings.start_date)
    }

    /// 執行完整最佳化運行
    pub fn optimize(&self) -> Result<OptimizationResult> {
        self.settings.validate()?;
        let rate = self.checked_rate()?;

        let search_space =
            candidate_route_count(self.silos.len(), self.settings.max_berth_changes);
        tracing::info!(
            "開始航線最佳化：筒倉 {} 座，最大變更 {} 次，候補 {} 條",
            self.silos.len(),
            self.settings.max_berth_changes,
            search_space
        );

        let start_time = std::time::Instant::now();

        // Step 1: 候補產生
        tracing::debug!("Step 1: 候補航線產生");
        let plans = self.generate_route_plans();
        let total_candidates = plans.len();

        // Step 2: 平行評估（評估為純計算，順序在收集時保持）
        tracing::debug!("Step 2: 航線評估");
        let evaluator = self.build_evaluator(rate);
        let start_date = self.settings.start_date;
        let evaluations = plans
            .par_iter()
            .map(|route| evaluator.evaluate_route(route, start_date))
            .collect::<Result<Vec<RouteEvaluation>>>()?;

        // Step 3: 可行過濾與排名
        tracing::debug!("Step 3: 排名");
        let ranked = RankingCalculator::rank(evaluations);
        let feasible_count = ranked.len();

        tracing::info!(
            "最佳化完成：候補 {} 條，可行 {} 條，耗時 {:?}",
            total_candidates,
            feasible_count,
            start_time.elapsed()
        );

        Ok(OptimizationResult {
            ranked,
            total_candidates,
            feasible_count,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        })
    }

    /// 取得筒倉映射引用
    pub fn silos(&self) -> &BTreeMap<String, Silo> {
        &self.silos
    }

    /// 取得規劃設定引用
    pub fn settings(&self) -> &PlannerSettings {
        &self.settings
    }

    /// 取得匯率並檢查為正數
    fn checked_rate(&self) -> Result<Decimal> {
        let rate = self.rate_provider.usd_jpy_rate();
        if rate <= Decimal::ZERO {
            return Err(PlannerError::InvalidExchangeRate(rate));
        }
        Ok(rate)
    }

    fn build_evaluator(&self, rate: Decimal) -> RouteEvaluator {
        RouteEvaluator::new(
            self.silos.clone(),
            self.settings.berth_change_cost_usd,
            self.settings.delivery_capacity_per_berth,
            rate,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_core::FixedRate;
    use chrono::NaiveDate;

    fn silo(name: &str, capacity: i64, stock: i64, usage: i64) -> Silo {
        Silo::new(
            name.to_string(),
            Decimal::from(capacity),
            Decimal::from(stock),
            Decimal::from(usage),
        )
    }

    fn settings(max_changes: u32) -> PlannerSettings {
        PlannerSettings::new(
            max_changes,
            Decimal::from(100),
            Decimal::from(500),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        )
    }

    fn rate() -> Box<dyn ExchangeRateProvider> {
        Box::new(FixedRate::new(Decimal::from(150)))
    }

    #[test]
    fn test_two_silo_scenario() {
        // A、B 皆空且無消耗：全部 4 條候補可行
        let optimizer = RouteOptimizer::from_silos(
            vec![silo("A", 1000, 0, 0), silo("B", 1000, 0, 0)],
            settings(1),
            rate(),
        );

        let result = optimizer.optimize().unwrap();

        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.feasible_count, 4);

        // 單站（成本 0）在前，雙站（成本 100）在後且保持產生順序
        assert_eq!(result.ranked[0].route, Route::from(vec!["A"]));
        assert_eq!(result.ranked[1].route, Route::from(vec!["B"]));
        assert_eq!(result.ranked[2].route, Route::from(vec!["A", "B"]));
        assert_eq!(result.ranked[3].route, Route::from(vec!["B", "A"]));
        assert_eq!(result.ranked[2].total_cost_usd, Decimal::from(100));
        assert_eq!(result.ranked[3].total_cost_usd, Decimal::from(100));
        assert_eq!(result.ranked[2].total_cost_jpy, Decimal::from(15000));
    }

    #[test]
    fn test_infeasible_routes_are_filtered() {
        // C 完全滿載且無消耗：任何含 C 的航線皆不可行
        let optimizer = RouteOptimizer::from_silos(
            vec![
                silo("A", 1000, 0, 0),
                silo("B", 1000, 0, 0),
                silo("C", 1000, 1000, 0),
            ],
            settings(2),
            rate(),
        );

        let result = optimizer.optimize().unwrap();

        assert_eq!(result.total_candidates, 15);
        // 只剩 A、B 的組合：2 單站 + 2 雙站
        assert_eq!(result.feasible_count, 4);
        assert!(result
            .ranked
            .iter()
            .all(|e| !e.route.stops.contains(&"C".to_string())));
    }

    #[test]
    fn test_empty_silo_map_yields_empty_result() {
        let optimizer = RouteOptimizer::new(BTreeMap::new(), settings(3), rate());

        let result = optimizer.optimize().unwrap();

        assert_eq!(result.total_candidates, 0);
        assert!(result.is_empty());
        assert!(result.best().is_none());
    }

    #[test]
    fn test_non_positive_rate_is_rejected() {
        let optimizer = RouteOptimizer::from_silos(
            vec![silo("A", 1000, 0, 0)],
            settings(1),
            Box::new(FixedRate::new(Decimal::ZERO)),
        );

        let result = optimizer.optimize();

        assert!(matches!(result, Err(PlannerError::InvalidExchangeRate(_))));
    }

    #[test]
    fn test_top_n_selection() {
        let optimizer = RouteOptimizer::from_silos(
            vec![silo("A", 1000, 0, 0), silo("B", 1000, 0, 0)],
            settings(1),
            rate(),
        );

        let result = optimizer.optimize().unwrap();

        assert_eq!(result.top(2).len(), 2);
        assert_eq!(result.top(10).len(), 4);
        assert_eq!(result.best().unwrap().route, Route::from(vec!["A"]));
    }

    #[test]
    fn test_evaluate_single_route() {
        let optimizer = RouteOptimizer::from_silos(
            vec![silo("A", 1000, 0, 0), silo("B", 1000, 0, 0)],
            settings(1),
            rate(),
        );

        let evaluation = optimizer
            .evaluate_route(&Route::from(vec!["B", "A"]))
            .unwrap();

        assert!(evaluation.feasible);
        assert_eq!(evaluation.total_cost_usd, Decimal::from(100));
    }
}
