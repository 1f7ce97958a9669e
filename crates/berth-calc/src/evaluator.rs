//! 航線評估器

use std::collections::BTreeMap;

use berth_core::{Result, Route, RouteEvaluation, Silo};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::costing::CostCalculator;
use crate::simulation::ScheduleSimulator;

/// 航線評估器
///
/// 組合排程模擬與成本計算：先逐日模擬可行性，可行的航線再計價並換算
/// 幣別。匯率在建構時注入，評估過程不讀取外部狀態。
pub struct RouteEvaluator {
    /// 筒倉映射（名稱 → 筒倉）
    silos: BTreeMap<String, Silo>,

    /// 每次泊位變更成本（USD）
    berth_change_cost_usd: Decimal,

    /// 每個泊位的單次卸載容量
    delivery_capacity_per_berth: Decimal,

    /// USD/JPY 匯率（每次運行取得一次）
    usd_jpy_rate: Decimal,
}

impl RouteEvaluator {
    /// 創建新的航線評估器
    pub fn new(
        silos: BTreeMap<String, Silo>,
        berth_change_cost_usd: Decimal,
        delivery_capacity_per_berth: Decimal,
        usd_jpy_rate: Decimal,
    ) -> Self {
        Self {
            silos,
            berth_change_cost_usd,
            delivery_capacity_per_berth,
            usd_jpy_rate,
        }
    }

    /// 評估一條航線
    pub fn evaluate_route(&self, route: &Route, start_date: NaiveDate) -> Result<RouteEvaluation> {
        let (details, feasible) = ScheduleSimulator::simulate(
            route,
            &self.silos,
            self.delivery_capacity_per_berth,
            start_date,
        )?;

        if !feasible {
            tracing::debug!("航線 {} 不可行，止於第 {} 站", route, details.len());
            return Ok(RouteEvaluation::infeasible(route.clone(), details));
        }

        let total_cost_usd =
            CostCalculator::berth_change_cost(route.len(), self.berth_change_cost_usd);
        let total_cost_jpy = CostCalculator::convert_to_jpy(total_cost_usd, self.usd_jpy_rate);

        Ok(RouteEvaluation::feasible(
            route.clone(),
            total_cost_usd,
            total_cost_jpy,
            details,
        ))
    }

    /// 取得筒倉映射引用
    pub fn silos(&self) -> &BTreeMap<String, Silo> {
        &self.silos
    }
}
