//! 成本計算與幣別換算

use berth_core::INFEASIBLE_COST;
use rust_decimal::Decimal;

/// 成本計算器
///
/// 成本只來自泊位變更：m 站的航線收取 (m-1) 次固定變更費，
/// 與各站的容量數字無關。
pub struct CostCalculator;

impl CostCalculator {
    /// 計算泊位變更總成本（USD）
    pub fn berth_change_cost(stop_count: usize, unit_cost_usd: Decimal) -> Decimal {
        let changes = stop_count.saturating_sub(1);
        Decimal::from(changes as u64) * unit_cost_usd
    }

    /// USD 成本換算為 JPY
    ///
    /// 哨兵值原樣通過，避免對 `Decimal::MAX` 做乘法溢位。
    pub fn convert_to_jpy(cost_usd: Decimal, usd_jpy_rate: Decimal) -> Decimal {
        if cost_usd == INFEASIBLE_COST {
            INFEASIBLE_COST
        } else {
            cost_usd * usd_jpy_rate
        }
    }
}
