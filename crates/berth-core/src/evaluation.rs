//! 航線評估結果模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Route;

/// 不可行航線的成本哨兵值
///
/// Decimal 沒有無限大，改用最大值，確保不可行結果在遞增排序時永遠排在
/// 任何可行成本之後。
pub const INFEASIBLE_COST: Decimal = Decimal::MAX;

/// 單一停靠點的評估明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopDetail {
    /// 泊位名稱
    pub berth: String,

    /// 納入日（不可執行時為 None）
    pub delivery_date: Option<NaiveDate>,

    /// 卸載量
    pub delivered_amount: Decimal,

    /// 該時點的可用容量
    pub available_capacity: Decimal,

    /// 是否可執行
    pub executable: bool,
}

impl StopDetail {
    /// 創建可執行的停靠明細
    pub fn executable(
        berth: String,
        delivery_date: NaiveDate,
        delivered_amount: Decimal,
        available_capacity: Decimal,
    ) -> Self {
        Self {
            berth,
            delivery_date: Some(delivery_date),
            delivered_amount,
            available_capacity,
            executable: true,
        }
    }

    /// 創建不可執行的停靠明細（卸載量為 0、無納入日）
    pub fn not_executable(berth: String, available_capacity: Decimal) -> Self {
        Self {
            berth,
            delivery_date: None,
            delivered_amount: Decimal::ZERO,
            available_capacity,
            executable: false,
        }
    }
}

/// 航線評估結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEvaluation {
    /// 評估的航線
    pub route: Route,

    /// 總成本（USD）
    pub total_cost_usd: Decimal,

    /// 總成本（JPY，依評估時匯率換算）
    pub total_cost_jpy: Decimal,

    /// 是否可行
    pub feasible: bool,

    /// 逐站明細（不可行時止於失敗的停靠點）
    pub details: Vec<StopDetail>,
}

impl RouteEvaluation {
    /// 創建可行的評估結果
    pub fn feasible(
        route: Route,
        total_cost_usd: Decimal,
        total_cost_jpy: Decimal,
        details: Vec<StopDetail>,
    ) -> Self {
        Self {
            route,
            total_cost_usd,
            total_cost_jpy,
            feasible: true,
            details,
        }
    }

    /// 創建不可行的評估結果（成本為哨兵值）
    pub fn infeasible(route: Route, details: Vec<StopDetail>) -> Self {
        Self {
            route,
            total_cost_usd: INFEASIBLE_COST,
            total_cost_jpy: INFEASIBLE_COST,
            feasible: false,
            details,
        }
    }

    /// 取得失敗的停靠明細（可行時為 None）
    pub fn failed_stop(&self) -> Option<&StopDetail> {
        if self.feasible {
            None
        } else {
            self.details.last()
        }
    }

    /// 泊位變更次數
    pub fn berth_changes(&self) -> usize {
        self.route.berth_changes()
    }
}
