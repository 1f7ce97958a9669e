//! 規劃設定模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlannerError, Result};

/// 航線規劃參數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// 最大泊位變更次數（變更 = 相鄰兩站的轉移）
    pub max_berth_changes: u32,

    /// 每次泊位變更成本（USD）
    pub berth_change_cost_usd: Decimal,

    /// 每個泊位的單次卸載容量
    pub delivery_capacity_per_berth: Decimal,

    /// 起算日
    pub start_date: NaiveDate,
}

impl PlannerSettings {
    /// 創建新的規劃設定
    pub fn new(
        max_berth_changes: u32,
        berth_change_cost_usd: Decimal,
        delivery_capacity_per_berth: Decimal,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            max_berth_changes,
            berth_change_cost_usd,
            delivery_capacity_per_berth,
            start_date,
        }
    }

    /// 建構器模式：設置最大泊位變更次數
    pub fn with_max_berth_changes(mut self, max_berth_changes: u32) -> Self {
        self.max_berth_changes = max_berth_changes;
        self
    }

    /// 建構器模式：設置泊位變更成本
    pub fn with_berth_change_cost_usd(mut self, cost: Decimal) -> Self {
        self.berth_change_cost_usd = cost;
        self
    }

    /// 建構器模式：設置單次卸載容量
    pub fn with_delivery_capacity_per_berth(mut self, capacity: Decimal) -> Self {
        self.delivery_capacity_per_berth = capacity;
        self
    }

    /// 建構器模式：設置起算日
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// 檢查設定是否合法
    ///
    /// 變更成本不可為負，單次卸載容量必須為正。
    pub fn validate(&self) -> Result<()> {
        if self.berth_change_cost_usd < Decimal::ZERO {
            return Err(PlannerError::InvalidSettings(format!(
                "泊位變更成本不可為負: {}",
                self.berth_change_cost_usd
            )));
        }

        if self.delivery_capacity_per_berth <= Decimal::ZERO {
            return Err(PlannerError::InvalidSettings(format!(
                "單次卸載容量必須為正: {}",
                self.delivery_capacity_per_berth
            )));
        }

        Ok(())
    }
}
