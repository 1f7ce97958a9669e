//! 逐日排程模擬

use std::collections::BTreeMap;

use berth_core::{PlannerError, Result, Route, Silo, StopDetail};
use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

/// 排程模擬器
///
/// 以「每個可執行停靠消耗一個模擬日」為時鐘，依序走訪航線：
/// 可執行的停靠記錄納入日與卸載量並推進日數；第一個不可執行的停靠
/// 記錄明細後立即中止（明細長度 = 失敗站的索引 + 1）。
pub struct ScheduleSimulator;

impl ScheduleSimulator {
    /// 模擬一條航線
    ///
    /// 回傳逐站明細與可行旗標。找不到筒倉時回傳 `SiloNotFound`。
    pub fn simulate(
        route: &Route,
        silos: &BTreeMap<String, Silo>,
        delivery_capacity_per_berth: Decimal,
        start_date: NaiveDate,
    ) -> Result<(Vec<StopDetail>, bool)> {
        let mut details = Vec::with_capacity(route.len());
        let mut current_day: u32 = 0;

        for berth_name in route.iter() {
            let silo = silos
                .get(berth_name)
                .ok_or_else(|| PlannerError::SiloNotFound(berth_name.clone()))?;

            let available = silo.available_capacity(current_day);

            if silo.is_available(current_day, delivery_capacity_per_berth) {
                let delivery_date = start_date
                    .checked_add_days(Days::new(u64::from(current_day)))
                    .ok_or_else(|| {
                        PlannerError::InvalidDate(format!(
                            "起算日 {} 加 {} 天溢位",
                            start_date, current_day
                        ))
                    })?;

                let delivered = delivery_capacity_per_berth.min(available);

                details.push(StopDetail::executable(
                    berth_name.clone(),
                    delivery_date,
                    delivered,
                    available,
                ));

                current_day += 1;
            } else {
                details.push(StopDetail::not_executable(berth_name.clone(), available));

                // 首站失敗即中止，後續停靠不再評估
                return Ok((details, false));
            }
        }

        Ok((details, true))
    }
}
