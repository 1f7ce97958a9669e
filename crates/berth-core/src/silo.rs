//! 筒倉模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 筒倉（泊位對應的儲存設施）
///
/// 在一次最佳化運行期間視為唯讀：模擬過程只做推算，不回寫狀態。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Silo {
    /// 筒倉名稱（唯一識別）
    pub name: String,

    /// 總容量
    pub capacity: Decimal,

    /// 現在庫存
    pub current_stock: Decimal,

    /// 每日使用量（消耗速度）
    pub daily_usage: Decimal,
}

impl Silo {
    /// 創建新的筒倉
    pub fn new(name: String, capacity: Decimal, current_stock: Decimal, daily_usage: Decimal) -> Self {
        Self {
            name,
            capacity,
            current_stock,
            daily_usage,
        }
    }

    /// 計算指定天數後的預計庫存（消耗後，下限為 0）
    pub fn projected_stock(&self, days_from_start: u32) -> Decimal {
        let consumed = self.daily_usage * Decimal::from(days_from_start);
        (self.current_stock - consumed).max(Decimal::ZERO)
    }

    /// 計算指定天數後的可用容量
    ///
    /// 可用容量 = 總容量 - 預計庫存，隨天數單調遞增，上限為總容量。
    pub fn available_capacity(&self, days_from_start: u32) -> Decimal {
        self.capacity - self.projected_stock(days_from_start)
    }

    /// 檢查指定天數後是否有足夠的可用容量
    pub fn is_available(&self, days_from_start: u32, required_capacity: Decimal) -> bool {
        self.available_capacity(days_from_start) >= required_capacity
    }

    /// 庫存使用率（現在庫存 / 總容量）
    ///
    /// 總容量為 0 時回傳 `None`。
    pub fn fill_rate(&self) -> Option<Decimal> {
        if self.capacity.is_zero() {
            None
        } else {
            Some(self.current_stock / self.capacity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_create_silo() {
        let silo = Silo::new(
            "SILO-001".to_string(),
            Decimal::from(5000),
            Decimal::from(2000),
            Decimal::from(200),
        );

        assert_eq!(silo.name, "SILO-001");
        assert_eq!(silo.capacity, Decimal::from(5000));
        assert_eq!(silo.current_stock, Decimal::from(2000));
        assert_eq!(silo.daily_usage, Decimal::from(200));
    }

    #[test]
    fn test_available_capacity_projection() {
        // 容量 5000、庫存 2000、日用量 200 的推算範例
        let silo = Silo::new(
            "SILO-001".to_string(),
            Decimal::from(5000),
            Decimal::from(2000),
            Decimal::from(200),
        );

        // 第 0 天：5000 - 2000 = 3000
        assert_eq!(silo.available_capacity(0), Decimal::from(3000));

        // 第 5 天：5000 - (2000 - 1000) = 4000
        assert_eq!(silo.available_capacity(5), Decimal::from(4000));

        // 第 10 天：庫存耗盡，5000 - 0 = 5000
        assert_eq!(silo.available_capacity(10), Decimal::from(5000));

        // 超過耗盡點後維持在總容量
        assert_eq!(silo.available_capacity(100), Decimal::from(5000));
    }

    #[test]
    fn test_is_available() {
        let silo = Silo::new(
            "SILO-002".to_string(),
            Decimal::from(5000),
            Decimal::from(2000),
            Decimal::from(200),
        );

        // 第 0 天可用 3000
        assert!(silo.is_available(0, Decimal::from(3000)));
        assert!(!silo.is_available(0, Decimal::from(3001)));

        // 第 5 天可用 4000
        assert!(silo.is_available(5, Decimal::from(4000)));
    }

    #[test]
    fn test_zero_usage_silo() {
        // 無消耗的筒倉：可用容量不隨天數改變
        let silo = Silo::new(
            "SILO-003".to_string(),
            Decimal::from(1000),
            Decimal::ZERO,
            Decimal::ZERO,
        );

        assert_eq!(silo.available_capacity(0), Decimal::from(1000));
        assert_eq!(silo.available_capacity(30), Decimal::from(1000));
    }

    #[test]
    fn test_fill_rate() {
        let silo = Silo::new(
            "SILO-004".to_string(),
            Decimal::from(5000),
            Decimal::from(2000),
            Decimal::from(200),
        );

        assert_eq!(silo.fill_rate(), Some(Decimal::new(4, 1))); // 0.4

        let empty = Silo::new(
            "SILO-005".to_string(),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        );
        assert_eq!(empty.fill_rate(), None);
    }

    proptest! {
        #[test]
        fn available_capacity_is_monotonic(
            capacity in 0u64..1_000_000,
            current_stock in 0u64..1_000_000,
            daily_usage in 0u64..10_000,
            day in 0u32..365,
        ) {
            let silo = Silo::new(
                "PROP".to_string(),
                Decimal::from(capacity),
                Decimal::from(current_stock),
                Decimal::from(daily_usage),
            );

            // 可用容量隨天數單調遞增
            prop_assert!(silo.available_capacity(day) <= silo.available_capacity(day + 1));
        }

        #[test]
        fn available_capacity_is_bounded(
            capacity in 0u64..1_000_000,
            current_stock in 0u64..1_000_000,
            daily_usage in 0u64..10_000,
            day in 0u32..365,
        ) {
            let silo = Silo::new(
                "PROP".to_string(),
                Decimal::from(capacity),
                Decimal::from(current_stock),
                Decimal::from(daily_usage),
            );

            let available = silo.available_capacity(day);

            // 上界：總容量；下界：第 0 天的可用容量
            prop_assert!(available <= silo.capacity);
            prop_assert!(available >= silo.available_capacity(0));
        }
    }
}
