//! 匯率供應模型
//!
//! 匯率以建構子注入的依賴提供，核心不讀取任何全域狀態。

use std::sync::OnceLock;

use rust_decimal::Decimal;

/// 匯率供應者（USD/JPY 換算係數）
///
/// 實作必須回傳正數；`RouteOptimizer` 會在每次運行開始時取得一次並檢查。
pub trait ExchangeRateProvider: Send + Sync {
    /// 取得 USD/JPY 匯率
    fn usd_jpy_rate(&self) -> Decimal;
}

/// 固定匯率（測試與離線運行用）
#[derive(Debug, Clone)]
pub struct FixedRate {
    rate: Decimal,
}

impl FixedRate {
    /// 創建固定匯率供應者
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }
}

impl ExchangeRateProvider for FixedRate {
    fn usd_jpy_rate(&self) -> Decimal {
        self.rate
    }
}

/// 快取匯率（首次取得後在行程內記憶）
///
/// 對應「匯率在一次規劃會期內幾乎不變」的使用情境：外部查詢只執行一次，
/// 之後的呼叫直接回傳快取值。
pub struct CachedRate {
    fetch: Box<dyn Fn() -> Decimal + Send + Sync>,
    cached: OnceLock<Decimal>,
}

impl CachedRate {
    /// 創建快取匯率供應者
    pub fn new<F>(fetch: F) -> Self
    where
        F: Fn() -> Decimal + Send + Sync + 'static,
    {
        Self {
            fetch: Box::new(fetch),
            cached: OnceLock::new(),
        }
    }
}

impl ExchangeRateProvider for CachedRate {
    fn usd_jpy_rate(&self) -> Decimal {
        *self.cached.get_or_init(|| (self.fetch)())
    }
}

impl std::fmt::Debug for CachedRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedRate")
            .field("cached", &self.cached.get())
            .finish()
    }
}
