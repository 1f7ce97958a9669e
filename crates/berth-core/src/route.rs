//! 航線模型

use serde::{Deserialize, Serialize};

/// 航線（依序造訪的泊位名稱列表）
///
/// 資料模型本身不排除重複泊位；路線產生器只會產生相異組合的排列。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// 依造訪順序排列的泊位名稱
    pub stops: Vec<String>,
}

impl Route {
    /// 創建新的航線
    pub fn new(stops: Vec<String>) -> Self {
        Self { stops }
    }

    /// 停靠泊位數
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// 檢查是否為空航線
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// 泊位變更次數（停靠數 - 1，空航線為 0）
    pub fn berth_changes(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// 依序走訪泊位名稱
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.stops.iter()
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stops.join(" → "))
    }
}

impl From<Vec<&str>> for Route {
    fn from(stops: Vec<&str>) -> Self {
        Self::new(stops.into_iter().map(str::to_string).collect())
    }
}
