//! 規劃快照模型（結果保存用的記錄格式）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PlannerSettings, RouteEvaluation, Silo};

/// 規劃快照
///
/// 一次最佳化運行的完整記錄：時間戳、設定、筒倉資料與前 K 名結果。
/// 由結果消費端組裝並保存，核心本身不做持久化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSnapshot {
    /// 快照ID
    pub id: Uuid,

    /// 建立時間
    pub created_at: DateTime<Utc>,

    /// 規劃設定
    pub settings: PlannerSettings,

    /// 筒倉資料
    pub silos: Vec<Silo>,

    /// 排名後的評估結果（前 K 名）
    pub results: Vec<RouteEvaluation>,
}

impl PlanSnapshot {
    /// 創建新的規劃快照
    pub fn new(settings: PlannerSettings, silos: Vec<Silo>, results: Vec<RouteEvaluation>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            settings,
            silos,
            results,
        }
    }
}
