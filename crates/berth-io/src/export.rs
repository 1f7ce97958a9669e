//! 規劃快照匯出

use std::path::Path;

use berth_core::PlanSnapshot;
use chrono::NaiveDate;

use crate::IoError;

/// 以起算日組出預設快照檔名（`berth_route_plan_YYYYMMDD.json`）
pub fn snapshot_file_name(start_date: NaiveDate) -> String {
    format!("berth_route_plan_{}.json", start_date.format("%Y%m%d"))
}

/// 將快照序列化為 JSON 字串（縮排格式）
pub fn snapshot_to_json(snapshot: &PlanSnapshot) -> Result<String, IoError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// 將快照保存到檔案
pub fn save_snapshot(path: impl AsRef<Path>, snapshot: &PlanSnapshot) -> Result<(), IoError> {
    let json = snapshot_to_json(snapshot)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_core::{PlannerSettings, Silo};
    use rust_decimal::Decimal;

    fn snapshot() -> PlanSnapshot {
        let settings = PlannerSettings::new(
            3,
            Decimal::from(10000),
            Decimal::from(1000),
            NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
        );
        let silos = vec![Silo::new(
            "SILO-A".to_string(),
            Decimal::from(5000),
            Decimal::from(2000),
            Decimal::from(200),
        )];

        PlanSnapshot::new(settings, silos, Vec::new())
    }

    #[test]
    fn test_snapshot_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();

        assert_eq!(snapshot_file_name(date), "berth_route_plan_20251101.json");
    }

    #[test]
    fn test_save_and_reload_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = snapshot();
        let path = dir.path().join(snapshot_file_name(snapshot.settings.start_date));

        save_snapshot(&path, &snapshot).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let restored: PlanSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id, snapshot.id);
        assert_eq!(restored.silos.len(), 1);
    }
}
