//! 筒倉定義匯入

use std::collections::BTreeMap;
use std::path::Path;

use berth_core::Silo;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::IoError;

/// 筒倉定義檔（`{"silos": [...]}`）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiloFile {
    /// 筒倉記錄列表
    pub silos: Vec<SiloRecord>,
}

/// 單筆筒倉記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiloRecord {
    /// 筒倉名稱
    pub name: String,

    /// 總容量
    pub capacity: Decimal,

    /// 現在庫存
    pub current_stock: Decimal,

    /// 每日使用量
    pub daily_usage: Decimal,
}

impl SiloRecord {
    /// 檢查數值欄位皆為非負
    fn validate(&self) -> Result<(), IoError> {
        for (field, value) in [
            ("capacity", self.capacity),
            ("current_stock", self.current_stock),
            ("daily_usage", self.daily_usage),
        ] {
            if value < Decimal::ZERO {
                return Err(IoError::NegativeValue {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    /// 轉換為核心筒倉模型
    fn into_silo(self) -> Silo {
        Silo::new(self.name, self.capacity, self.current_stock, self.daily_usage)
    }
}

/// 從 JSON 字串載入筒倉映射
///
/// 名稱重複或數值為負時回傳錯誤。
pub fn load_silos_from_str(json: &str) -> Result<BTreeMap<String, Silo>, IoError> {
    let file: SiloFile = serde_json::from_str(json)?;

    let mut silos = BTreeMap::new();
    for record in file.silos {
        record.validate()?;
        let name = record.name.clone();
        if silos.insert(name.clone(), record.into_silo()).is_some() {
            return Err(IoError::DuplicateSilo(name));
        }
    }

    Ok(silos)
}

/// 從檔案載入筒倉映射
pub fn load_silos_from_path(path: impl AsRef<Path>) -> Result<BTreeMap<String, Silo>, IoError> {
    let json = std::fs::read_to_string(path)?;
    load_silos_from_str(&json)
}
