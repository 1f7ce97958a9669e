//! # Berth IO
//!
//! 筒倉定義的檔案匯入與規劃快照的檔案匯出

pub mod export;
pub mod import;

// Re-export 主要類型
pub use export::{save_snapshot, snapshot_file_name, snapshot_to_json};
pub use import::{load_silos_from_path, load_silos_from_str, SiloFile, SiloRecord};

use rust_decimal::Decimal;

/// 匯入/匯出錯誤類型
///
/// 格式與驗證問題在核心運行前就在這一層浮現（核心假設資料已完備）。
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("檔案讀寫失敗: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON 解析失敗: {0}")]
    Json(#[from] serde_json::Error),

    #[error("筒倉名稱重複: {0}")]
    DuplicateSilo(String),

    #[error("筒倉 {name} 的 {field} 不可為負: {value}")]
    NegativeValue {
        name: String,
        field: &'static str,
        value: Decimal,
    },
}
