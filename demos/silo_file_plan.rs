//! 從 JSON 檔案載入筒倉定義的範例
//!
//! 用法：`cargo run --example silo_file_plan [silos.json]`
//! 未指定檔案時使用內建示範資料。

use berth_planner::{load_silos_from_path, load_silos_from_str, FixedRate, PlannerSettings, RouteOptimizer};
use chrono::NaiveDate;
use rust_decimal::Decimal;

const SAMPLE: &str = r#"{
    "silos": [
        {"name": "SILO-A", "capacity": 5000, "current_stock": 2000, "daily_usage": 200},
        {"name": "SILO-B", "capacity": 3000, "current_stock": 2800, "daily_usage": 600},
        {"name": "SILO-C", "capacity": 4000, "current_stock": 1000, "daily_usage": 100}
    ]
}"#;

fn main() -> anyhow::Result<()> {
    println!("===== Silo File Plan =====\n");

    // 步驟 1: 載入筒倉定義
    let silos = match std::env::args().nth(1) {
        Some(path) => {
            println!("[1] Load silos from {}", path);
            load_silos_from_path(&path)?
        }
        None => {
            println!("[1] Load built-in sample silos");
            load_silos_from_str(SAMPLE)?
        }
    };
    println!("    Loaded {} silos\n", silos.len());

    // 步驟 2: 規劃設定與最佳化
    println!("[2] Optimize");
    let settings = PlannerSettings::new(
        2,
        Decimal::from(10000),
        Decimal::from(1000),
        NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
    );
    let optimizer = RouteOptimizer::new(
        silos,
        settings,
        Box::new(FixedRate::new(Decimal::from(150))),
    );
    let result = optimizer.optimize()?;

    // 步驟 3: 顯示結果
    println!("[3] Results ({} feasible / {} candidates)\n", result.feasible_count, result.total_candidates);
    for (rank, evaluation) in result.top(10).iter().enumerate() {
        println!(
            "    #{:<2} {} | ${} / ¥{}",
            rank + 1,
            evaluation.route,
            evaluation.total_cost_usd,
            evaluation.total_cost_jpy
        );
    }

    Ok(())
}
