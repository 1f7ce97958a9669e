//! 運穀船泊位航線最佳化最小範例
//!
//! 兩座筒倉、固定匯率，展示從設定到排名的最短路徑

use berth_planner::{FixedRate, PlannerSettings, RouteOptimizer, Silo};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    println!("===== Berth Route Planning (Simple) =====\n");

    let silos = vec![
        Silo::new(
            "SILO-A".to_string(),
            Decimal::from(1000),
            Decimal::ZERO,
            Decimal::ZERO,
        ),
        Silo::new(
            "SILO-B".to_string(),
            Decimal::from(1000),
            Decimal::ZERO,
            Decimal::ZERO,
        ),
    ];

    let settings = PlannerSettings::new(
        1,
        Decimal::from(100),
        Decimal::from(500),
        NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
    );

    let optimizer = RouteOptimizer::from_silos(
        silos,
        settings,
        Box::new(FixedRate::new(Decimal::from(150))),
    );

    let result = optimizer.optimize()?;

    println!(
        "Candidates: {} | Feasible: {}\n",
        result.total_candidates, result.feasible_count
    );

    for (rank, evaluation) in result.ranked.iter().enumerate() {
        println!(
            "  #{} {} | Cost: ${} / ¥{}",
            rank + 1,
            evaluation.route,
            evaluation.total_cost_usd,
            evaluation.total_cost_jpy
        );
    }

    Ok(())
}
