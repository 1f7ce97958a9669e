//! 運穀船泊位航線最佳化完整範例
//!
//! 展示從筒倉設定到快照保存的完整流程

use berth_planner::{
    candidate_route_count, snapshot_file_name, CachedRate, PlanSnapshot, PlannerSettings,
    RouteOptimizer, Silo,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    println!("===== Corn Ship Berth Route Optimization =====\n");

    // 步驟 1: 設定筒倉
    println!("[1] Configure Silos");
    let silos = create_harbor_silos();
    for silo in &silos {
        let rate = silo
            .fill_rate()
            .map(|r| format!("{:.1}%", r * Decimal::from(100)))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "    {}: capacity {} | stock {} | usage/day {} | fill {}",
            silo.name, silo.capacity, silo.current_stock, silo.daily_usage, rate
        );
    }
    println!();

    // 步驟 2: 規劃設定
    println!("[2] Planner Settings");
    let start_date = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
    let settings = PlannerSettings::new(
        3,
        Decimal::from(10000),
        Decimal::from(1000),
        start_date,
    );
    println!("    Max berth changes: 3");
    println!("    Berth change cost: $10,000");
    println!("    Delivery capacity per berth: 1,000");
    println!("    Start date: {}\n", start_date);

    // 步驟 3: 搜尋空間確認（階乘級成長，由呼叫端把關）
    println!("[3] Search Space");
    let space = candidate_route_count(silos.len(), settings.max_berth_changes);
    println!("    Candidate routes: {}\n", space);

    // 步驟 4: 匯率（外部查詢，行程內快取一次）
    println!("[4] Exchange Rate");
    let rate_provider = CachedRate::new(|| Decimal::from(150));
    println!("    USD/JPY: 150.00\n");

    // 步驟 5: 執行最佳化
    println!("[5] Run Optimization");
    let optimizer = RouteOptimizer::from_silos(silos.clone(), settings.clone(), Box::new(rate_provider));
    let result = optimizer.optimize()?;
    println!(
        "    Candidates: {} | Feasible: {} | Elapsed: {} ms\n",
        result.total_candidates,
        result.feasible_count,
        result.calculation_time_ms.unwrap_or(0)
    );

    // 步驟 6: 顯示前 10 名
    println!("[6] Top Routes");
    if result.is_empty() {
        println!("    (no feasible route)");
        return Ok(());
    }

    for (rank, evaluation) in result.top(10).iter().enumerate() {
        println!(
            "    #{:<2} {} | changes {} | ${} / ¥{}",
            rank + 1,
            evaluation.route,
            evaluation.berth_changes(),
            evaluation.total_cost_usd,
            evaluation.total_cost_jpy
        );
    }
    println!();

    // 步驟 7: 最佳航線的逐站明細
    println!("[7] Best Route Schedule");
    if let Some(best) = result.best() {
        for detail in &best.details {
            let date = detail
                .delivery_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "N/A".to_string());
            println!(
                "    {} | date {} | delivered {} | available {}",
                detail.berth, date, detail.delivered_amount, detail.available_capacity
            );
        }
    }
    println!();

    // 步驟 8: 保存快照（前 5 名）
    println!("[8] Save Snapshot");
    let snapshot = PlanSnapshot::new(settings, silos, result.top(5).to_vec());
    let file_name = snapshot_file_name(start_date);
    berth_planner::save_snapshot(&file_name, &snapshot)?;
    println!("    Saved: {}\n", file_name);

    println!("===== Optimization Complete =====");

    Ok(())
}

/// 建立港口筒倉群
fn create_harbor_silos() -> Vec<Silo> {
    vec![
        Silo::new(
            "SILO-NORTH".to_string(),
            Decimal::from(5000),
            Decimal::from(2000),
            Decimal::from(200),
        ),
        Silo::new(
            "SILO-SOUTH".to_string(),
            Decimal::from(4000),
            Decimal::from(3500),
            Decimal::from(500),
        ),
        Silo::new(
            "SILO-EAST".to_string(),
            Decimal::from(6000),
            Decimal::from(1000),
            Decimal::from(100),
        ),
        Silo::new(
            "SILO-WEST".to_string(),
            Decimal::from(3000),
            Decimal::from(2900),
            Decimal::from(50),
        ),
        Silo::new(
            "SILO-CENTER".to_string(),
            Decimal::from(8000),
            Decimal::from(4000),
            Decimal::from(300),
        ),
    ]
}
