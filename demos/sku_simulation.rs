//! 單品庫存模擬示例

use chrono::NaiveDate;
use drp::{
    BaselineProfile, BaselineSimulator, InventorySimulator, MetricSummarizer, ProductCatalog,
    SimulationProfile, StockStatus,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 顯示 crate 內部的 tracing 訊息
    tracing_subscriber::fmt::init();

    println!("=== 單品庫存模擬示例 ===\n");

    let catalog = ProductCatalog::demo();
    let today = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
    let profile = SimulationProfile::default();

    // 缺口 SKU：缺貨階段（常態到貨停擺，第 25 個前瞻日補救到貨）
    let shortage_sku = catalog.resolve_sku("car_interior", "NK-DH-001")?;
    let result = InventorySimulator::simulate_seeded(&shortage_sku, today, &profile, 42);

    println!("SKU: {} {}", result.sku_id, result.sku_name);
    println!("  今日庫存: {} 箱", result.meta.current_stock);
    println!("  前瞻最低: {} 箱", result.meta.min_stock);
    if let Some(date) = result.events.stockout_date {
        println!("  預估斷貨日: {}", date);
    }
    if let (Some(date), Some(qty)) =
        (result.events.next_inbound_date, result.events.next_inbound_qty)
    {
        println!("  下一筆到貨: {}（{} 箱）", date, qty);
    }

    let metrics = MetricSummarizer::summarize(&result.history, 500)?;
    println!(
        "  近 7 日需求 {} 箱 / 近 7 日到貨 {} 箱",
        metrics.forecast_week, metrics.inbound_week
    );
    print_status(metrics.status);
    println!();

    // 健康 SKU：約每 20 天一班的週期到貨
    let healthy_sku = catalog.resolve_sku("car_interior", "NK-HL-055")?;
    let result = InventorySimulator::simulate_seeded(&healthy_sku, today, &profile, 42);

    println!("SKU: {} {}", result.sku_id, result.sku_name);
    println!("  今日庫存: {} 箱", result.meta.current_stock);
    if let (Some(date), Some(qty)) =
        (result.events.next_inbound_date, result.events.next_inbound_qty)
    {
        println!("  下一筆到貨: {}（{} 箱）", date, qty);
    }
    if let Some(date) = result.events.next_large_outbound_date {
        println!("  下一次大量出貨: {}", date);
    }

    let metrics = MetricSummarizer::summarize(&result.history, 500)?;
    print_status(metrics.status);
    println!();

    // 據點彙總（全品項合計視角）
    let baseline = BaselineSimulator::simulate_seeded(today, &BaselineProfile::default(), 42);
    println!(
        "據點彙總: 今日 {} 箱（安全庫存 {} 箱）",
        baseline.current_stock, baseline.safety_stock
    );

    Ok(())
}

fn print_status(status: StockStatus) {
    match status {
        StockStatus::Critical => println!("  狀態: 危險（前瞻庫存轉負）"),
        StockStatus::Warning => println!("  狀態: 警戒（低於安全庫存）"),
        StockStatus::Ok => println!("  狀態: 正常"),
    }
}
