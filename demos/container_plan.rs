//! # 裝櫃試算完整範例
//!
//! 這個範例展示一次補貨作業的完整流程：
//! - 範圍：中國寧波第2工廠群 × 車內舒適與收納用品
//! - 預設訂購：缺口 SKU 自動納入並整批化
//! - 調整：剔除、步進、直接改量
//! - 輸出：裝櫃指標、明細報表、斷貨警示與訂購提案

use chrono::NaiveDate;
use drp::*;
use rand::{rngs::StdRng, SeedableRng};

fn main() -> Result<()> {
    println!("🚢 ===== 裝櫃試算範例 =====");
    println!();

    // ========== 1. 開啟補貨作業 ==========
    println!("📋 步驟 1: 開啟補貨作業");
    let catalog = ProductCatalog::demo();
    let today = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
    let mut session = PlanningSession::open(&catalog, "ningbo_2", "car_interior", today)?;

    let scope = session.scope();
    println!("   工廠: {}", scope.factory_name);
    println!("   系列: {}（{} SKU）", scope.product_series, scope.total_skus);
    println!("   限制: {}", scope.constraints);
    println!();

    // ========== 2. 預設訂購清單 ==========
    println!("📦 步驟 2: 預設訂購清單（缺口自動整批化）");
    print_order_lines(&session);
    println!();

    // ========== 3. 初始裝櫃指標 ==========
    println!("🧮 步驟 3: 初始裝櫃指標");
    print_container(session.container());
    println!();

    // ========== 4. 調整訂購內容 ==========
    println!("✏️  步驟 4: 調整訂購內容");

    session.toggle_ordering("NK-SS-305");
    println!(
        "   ✓ 剔除 NK-SS-305（遮陽板）→ {} m³",
        session.container().total_cbm
    );

    session.step_order_qty("NK-DH-001", StepDirection::Increment);
    println!(
        "   ✓ NK-DH-001 加一批 → {} m³",
        session.container().total_cbm
    );

    session.set_order_qty("NK-TB-210", 200);
    println!(
        "   ✓ NK-TB-210 改量 200 箱 → {} m³",
        session.container().total_cbm
    );
    println!();

    // ========== 5. 調整後裝櫃指標 ==========
    println!("🧮 步驟 5: 調整後裝櫃指標");
    print_container(session.container());
    println!();

    // ========== 6. 裝櫃明細報表 ==========
    println!("📊 步驟 6: 裝櫃明細報表（材積由大到小）");
    let breakdown = session.breakdown();
    for line in &breakdown.lines {
        println!(
            "   {} | {} 箱 × {} m³ = {} m³（{:.1}%）｜{}",
            line.sku_id,
            line.cases,
            line.cbm_per_case,
            line.total_cbm,
            line.occupancy_pct,
            line.basis
        );
    }
    println!("   40HQ 剩餘空間: {} m³", breakdown.remaining_40hq);
    println!();

    // ========== 7. 警示與提案 ==========
    println!("⚠️  步驟 7: 斷貨警示與訂購提案");
    for alert in session.stockout_alerts() {
        println!(
            "   ⚠ {}（{}）預估 {} 斷貨，缺口 {} 箱",
            alert.sku_id, alert.sku_name, alert.expected_date, alert.shortage
        );
    }

    let mut rng = StdRng::seed_from_u64(42);
    for proposal in session.order_proposals(&mut rng) {
        println!(
            "   💡 {} 建議訂 {} 箱（{}，信心 {}%）",
            proposal.sku_id, proposal.suggested_qty, proposal.reason, proposal.confidence
        );
    }
    println!();

    println!("✅ 裝櫃試算完成！");
    Ok(())
}

/// 列出目前納入訂購的 SKU
fn print_order_lines(session: &PlanningSession) {
    for sku in session.skus().iter().filter(|s| s.is_ordering) {
        println!(
            "   ✓ {} {} | 缺口 {} 箱 → 擬訂 {} 箱（批量 {}、MOQ {}）",
            sku.id,
            sku.name,
            sku.shortage,
            sku.effective_order_qty(),
            sku.order_lot_cs,
            sku.moq_cs
        );
    }
}

/// 顯示裝櫃指標與建議
fn print_container(metrics: &ContainerMetrics) {
    println!(
        "   合計: {} 箱 / {} m³",
        metrics.total_cases, metrics.total_cbm
    );
    println!(
        "   40HQ 裝載率 {:.1}%｜20F 裝載率 {:.1}%",
        metrics.fill_rate_40hq, metrics.fill_rate_20f
    );
    println!("   建議: {}", metrics.recommendation);
}
