//! # DRP Calculation Engine
//!
//! 補貨決策的計算核心：訂購量整批化、單品庫存模擬、
//! 據點彙總模擬與指標彙總。

pub mod baseline;
pub mod rounding;
pub mod simulator;
pub mod summarizer;

// Re-export 主要類型
pub use baseline::BaselineSimulator;
pub use rounding::{RoundingCalculator, StepDirection};
pub use simulator::InventorySimulator;
pub use summarizer::{MetricSummarizer, Metrics, StockStatus};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use drp_core::DailyStockPoint;

/// 單品庫存模擬結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// SKU 編號
    pub sku_id: String,

    /// 品名
    pub sku_name: String,

    /// 回看段 + 前瞻段的完整時間序列
    pub history: Vec<DailyStockPoint>,

    /// 序列層級的摘要值
    pub meta: SimulationMeta,

    /// 前瞻段偵測到的事件
    pub events: SimulationEvents,

    /// 是否為退路序列（輸入退化時的替代輸出）
    pub is_fallback: bool,
}

/// 模擬摘要值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationMeta {
    /// 今日庫存（回看／前瞻交界的水位）
    pub current_stock: i64,

    /// 前瞻段最低庫存（未評估任何未來日時為 0）
    pub min_stock: i64,
}

/// 前瞻段事件
///
/// 全部欄位都可能缺值：事件未發生（或前瞻段為空）時為 `None`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimulationEvents {
    /// 首次預估庫存轉負的日期
    pub stockout_date: Option<NaiveDate>,

    /// 首次轉負當日的缺口量（絕對值）
    pub stockout_qty: Option<i64>,

    /// 前瞻段最低庫存日（同值取最早）
    pub min_stock_date: Option<NaiveDate>,

    /// 前瞻段最低庫存水位
    pub min_stock_level: Option<i64>,

    /// 下一筆到貨日
    pub next_inbound_date: Option<NaiveDate>,

    /// 下一筆到貨量
    pub next_inbound_qty: Option<i64>,

    /// 下一次大量出貨日
    pub next_large_outbound_date: Option<NaiveDate>,

    /// 下一次大量出貨當日的出貨量
    pub next_large_outbound_qty: Option<i64>,
}

/// 據點彙總模擬結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineResult {
    /// 回看段 + 前瞻段的完整時間序列
    pub history: Vec<DailyStockPoint>,

    /// 今日庫存（回看段結束時的水位）
    pub current_stock: i64,

    /// 安全庫存
    pub safety_stock: i64,
}
