//! # DRP 補貨決策引擎
//!
//! 面向補貨作業的決策支援核心：單品庫存走勢模擬、彙總指標、
//! 訂購量整批化與貨櫃裝載建議。計算全部是純函數，亂數一律由
//! 呼叫端注入，同一組輸入保證產出同一組結果。
//!
//! 本 crate 是對外門面，實作分佈在三個子 crate：
//! - `drp-core`：資料模型（SKU、時間序列、模擬參數、產品目錄）
//! - `drp-calc`：整批化、庫存模擬與指標彙總
//! - `drp-container`：裝櫃計算與明細報表
//!
//! ## 快速開始
//!
//! ```
//! use chrono::NaiveDate;
//! use drp::{PlanningSession, ProductCatalog};
//!
//! let catalog = ProductCatalog::demo();
//! let today = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
//!
//! let session = PlanningSession::open(&catalog, "ningbo_2", "car_interior", today).unwrap();
//! println!("裝載 {} m³", session.container().total_cbm);
//! ```

pub mod advisory;
pub mod session;

// Re-export 主要類型
pub use advisory::{order_proposals, stockout_alerts, OrderProposal, ProposalReason, StockoutAlert};
pub use session::{apply_qty_step, apply_sku_change, MasterField, PlanningSession, SkuChange};

pub use drp_core::{
    BaselineProfile, DailyStockPoint, DayKind, DrpError, Factory, PlanningScope, ProductCatalog,
    Result, Series, SimulationProfile, Sku, StartRegime,
};

pub use drp_calc::{
    BaselineResult, BaselineSimulator, InventorySimulator, MetricSummarizer, Metrics,
    RoundingCalculator, SimulationEvents, SimulationMeta, SimulationResult, StepDirection,
    StockStatus,
};

pub use drp_container::{
    BreakdownLine, ContainerBreakdown, ContainerMetrics, ContainerPlanner, LoadRecommendation,
    SelectionBasis,
};
