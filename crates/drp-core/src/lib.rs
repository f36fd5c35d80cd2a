//! # DRP Core
//!
//! 補貨決策引擎的核心資料模型與類型定義

pub mod catalog;
pub mod profile;
pub mod sku;
pub mod timeline;

// Re-export 主要類型
pub use catalog::{Factory, PlanningScope, ProductCatalog, Series};
pub use profile::{BaselineProfile, SimulationProfile, StartRegime};
pub use sku::Sku;
pub use timeline::{DailyStockPoint, DayKind};

/// DRP 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum DrpError {
    #[error("時間序列沒有未來日，無法計算彙總指標")]
    EmptyTimeline,

    #[error("產品目錄為空，無法解析任何項目")]
    EmptyCatalog,

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, DrpError>;
