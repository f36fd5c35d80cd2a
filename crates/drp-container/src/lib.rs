//! # DRP Container
//!
//! 裝櫃計算：把訂購候選清單換算成貨櫃充填指標與裝櫃建議

pub mod breakdown;
pub mod planner;

// Re-export 主要類型
pub use breakdown::{BreakdownLine, ContainerBreakdown, SelectionBasis};
pub use planner::ContainerPlanner;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 裝櫃計算結果
///
/// 充填率是顯示值，封頂在 100%；超量判斷（`is_over_*`）
/// 用未封頂的材積比較，兩者刻意分開。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerMetrics {
    /// 合計箱數
    pub total_cases: u64,

    /// 合計材積（m³）
    pub total_cbm: Decimal,

    /// 40HQ 充填率（%，上限 100）
    pub fill_rate_40hq: Decimal,

    /// 20F 充填率（%，上限 100）
    pub fill_rate_20f: Decimal,

    /// 是否超過 40HQ 容量
    pub is_over_40hq: bool,

    /// 是否超過 20F 容量
    pub is_over_20f: bool,

    /// 裝櫃建議
    pub recommendation: LoadRecommendation,
}

/// 裝櫃建議
///
/// 四個分支互斥，依序判定：先判 40HQ 超量，再判充填率，
/// 再判 20F 裝不裝得下。條件有重疊，順序不可對調。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadRecommendation {
    /// 超過 40HQ 容量：分櫃或刪減低優先 SKU
    SplitOrTrim {
        /// 超出 40HQ 的材積（m³）
        overflow_cbm: Decimal,
    },

    /// 單一 40HQ 最佳（充填率 > 80%）
    Single40HqOptimal,

    /// 超過 20F 容量：改以 40HQ 混載
    Use40HqConsolidate,

    /// 單一 20F 已足夠
    Single20FSufficient,
}

impl fmt::Display for LoadRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SplitOrTrim { overflow_cbm } => write!(
                f,
                "40HQ × 1 裝不下（超出 {overflow_cbm:.1} m³）。請加掛 20F，或刪減低優先 SKU。"
            ),
            Self::Single40HqOptimal => write!(f, "裝入 40HQ × 1 最佳，充填率良好。"),
            Self::Use40HqConsolidate => {
                write!(f, "20F 裝不下。建議以 40HQ 混載，或增量填滿 40HQ。")
            }
            Self::Single20FSufficient => write!(f, "20F × 1 即可。"),
        }
    }
}
