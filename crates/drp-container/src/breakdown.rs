//! 裝櫃明細報表
//!
//! 逐 SKU 列出佔用材積與佔全載比重，依小計材積由大到小排序。
//! 納入規則與箱數口徑跟 [`ContainerPlanner::plan`] 完全一致，
//! 明細加總永遠對得上整體指標。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use drp_core::Sku;

use crate::ContainerPlanner;

/// 選入理由（示意標注：缺貨優先與高週轉輪流）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionBasis {
    /// 避免缺貨（優先）
    AvoidStockout,
    /// 週轉率前段
    HighTurnover,
}

impl fmt::Display for SelectionBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AvoidStockout => write!(f, "避免缺貨（優先）"),
            Self::HighTurnover => write!(f, "週轉率前段"),
        }
    }
}

/// 單一 SKU 的裝櫃明細列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    /// SKU 編號
    pub sku_id: String,

    /// 品名
    pub sku_name: String,

    /// 生產工廠
    pub factory: String,

    /// 裝櫃箱數
    pub cases: u32,

    /// 單箱材積（m³）
    pub cbm_per_case: Decimal,

    /// 小計材積（m³）
    pub total_cbm: Decimal,

    /// 佔全載比重（%）
    pub occupancy_pct: Decimal,

    /// 選入理由
    pub basis: SelectionBasis,
}

/// 裝櫃明細報表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerBreakdown {
    /// 明細列（依小計材積由大到小）
    pub lines: Vec<BreakdownLine>,

    /// 合計材積（m³）
    pub total_cbm: Decimal,

    /// 40HQ 剩餘空間（m³，不為負）
    pub remaining_40hq: Decimal,
}

impl ContainerBreakdown {
    /// 產生裝櫃明細
    pub fn build(skus: &[Sku]) -> Self {
        let mut included: Vec<&Sku> = skus.iter().filter(|s| s.is_ordering).collect();

        let total_cbm: Decimal = included
            .iter()
            .map(|s| s.total_cbm(s.effective_order_qty()))
            .sum();

        included.sort_by(|a, b| {
            let cbm_a = a.total_cbm(a.effective_order_qty());
            let cbm_b = b.total_cbm(b.effective_order_qty());
            cbm_b.cmp(&cbm_a)
        });

        let hundred = Decimal::from(100);
        let lines = included
            .iter()
            .enumerate()
            .map(|(index, sku)| {
                let cases = sku.effective_order_qty();
                let line_cbm = sku.total_cbm(cases);
                let occupancy_pct = if total_cbm.is_zero() {
                    Decimal::ZERO
                } else {
                    line_cbm / total_cbm * hundred
                };

                BreakdownLine {
                    sku_id: sku.id.clone(),
                    sku_name: sku.name.clone(),
                    factory: sku.factory.clone(),
                    cases,
                    cbm_per_case: sku.cbm_per_case,
                    total_cbm: line_cbm,
                    occupancy_pct,
                    basis: if index % 2 == 0 {
                        SelectionBasis::AvoidStockout
                    } else {
                        SelectionBasis::HighTurnover
                    },
                }
            })
            .collect();

        let remaining_40hq = (ContainerPlanner::cap_40hq() - total_cbm).max(Decimal::ZERO);

        Self {
            lines,
            total_cbm,
            remaining_40hq,
        }
    }
}
