//! SKU 主檔模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// SKU（最小存貨單位）
///
/// 同時攜帶靜態主檔屬性（箱規、訂購限制）與本次補貨作業的
/// 即時狀態（缺口、是否納入訂購、擬訂購量）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sku {
    /// SKU 編號
    pub id: String,

    /// 品名
    pub name: String,

    /// 品類
    pub category: String,

    /// 生產工廠
    pub factory: String,

    /// 箱入數（pcs/箱）
    pub case_size: u32,

    /// 單箱材積（m³）
    pub cbm_per_case: Decimal,

    /// 訂購批量（箱）
    pub order_lot_cs: u32,

    /// 最小訂購量（箱），0 表示無限制
    pub moq_cs: u32,

    /// 目前缺口（箱），0 表示無缺口
    pub shortage: u32,

    /// 生命週期分類（常銷／季節／次常銷）
    pub lifecycle: String,

    /// 週轉率分級
    pub turnover: String,

    /// 是否納入本次訂購
    ///
    /// 目錄原始資料預設納入，開啟補貨作業時依缺口狀態重設。
    pub is_ordering: bool,

    /// 擬訂購量（箱）
    ///
    /// `None` 表示尚未進入訂購流程，裝櫃計算回退採用缺口量；
    /// `Some(0)` 則是已明確調整為不訂購任何數量。
    pub order_qty: Option<u32>,
}

impl Sku {
    /// 創建新的 SKU
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            factory: String::new(),
            case_size: 1,
            cbm_per_case: Decimal::ZERO,
            order_lot_cs: 1,
            moq_cs: 0,
            shortage: 0,
            lifecycle: String::new(),
            turnover: String::new(),
            is_ordering: true,
            order_qty: None,
        }
    }

    /// 建構器模式：設置品類
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// 建構器模式：設置生產工廠
    pub fn with_factory(mut self, factory: impl Into<String>) -> Self {
        self.factory = factory.into();
        self
    }

    /// 建構器模式：設置箱規（箱入數與單箱材積）
    pub fn with_case_spec(mut self, case_size: u32, cbm_per_case: Decimal) -> Self {
        self.case_size = case_size;
        self.cbm_per_case = cbm_per_case;
        self
    }

    /// 建構器模式：設置訂購限制（批量與最小訂購量）
    pub fn with_order_constraints(mut self, order_lot_cs: u32, moq_cs: u32) -> Self {
        self.order_lot_cs = order_lot_cs;
        self.moq_cs = moq_cs;
        self
    }

    /// 建構器模式：設置目前缺口
    pub fn with_shortage(mut self, shortage: u32) -> Self {
        self.shortage = shortage;
        self
    }

    /// 建構器模式：設置生命週期與週轉率分級
    pub fn with_classification(
        mut self,
        lifecycle: impl Into<String>,
        turnover: impl Into<String>,
    ) -> Self {
        self.lifecycle = lifecycle.into();
        self.turnover = turnover.into();
        self
    }

    /// 訂購批量（0 視為 1，避免除以零）
    pub fn lot_cs(&self) -> u32 {
        self.order_lot_cs.max(1)
    }

    /// 是否有缺口
    pub fn has_shortage(&self) -> bool {
        self.shortage > 0
    }

    /// 本次裝櫃採用的箱數
    ///
    /// 已進入訂購流程時取擬訂購量（即使是 0），否則回退到缺口量。
    pub fn effective_order_qty(&self) -> u32 {
        self.order_qty.unwrap_or(self.shortage)
    }

    /// 指定箱數佔用的材積（m³）
    pub fn total_cbm(&self, cases: u32) -> Decimal {
        Decimal::from(cases) * self.cbm_per_case
    }
}
