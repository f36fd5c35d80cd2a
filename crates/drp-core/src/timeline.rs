//! 庫存時間序列
//!
//! 嚴格的日資料點 schema：過去日只有實際庫存，未來日只有預估庫存，
//! 兩者恰有一個有值。序列化時另一側輸出 null，前端圖表依 key 分層繪製。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 資料點歸屬（今日歸入未來，為預估的第一天）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayKind {
    /// 過去日（實績）
    Past,
    /// 未來日（預估，含今日）
    Future,
}

/// 單日庫存資料點
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStockPoint {
    /// 日期
    pub date: NaiveDate,

    /// 過去／未來
    pub kind: DayKind,

    /// 實際庫存（僅過去日）
    pub inventory_actual: Option<i64>,

    /// 預估庫存（僅未來日，可為負）
    pub inventory_projected: Option<i64>,

    /// 需求預測（僅未來日）
    pub demand_forecast: Option<i64>,

    /// 當日到貨量（無到貨為 None）
    pub arrivals: Option<i64>,

    /// 當日出貨量（無出貨為 None）
    pub shipments: Option<i64>,
}

impl DailyStockPoint {
    /// 創建過去日資料點（只有實際庫存）
    pub fn past(date: NaiveDate, inventory_actual: i64) -> Self {
        Self {
            date,
            kind: DayKind::Past,
            inventory_actual: Some(inventory_actual),
            inventory_projected: None,
            demand_forecast: None,
            arrivals: None,
            shipments: None,
        }
    }

    /// 創建未來日資料點（只有預估庫存）
    pub fn future(date: NaiveDate, inventory_projected: i64) -> Self {
        Self {
            date,
            kind: DayKind::Future,
            inventory_actual: None,
            inventory_projected: Some(inventory_projected),
            demand_forecast: None,
            arrivals: None,
            shipments: None,
        }
    }

    /// 建構器模式：設置需求預測（僅未來日有意義）
    pub fn with_demand_forecast(mut self, qty: i64) -> Self {
        self.demand_forecast = Some(qty);
        self
    }

    /// 建構器模式：設置到貨量（0 視為無到貨）
    pub fn with_arrivals(mut self, qty: i64) -> Self {
        self.arrivals = (qty > 0).then_some(qty);
        self
    }

    /// 建構器模式：設置出貨量（0 視為無出貨）
    pub fn with_shipments(mut self, qty: i64) -> Self {
        self.shipments = (qty > 0).then_some(qty);
        self
    }

    /// 是否為過去日
    pub fn is_past(&self) -> bool {
        self.kind == DayKind::Past
    }

    /// 是否為未來日
    pub fn is_future(&self) -> bool {
        self.kind == DayKind::Future
    }

    /// 當日庫存水位（過去取實績、未來取預估）
    pub fn stock_level(&self) -> i64 {
        match self.kind {
            DayKind::Past => self.inventory_actual.unwrap_or(0),
            DayKind::Future => self.inventory_projected.unwrap_or(0),
        }
    }
}
