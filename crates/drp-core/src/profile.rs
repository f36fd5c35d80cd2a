//! 模擬參數配置
//!
//! 單品與據點兩種模擬的節奏參數。預設值即示範情境；
//! 所有「第幾天」的偏移都以基準日（今日）為原點。

use serde::{Deserialize, Serialize};

/// 起始情境：依 SKU 缺口狀態決定模擬起點
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartRegime {
    /// 缺口中：低庫存起步，常態到貨暫停，等待一筆補救到貨
    Shortage,
    /// 健康：高庫存起步，維持週期性到貨
    Healthy,
}

/// 單一 SKU 庫存模擬參數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationProfile {
    /// 回看天數
    pub past_days: u32,

    /// 前瞻天數
    pub future_days: u32,

    /// 每日基礎需求下限（含）
    pub base_demand_min: i64,

    /// 每日基礎需求上限（含）
    pub base_demand_max: i64,

    /// 週末需求增量
    pub weekend_uplift: i64,

    /// 常態到貨週期（天，自序列起點起算；0 表示停用）
    pub arrival_cycle_days: u32,

    /// 週期到貨量
    pub cycle_arrival_qty: i64,

    /// 補救到貨日（缺口情境，相對基準日）
    pub recovery_offset_days: i64,

    /// 補救到貨量
    pub recovery_arrival_qty: i64,

    /// 大量出貨日（健康情境，相對基準日）
    pub large_outbound_offset: i64,

    /// 大量出貨增量
    pub large_outbound_extra: i64,

    /// 缺口情境起始庫存
    pub shortage_start_stock: i64,

    /// 健康情境起始庫存
    pub healthy_start_stock: i64,
}

impl Default for SimulationProfile {
    fn default() -> Self {
        Self {
            past_days: 30,
            future_days: 90,
            base_demand_min: 10,
            base_demand_max: 29,
            weekend_uplift: 15,
            arrival_cycle_days: 20,
            cycle_arrival_qty: 800,
            recovery_offset_days: 25,
            recovery_arrival_qty: 1000,
            large_outbound_offset: 10,
            large_outbound_extra: 300,
            shortage_start_stock: 300,
            healthy_start_stock: 2500,
        }
    }
}

impl SimulationProfile {
    /// 創建預設參數
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置模擬視窗（回看／前瞻天數）
    pub fn with_window(mut self, past_days: u32, future_days: u32) -> Self {
        self.past_days = past_days;
        self.future_days = future_days;
        self
    }

    /// 建構器模式：設置每日基礎需求範圍（含上下限）
    pub fn with_demand_range(mut self, min: i64, max: i64) -> Self {
        self.base_demand_min = min;
        self.base_demand_max = max;
        self
    }

    /// 建構器模式：設置週末需求增量
    pub fn with_weekend_uplift(mut self, uplift: i64) -> Self {
        self.weekend_uplift = uplift;
        self
    }

    /// 建構器模式：設置常態到貨週期與數量
    pub fn with_arrival_cycle(mut self, cycle_days: u32, qty: i64) -> Self {
        self.arrival_cycle_days = cycle_days;
        self.cycle_arrival_qty = qty;
        self
    }

    /// 建構器模式：設置補救到貨（缺口情境）
    pub fn with_recovery_arrival(mut self, offset_days: i64, qty: i64) -> Self {
        self.recovery_offset_days = offset_days;
        self.recovery_arrival_qty = qty;
        self
    }

    /// 建構器模式：設置大量出貨事件（健康情境）
    pub fn with_large_outbound(mut self, offset_days: i64, extra_qty: i64) -> Self {
        self.large_outbound_offset = offset_days;
        self.large_outbound_extra = extra_qty;
        self
    }

    /// 建構器模式：設置兩種情境的起始庫存
    pub fn with_start_stock(mut self, shortage: i64, healthy: i64) -> Self {
        self.shortage_start_stock = shortage;
        self.healthy_start_stock = healthy;
        self
    }

    /// 總模擬天數
    pub fn total_days(&self) -> u32 {
        self.past_days + self.future_days
    }

    /// 依缺口量選擇起始情境
    pub fn regime_for(shortage: u32) -> StartRegime {
        if shortage > 0 {
            StartRegime::Shortage
        } else {
            StartRegime::Healthy
        }
    }

    /// 情境對應的起始庫存
    pub fn start_stock(&self, regime: StartRegime) -> i64 {
        match regime {
            StartRegime::Shortage => self.shortage_start_stock,
            StartRegime::Healthy => self.healthy_start_stock,
        }
    }
}

/// 據點彙總模擬參數（全品項合計的出入庫節奏）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineProfile {
    /// 回看天數
    pub past_days: u32,

    /// 前瞻天數
    pub future_days: u32,

    /// 過去日出貨量下限（含）
    pub past_outbound_min: i64,

    /// 過去日出貨量上限（含）
    pub past_outbound_max: i64,

    /// 過去段入庫週期（天；0 表示停用）
    pub past_inbound_cycle: u32,

    /// 過去段入庫量
    pub past_inbound_qty: i64,

    /// 未來日需求預測下限（含）
    pub forecast_min: i64,

    /// 未來日需求預測上限（含）
    pub forecast_max: i64,

    /// 週末需求增量
    pub weekend_uplift: i64,

    /// 已確認訂單涵蓋天數（自基準日起）
    pub confirmed_days: u32,

    /// 已確認訂單相對預測的比例（百分比）
    pub confirmed_ratio_pct: i64,

    /// 既定到貨日（相對基準日）
    pub scheduled_inbound_offset: i64,

    /// 既定到貨量
    pub scheduled_inbound_qty: i64,

    /// 起始庫存
    pub start_stock: i64,

    /// 安全庫存
    pub safety_stock: i64,
}

impl Default for BaselineProfile {
    fn default() -> Self {
        Self {
            past_days: 28,
            future_days: 56,
            past_outbound_min: 50,
            past_outbound_max: 199,
            past_inbound_cycle: 14,
            past_inbound_qty: 1200,
            forecast_min: 80,
            forecast_max: 199,
            weekend_uplift: 60,
            confirmed_days: 14,
            confirmed_ratio_pct: 95,
            scheduled_inbound_offset: 25,
            scheduled_inbound_qty: 2000,
            start_stock: 2500,
            safety_stock: 800,
        }
    }
}

impl BaselineProfile {
    /// 創建預設參數
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置模擬視窗（回看／前瞻天數）
    pub fn with_window(mut self, past_days: u32, future_days: u32) -> Self {
        self.past_days = past_days;
        self.future_days = future_days;
        self
    }

    /// 建構器模式：設置過去日出貨量範圍
    pub fn with_outbound_range(mut self, min: i64, max: i64) -> Self {
        self.past_outbound_min = min;
        self.past_outbound_max = max;
        self
    }

    /// 建構器模式：設置過去段入庫節奏
    pub fn with_past_inbound(mut self, cycle_days: u32, qty: i64) -> Self {
        self.past_inbound_cycle = cycle_days;
        self.past_inbound_qty = qty;
        self
    }

    /// 建構器模式：設置未來日需求預測範圍
    pub fn with_forecast_range(mut self, min: i64, max: i64) -> Self {
        self.forecast_min = min;
        self.forecast_max = max;
        self
    }

    /// 建構器模式：設置已確認訂單的涵蓋天數與比例
    pub fn with_confirmed_orders(mut self, days: u32, ratio_pct: i64) -> Self {
        self.confirmed_days = days;
        self.confirmed_ratio_pct = ratio_pct;
        self
    }

    /// 建構器模式：設置既定到貨
    pub fn with_scheduled_inbound(mut self, offset_days: i64, qty: i64) -> Self {
        self.scheduled_inbound_offset = offset_days;
        self.scheduled_inbound_qty = qty;
        self
    }

    /// 建構器模式：設置起始庫存與安全庫存
    pub fn with_stock_levels(mut self, start: i64, safety: i64) -> Self {
        self.start_stock = start;
        self.safety_stock = safety;
        self
    }
}
