//! 決策輔助清單
//!
//! 從 SKU 快照衍生的兩種輕量清單：斷貨警示橫幅與 AI 風格的訂購
//! 提案。兩者都是純推導，不回寫任何狀態；真正的庫存走勢已由
//! 模擬器負責，這裡只做橫幅等級的粗估。

use std::fmt;

use chrono::{Duration, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use drp_core::Sku;

/// 橫幅最多顯示的警示筆數
const MAX_ALERTS: usize = 3;

/// 粗估斷貨天數的分子（天數 = 這個值 / 缺口量）
const STOCKOUT_ESTIMATE_BASE: i64 = 2000;

/// 預估斷貨警示
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockoutAlert {
    /// SKU 編號
    pub sku_id: String,
    /// 品名
    pub sku_name: String,
    /// 預估斷貨日
    pub expected_date: NaiveDate,
    /// 缺口量（箱）
    pub shortage: u32,
}

/// 斷貨警示清單
///
/// 缺口越大估計越早斷貨：天數 = 2000 / 缺口量，下限 2 天。
/// 依急迫程度排序後最多取 3 筆，橫幅放不下更多。
pub fn stockout_alerts(skus: &[Sku], reference_date: NaiveDate) -> Vec<StockoutAlert> {
    let mut alerts: Vec<(i64, StockoutAlert)> = skus
        .iter()
        .filter(|s| s.has_shortage())
        .map(|s| {
            let days_until = (STOCKOUT_ESTIMATE_BASE / i64::from(s.shortage)).max(2);
            let alert = StockoutAlert {
                sku_id: s.id.clone(),
                sku_name: s.name.clone(),
                expected_date: reference_date + Duration::days(days_until),
                shortage: s.shortage,
            };
            (days_until, alert)
        })
        .collect();

    alerts.sort_by_key(|(days_until, _)| *days_until);
    alerts.truncate(MAX_ALERTS);
    alerts.into_iter().map(|(_, alert)| alert).collect()
}

/// 提案理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalReason {
    /// 依目前消耗速度將跌破安全庫存
    StockoutRisk,
    /// 預測季節性需求走升
    SeasonalDemand,
}

impl fmt::Display for ProposalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProposalReason::StockoutRisk => write!(f, "庫存將跌破安全水位，有斷貨風險"),
            ProposalReason::SeasonalDemand => write!(f, "預測季節性需求走升"),
        }
    }
}

/// AI 風格的訂購提案
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProposal {
    /// 提案編號
    pub id: Uuid,
    /// SKU 編號
    pub sku_id: String,
    /// 品名
    pub sku_name: String,
    /// 估算目前庫存（箱）
    pub current_stock: u32,
    /// 建議訂購量（箱）
    pub suggested_qty: u32,
    /// 提案理由
    pub reason: ProposalReason,
    /// 信心水準（%）
    pub confidence: u8,
}

/// 訂購提案清單：一筆缺口 SKU 對應一筆提案
///
/// 估算庫存取缺口量的兩成（殘量粗估），建議量即缺口量本身，
/// 理由在兩種模板間輪替，信心水準落在 90–98%。
pub fn order_proposals<R: Rng + ?Sized>(skus: &[Sku], rng: &mut R) -> Vec<OrderProposal> {
    skus.iter()
        .filter(|s| s.has_shortage())
        .enumerate()
        .map(|(index, s)| OrderProposal {
            id: Uuid::new_v4(),
            sku_id: s.id.clone(),
            sku_name: s.name.clone(),
            current_stock: s.shortage / 5,
            suggested_qty: s.shortage,
            reason: if index % 2 == 0 {
                ProposalReason::StockoutRisk
            } else {
                ProposalReason::SeasonalDemand
            },
            confidence: 90 + rng.gen_range(0..9),
        })
        .collect()
}
