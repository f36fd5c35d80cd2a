//! 單品庫存模擬
//!
//! 以基準日（今日）為原點，回看 `past_days` 天、前瞻 `future_days` 天，
//! 逐日滾動庫存：`庫存 = 前日庫存 + 當日到貨 - 當日出貨`。
//! 回看段輸出實績、前瞻段輸出預估，並在前瞻段偵測斷貨、最低點、
//! 下一筆到貨與大量出貨等事件。

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use drp_core::{DailyStockPoint, SimulationProfile, Sku, StartRegime};

use crate::{SimulationEvents, SimulationMeta, SimulationResult};

/// 退路序列長度（天）
const FALLBACK_DAYS: i64 = 60;

/// 是否為週末（需求增量日）
pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 單品庫存模擬器
pub struct InventorySimulator;

impl InventorySimulator {
    /// 執行模擬
    ///
    /// 亂數來源由呼叫端注入；要重現結果請用 [`simulate_seeded`]。
    ///
    /// [`simulate_seeded`]: Self::simulate_seeded
    pub fn simulate<R: Rng + ?Sized>(
        sku: &Sku,
        reference_date: NaiveDate,
        profile: &SimulationProfile,
        rng: &mut R,
    ) -> SimulationResult {
        let regime = SimulationProfile::regime_for(sku.shortage);
        let total_days = profile.total_days();

        tracing::debug!(
            "開始單品庫存模擬: {} ({:?}，視窗 {} 天)",
            sku.id,
            regime,
            total_days
        );

        let demand_min = profile.base_demand_min;
        let demand_max = profile.base_demand_max.max(demand_min);

        let mut stock = profile.start_stock(regime);
        let mut points: Vec<DailyStockPoint> = Vec::with_capacity(total_days as usize);
        let mut events = SimulationEvents::default();
        let mut min_tracker: Option<(i64, NaiveDate)> = None;

        for i in 0..total_days {
            let day_offset = i64::from(i) - i64::from(profile.past_days);
            let date = reference_date + Duration::days(day_offset);
            let is_future = day_offset >= 0;

            // 每日需求：基礎區間 + 週末增量
            let mut demand = rng.gen_range(demand_min..=demand_max);
            if is_weekend(date) {
                demand += profile.weekend_uplift;
            }

            // 常態週期到貨（缺口情境下暫停，等補救到貨）
            let mut arrival: i64 = 0;
            if profile.arrival_cycle_days > 0 && i % profile.arrival_cycle_days == 0 && i != 0 {
                arrival = match regime {
                    StartRegime::Shortage => 0,
                    StartRegime::Healthy => profile.cycle_arrival_qty,
                };
            }

            // 缺口情境：固定在補救日進一筆大貨
            if regime == StartRegime::Shortage && day_offset == profile.recovery_offset_days {
                arrival = profile.recovery_arrival_qty;
                events.next_inbound_date = Some(date);
                events.next_inbound_qty = Some(arrival);
            }
            if regime == StartRegime::Healthy
                && is_future
                && arrival > 0
                && events.next_inbound_date.is_none()
            {
                events.next_inbound_date = Some(date);
                events.next_inbound_qty = Some(arrival);
            }

            // 出貨 = 需求（簡化：需求全數出貨）
            let mut shipment = demand;
            if regime == StartRegime::Healthy && day_offset == profile.large_outbound_offset {
                shipment += profile.large_outbound_extra;
                if is_future {
                    events.next_large_outbound_date = Some(date);
                    events.next_large_outbound_qty = Some(shipment);
                }
            }

            stock = stock + arrival - shipment;

            // 事件只看前瞻段
            if is_future {
                if stock < 0 && events.stockout_date.is_none() {
                    events.stockout_date = Some(date);
                    events.stockout_qty = Some(-stock);
                }
                let is_new_min = match min_tracker {
                    None => true,
                    Some((level, _)) => stock < level,
                };
                if is_new_min {
                    min_tracker = Some((stock, date));
                }
            }

            let point = if is_future {
                DailyStockPoint::future(date, stock)
                    .with_demand_forecast(demand)
                    .with_arrivals(arrival)
                    .with_shipments(shipment)
            } else {
                DailyStockPoint::past(date, stock)
                    .with_arrivals(arrival)
                    .with_shipments(shipment)
            };
            points.push(point);
        }

        if points.is_empty() {
            tracing::warn!("模擬視窗為零天: {}，改用退路序列", sku.id);
            return Self::fallback_result(sku, reference_date);
        }

        if let Some((level, date)) = min_tracker {
            events.min_stock_level = Some(level);
            events.min_stock_date = Some(date);
        }

        // 今日庫存：交界日的預估值，回退到最後一個實績值
        let boundary = profile.past_days as usize;
        let current_stock = points
            .get(boundary)
            .and_then(|p| p.inventory_projected)
            .or_else(|| {
                boundary
                    .checked_sub(1)
                    .and_then(|i| points.get(i))
                    .and_then(|p| p.inventory_actual)
            })
            .unwrap_or(0);

        let min_stock = events.min_stock_level.unwrap_or(0);

        tracing::info!(
            "單品庫存模擬完成: {}，今日庫存 {}，前瞻最低 {}，斷貨日 {:?}",
            sku.id,
            current_stock,
            min_stock,
            events.stockout_date
        );

        SimulationResult {
            sku_id: sku.id.clone(),
            sku_name: sku.name.clone(),
            history: points,
            meta: SimulationMeta {
                current_stock,
                min_stock,
            },
            events,
            is_fallback: false,
        }
    }

    /// 以固定種子執行模擬（結果可重現）
    pub fn simulate_seeded(
        sku: &Sku,
        reference_date: NaiveDate,
        profile: &SimulationProfile,
        seed: u64,
    ) -> SimulationResult {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::simulate(sku, reference_date, profile, &mut rng)
    }

    /// 退路序列：輸入退化到產不出任何資料點時的替代輸出
    ///
    /// 只有前瞻段、固定長度、線性遞減，讓前端至少有東西可畫；
    /// `is_fallback` 旗標讓呼叫端能標示這不是真的模擬結果。
    fn fallback_result(sku: &Sku, reference_date: NaiveDate) -> SimulationResult {
        let history: Vec<DailyStockPoint> = (0..FALLBACK_DAYS)
            .map(|i| {
                DailyStockPoint::future(reference_date + Duration::days(i), 100 - i)
                    .with_demand_forecast(1)
            })
            .collect();

        let current_stock = history
            .first()
            .and_then(|p| p.inventory_projected)
            .unwrap_or(0);

        SimulationResult {
            sku_id: sku.id.clone(),
            sku_name: sku.name.clone(),
            history,
            meta: SimulationMeta {
                current_stock,
                min_stock: 0,
            },
            events: SimulationEvents::default(),
            is_fallback: true,
        }
    }
}
