//! 據點彙總模擬
//!
//! 把整個據點（全品項合計）的出入庫節奏攤成一條時間序列，
//! 供儀表板頂部的彙總指標使用。近期的未來日以已確認訂單
//! 修正預測值（確認單通常略低於預測）。

use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use drp_core::{BaselineProfile, DailyStockPoint};

use crate::simulator::is_weekend;
use crate::BaselineResult;

/// 據點彙總模擬器
pub struct BaselineSimulator;

impl BaselineSimulator {
    /// 執行模擬
    pub fn simulate<R: Rng + ?Sized>(
        reference_date: NaiveDate,
        profile: &BaselineProfile,
        rng: &mut R,
    ) -> BaselineResult {
        let mut stock = profile.start_stock;
        let total = (profile.past_days + profile.future_days) as usize;
        let mut history: Vec<DailyStockPoint> = Vec::with_capacity(total);

        tracing::debug!(
            "開始據點彙總模擬: 回看 {} 天、前瞻 {} 天，起始庫存 {}",
            profile.past_days,
            profile.future_days,
            stock
        );

        let outbound_min = profile.past_outbound_min;
        let outbound_max = profile.past_outbound_max.max(outbound_min);

        // 回看段：實績出貨 + 週期入庫
        for i in (1..=profile.past_days).rev() {
            let date = reference_date - Duration::days(i64::from(i));
            let outbound = rng.gen_range(outbound_min..=outbound_max);
            let inbound = if profile.past_inbound_cycle > 0 && i % profile.past_inbound_cycle == 0 {
                profile.past_inbound_qty
            } else {
                0
            };

            stock = stock - outbound + inbound;
            history.push(
                DailyStockPoint::past(date, stock)
                    .with_shipments(outbound)
                    .with_arrivals(inbound),
            );
        }

        // 今日庫存就是回看段結束時的水位
        let current_stock = stock;

        let forecast_min = profile.forecast_min;
        let forecast_max = profile.forecast_max.max(forecast_min);

        // 前瞻段：預測出貨（近期以確認單修正）+ 既定到貨
        for i in 0..profile.future_days {
            let date = reference_date + Duration::days(i64::from(i));
            let mut forecast = rng.gen_range(forecast_min..=forecast_max);
            if is_weekend(date) {
                forecast += profile.weekend_uplift;
            }

            let outflow = if i < profile.confirmed_days {
                forecast * profile.confirmed_ratio_pct / 100
            } else {
                forecast
            };

            let inbound = if i64::from(i) == profile.scheduled_inbound_offset {
                profile.scheduled_inbound_qty
            } else {
                0
            };

            stock = stock - outflow + inbound;
            history.push(
                DailyStockPoint::future(date, stock)
                    .with_demand_forecast(forecast)
                    .with_shipments(outflow)
                    .with_arrivals(inbound),
            );
        }

        tracing::info!(
            "據點彙總模擬完成: 今日庫存 {}，期末庫存 {}",
            current_stock,
            stock
        );

        BaselineResult {
            history,
            current_stock,
            safety_stock: profile.safety_stock,
        }
    }

    /// 以固定種子執行模擬（結果可重現）
    pub fn simulate_seeded(
        reference_date: NaiveDate,
        profile: &BaselineProfile,
        seed: u64,
    ) -> BaselineResult {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::simulate(reference_date, profile, &mut rng)
    }
}
