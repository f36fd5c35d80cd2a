//! 彙總指標計算
//!
//! 從一條庫存時間序列讀出近期需求、近期到貨、觀察視窗內的
//! 最低庫存與健康狀態。只看前瞻段；沒有任何未來日時直接回報錯誤，
//! 呼叫端必須擋住這種輸入。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use drp_core::{DailyStockPoint, DrpError, Result};

/// 庫存健康狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    /// 預估庫存轉負，將無法履行需求
    Critical,
    /// 不轉負但低於安全庫存
    Warning,
    /// 正常
    Ok,
}

/// 彙總指標
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// 近 7 個未來日的需求預測合計
    pub forecast_week: i64,

    /// 近 7 個未來日的計畫到貨合計
    pub inbound_week: i64,

    /// 觀察視窗（28 個未來日）內的最低預估庫存
    pub lowest_stock: i64,

    /// 最低點日期（同值取最早）
    pub critical_date: NaiveDate,

    /// 最大缺口量：最低點為負時取其絕對值，否則為 0
    pub max_shortage: i64,

    /// 健康狀態
    pub status: StockStatus,
}

/// 彙總指標計算器
pub struct MetricSummarizer;

impl MetricSummarizer {
    /// 近期視窗：需求與到貨的合計天數
    const NEAR_WINDOW_DAYS: usize = 7;

    /// 最低庫存觀察視窗天數
    const MIN_STOCK_WINDOW_DAYS: usize = 28;

    /// 計算彙總指標
    ///
    /// `history` 可混雜過去日與未來日，過去日一律忽略。
    /// 沒有任何未來日時回傳 [`DrpError::EmptyTimeline`]。
    pub fn summarize(history: &[DailyStockPoint], safety_stock: i64) -> Result<Metrics> {
        let future: Vec<&DailyStockPoint> = history.iter().filter(|p| p.is_future()).collect();

        let near = &future[..future.len().min(Self::NEAR_WINDOW_DAYS)];
        let forecast_week: i64 = near.iter().map(|p| p.demand_forecast.unwrap_or(0)).sum();
        let inbound_week: i64 = near.iter().map(|p| p.arrivals.unwrap_or(0)).sum();

        // 最低點只在觀察視窗內找；min_by_key 同值取第一筆，即最早的日期
        let window = &future[..future.len().min(Self::MIN_STOCK_WINDOW_DAYS)];
        let lowest_point = window
            .iter()
            .min_by_key(|p| p.inventory_projected.unwrap_or(0))
            .ok_or(DrpError::EmptyTimeline)?;

        let lowest_stock = lowest_point.inventory_projected.unwrap_or(0);
        let critical_date = lowest_point.date;
        let max_shortage = if lowest_stock < 0 { -lowest_stock } else { 0 };

        // 狀態只看「能不能履行需求」：轉負才算危急，
        // 僅低於安全庫存是警告
        let status = if lowest_stock < 0 {
            StockStatus::Critical
        } else if lowest_stock < safety_stock {
            StockStatus::Warning
        } else {
            StockStatus::Ok
        };

        tracing::debug!(
            "彙總指標: 週需求 {}，週到貨 {}，最低庫存 {} ({:?})",
            forecast_week,
            inbound_week,
            lowest_stock,
            status
        );

        Ok(Metrics {
            forecast_week,
            inbound_week,
            lowest_stock,
            critical_date,
            max_shortage,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn d(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap() + Duration::days(offset)
    }

    /// 平鋪一條未來序列：每天固定需求 10、無到貨，庫存依序取給定值
    fn future_series(levels: &[i64]) -> Vec<DailyStockPoint> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| {
                DailyStockPoint::future(d(i as i64), level).with_demand_forecast(10)
            })
            .collect()
    }

    #[test]
    fn test_empty_future_fails_loudly() {
        let result = MetricSummarizer::summarize(&[], 800);
        assert!(matches!(result, Err(DrpError::EmptyTimeline)));

        // 只有過去日也一樣
        let past_only = vec![DailyStockPoint::past(d(-1), 100)];
        let result = MetricSummarizer::summarize(&past_only, 800);
        assert!(matches!(result, Err(DrpError::EmptyTimeline)));
    }

    #[test]
    fn test_week_sums_only_first_seven_days() {
        let mut history = future_series(&[100; 10]);
        // 第 8 天起的需求不應計入
        history[7] = DailyStockPoint::future(d(7), 100).with_demand_forecast(9999);
        history[2] = DailyStockPoint::future(d(2), 100)
            .with_demand_forecast(10)
            .with_arrivals(500);

        let metrics = MetricSummarizer::summarize(&history, 0).unwrap();
        assert_eq!(metrics.forecast_week, 70);
        assert_eq!(metrics.inbound_week, 500);
    }

    #[test]
    fn test_critical_when_projection_goes_negative() {
        let metrics =
            MetricSummarizer::summarize(&future_series(&[50, 10, -120, -30, 200]), 800).unwrap();

        assert_eq!(metrics.lowest_stock, -120);
        assert_eq!(metrics.critical_date, d(2));
        assert_eq!(metrics.max_shortage, 120);
        assert_eq!(metrics.status, StockStatus::Critical);
    }

    #[test]
    fn test_warning_below_safety_stock() {
        let metrics =
            MetricSummarizer::summarize(&future_series(&[900, 500, 700]), 800).unwrap();

        assert_eq!(metrics.lowest_stock, 500);
        assert_eq!(metrics.max_shortage, 0);
        assert_eq!(metrics.status, StockStatus::Warning);
    }

    #[test]
    fn test_ok_above_safety_stock() {
        let metrics =
            MetricSummarizer::summarize(&future_series(&[900, 850, 1200]), 800).unwrap();

        assert_eq!(metrics.lowest_stock, 850);
        assert_eq!(metrics.status, StockStatus::Ok);
    }

    #[test]
    fn test_min_tie_takes_earliest_date() {
        let metrics =
            MetricSummarizer::summarize(&future_series(&[300, 100, 400, 100, 500]), 800).unwrap();

        assert_eq!(metrics.lowest_stock, 100);
        assert_eq!(metrics.critical_date, d(1));
    }

    #[test]
    fn test_min_window_caps_at_28_days() {
        // 第 29 天（索引 28）有個更深的谷，不在觀察視窗內
        let mut levels = vec![1000; 30];
        levels[28] = -500;
        let metrics = MetricSummarizer::summarize(&future_series(&levels), 800).unwrap();

        assert_eq!(metrics.lowest_stock, 1000);
        assert_eq!(metrics.status, StockStatus::Ok);
    }

    #[test]
    fn test_past_days_are_ignored() {
        let mut history = vec![
            // 過去段，包含一個會干擾的低點
            DailyStockPoint::past(d(-2), -999),
            DailyStockPoint::past(d(-1), 5),
        ];
        history.extend(future_series(&[900, 850]));

        let metrics = MetricSummarizer::summarize(&history, 800).unwrap();
        assert_eq!(metrics.lowest_stock, 850);
        assert_eq!(metrics.status, StockStatus::Ok);
    }

    #[test]
    fn test_zero_lowest_is_not_critical() {
        // 剛好歸零還能履行需求，屬於警告而非危急
        let metrics = MetricSummarizer::summarize(&future_series(&[100, 0, 50]), 800).unwrap();

        assert_eq!(metrics.lowest_stock, 0);
        assert_eq!(metrics.max_shortage, 0);
        assert_eq!(metrics.status, StockStatus::Warning);
    }
}
