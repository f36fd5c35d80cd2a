//! 裝櫃計算器

use rust_decimal::Decimal;

use drp_core::Sku;

use crate::{ContainerMetrics, LoadRecommendation};

/// 裝櫃計算器
pub struct ContainerPlanner;

impl ContainerPlanner {
    /// 40 呎高櫃容量（m³）
    pub fn cap_40hq() -> Decimal {
        Decimal::from(65)
    }

    /// 20 呎櫃容量（m³）
    pub fn cap_20f() -> Decimal {
        Decimal::from(28)
    }

    /// 40HQ 充填率高於此值（%）視為單櫃最佳
    fn optimal_fill_threshold() -> Decimal {
        Decimal::from(80)
    }

    /// 計算裝櫃指標與建議
    ///
    /// 未納入訂購（`is_ordering == false`）的 SKU 不佔櫃；
    /// 箱數取 [`Sku::effective_order_qty`]。
    pub fn plan(skus: &[Sku]) -> ContainerMetrics {
        let mut total_cases: u64 = 0;
        let mut total_cbm = Decimal::ZERO;

        for sku in skus {
            if !sku.is_ordering {
                continue;
            }
            let qty = sku.effective_order_qty();
            total_cases += u64::from(qty);
            total_cbm += sku.total_cbm(qty);
        }

        let cap_40hq = Self::cap_40hq();
        let cap_20f = Self::cap_20f();
        let hundred = Decimal::from(100);

        let fill_raw_40hq = total_cbm / cap_40hq * hundred;
        let fill_raw_20f = total_cbm / cap_20f * hundred;

        let is_over_40hq = total_cbm > cap_40hq;
        let is_over_20f = total_cbm > cap_20f;

        let recommendation = if is_over_40hq {
            LoadRecommendation::SplitOrTrim {
                overflow_cbm: total_cbm - cap_40hq,
            }
        } else if fill_raw_40hq > Self::optimal_fill_threshold() {
            LoadRecommendation::Single40HqOptimal
        } else if is_over_20f {
            LoadRecommendation::Use40HqConsolidate
        } else {
            LoadRecommendation::Single20FSufficient
        };

        tracing::debug!(
            "裝櫃計算完成: {} 箱，{} m³，建議 {:?}",
            total_cases,
            total_cbm,
            recommendation
        );

        ContainerMetrics {
            total_cases,
            total_cbm,
            fill_rate_40hq: fill_raw_40hq.min(hundred),
            fill_rate_20f: fill_raw_20f.min(hundred),
            is_over_40hq,
            is_over_20f,
            recommendation,
        }
    }
}
