//! 性質測試：整批化、步進與裝櫃旗標的不變量

use proptest::prelude::*;
use rust_decimal::Decimal;

use drp::{
    apply_sku_change, ContainerPlanner, LoadRecommendation, RoundingCalculator, Sku, SkuChange,
    StepDirection,
};

proptest! {
    /// 整批化結果同時滿足三個限制：蓋住缺口、不低於 MOQ、落在批量網格上
    #[test]
    fn prop_round_up_satisfies_constraints(
        shortage in 0u32..10_000,
        lot in 0u32..500,
        moq in 0u32..2_000,
    ) {
        let qty = RoundingCalculator::round_up_to_lot(shortage, lot, moq);
        let lot_eff = lot.max(1);

        prop_assert!(qty >= shortage);
        prop_assert!(qty >= moq);
        prop_assert!(qty % lot_eff == 0 || qty == moq);
    }

    /// 整批化不多訂：批量側勝出時，再少一批就蓋不住缺口
    #[test]
    fn prop_round_up_is_minimal(
        shortage in 1u32..10_000,
        lot in 1u32..500,
        moq in 0u32..2_000,
    ) {
        let qty = RoundingCalculator::round_up_to_lot(shortage, lot, moq);
        if qty > moq {
            prop_assert!(qty - lot < shortage);
        }
    }

    /// 步進：上行嚴格遞增；下行不增加，且跌破 MOQ 直接歸零
    #[test]
    fn prop_step_monotonic(
        current in 0u32..50_000,
        lot in 0u32..500,
        moq in 0u32..2_000,
    ) {
        let up = RoundingCalculator::step(current, lot, moq, StepDirection::Increment);
        prop_assert!(up > current);

        let down = RoundingCalculator::step(current, lot, moq, StepDirection::Decrement);
        prop_assert!(down <= current);
        prop_assert!(down == 0 || down >= moq);
    }

    /// 裝櫃旗標、顯示值與建議彼此一致
    #[test]
    fn prop_container_flags_consistent(
        case_counts in prop::collection::vec(0u32..2_000, 1..10),
    ) {
        let skus: Vec<Sku> = case_counts
            .iter()
            .enumerate()
            .map(|(i, &qty)| {
                let mut sku = Sku::new(format!("P-{i}"), format!("性質測試品 {i}"))
                    .with_case_spec(10, Decimal::new(50, 3));
                sku.order_qty = Some(qty);
                sku
            })
            .collect();

        let metrics = ContainerPlanner::plan(&skus);

        prop_assert_eq!(metrics.is_over_40hq, metrics.total_cbm > Decimal::from(65));
        prop_assert_eq!(metrics.is_over_20f, metrics.total_cbm > Decimal::from(28));
        prop_assert!(metrics.fill_rate_40hq <= Decimal::from(100));
        prop_assert!(metrics.fill_rate_20f <= Decimal::from(100));

        match metrics.recommendation {
            LoadRecommendation::SplitOrTrim { .. } => prop_assert!(metrics.is_over_40hq),
            LoadRecommendation::Single40HqOptimal => prop_assert!(!metrics.is_over_40hq),
            LoadRecommendation::Use40HqConsolidate => {
                prop_assert!(metrics.is_over_20f && !metrics.is_over_40hq)
            }
            LoadRecommendation::Single20FSufficient => prop_assert!(!metrics.is_over_20f),
        }
    }

    /// reducer 只動指名的 SKU，集合長度不變
    #[test]
    fn prop_reducer_targets_only_named_sku(
        qty in 0u32..100_000,
        target in 0usize..3,
    ) {
        let skus: Vec<Sku> = (0..3)
            .map(|i| {
                Sku::new(format!("R-{i}"), format!("品 {i}"))
                    .with_order_constraints(10, 20)
                    .with_shortage(100)
            })
            .collect();

        let id = format!("R-{target}");
        let updated = apply_sku_change(&skus, &id, SkuChange::SetOrderQty(qty));

        prop_assert_eq!(updated.len(), skus.len());
        for (before, after) in skus.iter().zip(&updated) {
            if before.id == id {
                prop_assert_eq!(after.order_qty, Some(qty));
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }
}
