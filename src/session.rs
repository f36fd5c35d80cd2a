//! 補貨作業
//!
//! 一個 [`PlanningSession`] 代表「某工廠 × 某產品系列」的一次補貨
//! 作業：開啟時從目錄取得 SKU 快照並套用預設訂購規則，之後所有
//! 變更都經由純 reducer 產生新的集合，並在同一步驟內重算裝櫃
//! 指標，不會出現指標落後於集合的中間狀態。

use chrono::NaiveDate;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use drp_calc::{InventorySimulator, RoundingCalculator, SimulationResult, StepDirection};
use drp_container::{ContainerBreakdown, ContainerMetrics, ContainerPlanner};
use drp_core::{DrpError, PlanningScope, ProductCatalog, Result, SimulationProfile, Sku};

use crate::advisory::{self, OrderProposal, StockoutAlert};

/// 單一 SKU 的變更
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SkuChange {
    /// 設定是否納入訂購
    SetOrdering(bool),
    /// 直接設定擬訂購量
    SetOrderQty(u32),
    /// 修改訂購批量（主檔）
    SetOrderLot(u32),
    /// 修改最小訂購量（主檔）
    SetMoq(u32),
    /// 修改箱入數（主檔）
    SetCaseSize(u32),
    /// 修改單箱材積（主檔）
    SetCbmPerCase(Decimal),
}

/// 主檔畫面可編輯的欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MasterField {
    /// 訂購批量（箱）
    OrderLot,
    /// 最小訂購量（箱）
    Moq,
    /// 箱入數
    CaseSize,
    /// 單箱材積（m³）
    CbmPerCase,
}

/// 套用單一 SKU 變更，回傳新的集合
///
/// 查無編號時原封不動回傳，壞參數不中斷流程。
/// 開啟訂購而擬訂購量還是 0 時，以 max(批量, MOQ) 起跳。
pub fn apply_sku_change(skus: &[Sku], sku_id: &str, change: SkuChange) -> Vec<Sku> {
    skus.iter()
        .map(|sku| {
            if sku.id != sku_id {
                return sku.clone();
            }
            let mut updated = sku.clone();
            match change {
                SkuChange::SetOrdering(true) => {
                    updated.is_ordering = true;
                    let qty = updated.order_qty.unwrap_or(0);
                    updated.order_qty = Some(if qty > 0 {
                        qty
                    } else {
                        updated.lot_cs().max(updated.moq_cs)
                    });
                }
                SkuChange::SetOrdering(false) => updated.is_ordering = false,
                SkuChange::SetOrderQty(qty) => updated.order_qty = Some(qty),
                SkuChange::SetOrderLot(lot) => updated.order_lot_cs = lot,
                SkuChange::SetMoq(moq) => updated.moq_cs = moq,
                SkuChange::SetCaseSize(size) => updated.case_size = size,
                SkuChange::SetCbmPerCase(cbm) => updated.cbm_per_case = cbm,
            }
            updated
        })
        .collect()
}

/// 以批量為步距調整擬訂購量，回傳新的集合
///
/// 步進規則見 [`RoundingCalculator::step`]；查無編號時原封不動回傳。
pub fn apply_qty_step(skus: &[Sku], sku_id: &str, direction: StepDirection) -> Vec<Sku> {
    skus.iter()
        .map(|sku| {
            if sku.id != sku_id {
                return sku.clone();
            }
            let mut updated = sku.clone();
            let next = RoundingCalculator::step(
                updated.order_qty.unwrap_or(0),
                updated.order_lot_cs,
                updated.moq_cs,
                direction,
            );
            updated.order_qty = Some(next);
            updated
        })
        .collect()
}

/// 補貨作業
#[derive(Debug, Clone)]
pub struct PlanningSession {
    scope: PlanningScope,
    skus: Vec<Sku>,
    container: ContainerMetrics,
    reference_date: NaiveDate,
}

impl PlanningSession {
    /// 開啟補貨作業：取快照、套用預設訂購規則、完成首次裝櫃計算
    ///
    /// 預設訂購規則：有缺口的 SKU 直接納入訂購，擬訂購量為缺口量
    /// 整批化後的值；無缺口的 SKU 先排除在訂購外。
    pub fn open(
        catalog: &ProductCatalog,
        factory_id: &str,
        series_id: &str,
        reference_date: NaiveDate,
    ) -> Result<Self> {
        let scope = catalog.scope(factory_id, series_id)?;
        let skus: Vec<Sku> = catalog
            .skus_for(series_id)?
            .into_iter()
            .map(Self::apply_default_order)
            .collect();
        let container = ContainerPlanner::plan(&skus);

        tracing::info!(
            "開啟補貨作業: {} × {}，共 {} 個 SKU，初始裝載 {} m³",
            scope.factory_name,
            scope.product_series,
            skus.len(),
            container.total_cbm
        );

        Ok(Self {
            scope,
            skus,
            container,
            reference_date,
        })
    }

    fn apply_default_order(mut sku: Sku) -> Sku {
        if sku.has_shortage() {
            sku.is_ordering = true;
            sku.order_qty = Some(RoundingCalculator::round_up_to_lot(
                sku.shortage,
                sku.order_lot_cs,
                sku.moq_cs,
            ));
        } else {
            sku.is_ordering = false;
            sku.order_qty = Some(0);
        }
        sku
    }

    /// 目前的 SKU 集合
    pub fn skus(&self) -> &[Sku] {
        &self.skus
    }

    /// 計畫範圍
    pub fn scope(&self) -> &PlanningScope {
        &self.scope
    }

    /// 目前的裝櫃指標（永遠與 SKU 集合同步）
    pub fn container(&self) -> &ContainerMetrics {
        &self.container
    }

    /// 作業基準日
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    /// 切換 SKU 是否納入訂購
    pub fn toggle_ordering(&mut self, sku_id: &str) {
        let next = self
            .skus
            .iter()
            .find(|s| s.id == sku_id)
            .map(|s| !s.is_ordering);
        if let Some(next) = next {
            let updated = apply_sku_change(&self.skus, sku_id, SkuChange::SetOrdering(next));
            self.commit(updated);
        }
    }

    /// 直接設定擬訂購量
    pub fn set_order_qty(&mut self, sku_id: &str, qty: u32) {
        let updated = apply_sku_change(&self.skus, sku_id, SkuChange::SetOrderQty(qty));
        self.commit(updated);
    }

    /// 以批量為步距調整擬訂購量
    pub fn step_order_qty(&mut self, sku_id: &str, direction: StepDirection) {
        let updated = apply_qty_step(&self.skus, sku_id, direction);
        self.commit(updated);
    }

    /// 編輯主檔欄位
    ///
    /// 輸入是畫面上的原始字串；無法解析的數值一律以 0 代入，
    /// 後續計算的防呆（如批量 0 視為 1）會接手。
    pub fn edit_master_field(&mut self, sku_id: &str, field: MasterField, raw_value: &str) {
        let change = match field {
            MasterField::OrderLot => SkuChange::SetOrderLot(parse_u32_or_zero(raw_value)),
            MasterField::Moq => SkuChange::SetMoq(parse_u32_or_zero(raw_value)),
            MasterField::CaseSize => SkuChange::SetCaseSize(parse_u32_or_zero(raw_value)),
            MasterField::CbmPerCase => SkuChange::SetCbmPerCase(parse_decimal_or_zero(raw_value)),
        };
        let updated = apply_sku_change(&self.skus, sku_id, change);
        self.commit(updated);
    }

    /// 模擬單一 SKU 的庫存走勢（查無編號時回退到第一筆）
    pub fn simulate_sku<R: Rng + ?Sized>(
        &self,
        sku_id: &str,
        profile: &SimulationProfile,
        rng: &mut R,
    ) -> Result<SimulationResult> {
        let sku = self
            .skus
            .iter()
            .find(|s| s.id == sku_id)
            .or_else(|| self.skus.first())
            .ok_or(DrpError::EmptyCatalog)?;

        Ok(InventorySimulator::simulate(
            sku,
            self.reference_date,
            profile,
            rng,
        ))
    }

    /// 產生裝櫃明細報表
    pub fn breakdown(&self) -> ContainerBreakdown {
        ContainerBreakdown::build(&self.skus)
    }

    /// 斷貨警示清單（最多 3 筆，急迫者優先）
    pub fn stockout_alerts(&self) -> Vec<StockoutAlert> {
        advisory::stockout_alerts(&self.skus, self.reference_date)
    }

    /// 訂購提案清單
    pub fn order_proposals<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<OrderProposal> {
        advisory::order_proposals(&self.skus, rng)
    }

    /// 套用新的集合並同步重算裝櫃指標
    fn commit(&mut self, skus: Vec<Sku>) {
        self.skus = skus;
        self.container = ContainerPlanner::plan(&self.skus);
        tracing::debug!(
            "集合更新: {} 箱，{} m³",
            self.container.total_cases,
            self.container.total_cbm
        );
    }
}

fn parse_u32_or_zero(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

fn parse_decimal_or_zero(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drp_container::LoadRecommendation;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
    }

    fn open_demo_session() -> PlanningSession {
        PlanningSession::open(
            &ProductCatalog::demo(),
            "ningbo_2",
            "car_interior",
            reference_date(),
        )
        .unwrap()
    }

    #[test]
    fn test_open_applies_default_order_rule() {
        let session = open_demo_session();
        let skus = session.skus();

        // 缺口 450、批量 10、MOQ 20 → 450 已是合法訂購量
        let dh = skus.iter().find(|s| s.id == "NK-DH-001").unwrap();
        assert!(dh.is_ordering);
        assert_eq!(dh.order_qty, Some(450));

        // 缺口 320、批量 20、MOQ 40 → 320
        let tb = skus.iter().find(|s| s.id == "NK-TB-210").unwrap();
        assert_eq!(tb.order_qty, Some(320));

        // 無缺口 → 排除在訂購外、數量 0
        let hl = skus.iter().find(|s| s.id == "NK-HL-055").unwrap();
        assert!(!hl.is_ordering);
        assert_eq!(hl.order_qty, Some(0));
    }

    #[test]
    fn test_open_computes_initial_container() {
        let session = open_demo_session();
        let container = session.container();

        // 450×0.025 + 120×0.12 + 320×0.045 + 600×0.015 = 49.05 m³
        assert_eq!(container.total_cbm, Decimal::new(4905, 2));
        assert_eq!(container.total_cases, 1490);
        assert!(container.is_over_20f);
        assert!(!container.is_over_40hq);
        assert_eq!(
            container.recommendation,
            LoadRecommendation::Use40HqConsolidate
        );
    }

    #[test]
    fn test_toggle_off_removes_volume_immediately() {
        let mut session = open_demo_session();
        let before = session.container().total_cbm;

        // NK-SS-305：600 箱 × 0.015 = 9 m³
        session.toggle_ordering("NK-SS-305");

        assert_eq!(session.container().total_cbm, before - Decimal::from(9));
        let ss = session.skus().iter().find(|s| s.id == "NK-SS-305").unwrap();
        assert!(!ss.is_ordering);
        // 擬訂購量保留，重新納入時不用重填
        assert_eq!(ss.order_qty, Some(600));
    }

    #[test]
    fn test_toggle_on_seeds_default_qty() {
        let mut session = open_demo_session();

        // NK-HL-055 無缺口（數量 0），納入訂購時以 max(批量 5, MOQ 10) 起跳
        session.toggle_ordering("NK-HL-055");

        let hl = session.skus().iter().find(|s| s.id == "NK-HL-055").unwrap();
        assert!(hl.is_ordering);
        assert_eq!(hl.order_qty, Some(10));
    }

    #[test]
    fn test_step_qty_updates_container() {
        let mut session = open_demo_session();
        let before = session.container().total_cbm;

        // NK-DH-001 一批 10 箱 × 0.025 = 0.25 m³
        session.step_order_qty("NK-DH-001", StepDirection::Increment);

        let dh = session.skus().iter().find(|s| s.id == "NK-DH-001").unwrap();
        assert_eq!(dh.order_qty, Some(460));
        assert_eq!(session.container().total_cbm, before + Decimal::new(25, 2));
    }

    #[test]
    fn test_master_edit_parses_or_zeroes() {
        let mut session = open_demo_session();

        session.edit_master_field("NK-DH-001", MasterField::OrderLot, "25");
        let dh = session.skus().iter().find(|s| s.id == "NK-DH-001").unwrap();
        assert_eq!(dh.order_lot_cs, 25);

        // 無法解析 → 0（後續計算把批量 0 視為 1）
        session.edit_master_field("NK-DH-001", MasterField::OrderLot, "abc");
        let dh = session.skus().iter().find(|s| s.id == "NK-DH-001").unwrap();
        assert_eq!(dh.order_lot_cs, 0);
        assert_eq!(dh.lot_cs(), 1);

        session.edit_master_field("NK-DH-001", MasterField::CbmPerCase, "0.03");
        let dh = session.skus().iter().find(|s| s.id == "NK-DH-001").unwrap();
        assert_eq!(dh.cbm_per_case, Decimal::new(3, 2));
    }

    #[test]
    fn test_unknown_sku_leaves_collection_unchanged() {
        let mut session = open_demo_session();
        let before = session.skus().to_vec();

        session.set_order_qty("NO-SUCH-SKU", 999);
        session.step_order_qty("NO-SUCH-SKU", StepDirection::Increment);
        session.toggle_ordering("NO-SUCH-SKU");
        session.edit_master_field("NO-SUCH-SKU", MasterField::Moq, "17");

        assert_eq!(session.skus(), &before[..]);
    }

    #[test]
    fn test_reducers_do_not_mutate_input() {
        let session = open_demo_session();
        let original = session.skus().to_vec();

        let updated = apply_sku_change(&original, "NK-DH-001", SkuChange::SetOrderQty(70));

        // 原集合不動，新集合帶變更
        assert_eq!(original[0].order_qty, Some(450));
        assert_eq!(updated[0].order_qty, Some(70));
        assert_eq!(original.len(), updated.len());
    }

    #[test]
    fn test_simulate_unknown_sku_falls_back_to_first() {
        use rand::{rngs::StdRng, SeedableRng};

        let session = open_demo_session();
        let profile = SimulationProfile::default();

        let mut rng = StdRng::seed_from_u64(7);
        let result = session
            .simulate_sku("NO-SUCH-SKU", &profile, &mut rng)
            .unwrap();

        assert_eq!(result.sku_id, "NK-DH-001");
    }
}
