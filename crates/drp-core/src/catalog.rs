//! 產品目錄與計畫範圍
//!
//! 目錄是唯讀的協作方：開啟補貨作業時取得一份 SKU 快照，
//! 後續狀態變更都留在作業內，不回寫目錄。
//! 查無指定編號時一律回退到第一筆，讓示範流程不因壞參數中斷。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::sku::Sku;
use crate::{DrpError, Result};

/// 工廠（出貨地）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factory {
    /// 工廠編號
    pub id: String,
    /// 工廠名稱
    pub name: String,
}

/// 產品系列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// 系列編號
    pub id: String,
    /// 系列名稱
    pub name: String,
}

/// 計畫範圍：本次補貨作業涵蓋的工廠、系列與裝運限制
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningScope {
    /// 工廠名稱
    pub factory_name: String,
    /// 產品系列名稱
    pub product_series: String,
    /// 涵蓋的 SKU 數
    pub total_skus: usize,
    /// 裝運限制說明
    pub constraints: String,
}

/// 產品目錄
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    factories: Vec<Factory>,
    series: Vec<Series>,
    skus_by_series: Vec<(String, Vec<Sku>)>,
    constraints: String,
}

impl ProductCatalog {
    /// 創建空目錄
    pub fn new(factories: Vec<Factory>, series: Vec<Series>) -> Self {
        Self {
            factories,
            series,
            skus_by_series: Vec::new(),
            constraints: String::new(),
        }
    }

    /// 建構器模式：掛入一個系列的 SKU 清單
    pub fn with_series_skus(mut self, series_id: impl Into<String>, skus: Vec<Sku>) -> Self {
        self.skus_by_series.push((series_id.into(), skus));
        self
    }

    /// 建構器模式：設置裝運限制說明
    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = constraints.into();
        self
    }

    /// 所有工廠
    pub fn factories(&self) -> &[Factory] {
        &self.factories
    }

    /// 所有系列
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// 解析工廠（查無編號時回退到第一筆）
    pub fn resolve_factory(&self, factory_id: &str) -> Result<&Factory> {
        self.factories
            .iter()
            .find(|f| f.id == factory_id)
            .or_else(|| self.factories.first())
            .ok_or(DrpError::EmptyCatalog)
    }

    /// 解析系列（查無編號時回退到第一筆）
    pub fn resolve_series(&self, series_id: &str) -> Result<&Series> {
        self.series
            .iter()
            .find(|s| s.id == series_id)
            .or_else(|| self.series.first())
            .ok_or(DrpError::EmptyCatalog)
    }

    /// 取得系列下的 SKU 快照（查無系列時回退到第一個系列）
    pub fn skus_for(&self, series_id: &str) -> Result<Vec<Sku>> {
        let resolved = self.resolve_series(series_id)?;
        self.skus_by_series
            .iter()
            .find(|(id, _)| *id == resolved.id)
            .or_else(|| self.skus_by_series.first())
            .map(|(_, skus)| skus.clone())
            .ok_or(DrpError::EmptyCatalog)
    }

    /// 解析單一 SKU（查無編號時回退到該系列第一筆）
    pub fn resolve_sku(&self, series_id: &str, sku_id: &str) -> Result<Sku> {
        let skus = self.skus_for(series_id)?;
        skus.iter()
            .find(|s| s.id == sku_id)
            .or_else(|| skus.first())
            .cloned()
            .ok_or(DrpError::EmptyCatalog)
    }

    /// 組合計畫範圍
    pub fn scope(&self, factory_id: &str, series_id: &str) -> Result<PlanningScope> {
        let factory = self.resolve_factory(factory_id)?;
        let series = self.resolve_series(series_id)?;
        let total_skus = self.skus_for(series_id)?.len();

        Ok(PlanningScope {
            factory_name: factory.name.clone(),
            product_series: series.name.clone(),
            total_skus,
            constraints: self.constraints.clone(),
        })
    }

    /// 內建示範目錄：三個工廠群、三個產品系列
    pub fn demo() -> Self {
        let factories = vec![
            Factory {
                id: "ningbo_2".to_string(),
                name: "中國寧波第2工廠群".to_string(),
            },
            Factory {
                id: "vietnam_1".to_string(),
                name: "越南胡志明第1工廠".to_string(),
            },
            Factory {
                id: "japan_kanto".to_string(),
                name: "日本關東合作工廠".to_string(),
            },
        ];

        let series = vec![
            Series {
                id: "car_interior".to_string(),
                name: "車內舒適與收納用品".to_string(),
            },
            Series {
                id: "outdoor".to_string(),
                name: "戶外露營用品".to_string(),
            },
            Series {
                id: "pet_care".to_string(),
                name: "寵物車用用品".to_string(),
            },
        ];

        Self::new(factories, series)
            .with_constraints("可混櫃（同工廠群內）")
            .with_series_skus("car_interior", Self::car_interior_skus())
            .with_series_skus("outdoor", Self::outdoor_skus())
            .with_series_skus("pet_care", Self::pet_care_skus())
    }

    fn car_interior_skus() -> Vec<Sku> {
        vec![
            Sku::new("NK-DH-001", "車用飲料架 窄版")
                .with_category("飲料架")
                .with_factory("寧波第2")
                .with_case_spec(24, Decimal::new(25, 3))
                .with_order_constraints(10, 20)
                .with_shortage(450)
                .with_classification("季節", "高"),
            Sku::new("NK-ST-102", "駕駛座記憶棉坐墊 黑")
                .with_category("座墊")
                .with_factory("寧波第2")
                .with_case_spec(10, Decimal::new(12, 2))
                .with_order_constraints(6, 12)
                .with_shortage(120)
                .with_classification("常銷", "高"),
            Sku::new("NK-TB-210", "後車廂摺疊收納箱 L")
                .with_category("後車廂收納")
                .with_factory("寧波第2")
                .with_case_spec(12, Decimal::new(45, 3))
                .with_order_constraints(20, 40)
                .with_shortage(320)
                .with_classification("次常銷", "中"),
            Sku::new("NK-SS-305", "前擋玻璃遮陽板 M")
                .with_category("遮陽板")
                .with_factory("寧波第2")
                .with_case_spec(50, Decimal::new(15, 3))
                .with_order_constraints(10, 20)
                .with_shortage(600)
                .with_classification("季節", "高"),
            Sku::new("NK-HL-055", "LED 大燈燈泡 H4 遠近光")
                .with_category("車燈")
                .with_factory("寧波第2")
                .with_case_spec(40, Decimal::new(8, 3))
                .with_order_constraints(5, 10)
                .with_classification("常銷", "中"),
            Sku::new("NK-USB-88", "雙孔快充 USB 車用充電器")
                .with_category("車用電子")
                .with_factory("寧波第2")
                .with_case_spec(100, Decimal::new(5, 3))
                .with_order_constraints(5, 10)
                .with_classification("常銷", "高"),
        ]
    }

    fn outdoor_skus() -> Vec<Sku> {
        vec![
            Sku::new("OD-TN-001", "三人快開帳篷")
                .with_category("帳篷")
                .with_factory("寧波第2")
                .with_case_spec(4, Decimal::new(8, 2))
                .with_order_constraints(10, 20)
                .with_shortage(200)
                .with_classification("季節", "高"),
            Sku::new("OD-CH-005", "摺疊露營椅")
                .with_category("露營椅")
                .with_factory("寧波第2")
                .with_case_spec(6, Decimal::new(12, 2))
                .with_order_constraints(5, 10)
                .with_shortage(50)
                .with_classification("常銷", "中"),
            Sku::new("OD-TB-102", "鋁合金捲板桌 M")
                .with_category("摺疊桌")
                .with_factory("寧波第2")
                .with_case_spec(8, Decimal::new(5, 2))
                .with_order_constraints(10, 30)
                .with_shortage(150)
                .with_classification("次常銷", "中"),
            Sku::new("OD-BBQ-99", "攜帶式燒烤爐")
                .with_category("烤爐")
                .with_factory("寧波第2")
                .with_case_spec(4, Decimal::new(6, 2))
                .with_order_constraints(5, 10)
                .with_classification("季節", "低"),
        ]
    }

    fn pet_care_skus() -> Vec<Sku> {
        vec![
            Sku::new("PT-ST-001", "寵物防水車用座墊")
                .with_category("車用座墊")
                .with_factory("寧波第2")
                .with_case_spec(20, Decimal::new(3, 2))
                .with_order_constraints(10, 20)
                .with_shortage(300)
                .with_classification("常銷", "高"),
            Sku::new("PT-CG-002", "摺疊寵物籠 M")
                .with_category("寵物籠")
                .with_factory("寧波第2")
                .with_case_spec(1, Decimal::new(15, 2))
                .with_order_constraints(5, 5)
                .with_shortage(80)
                .with_classification("常銷", "中"),
            Sku::new("PT-BL-044", "絨毛寵物毯")
                .with_category("寵物寢具")
                .with_factory("寧波第2")
                .with_case_spec(30, Decimal::new(8, 2))
                .with_order_constraints(2, 10)
                .with_classification("季節", "高"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_shape() {
        let catalog = ProductCatalog::demo();

        assert_eq!(catalog.factories().len(), 3);
        assert_eq!(catalog.series().len(), 3);

        let skus = catalog.skus_for("car_interior").unwrap();
        assert_eq!(skus.len(), 6);
        assert_eq!(skus[0].id, "NK-DH-001");
        assert_eq!(skus[0].shortage, 450);
    }

    #[test]
    fn test_unknown_ids_fall_back_to_first() {
        let catalog = ProductCatalog::demo();

        let factory = catalog.resolve_factory("no_such_factory").unwrap();
        assert_eq!(factory.id, "ningbo_2");

        let skus = catalog.skus_for("no_such_series").unwrap();
        assert_eq!(skus[0].id, "NK-DH-001");

        let sku = catalog.resolve_sku("car_interior", "no_such_sku").unwrap();
        assert_eq!(sku.id, "NK-DH-001");
    }

    #[test]
    fn test_scope_counts_actual_skus() {
        let catalog = ProductCatalog::demo();

        let scope = catalog.scope("ningbo_2", "outdoor").unwrap();
        assert_eq!(scope.factory_name, "中國寧波第2工廠群");
        assert_eq!(scope.product_series, "戶外露營用品");
        assert_eq!(scope.total_skus, 4);
        assert_eq!(scope.constraints, "可混櫃（同工廠群內）");
    }

    #[test]
    fn test_empty_catalog_errors() {
        let catalog = ProductCatalog::new(Vec::new(), Vec::new());

        assert!(matches!(
            catalog.resolve_factory("any"),
            Err(DrpError::EmptyCatalog)
        ));
        assert!(matches!(
            catalog.skus_for("any"),
            Err(DrpError::EmptyCatalog)
        ));
    }
}
