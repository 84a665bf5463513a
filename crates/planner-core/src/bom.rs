//! BOM（物料清單）模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// BOM 條目：一個產品的原料配方
///
/// 表中允許同一產品出現多筆，查找時以第一筆為準。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomEntry {
    /// 產品名稱
    pub product: String,

    /// 產出單位說明（僅供顯示，不參與計算）
    pub output_unit_description: String,

    /// 原料名稱
    pub raw_material: String,

    /// 每單位產出所需原料量（非負）
    pub qty_per_unit: Decimal,

    /// 原料單位標籤（如 "kg"，僅供顯示）
    pub raw_material_unit: String,
}

impl BomEntry {
    /// 創建新的 BOM 條目
    pub fn new(product: String, raw_material: String, qty_per_unit: Decimal) -> Self {
        Self {
            product,
            output_unit_description: String::new(),
            raw_material,
            qty_per_unit,
            raw_material_unit: String::new(),
        }
    }

    /// 建構器模式：設置產出單位說明
    pub fn with_output_unit_description(mut self, description: String) -> Self {
        self.output_unit_description = description;
        self
    }

    /// 建構器模式：設置原料單位標籤
    pub fn with_raw_material_unit(mut self, unit: String) -> Self {
        self.raw_material_unit = unit;
        self
    }
}

/// 在 BOM 表中查找產品，重複時第一筆優先
pub fn find_bom_entry<'a>(bom: &'a [BomEntry], product: &str) -> Option<&'a BomEntry> {
    bom.iter().find(|entry| entry.product == product)
}
