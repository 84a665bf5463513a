//! 原料價格模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 價格條目：一種原料的平均單價
///
/// 幣別為 FCFA，核心只視為不透明數值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// 原料名稱
    pub raw_material: String,

    /// 平均單價（非負，每原料單位）
    pub avg_unit_price: Decimal,

    /// 原料單位標籤（僅供顯示）
    pub unit: String,
}

impl PriceEntry {
    /// 創建新的價格條目
    pub fn new(raw_material: String, avg_unit_price: Decimal) -> Self {
        Self {
            raw_material,
            avg_unit_price,
            unit: String::new(),
        }
    }

    /// 建構器模式：設置單位標籤
    pub fn with_unit(mut self, unit: String) -> Self {
        self.unit = unit;
        self
    }
}

/// 在價格表中查找原料，重複時第一筆優先
pub fn find_price_entry<'a>(prices: &'a [PriceEntry], raw_material: &str) -> Option<&'a PriceEntry> {
    prices.iter().find(|entry| entry.raw_material == raw_material)
}
