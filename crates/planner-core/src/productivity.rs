//! 生產力模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 生產力條目：一個產品的工人日產量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductivityEntry {
    /// 產品名稱
    pub product: String,

    /// 每工人每日產量（須為正值，零或負值在計算時逐列拒絕）
    pub units_per_worker_per_day: Decimal,
}

impl ProductivityEntry {
    /// 創建新的生產力條目
    pub fn new(product: String, units_per_worker_per_day: Decimal) -> Self {
        Self {
            product,
            units_per_worker_per_day,
        }
    }
}

/// 在生產力表中查找產品，重複時第一筆優先
pub fn find_productivity_entry<'a>(
    productivity: &'a [ProductivityEntry],
    product: &str,
) -> Option<&'a ProductivityEntry> {
    productivity.iter().find(|entry| entry.product == product)
}
