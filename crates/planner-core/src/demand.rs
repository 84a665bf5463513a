//! 需求模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 需求列：生產計劃中的一筆（產品、目標量、天數）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandRow {
    /// 需求ID
    pub id: Uuid,

    /// 產品名稱，須同時存在於 BOM 表與生產力表才可計算
    pub product: String,

    /// 目標產量（正值）
    pub target_quantity: Decimal,

    /// 可用天數（正值）
    pub days_available: Decimal,

    /// 來源單據（如銷售訂單號）
    pub source_ref: Option<String>,
}

impl DemandRow {
    /// 創建新的需求列
    pub fn new(product: String, target_quantity: Decimal, days_available: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            product,
            target_quantity,
            days_available,
            source_ref: None,
        }
    }

    /// 建構器模式：設置來源單據
    pub fn with_source_ref(mut self, source_ref: String) -> Self {
        self.source_ref = Some(source_ref);
        self
    }
}
