//! 計劃結果模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 計劃列（計算結果）：一筆需求列的原料、人力與成本推導
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    /// 來源需求ID
    pub demand_id: Uuid,

    /// 產品名稱（回顯自需求列）
    pub product: String,

    /// 目標產量（回顯自需求列）
    pub target_quantity: Decimal,

    /// 可用天數（回顯自需求列）
    pub days_available: Decimal,

    /// 原料名稱（由 BOM 解析）
    pub raw_material: String,

    /// 原料單位標籤（由 BOM 帶出，僅供顯示）
    pub raw_material_unit: String,

    /// 所需原料總量 = 每單位用量 × 目標產量
    pub total_raw_material: Decimal,

    /// 物料成本 = 原料總量 × 單價
    pub material_cost: Decimal,

    /// 總人日 = 目標產量 ÷ 每工人每日產量
    pub worker_days: Decimal,

    /// 所需工人數 = ceil(總人日 ÷ 可用天數)
    pub required_workers: u32,

    /// 人工成本 = 工人數 × 日薪 × 可用天數
    pub labor_cost: Decimal,

    /// 總生產成本 = 物料成本 + 人工成本
    pub total_production_cost: Decimal,
}

impl PlanRow {
    /// 單位產出成本；目標產量為零時回傳 None
    pub fn cost_per_unit(&self) -> Option<Decimal> {
        if self.target_quantity.is_zero() {
            None
        } else {
            Some(self.total_production_cost / self.target_quantity)
        }
    }
}
