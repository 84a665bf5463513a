//! 物料用量與成本計算

use rust_decimal::Decimal;

/// 物料成本計算器
pub struct CostingCalculator;

impl CostingCalculator {
    /// 計算所需原料總量 = 每單位用量 × 目標產量
    pub fn total_raw_material(qty_per_unit: Decimal, target_quantity: Decimal) -> Decimal {
        qty_per_unit * target_quantity
    }

    /// 計算物料成本 = 原料總量 × 單價
    pub fn material_cost(total_raw_material: Decimal, unit_price: Decimal) -> Decimal {
        total_raw_material * unit_price
    }
}
