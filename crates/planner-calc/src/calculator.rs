//! 計劃主計算器

use planner_core::{
    bom, price, productivity, BomEntry, DemandRow, PlanError, PlanRow, PriceEntry,
    ProductivityEntry, RowError,
};
use rust_decimal::Decimal;

use crate::costing::CostingCalculator;
use crate::labor::LaborCalculator;
use crate::{Diagnostic, PlanResult};

/// 計劃計算器
///
/// 持有三張參考表與日薪；每次 `calculate` 都是獨立的批次轉換，
/// 不修改輸入，也不在呼叫間保留狀態。
pub struct PlanCalculator {
    /// BOM 表
    bom: Vec<BomEntry>,

    /// 生產力表
    productivity: Vec<ProductivityEntry>,

    /// 原料價格表
    prices: Vec<PriceEntry>,

    /// 日薪（FCFA，非負）
    pay_rate: Decimal,
}

impl PlanCalculator {
    /// 創建新的計劃計算器
    pub fn new(
        bom: Vec<BomEntry>,
        productivity: Vec<ProductivityEntry>,
        prices: Vec<PriceEntry>,
        pay_rate: Decimal,
    ) -> Self {
        Self {
            bom,
            productivity,
            prices,
            pay_rate,
        }
    }

    /// 主計算入口
    ///
    /// 依輸入順序逐列處理需求；單列失敗記入診斷後繼續，
    /// 不中斷整批。結果列與診斷都維持輸入順序。
    pub fn calculate(&self, plan: &[DemandRow]) -> planner_core::Result<PlanResult> {
        if self.pay_rate < Decimal::ZERO {
            return Err(PlanError::NegativePayRate(self.pay_rate));
        }

        tracing::info!(
            "開始計劃計算：需求 {} 筆，BOM {} 筆，生產力 {} 筆，價格 {} 筆",
            plan.len(),
            self.bom.len(),
            self.productivity.len(),
            self.prices.len()
        );

        let start_time = std::time::Instant::now();
        let mut result = PlanResult::empty();

        for demand in plan {
            match self.calculate_row(demand) {
                Ok((row, warning)) => {
                    if let Some(warning) = warning {
                        tracing::debug!("產品 {} 警告: {}", demand.product, warning.message());
                        result.add_diagnostic(warning);
                    }
                    result.rows.push(row);
                }
                Err(error) => {
                    tracing::debug!("產品 {} 計算失敗: {}", demand.product, error);
                    result.add_diagnostic(Diagnostic::new(demand.product.clone(), error));
                }
            }
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!(
            "計劃計算完成，耗時 {:?}，結果 {} 筆，診斷 {} 筆",
            start_time.elapsed(),
            result.rows.len(),
            result.diagnostics.len()
        );

        Ok(result)
    }

    /// 單列計算
    ///
    /// 成功時回傳計劃列，可能附帶一筆缺價警告；
    /// 失敗時回傳該列的錯誤，由呼叫端記入診斷。
    fn calculate_row(
        &self,
        demand: &DemandRow,
    ) -> Result<(PlanRow, Option<Diagnostic>), RowError> {
        let bom_entry = bom::find_bom_entry(&self.bom, &demand.product)
            .ok_or_else(|| RowError::MissingBomEntry(demand.product.clone()))?;

        let productivity_entry =
            productivity::find_productivity_entry(&self.productivity, &demand.product)
                .ok_or_else(|| RowError::MissingProductivityEntry(demand.product.clone()))?;

        // 缺價是警告：該列仍以單價 0 計算
        let (price_value, warning) =
            match price::find_price_entry(&self.prices, &bom_entry.raw_material) {
                Some(entry) => (entry.avg_unit_price, None),
                None => (
                    Decimal::ZERO,
                    Some(Diagnostic::new(
                        demand.product.clone(),
                        RowError::MissingPriceEntry(bom_entry.raw_material.clone()),
                    )),
                ),
            };

        let total_raw_material =
            CostingCalculator::total_raw_material(bom_entry.qty_per_unit, demand.target_quantity);
        let material_cost = CostingCalculator::material_cost(total_raw_material, price_value);

        let worker_days = LaborCalculator::worker_days(
            &demand.product,
            demand.target_quantity,
            productivity_entry.units_per_worker_per_day,
        )?;
        let required_workers =
            LaborCalculator::required_workers(&demand.product, worker_days, demand.days_available)?;
        let labor_cost =
            LaborCalculator::labor_cost(required_workers, self.pay_rate, demand.days_available);

        let row = PlanRow {
            demand_id: demand.id,
            product: demand.product.clone(),
            target_quantity: demand.target_quantity,
            days_available: demand.days_available,
            raw_material: bom_entry.raw_material.clone(),
            raw_material_unit: bom_entry.raw_material_unit.clone(),
            total_raw_material,
            material_cost,
            worker_days,
            required_workers,
            labor_cost,
            total_production_cost: material_cost + labor_cost,
        };

        Ok((row, warning))
    }

    /// 獲取 BOM 表引用
    pub fn bom(&self) -> &[BomEntry] {
        &self.bom
    }

    /// 獲取生產力表引用
    pub fn productivity(&self) -> &[ProductivityEntry] {
        &self.productivity
    }

    /// 獲取價格表引用
    pub fn prices(&self) -> &[PriceEntry] {
        &self.prices
    }

    /// 獲取日薪
    pub fn pay_rate(&self) -> Decimal {
        self.pay_rate
    }
}
