//! 人力需求計算

use planner_core::{RateField, RowError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// 人力計算器
pub struct LaborCalculator;

impl LaborCalculator {
    /// 計算總人日 = 目標產量 ÷ 每工人每日產量
    ///
    /// 日產量為零或負值時拒絕，避免除法無定義。
    pub fn worker_days(
        product: &str,
        target_quantity: Decimal,
        units_per_worker_per_day: Decimal,
    ) -> Result<Decimal, RowError> {
        if units_per_worker_per_day <= Decimal::ZERO {
            return Err(RowError::InvalidRate {
                product: product.to_string(),
                field: RateField::UnitsPerWorkerPerDay,
            });
        }
        Ok(target_quantity / units_per_worker_per_day)
    }

    /// 計算所需工人數 = ceil(總人日 ÷ 可用天數)
    ///
    /// 不足一人的餘數一律進位到下一個整數工人。
    pub fn required_workers(
        product: &str,
        worker_days: Decimal,
        days_available: Decimal,
    ) -> Result<u32, RowError> {
        if days_available <= Decimal::ZERO {
            return Err(RowError::InvalidRate {
                product: product.to_string(),
                field: RateField::DaysAvailable,
            });
        }

        let workers = (worker_days / days_available).ceil();
        workers.to_u32().ok_or_else(|| RowError::Calculation {
            product: product.to_string(),
            message: format!("required workers {} not representable", workers),
        })
    }

    /// 計算人工成本 = 工人數 × 日薪 × 可用天數
    pub fn labor_cost(required_workers: u32, pay_rate: Decimal, days_available: Decimal) -> Decimal {
        Decimal::from(required_workers) * pay_rate * days_available
    }
}
