//! # Production Planner
//!
//! 限時生產計劃計算工具：給定 BOM、生產力、原料價格與日薪，
//! 計算目標產量所需的原料、人力與總成本。

pub use planner_calc::{Diagnostic, DiagnosticSeverity, PlanCalculator, PlanResult};
pub use planner_core::{
    BomEntry, DemandRow, PlanError, PlanRow, PriceEntry, ProductivityEntry, RateField, RowError,
};
