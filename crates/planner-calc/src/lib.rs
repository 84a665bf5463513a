//! # Plan Calculation Engine
//!
//! 批次生產計劃計算引擎

pub mod calculator;
pub mod costing;
pub mod labor;

// Re-export 主要類型
pub use calculator::PlanCalculator;

use planner_core::RowError;
use rust_decimal::Decimal;

/// 計劃計算結果
#[derive(Debug, Clone)]
pub struct PlanResult {
    /// 計劃列（每筆成功解析的需求列一筆，維持輸入順序）
    pub rows: Vec<planner_core::PlanRow>,

    /// 診斷信息（錯誤與警告，維持輸入順序）
    pub diagnostics: Vec<Diagnostic>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl PlanResult {
    /// 創建空的計算結果
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            diagnostics: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加診斷
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// 僅取錯誤級診斷（該列未產生結果）
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Error)
    }

    /// 僅取警告級診斷（該列仍有結果）
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
    }

    /// 全部計劃列的總生產成本
    pub fn total_cost(&self) -> Decimal {
        self.rows.iter().map(|r| r.total_production_cost).sum()
    }

    /// 全部計劃列的工人數合計
    pub fn total_workers(&self) -> u32 {
        self.rows.iter().map(|r| r.required_workers).sum()
    }
}

/// 計劃診斷：一筆需求列的錯誤或警告
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 需求列的產品名稱
    pub product: String,

    /// 錯誤內容
    pub error: RowError,

    /// 嚴重度
    pub severity: DiagnosticSeverity,
}

impl Diagnostic {
    pub fn new(product: String, error: RowError) -> Self {
        let severity = if error.is_warning() {
            DiagnosticSeverity::Warning
        } else {
            DiagnosticSeverity::Error
        };
        Self {
            product,
            error,
            severity,
        }
    }

    /// 診斷訊息文字
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Warning,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_severity_from_error() {
        let diag = Diagnostic::new(
            "Bobolo".to_string(),
            RowError::MissingBomEntry("Bobolo".to_string()),
        );
        assert_eq!(diag.severity, DiagnosticSeverity::Error);
        assert_eq!(diag.message(), "no BOM entry for Bobolo");

        let warn = Diagnostic::new(
            "Bobolo".to_string(),
            RowError::MissingPriceEntry("Palm nuts".to_string()),
        );
        assert_eq!(warn.severity, DiagnosticSeverity::Warning);
    }

    #[test]
    fn test_empty_result_totals() {
        let result = PlanResult::empty();
        assert_eq!(result.total_cost(), Decimal::ZERO);
        assert_eq!(result.total_workers(), 0);
        assert_eq!(result.errors().count(), 0);
        assert_eq!(result.warnings().count(), 0);
    }
}
