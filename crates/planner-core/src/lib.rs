//! # Planner Core
//!
//! 核心資料模型與類型定義

pub mod bom;
pub mod demand;
pub mod plan;
pub mod price;
pub mod productivity;

// Re-export 主要類型
pub use bom::BomEntry;
pub use demand::DemandRow;
pub use plan::PlanRow;
pub use price::PriceEntry;
pub use productivity::ProductivityEntry;

use rust_decimal::Decimal;

/// 計算整體錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("無效的日薪: {0}（不可為負）")]
    NegativePayRate(Decimal),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;

/// 單筆需求列的錯誤類型
///
/// 逐列收集，不中斷整批計算。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// 找不到產品的 BOM 條目，該列不產生結果
    #[error("no BOM entry for {0}")]
    MissingBomEntry(String),

    /// 找不到產品的生產力條目，該列不產生結果
    #[error("no productivity entry for {0}")]
    MissingProductivityEntry(String),

    /// 找不到原料價格，該列仍以單價 0 計算（警告）
    #[error("no price found for raw material: {0}")]
    MissingPriceEntry(String),

    /// 比率欄位為零或負值，除法無定義，該列不產生結果
    #[error("invalid {field} for {product}: must be positive")]
    InvalidRate { product: String, field: RateField },

    /// 數值轉換失敗（防禦性檢查）
    #[error("calculation error for {product}: {message}")]
    Calculation { product: String, message: String },
}

impl RowError {
    /// 取得錯誤關聯的產品或原料識別名
    pub fn subject(&self) -> &str {
        match self {
            RowError::MissingBomEntry(product) => product,
            RowError::MissingProductivityEntry(product) => product,
            RowError::MissingPriceEntry(raw_material) => raw_material,
            RowError::InvalidRate { product, .. } => product,
            RowError::Calculation { product, .. } => product,
        }
    }

    /// 是否為警告（該列仍會產生結果）
    pub fn is_warning(&self) -> bool {
        matches!(self, RowError::MissingPriceEntry(_))
    }
}

/// 無效比率的欄位標記
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RateField {
    /// 每工人每日產量
    UnitsPerWorkerPerDay,
    /// 可用天數
    DaysAvailable,
}

impl std::fmt::Display for RateField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateField::UnitsPerWorkerPerDay => write!(f, "units per worker per day"),
            RateField::DaysAvailable => write!(f, "days available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_error_messages() {
        let err = RowError::MissingBomEntry("Bobolo".to_string());
        assert_eq!(err.to_string(), "no BOM entry for Bobolo");
        assert_eq!(err.subject(), "Bobolo");
        assert!(!err.is_warning());

        let warn = RowError::MissingPriceEntry("Palm nuts".to_string());
        assert_eq!(
            warn.to_string(),
            "no price found for raw material: Palm nuts"
        );
        assert!(warn.is_warning());
    }

    #[test]
    fn test_invalid_rate_message() {
        let err = RowError::InvalidRate {
            product: "Ekwang".to_string(),
            field: RateField::DaysAvailable,
        };
        assert_eq!(
            err.to_string(),
            "invalid days available for Ekwang: must be positive"
        );
        assert_eq!(err.subject(), "Ekwang");
    }
}
