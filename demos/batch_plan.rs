//! 批次計劃計算示例：含缺表與缺價的診斷輸出

use planner::{
    BomEntry, DemandRow, DiagnosticSeverity, PlanCalculator, PriceEntry, ProductivityEntry,
};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let bom = vec![
        BomEntry::new(
            "Bobolo (Abunde Foods)".to_string(),
            "Cassava".to_string(),
            Decimal::from(75),
        )
        .with_raw_material_unit("kg".to_string()),
        BomEntry::new(
            "CDC Palm Oil (20L)".to_string(),
            "Palm nuts".to_string(),
            Decimal::from(20),
        )
        .with_raw_material_unit("kg".to_string()),
        BomEntry::new(
            "Ekwang".to_string(),
            "Cocoyam tubers".to_string(),
            Decimal::from(36),
        )
        .with_raw_material_unit("kg".to_string()),
    ];

    let productivity = vec![
        ProductivityEntry::new("Bobolo (Abunde Foods)".to_string(), Decimal::from(30)),
        ProductivityEntry::new("CDC Palm Oil (20L)".to_string(), Decimal::from(40)),
        ProductivityEntry::new("Ekwang".to_string(), Decimal::from(25)),
    ];

    // 故意缺 Palm nuts 的價格，示範警告路徑
    let prices = vec![
        PriceEntry::new("Cassava".to_string(), Decimal::from(300)).with_unit("kg".to_string()),
        PriceEntry::new("Cocoyam tubers".to_string(), Decimal::from(400))
            .with_unit("kg".to_string()),
    ];

    let calculator = PlanCalculator::new(bom, productivity, prices, Decimal::from(3000));

    let plan = vec![
        DemandRow::new(
            "Bobolo (Abunde Foods)".to_string(),
            Decimal::from(60),
            Decimal::from(7),
        )
        .with_source_ref("SO-001".to_string()),
        DemandRow::new(
            "CDC Palm Oil (20L)".to_string(),
            Decimal::from(80),
            Decimal::from(4),
        ),
        DemandRow::new("Mbongo Tchobi".to_string(), Decimal::from(20), Decimal::from(3)),
        DemandRow::new("Ekwang".to_string(), Decimal::from(50), Decimal::from(2)),
    ];

    let result = calculator.calculate(&plan)?;

    println!("\n=== 計劃結果 ===");
    for row in &result.rows {
        println!(
            "{}: {} {} {}，{} 人，成本 {} FCFA",
            row.product,
            row.total_raw_material,
            row.raw_material_unit,
            row.raw_material,
            row.required_workers,
            row.total_production_cost
        );
    }

    println!("\n=== 診斷 ===");
    for diagnostic in &result.diagnostics {
        let level = match diagnostic.severity {
            DiagnosticSeverity::Warning => "警告",
            DiagnosticSeverity::Error => "錯誤",
        };
        println!("[{}] {}: {}", level, diagnostic.product, diagnostic.message());
    }

    println!("\n工人合計: {} 人", result.total_workers());
    println!("總成本: {} FCFA", result.total_cost());
    if let Some(elapsed) = result.calculation_time_ms {
        println!("耗時: {} ms", elapsed);
    }

    Ok(())
}
