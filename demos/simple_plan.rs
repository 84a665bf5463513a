//! 單一產品計劃計算示例

use planner::{BomEntry, DemandRow, PlanCalculator, PriceEntry, ProductivityEntry};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 單一產品計劃計算示例 ===\n");

    let bom = vec![BomEntry::new(
        "Bobolo (Abunde Foods)".to_string(),
        "Cassava".to_string(),
        Decimal::from(75),
    )
    .with_output_unit_description("Box of 25 packs (3 x 1kg)".to_string())
    .with_raw_material_unit("kg".to_string())];

    let productivity = vec![ProductivityEntry::new(
        "Bobolo (Abunde Foods)".to_string(),
        Decimal::from(30),
    )];

    let prices =
        vec![PriceEntry::new("Cassava".to_string(), Decimal::from(300)).with_unit("kg".to_string())];

    let calculator = PlanCalculator::new(bom, productivity, prices, Decimal::from(3000));

    let plan = vec![DemandRow::new(
        "Bobolo (Abunde Foods)".to_string(),
        Decimal::from(60),
        Decimal::from(7),
    )];

    let result = calculator.calculate(&plan)?;

    for row in &result.rows {
        println!("產品: {}", row.product);
        println!(
            "  原料需求: {} {} {}",
            row.total_raw_material, row.raw_material_unit, row.raw_material
        );
        println!("  總人日: {}", row.worker_days);
        println!("  所需工人: {} 人", row.required_workers);
        println!("  物料成本: {} FCFA", row.material_cost);
        println!("  人工成本: {} FCFA", row.labor_cost);
        println!("  總生產成本: {} FCFA", row.total_production_cost);
    }

    Ok(())
}
