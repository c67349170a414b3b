use std::path::Path;

use crate::error::Result;
use crate::models::OrderRecord;

/// Write the ordered meals of a record to CSV, one row per item.
pub fn write_order_csv(record: &OrderRecord, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "order_id",
        "meal",
        "ingredient",
        "category",
        "grams",
        "calories",
        "protein",
        "carbs",
        "fats",
    ])?;

    for (slot, items) in record.meal_plan.iter() {
        for item in items {
            wtr.write_record([
                record.order_id.clone(),
                slot.key().to_string(),
                item.display_name.clone(),
                item.category.label().to_string(),
                item.mass_units.to_string(),
                item.calories.to_string(),
                item.protein.to_string(),
                item.carbs.to_string(),
                item.fats.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
