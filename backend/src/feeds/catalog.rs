//! Catalog feed parsing (`id, name, category, unit, shelf_life_days`)

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use shared::{normalize_product_id, validate_product, Catalog, Product};

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    name: String,
    category: String,
    unit: String,
    shelf_life_days: u32,
}

/// Parse the catalog CSV, keeping row order
pub fn parse_catalog(data: &[u8]) -> Result<Catalog, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(data);

    let mut catalog = Catalog::new();
    for (index, row) in reader.deserialize::<CatalogRow>().enumerate() {
        let line = index + 2;
        let row = row.map_err(|e| format!("row {}: {}", line, e))?;

        let id = normalize_product_id(&row.id)
            .ok_or_else(|| format!("row {}: invalid id '{}'", line, row.id))?;
        let product = Product {
            name: row.name,
            category: row.category,
            unit: row.unit,
            shelf_life_days: row.shelf_life_days,
        };
        validate_product(&product).map_err(|e| format!("row {}: {}", line, e))?;

        catalog.insert(id, product);
    }

    Ok(catalog)
}
