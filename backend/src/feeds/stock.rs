//! Stock feed parsing (`product_id, stock, days_to_cover`)

use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    normalize_product_id, validate_stock_level, StockLevel, StockLevels, DEFAULT_DAYS_TO_COVER,
};

#[derive(Debug, Deserialize)]
struct StockRow {
    product_id: String,
    stock: Decimal,
    days_to_cover: Option<u32>,
}

/// Parse the stock CSV, keeping row order. A repeated product id keeps its
/// first position and takes the values of its last row.
pub fn parse_stock(data: &[u8]) -> Result<StockLevels, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(data);

    let mut levels = StockLevels::new();
    for (index, row) in reader.deserialize::<StockRow>().enumerate() {
        let line = index + 2;
        let row = row.map_err(|e| format!("row {}: {}", line, e))?;

        let product_id = normalize_product_id(&row.product_id)
            .ok_or_else(|| format!("row {}: invalid product_id '{}'", line, row.product_id))?;
        let level = StockLevel {
            stock: row.stock,
            days_to_cover: row.days_to_cover.unwrap_or(DEFAULT_DAYS_TO_COVER),
        };
        validate_stock_level(&level).map_err(|e| format!("row {}: {}", line, e))?;

        levels.insert(product_id, level);
    }

    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stock() {
        let csv = "product_id,stock,days_to_cover\n1,10,3\n2,12.5,7\n";
        let levels = parse_stock(csv.as_bytes()).unwrap();

        assert_eq!(levels.len(), 2);
        assert_eq!(levels["1"].stock, Decimal::from(10));
        assert_eq!(levels["1"].days_to_cover, 3);
        assert_eq!(levels["2"].stock, Decimal::new(125, 1));
    }

    #[test]
    fn test_parse_stock_keeps_row_order() {
        let csv = "product_id,stock,days_to_cover\n30,1,1\n4,1,1\n17,1,1\n";
        let levels = parse_stock(csv.as_bytes()).unwrap();
        assert_eq!(levels.keys().collect::<Vec<_>>(), vec!["30", "4", "17"]);
    }

    #[test]
    fn test_parse_stock_normalizes_ids_and_defaults_coverage() {
        let csv = "product_id,stock,days_to_cover\n 5.0 , 3 ,\n";
        let levels = parse_stock(csv.as_bytes()).unwrap();
        assert_eq!(levels["5"].days_to_cover, DEFAULT_DAYS_TO_COVER);
    }

    #[test]
    fn test_parse_stock_rejects_bad_rows() {
        let non_numeric = "product_id,stock,days_to_cover\n1,lots,3\n";
        assert!(parse_stock(non_numeric.as_bytes()).is_err());

        let bad_id = "product_id,stock,days_to_cover\nmilk,1,3\n";
        let err = parse_stock(bad_id.as_bytes()).unwrap_err();
        assert!(err.contains("invalid product_id"));

        let zero_cover = "product_id,stock,days_to_cover\n1,1,0\n";
        let err = parse_stock(zero_cover.as_bytes()).unwrap_err();
        assert!(err.contains("days_to_cover"));
    }

    #[test]
    fn test_parse_stock_rejects_missing_column() {
        let csv = "product_id,days_to_cover\n1,3\n";
        assert!(parse_stock(csv.as_bytes()).is_err());
    }
}
