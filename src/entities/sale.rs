//! Sale record: one product sold during a work session.

use super::{float_field, int_field, text_field, timestamp, timestamp_field};
use crate::errors::Result;
use crate::store::{ColumnType, CoercionTable, RawRecord, Record, Value};
use chrono::NaiveDateTime;

/// One row of the sales log. Append-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    /// Id of the employee who made the sale.
    pub employee_id: i64,
    /// Free-text product name.
    pub product_name: String,
    /// Sale price.
    pub total_price: f64,
    /// When the sale was recorded.
    pub sale_time: NaiveDateTime,
}

impl Sale {
    /// Column coercions for the sales log file.
    #[must_use]
    pub fn coercion_table() -> CoercionTable {
        CoercionTable::new()
            .column("employee_id", ColumnType::Integer)
            .column("total_price", ColumnType::Float)
    }
}

impl Record for Sale {
    fn from_raw(raw: &RawRecord) -> Result<Self> {
        Ok(Self {
            employee_id: int_field(raw, "employee_id")?,
            product_name: text_field(raw, "product_name")?,
            total_price: float_field(raw, "total_price")?,
            sale_time: timestamp_field(raw, "sale_time")?,
        })
    }

    fn to_raw(&self) -> RawRecord {
        RawRecord::new()
            .with("employee_id", Value::Int(self.employee_id))
            .with("product_name", Value::Text(self.product_name.clone()))
            .with("total_price", Value::Float(self.total_price))
            .with("sale_time", Value::Text(timestamp::render(self.sale_time)))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn raw_round_trip() {
        let sale = Sale {
            employee_id: 1,
            product_name: "Widget".to_string(),
            total_price: 9.99,
            sale_time: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        };
        assert_eq!(Sale::from_raw(&sale.to_raw()).unwrap(), sale);
    }
}
