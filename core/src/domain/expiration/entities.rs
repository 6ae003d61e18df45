use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Whole numbers below 2^53 are echoed as JSON integers; anything larger stays
/// a float so it is never truncated.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// How much of an item is left.
///
/// The inventory backend sends either a number or a free-text string such as
/// "1 kg", each with an optional separate unit. Both shapes are kept as they
/// arrive.
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    Numeric { value: f64, unit: Option<String> },
    Textual { raw: String, unit: Option<String> },
    /// Missing, null, or any other JSON shape.
    Ambiguous,
}

impl Quantity {
    /// A numeric quantity must be positive. A textual one must be non-empty
    /// after trimming and must not contain the digit '0' anywhere.
    pub fn is_present(&self) -> bool {
        match self {
            Quantity::Numeric { value, .. } => *value > 0.0,
            Quantity::Textual { raw, .. } => {
                let trimmed = raw.trim();
                !trimmed.is_empty() && !trimmed.contains('0')
            }
            Quantity::Ambiguous => false,
        }
    }

    fn from_wire(value: Option<Value>, unit: Option<String>) -> Self {
        match value {
            Some(Value::Number(number)) => number
                .as_f64()
                .map(|value| Quantity::Numeric { value, unit })
                .unwrap_or(Quantity::Ambiguous),
            Some(Value::String(raw)) => Quantity::Textual { raw, unit },
            _ => Quantity::Ambiguous,
        }
    }

    fn into_wire(self) -> (Option<Value>, Option<String>) {
        match self {
            Quantity::Numeric { value, unit } => {
                let number = if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
                    Value::from(value as i64)
                } else {
                    Value::from(value)
                };
                (Some(number), unit)
            }
            Quantity::Textual { raw, unit } => (Some(Value::String(raw)), unit),
            Quantity::Ambiguous => (None, None),
        }
    }
}

/// Calendar day an item expires on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpirationDate {
    Date(NaiveDate),
    /// Unparseable input, kept verbatim so it can be echoed back.
    Malformed(String),
}

impl ExpirationDate {
    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive
    /// `YYYY-MM-DDTHH:MM:SS[.f]` timestamps. Only the date part is kept.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return ExpirationDate::Date(date);
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
            return ExpirationDate::Date(timestamp.date_naive());
        }
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
            return ExpirationDate::Date(timestamp.date());
        }

        ExpirationDate::Malformed(raw.to_string())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            ExpirationDate::Date(date) => Some(*date),
            ExpirationDate::Malformed(_) => None,
        }
    }
}

impl From<NaiveDate> for ExpirationDate {
    fn from(date: NaiveDate) -> Self {
        ExpirationDate::Date(date)
    }
}

/// A food item as owned by the external inventory service.
///
/// Derived attributes (countdown, tier, eligibility) are never stored here;
/// see [`crate::domain::expiration::classify`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FoodItemRecord", into = "FoodItemRecord")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: Quantity,
    pub expiration_date: ExpirationDate,
    pub is_opened: Option<bool>,
    pub is_consumed: bool,
    pub location: Option<String>,
    pub brand: Option<String>,
    pub notes: Option<String>,
    pub purchase_price: Option<f64>,
}

impl FoodItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: Quantity,
        expiration_date: impl Into<ExpirationDate>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            quantity,
            expiration_date: expiration_date.into(),
            is_opened: None,
            is_consumed: false,
            location: None,
            brand: None,
            notes: None,
            purchase_price: None,
        }
    }
}

/// Wire shape of a food item, as the inventory backend and the web client
/// exchange it.
///
/// The inventory service emits the unit under both `unit` and `quantityUnit`
/// and the price under both `purchasePrice` and `price`. Each key is its own
/// field; the first non-null one wins on decode and both are written back.
/// Derived backend fields such as `daysUntilExpiration` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Number, or free text such as "1 kg".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub quantity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity_unit: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_opened: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_consumed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<FoodItemRecord> for FoodItem {
    fn from(record: FoodItemRecord) -> Self {
        let expiration_date = match record.expiration_date {
            Some(raw) => ExpirationDate::parse(&raw),
            None => ExpirationDate::Malformed(String::new()),
        };

        let unit = record.unit.or(record.quantity_unit);

        Self {
            id: record.id,
            name: record.name,
            category: record.category,
            quantity: Quantity::from_wire(record.quantity, unit),
            expiration_date,
            is_opened: record.is_opened,
            is_consumed: record.is_consumed,
            location: record.location,
            brand: record.brand,
            notes: record.notes,
            purchase_price: record.purchase_price.or(record.price),
        }
    }
}

impl From<FoodItem> for FoodItemRecord {
    fn from(item: FoodItem) -> Self {
        let (quantity, unit) = item.quantity.into_wire();
        let expiration_date = match item.expiration_date {
            ExpirationDate::Date(date) => Some(date.format("%Y-%m-%d").to_string()),
            ExpirationDate::Malformed(raw) if raw.is_empty() => None,
            ExpirationDate::Malformed(raw) => Some(raw),
        };

        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            quantity,
            quantity_unit: unit.clone(),
            unit,
            expiration_date,
            is_opened: item.is_opened,
            is_consumed: item.is_consumed,
            location: item.location,
            brand: item.brand,
            notes: item.notes,
            purchase_price: item.purchase_price,
            price: item.purchase_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_numeric_quantity() {
        let item: FoodItem = serde_json::from_value(json!({
            "id": "1",
            "name": "Organic Spinach",
            "category": "Vegetables",
            "quantity": 2,
            "unit": "bags",
            "expirationDate": "2025-09-20",
            "isOpened": false
        }))
        .unwrap();

        assert_eq!(
            item.quantity,
            Quantity::Numeric {
                value: 2.0,
                unit: Some("bags".to_string())
            }
        );
        assert_eq!(
            item.expiration_date,
            ExpirationDate::Date(NaiveDate::from_ymd_opt(2025, 9, 20).unwrap())
        );
        assert_eq!(item.is_opened, Some(false));
        assert!(!item.is_consumed);
    }

    /// Every property the inventory service's Jackson model writes, including
    /// duplicated unit/price getters and derived fields.
    fn inventory_service_record() -> Value {
        json!({
            "id": "66f1",
            "name": "Greek Yogurt",
            "quantity": "1 kg",
            "expirationDate": "2025-09-19",
            "category": "Dairy",
            "brand": null,
            "location": "Fridge",
            "notes": null,
            "imageUrl": null,
            "nutritionInfo": null,
            "purchaseDate": "2025-09-01",
            "purchasePrice": 4.5,
            "price": 4.5,
            "store": "Corner Shop",
            "quantityUsed": 0.0,
            "quantityUnit": "kg",
            "unit": "kg",
            "isOpened": false,
            "isConsumed": true,
            "openedDate": null,
            "consumedDate": null,
            "userId": "user-1",
            "barcode": "0123",
            "createdAt": "2025-09-01T08:00:00",
            "updatedAt": "2025-09-02T08:00:00",
            "daysUntilExpiration": 4,
            "expired": false,
            "expirationStatus": "FRESH"
        })
    }

    #[test]
    fn test_decode_inventory_service_record() {
        let item: FoodItem = serde_json::from_value(inventory_service_record()).unwrap();

        assert_eq!(
            item.quantity,
            Quantity::Textual {
                raw: "1 kg".to_string(),
                unit: Some("kg".to_string())
            }
        );
        assert_eq!(
            item.expiration_date.date(),
            NaiveDate::from_ymd_opt(2025, 9, 19)
        );
        assert_eq!(item.location.as_deref(), Some("Fridge"));
        assert_eq!(item.brand, None);
        assert_eq!(item.purchase_price, Some(4.5));
        assert_eq!(item.is_opened, Some(false));
        assert!(item.is_consumed);
    }

    #[test]
    fn test_decode_inventory_service_list() {
        let mut second = inventory_service_record();
        second["id"] = json!("66f2");
        second["name"] = Value::Null;
        second["isConsumed"] = Value::Null;

        let items: Vec<FoodItem> =
            serde_json::from_value(json!([inventory_service_record(), second])).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "66f2");
        assert_eq!(items[1].name, "");
        assert!(!items[1].is_consumed);
    }

    #[test]
    fn test_decode_single_unit_and_price_keys() {
        let legacy: FoodItem = serde_json::from_value(json!({
            "id": "1",
            "quantity": 3,
            "quantityUnit": "pieces",
            "price": 2.0,
            "expirationDate": "2025-09-19"
        }))
        .unwrap();

        assert_eq!(
            legacy.quantity,
            Quantity::Numeric {
                value: 3.0,
                unit: Some("pieces".to_string())
            }
        );
        assert_eq!(legacy.purchase_price, Some(2.0));
    }

    #[test]
    fn test_textual_quantity_keeps_unit_on_encode() {
        let item: FoodItem = serde_json::from_value(json!({
            "id": "1",
            "quantity": "2",
            "quantityUnit": "kg",
            "expirationDate": "2025-09-19"
        }))
        .unwrap();

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["quantity"], json!("2"));
        assert_eq!(back["unit"], json!("kg"));
        assert_eq!(back["quantityUnit"], json!("kg"));

        let again: FoodItem = serde_json::from_value(back).unwrap();
        assert_eq!(again, item);
    }

    #[test]
    fn test_encode_large_whole_number_as_float() {
        let item = FoodItem::new(
            "1",
            "Rice",
            "Grains",
            Quantity::Numeric {
                value: 1e20,
                unit: None,
            },
            NaiveDate::from_ymd_opt(2025, 9, 18).unwrap(),
        );

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["quantity"].as_f64(), Some(1e20));
        assert!(value["quantity"].as_i64().is_none());
    }

    #[test]
    fn test_decode_degraded_fields() {
        let item: FoodItem = serde_json::from_value(json!({
            "id": "x",
            "name": "Mystery",
            "category": "Other",
            "quantity": true,
            "expirationDate": "next tuesday"
        }))
        .unwrap();

        assert_eq!(item.quantity, Quantity::Ambiguous);
        assert_eq!(
            item.expiration_date,
            ExpirationDate::Malformed("next tuesday".to_string())
        );

        let missing: FoodItem = serde_json::from_value(json!({ "id": "y" })).unwrap();
        assert_eq!(missing.quantity, Quantity::Ambiguous);
        assert_eq!(missing.expiration_date.date(), None);
    }

    #[test]
    fn test_expiration_date_formats() {
        let day = NaiveDate::from_ymd_opt(2025, 9, 18).unwrap();
        assert_eq!(ExpirationDate::parse("2025-09-18").date(), Some(day));
        assert_eq!(
            ExpirationDate::parse("2025-09-18T23:30:00Z").date(),
            Some(day)
        );
        assert_eq!(
            ExpirationDate::parse("2025-09-18T08:15:00.250").date(),
            Some(day)
        );
        assert_eq!(ExpirationDate::parse("18/09/2025").date(), None);
        assert_eq!(ExpirationDate::parse("").date(), None);
    }

    #[test]
    fn test_encode_keeps_wire_shape() {
        let item = FoodItem::new(
            "1",
            "Bread",
            "Bakery",
            Quantity::Numeric {
                value: 1.0,
                unit: Some("loaf".to_string()),
            },
            NaiveDate::from_ymd_opt(2025, 9, 18).unwrap(),
        );

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["quantity"], json!(1));
        assert_eq!(value["unit"], json!("loaf"));
        assert_eq!(value["quantityUnit"], json!("loaf"));
        assert_eq!(value["expirationDate"], json!("2025-09-18"));
        assert!(value.get("location").is_none());
    }

    #[test]
    fn test_quantity_presence() {
        let numeric = |value: f64| Quantity::Numeric { value, unit: None };
        let textual = |raw: &str| Quantity::Textual {
            raw: raw.to_string(),
            unit: None,
        };

        assert!(numeric(3.0).is_present());
        assert!(numeric(0.25).is_present());
        assert!(!numeric(0.0).is_present());
        assert!(!numeric(-1.0).is_present());
        assert!(!numeric(f64::NAN).is_present());

        assert!(textual("2 kg").is_present());
        assert!(!textual("0 kg").is_present());
        assert!(!textual("   ").is_present());
        // The digit rule also rejects "10 pieces".
        assert!(!textual("10 pieces").is_present());

        assert!(!Quantity::Ambiguous.is_present());
    }
}
