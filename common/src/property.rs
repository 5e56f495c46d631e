//! Listing records as served by `GET /api/properties`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    #[serde(default)]
    pub photo: String,
    pub identification: String,
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub modality: String,
    #[serde(default)]
    pub payment_conditions: Vec<String>,
    #[serde(default)]
    pub expense_payment_rules: Vec<String>,
    pub appraisal_value: f64,
    pub first_sale_date: Option<NaiveDate>,
    pub first_sale_price: f64,
    pub first_sale_discount_percent: f64,
    pub second_sale_date: Option<NaiveDate>,
    /// Current minimum bid.
    pub second_sale_price: f64,
    pub second_sale_discount_percent: f64,
    pub state: String,
    pub city: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub is_favorite: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: u64,
    pub pages: u64,
}

impl PageMeta {
    pub fn new(total: u64, limit: u64) -> Self {
        Self { total, pages: total.div_ceil(limit.max(1)) }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyPage {
    pub data: Vec<Property>,
    pub meta: PageMeta,
}

impl PropertyPage {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Body of `POST /api/favorites` and `DELETE /api/favorites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub user_id: String,
    pub property_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_json_uses_api_field_names() {
        let json = r#"{
            "id": "cx-1",
            "identification": "Apto 12",
            "type": "Apartamento",
            "appraisalValue": 250000,
            "firstSaleDate": "2025-03-07",
            "firstSalePrice": 240000,
            "firstSaleDiscountPercent": 4,
            "secondSaleDate": null,
            "secondSalePrice": 150000,
            "secondSaleDiscountPercent": 40,
            "state": "SP",
            "city": "Campinas"
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.property_type, "Apartamento");
        assert_eq!(property.first_sale_date, NaiveDate::from_ymd_opt(2025, 3, 7));
        assert!(!property.is_favorite);

        let back = serde_json::to_value(&property).unwrap();
        assert_eq!(back["type"], "Apartamento");
        assert_eq!(back["isFavorite"], false);
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(PageMeta::new(25, 12), PageMeta { total: 25, pages: 3 });
        assert_eq!(PageMeta::new(0, 12).pages, 0);
    }
}
