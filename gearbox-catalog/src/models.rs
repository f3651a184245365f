use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A car model that parts can be fitted to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Car {
    pub id: i64,
    pub model: String,
    pub year: i32,
}

/// A part in the catalog. `owner` ties the part to one car when set;
/// unowned parts are universal stock and never show up in per-car listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Part {
    pub id: i64,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub owner: Option<i64>,
}

/// Search criteria for part listings. Every field is optional and
/// absent fields match everything. Serializing a filter echoes only the
/// criteria that were actually supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub car_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
}

impl PartFilter {
    /// True when the part satisfies all criteria present in the filter.
    pub fn matches(&self, part: &Part) -> bool {
        if let Some(name) = &self.name {
            if !part.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        if let Some(car_id) = self.car_id {
            if part.owner != Some(car_id) {
                return false;
            }
        }

        if let Some(min_price) = self.min_price {
            if part.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if part.price > max_price {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(name: &str, price: Decimal, owner: Option<i64>) -> Part {
        Part {
            id: 1,
            name: name.to_string(),
            price,
            owner,
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PartFilter::default();
        assert!(filter.matches(&part("Oil Filter", Decimal::new(2990, 2), None)));
    }

    #[test]
    fn test_name_match_is_case_insensitive_substring() {
        let filter = PartFilter {
            name: Some("filter".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&part("Air Filter", Decimal::new(1550, 2), None)));
        assert!(filter.matches(&part("FILTERS DELUXE", Decimal::new(1550, 2), None)));
        assert!(!filter.matches(&part("Brake Pads", Decimal::new(8990, 2), None)));
    }

    #[test]
    fn test_car_filter_excludes_universal_parts() {
        let filter = PartFilter {
            car_id: Some(3),
            ..Default::default()
        };

        assert!(filter.matches(&part("Timing Belt", Decimal::new(12000, 2), Some(3))));
        assert!(!filter.matches(&part("Timing Belt", Decimal::new(12000, 2), Some(4))));
        assert!(!filter.matches(&part("Engine Oil 5W30", Decimal::new(4500, 2), None)));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let filter = PartFilter {
            min_price: Some(Decimal::new(5000, 2)),
            max_price: Some(Decimal::new(10000, 2)),
            ..Default::default()
        };

        assert!(filter.matches(&part("Brake Pads", Decimal::new(5000, 2), None)));
        assert!(filter.matches(&part("Brake Discs", Decimal::new(10000, 2), None)));
        assert!(!filter.matches(&part("Spark Plug", Decimal::new(4999, 2), None)));
        assert!(!filter.matches(&part("Radiator", Decimal::new(10001, 2), None)));
    }

    #[test]
    fn test_criteria_combine_conjunctively() {
        let filter = PartFilter {
            name: Some("filter".to_string()),
            car_id: Some(2),
            min_price: Some(Decimal::new(1000, 2)),
            max_price: None,
        };

        assert!(filter.matches(&part("Fuel Filter", Decimal::new(3550, 2), Some(2))));
        // right name and owner, below the floor
        assert!(!filter.matches(&part("Fuel Filter", Decimal::new(900, 2), Some(2))));
        // right name and price, wrong owner
        assert!(!filter.matches(&part("Fuel Filter", Decimal::new(3550, 2), Some(9))));
    }
}
