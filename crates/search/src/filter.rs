//! Attribute filtering over property records
//!
//! All configured bounds combine with logical AND. Evaluation order is
//! price-min, price-max, bedroom-min, bedroom-max, bathroom-min, amenities.

use crate::types::{FilterSpec, PropertyRecord};

/// Check whether a record satisfies every configured bound of the spec
pub fn matches(record: &PropertyRecord, spec: &FilterSpec) -> bool {
    if let Some(min_price) = spec.min_price {
        if record.price < min_price {
            return false;
        }
    }

    if let Some(max_price) = spec.max_price {
        if record.price > max_price {
            return false;
        }
    }

    if let Some(min_bedrooms) = spec.min_bedrooms {
        if record.bedrooms < min_bedrooms {
            return false;
        }
    }

    if let Some(max_bedrooms) = spec.max_bedrooms {
        if record.bedrooms > max_bedrooms {
            return false;
        }
    }

    if let Some(min_bathrooms) = spec.min_bathrooms {
        if record.bathrooms < min_bathrooms {
            return false;
        }
    }

    // A required amenity is satisfied if any record amenity contains it,
    // case-folded. A record with no amenities never satisfies a requirement.
    for required in &spec.required_amenities {
        let required = required.to_lowercase();
        let found = record
            .amenities
            .iter()
            .any(|amenity| amenity.to_lowercase().contains(&required));
        if !found {
            return false;
        }
    }

    true
}

/// Produce the ordered subsequence of records matching the spec
///
/// Preserves input relative order and borrows; records are never cloned or
/// mutated.
pub fn filter<'a>(records: &'a [PropertyRecord], spec: &FilterSpec) -> Vec<&'a PropertyRecord> {
    records.iter().filter(|record| matches(record, spec)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, price: f64, bedrooms: u32, bathrooms: f64, amenities: &[&str]) -> PropertyRecord {
        PropertyRecord {
            id: id.to_string(),
            title: format!("Listing {}", id),
            address: "1 Test St".to_string(),
            price,
            bedrooms,
            bathrooms,
            amenities: amenities.iter().map(|s| s.to_string()).collect(),
            description: String::new(),
            embedding: None,
        }
    }

    #[test]
    fn test_empty_spec_passes_everything() {
        let records = vec![
            record("a", 1000.0, 1, 1.0, &[]),
            record("b", 9000.0, 4, 3.5, &["Pool"]),
        ];
        let spec = FilterSpec::default();

        let kept = filter(&records, &spec);
        assert_eq!(kept.len(), records.len());
        // Identity law: order and membership are unchanged
        for (original, kept) in records.iter().zip(&kept) {
            assert_eq!(original.id, kept.id);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![
            record("a", 1000.0, 1, 1.0, &[]),
            record("b", 3000.0, 2, 2.0, &[]),
            record("c", 5000.0, 3, 2.5, &[]),
        ];
        let spec = FilterSpec {
            min_price: Some(2000.0),
            ..Default::default()
        };

        let once: Vec<String> = filter(&records, &spec).iter().map(|r| r.id.clone()).collect();
        let survivors: Vec<PropertyRecord> = records
            .iter()
            .filter(|r| matches(r, &spec))
            .cloned()
            .collect();
        let twice: Vec<String> = filter(&survivors, &spec).iter().map(|r| r.id.clone()).collect();

        assert_eq!(once, vec!["b", "c"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_price_bounds() {
        let spec = FilterSpec {
            min_price: Some(2000.0),
            max_price: Some(4000.0),
            ..Default::default()
        };

        assert!(!matches(&record("low", 1999.0, 1, 1.0, &[]), &spec));
        assert!(matches(&record("min", 2000.0, 1, 1.0, &[]), &spec)); // inclusive
        assert!(matches(&record("max", 4000.0, 1, 1.0, &[]), &spec)); // inclusive
        assert!(!matches(&record("high", 4001.0, 1, 1.0, &[]), &spec));
    }

    #[test]
    fn test_bedroom_and_bathroom_bounds() {
        let spec = FilterSpec {
            min_bedrooms: Some(2),
            max_bedrooms: Some(3),
            min_bathrooms: Some(1.5),
            ..Default::default()
        };

        assert!(!matches(&record("a", 1000.0, 1, 2.0, &[]), &spec));
        assert!(matches(&record("b", 1000.0, 2, 1.5, &[]), &spec));
        assert!(matches(&record("c", 1000.0, 3, 2.0, &[]), &spec));
        assert!(!matches(&record("d", 1000.0, 4, 2.0, &[]), &spec));
        assert!(!matches(&record("e", 1000.0, 2, 1.0, &[]), &spec));
    }

    #[test]
    fn test_amenity_match_is_case_insensitive_substring() {
        let spec = FilterSpec {
            required_amenities: vec!["pet friendly".to_string()],
            ..Default::default()
        };

        assert!(matches(
            &record("a", 1000.0, 1, 1.0, &["Pet Friendly", "parking"]),
            &spec
        ));
        // Substring containment, not equality
        assert!(matches(
            &record("b", 1000.0, 1, 1.0, &["Very Pet Friendly Building"]),
            &spec
        ));
        assert!(!matches(&record("c", 1000.0, 1, 1.0, &["parking"]), &spec));
    }

    #[test]
    fn test_all_required_amenities_must_match() {
        let spec = FilterSpec {
            required_amenities: vec!["gym".to_string(), "pool".to_string()],
            ..Default::default()
        };

        assert!(matches(
            &record("a", 1000.0, 1, 1.0, &["Gym", "Rooftop Pool"]),
            &spec
        ));
        assert!(!matches(&record("b", 1000.0, 1, 1.0, &["Gym"]), &spec));
    }

    #[test]
    fn test_required_amenities_never_match_empty_record() {
        let spec = FilterSpec {
            required_amenities: vec!["parking".to_string()],
            ..Default::default()
        };

        assert!(!matches(&record("a", 1000.0, 1, 1.0, &[]), &spec));
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let records = vec![
            record("c", 3000.0, 2, 1.0, &[]),
            record("a", 3000.0, 2, 1.0, &[]),
            record("b", 1000.0, 2, 1.0, &[]),
        ];
        let spec = FilterSpec {
            min_price: Some(2000.0),
            ..Default::default()
        };

        let kept: Vec<&str> = filter(&records, &spec).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(kept, vec!["c", "a"]);
    }
}
