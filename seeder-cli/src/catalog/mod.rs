//! Built-in catalog content, grouped by generation.
//!
//! Each module holds one versioned batch of pre-normalized records, exactly as it was
//! authored for that curriculum cycle. The order returned by [`sources`] is the merge
//! priority of the pipeline: for conflicting codes, later batches win, so newer
//! generations override both the legacy dump and older generations.

mod expansion_2024;
mod foundations;
mod refresh_2025;

use seeder::sources::MemorySource;

/// Returns the in-memory catalog generations in merge order.
pub fn sources() -> Vec<MemorySource> {
    vec![
        MemorySource::new("foundations", foundations::records()),
        MemorySource::new("expansion-2024", expansion_2024::records()),
        MemorySource::new("refresh-2025", refresh_2025::records()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_order_is_stable() {
        let names: Vec<String> = sources()
            .iter()
            .map(|source| source.name().to_string())
            .collect();

        // The merge priority contract: this order must not change silently.
        assert_eq!(names, vec!["foundations", "expansion-2024", "refresh-2025"]);
    }

    #[test]
    fn every_generation_record_has_a_code() {
        for source in sources() {
            for record in source.records() {
                assert!(
                    !record.code.is_empty(),
                    "record without code in generation '{}'",
                    source.name()
                );
            }
        }
    }

    #[test]
    fn difficulties_are_within_catalog_range() {
        for source in sources() {
            for record in source.records() {
                for bound in [record.difficulty_min, record.difficulty_max] {
                    assert!(
                        (1..=5).contains(&bound),
                        "difficulty {bound} out of range on '{}'",
                        record.code
                    );
                }
            }
        }
    }
}
