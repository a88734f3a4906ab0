use mineralcore::catalog::{Catalog, DescriptionTable, ImageRecord, MineralDescription};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Flag columns of the synthetic catalog, in dropdown order.
pub const DEMO_MINERALS: [&str; 6] = [
    "Olivine",
    "Pyroxene",
    "Hematite",
    "Gypsum",
    "Jarosite",
    "Phyllosilicate",
];

const DEMO_REGIONS: [&str; 5] = [
    "Jezero Crater",
    "Gale Crater",
    "Meridiani Planum",
    "Nili Fossae",
    "Valles Marineris",
];

/// Configuration for synthesizing a demo catalog.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub records: usize,
    pub seed: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            records: 24,
            seed: 0,
        }
    }
}

/// Builds a deterministic synthetic image table for `--demo` serving and for
/// tests, in place of the CSV inputs.
pub fn sample_catalog(config: &DemoConfig) -> Catalog {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let minerals = DEMO_MINERALS.iter().map(|name| name.to_string()).collect();

    let mut records = Vec::with_capacity(config.records);
    for index in 0..config.records {
        let region = DEMO_REGIONS[rng.gen_range(0..DEMO_REGIONS.len())];
        let flags = (0..DEMO_MINERALS.len())
            .map(|_| rng.gen_bool(0.4))
            .collect();
        records.push(ImageRecord {
            id: format!("demo-{:03}", index + 1),
            region: region.to_string(),
            filename: format!("demo-{:03}.jpg", index + 1),
            latitude: rng.gen_range(-60.0..60.0),
            longitude: rng.gen_range(-180.0..180.0),
            flags,
        });
    }

    Catalog::new(minerals, records)
}

/// Descriptions for a subset of the demo minerals; the rest exercise the
/// default-text fallback.
pub fn sample_descriptions() -> DescriptionTable {
    let rows = [
        (
            "Olivine",
            "Magnesium iron silicate common in mafic igneous rocks.",
        ),
        (
            "Hematite",
            "Iron oxide often associated with past aqueous activity.",
        ),
        (
            "Gypsum",
            "Hydrated calcium sulfate deposited by evaporating brines.",
        ),
    ];
    DescriptionTable::new(
        rows.into_iter()
            .map(|(name, text)| MineralDescription {
                name: name.to_string(),
                text: text.to_string(),
            })
            .collect(),
    )
}
