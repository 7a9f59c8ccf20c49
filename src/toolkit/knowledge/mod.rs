

pub mod definitions;
pub mod loader;
pub mod models;

pub use loader::{CatalogError, CatalogLoader};
pub use models::{CatalogStats, Disease, Symptom, SymptomKind, Syndrome};

use std::collections::HashSet;

use lazy_static::lazy_static;
use sha2::{Digest, Sha256};
use tracing::debug;

lazy_static! {
    static ref BUILTIN: Catalog = Catalog {
        diseases: definitions::builtin_diseases(),
    };
}

const FIELD_SEPARATOR: u8 = 0x1f;
const RECORD_SEPARATOR: u8 = 0x1e;

/// Immutable set of diseases and their syndromes.
///
/// Every inference operation reads a `&Catalog`; nothing mutates one after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    diseases: Vec<Disease>,
}

impl Catalog {
    pub fn new(diseases: Vec<Disease>) -> Result<Self, CatalogError> {
        loader::validate(&diseases)?;
        Ok(Self { diseases })
    }

    /// The process-wide built-in catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn disease(&self, id: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.id == id)
    }

    /// Resolves ids in caller order, dropping the ones the catalog doesn't know.
    pub fn resolve<'a, 'b, S: AsRef<str>>(&'a self, ids: &'b [S]) -> impl Iterator<Item = &'a Disease> {
        ids.iter().filter_map(move |id| {
            let id = id.as_ref();
            let disease = self.disease(id);
            if disease.is_none() {
                debug!("Skipping unknown disease id: {}", id);
            }
            disease
        })
    }

    /// TCM aliases of a disease; empty for unknown ids.
    pub fn tcm_aliases(&self, disease_id: &str) -> &[String] {
        self.disease(disease_id)
            .map(|d| d.tcm_aliases.as_slice())
            .unwrap_or(&[])
    }

    pub fn syndromes(&self) -> impl Iterator<Item = (&Disease, &Syndrome)> {
        self.diseases
            .iter()
            .flat_map(|d| d.syndromes.iter().map(move |s| (d, s)))
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            total_diseases: self.diseases.len(),
            total_syndromes: 0,
            total_tcm_symptoms: 0,
            total_western_symptoms: 0,
            distinct_symptoms: 0,
        };
        let mut distinct = HashSet::new();

        for (_, syndrome) in self.syndromes() {
            stats.total_syndromes += 1;
            stats.total_tcm_symptoms += syndrome.tcm_symptoms.len();
            stats.total_western_symptoms += syndrome.western_symptoms.len();
            distinct.extend(syndrome.tagged_symptoms().map(|(_, _, phrase)| phrase));
        }

        stats.distinct_symptoms = distinct.len();
        stats
    }

    /// Hex SHA-256 over the catalog content in catalog order.
    ///
    /// Derived symptom ids are positional; a changed fingerprint means they
    /// may have shifted.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();

        for disease in &self.diseases {
            for field in [&disease.id, &disease.name, &disease.name_en] {
                hasher.update(field.as_bytes());
                hasher.update([FIELD_SEPARATOR]);
            }
            for alias in &disease.tcm_aliases {
                hasher.update(alias.as_bytes());
                hasher.update([FIELD_SEPARATOR]);
            }
            for syndrome in &disease.syndromes {
                hasher.update([RECORD_SEPARATOR]);
                for field in [&syndrome.id, &syndrome.name, &syndrome.name_en] {
                    hasher.update(field.as_bytes());
                    hasher.update([FIELD_SEPARATOR]);
                }
                for (kind, _, phrase) in syndrome.tagged_symptoms() {
                    let kind: &'static str = kind.into();
                    hasher.update(kind.as_bytes());
                    hasher.update(phrase.as_bytes());
                    hasher.update([FIELD_SEPARATOR]);
                }
            }
            hasher.update([RECORD_SEPARATOR, RECORD_SEPARATOR]);
        }

        hasher
            .finalize()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_passes_validation() {
        let catalog = Catalog::builtin();
        assert!(loader::validate(catalog.diseases()).is_ok());
        assert_eq!(catalog.diseases().len(), 8);
    }

    #[test]
    fn test_builtin_ids_unique() {
        let catalog = Catalog::builtin();
        let disease_ids: HashSet<_> = catalog.diseases().iter().map(|d| &d.id).collect();
        assert_eq!(disease_ids.len(), catalog.diseases().len());

        let syndrome_ids: HashSet<_> = catalog.syndromes().map(|(_, s)| &s.id).collect();
        assert_eq!(syndrome_ids.len(), catalog.syndromes().count());
    }

    #[test]
    fn test_builtin_syndromes_have_tcm_symptoms() {
        assert!(Catalog::builtin()
            .syndromes()
            .all(|(_, s)| !s.tcm_symptoms.is_empty()));
    }

    #[test]
    fn test_resolve_skips_unknown() {
        let catalog = Catalog::builtin();
        let ids = ["copd", "nonexistent_disease", "hypertension"];
        let resolved: Vec<_> = catalog.resolve(&ids).map(|d| d.id.as_str()).collect();
        assert_eq!(resolved, vec!["copd", "hypertension"]);
    }

    #[test]
    fn test_tcm_aliases() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.tcm_aliases("hypertension"), ["眩晕", "头痛", "肝风"]);
        assert!(catalog.tcm_aliases("nonexistent_disease").is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = Catalog::builtin().stats();
        assert_eq!(stats.total_diseases, 8);
        assert_eq!(stats.total_syndromes, 17);
        assert!(stats.distinct_symptoms < stats.total_tcm_symptoms + stats.total_western_symptoms);
    }

    #[test]
    fn test_fingerprint_tracks_order() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.fingerprint(), builtin.clone().fingerprint());
        assert_eq!(builtin.fingerprint().len(), 64);

        let mut diseases = builtin.diseases().to_vec();
        diseases[0].syndromes[0].tcm_symptoms.swap(0, 1);
        let reordered = Catalog::new(diseases).unwrap();
        assert_ne!(builtin.fingerprint(), reordered.fingerprint());
    }
}
