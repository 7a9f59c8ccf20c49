use std::collections::HashSet;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

use super::models::Disease;
use super::Catalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate disease id: {0}")]
    DuplicateDisease(String),
    #[error("Duplicate syndrome id: {0}")]
    DuplicateSyndrome(String),
    #[error("Disease has no syndromes: {0}")]
    EmptyDisease(String),
    #[error("Syndrome has no TCM symptoms: {0}")]
    EmptySyndrome(String),
    #[error("Malformed id: {0:?}")]
    MalformedId(String),
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog read error: {0}")]
    Io(#[from] std::io::Error),
}

lazy_static! {
    static ref ID_PATTERN: Regex = Regex::new(r"^[a-z0-9_]+$").expect("static id pattern");
}

fn check_id(id: &str) -> Result<(), CatalogError> {
    if ID_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(CatalogError::MalformedId(id.to_string()))
    }
}

/// Checks the structural invariants every catalog must hold.
pub fn validate(diseases: &[Disease]) -> Result<(), CatalogError> {
    let mut disease_ids = HashSet::new();
    let mut syndrome_ids = HashSet::new();

    for disease in diseases {
        check_id(&disease.id)?;
        if !disease_ids.insert(disease.id.as_str()) {
            return Err(CatalogError::DuplicateDisease(disease.id.clone()));
        }
        if disease.syndromes.is_empty() {
            return Err(CatalogError::EmptyDisease(disease.id.clone()));
        }

        for syndrome in &disease.syndromes {
            check_id(&syndrome.id)?;
            if !syndrome_ids.insert(syndrome.id.as_str()) {
                return Err(CatalogError::DuplicateSyndrome(syndrome.id.clone()));
            }
            if syndrome.tcm_symptoms.is_empty() {
                return Err(CatalogError::EmptySyndrome(syndrome.id.clone()));
            }
        }
    }

    debug!(
        "Validated {} diseases and {} syndromes",
        disease_ids.len(),
        syndrome_ids.len()
    );
    Ok(())
}

/// Builds substitute catalogs from JSON documents.
///
/// The document is an array of diseases using the camelCase field names of
/// the data model (`nameEn`, `tcmAliases`, `tcmSymptoms`, `westernSymptoms`).
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn from_json_str(json: &str) -> Result<Catalog, CatalogError> {
        let diseases: Vec<Disease> = serde_json::from_str(json)?;
        Catalog::new(diseases)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "Loaded catalog from {} ({} diseases)",
            path.display(),
            catalog.diseases().len()
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::knowledge::models::Syndrome;

    fn disease(id: &str, syndromes: Vec<Syndrome>) -> Disease {
        Disease::new(id, id, id).with_syndromes(syndromes)
    }

    fn syndrome(id: &str) -> Syndrome {
        Syndrome::new(id, id, id).with_tcm_symptoms(&["口苦"])
    }

    #[test]
    fn test_rejects_duplicate_syndrome_across_diseases() {
        let diseases = vec![
            disease("a", vec![syndrome("shared")]),
            disease("b", vec![syndrome("shared")]),
        ];
        assert!(matches!(
            validate(&diseases),
            Err(CatalogError::DuplicateSyndrome(id)) if id == "shared"
        ));
    }

    #[test]
    fn test_rejects_duplicate_disease() {
        let diseases = vec![
            disease("a", vec![syndrome("s1")]),
            disease("a", vec![syndrome("s2")]),
        ];
        assert!(matches!(validate(&diseases), Err(CatalogError::DuplicateDisease(_))));
    }

    #[test]
    fn test_rejects_empty_lists() {
        assert!(matches!(
            validate(&[disease("a", vec![])]),
            Err(CatalogError::EmptyDisease(_))
        ));
        assert!(matches!(
            validate(&[disease("a", vec![Syndrome::new("s", "s", "s")])]),
            Err(CatalogError::EmptySyndrome(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_id() {
        assert!(matches!(
            validate(&[disease("Bad Id", vec![syndrome("s")])]),
            Err(CatalogError::MalformedId(_))
        ));
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {
                "id": "gout",
                "name": "痛风",
                "nameEn": "Gout",
                "syndromes": [
                    {"id": "gout_damp_heat", "name": "湿热蕴结型", "nameEn": "Damp-Heat",
                     "tcmSymptoms": ["关节红肿热痛"], "westernSymptoms": ["尿酸升高"]}
                ]
            }
        ]"#;
        let catalog = CatalogLoader::from_json_str(json).unwrap();
        let gout = catalog.disease("gout").unwrap();
        assert!(gout.tcm_aliases.is_empty());
        assert_eq!(gout.syndromes[0].western_symptoms, vec!["尿酸升高"]);
    }

    #[test]
    fn test_from_json_str_parse_error() {
        assert!(matches!(
            CatalogLoader::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_from_missing_path() {
        assert!(matches!(
            CatalogLoader::from_path("/nonexistent/catalog.json"),
            Err(CatalogError::Io(_))
        ));
    }
}
