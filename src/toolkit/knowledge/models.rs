

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};


#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
    Display, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SymptomKind {
    /// Traditional-medicine vocabulary.
    Tcm,
    /// Biomedical symptoms and indicators.
    Western,
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Syndrome {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub tcm_symptoms: Vec<String>,
    #[serde(default)]
    pub western_symptoms: Vec<String>,
}

impl Syndrome {
    pub fn new(id: impl Into<String>, name: impl Into<String>, name_en: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_en: name_en.into(),
            tcm_symptoms: Vec::new(),
            western_symptoms: Vec::new(),
        }
    }

    pub fn with_tcm_symptoms(mut self, symptoms: &[&str]) -> Self {
        self.tcm_symptoms = symptoms.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_western_symptoms(mut self, symptoms: &[&str]) -> Self {
        self.western_symptoms = symptoms.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Every phrase tagged with its kind and list index: tcm list first, then western.
    pub fn tagged_symptoms(&self) -> impl Iterator<Item = (SymptomKind, usize, &str)> {
        let tcm = self
            .tcm_symptoms
            .iter()
            .enumerate()
            .map(|(i, s)| (SymptomKind::Tcm, i, s.as_str()));
        let western = self
            .western_symptoms
            .iter()
            .enumerate()
            .map(|(i, s)| (SymptomKind::Western, i, s.as_str()));
        tcm.chain(western)
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disease {
    pub id: String,
    pub name: String,
    pub name_en: String,
    #[serde(default)]
    pub tcm_aliases: Vec<String>,
    pub syndromes: Vec<Syndrome>,
}

impl Disease {
    pub fn new(id: impl Into<String>, name: impl Into<String>, name_en: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_en: name_en.into(),
            tcm_aliases: Vec::new(),
            syndromes: Vec::new(),
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.tcm_aliases = aliases.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_syndromes(mut self, syndromes: Vec<Syndrome>) -> Self {
        self.syndromes = syndromes;
        self
    }

    pub fn syndrome(&self, id: &str) -> Option<&Syndrome> {
        self.syndromes.iter().find(|s| s.id == id)
    }
}


/// A symptom derived from a syndrome's phrase lists.
///
/// The id is positional (`{syndrome}_{kind}_{index}`), so it changes whenever
/// the owning list is reordered. Pair it with [`Catalog::fingerprint`] when it
/// has to survive a catalog edit.
///
/// [`Catalog::fingerprint`]: super::Catalog::fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub name_en: String,
    #[serde(rename = "type")]
    pub kind: SymptomKind,
}

impl Symptom {
    pub fn derive(syndrome_id: &str, kind: SymptomKind, index: usize, phrase: &str) -> Self {
        Self {
            id: format!("{}_{}_{}", syndrome_id, kind, index),
            name: phrase.to_string(),
            // No separate translation exists in the catalog.
            name_en: phrase.to_string(),
            kind,
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_diseases: usize,
    pub total_syndromes: usize,
    pub total_tcm_symptoms: usize,
    pub total_western_symptoms: usize,
    pub distinct_symptoms: usize,
}
