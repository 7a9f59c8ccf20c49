use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::toolkit::knowledge::{Catalog, Disease, SymptomKind, Syndrome};
use crate::{MIN_MATCH_SCORE, TCM_SYMPTOM_WEIGHT, WESTERN_SYMPTOM_WEIGHT};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyndromeMatch<'a> {
    pub disease: &'a Disease,
    pub syndrome: &'a Syndrome,
    pub score: u32,
}

impl SyndromeMatch<'_> {
    /// `"{disease} - {syndrome}"` using the catalog display names.
    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn summary(&self) -> SyndromeMatchSummary {
        SyndromeMatchSummary {
            disease_id: self.disease.id.clone(),
            syndrome_id: self.syndrome.id.clone(),
            syndrome_name: self.syndrome.name.clone(),
            syndrome_name_en: self.syndrome.name_en.clone(),
            score: self.score,
            label: self.label(),
        }
    }
}

impl fmt::Display for SyndromeMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.disease.name, self.syndrome.name)
    }
}


/// Owned form of a [`SyndromeMatch`] for reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyndromeMatchSummary {
    pub disease_id: String,
    pub syndrome_id: String,
    pub syndrome_name: String,
    pub syndrome_name_en: String,
    pub score: u32,
    pub label: String,
}


fn weight(kind: SymptomKind) -> u32 {
    match kind {
        SymptomKind::Tcm => TCM_SYMPTOM_WEIGHT,
        SymptomKind::Western => WESTERN_SYMPTOM_WEIGHT,
    }
}

/// Bidirectional substring containment.
#[inline]
pub fn phrases_overlap(catalog_phrase: &str, observed: &str) -> bool {
    observed.contains(catalog_phrase) || catalog_phrase.contains(observed)
}

/// Sums the kind weight over every (syndrome phrase, observed phrase) pair that overlaps.
pub fn score_syndrome<S: AsRef<str>>(syndrome: &Syndrome, observed: &[S]) -> u32 {
    syndrome
        .tagged_symptoms()
        .map(|(kind, _, phrase)| {
            let hits = observed
                .iter()
                .filter(|o| phrases_overlap(phrase, o.as_ref()))
                .count() as u32;
            hits * weight(kind)
        })
        .sum()
}

/// Best-scoring syndrome among the selected diseases.
///
/// Returns `None` when either input is empty or the best score is below
/// [`MIN_MATCH_SCORE`]. Ties keep the syndrome met first.
pub fn infer_syndrome<'a, D, S>(
    catalog: &'a Catalog,
    disease_ids: &[D],
    observed: &[S],
) -> Option<SyndromeMatch<'a>>
where
    D: AsRef<str>,
    S: AsRef<str>,
{
    if disease_ids.is_empty() || observed.is_empty() {
        return None;
    }

    let mut best: Option<SyndromeMatch<'a>> = None;

    for disease in catalog.resolve(disease_ids) {
        for syndrome in &disease.syndromes {
            let score = score_syndrome(syndrome, observed);
            debug!("Syndrome {} scored {}", syndrome.id, score);

            if score > 0 && best.is_none_or(|b| score > b.score) {
                best = Some(SyndromeMatch { disease, syndrome, score });
            }
        }
    }

    best.filter(|b| b.score >= MIN_MATCH_SCORE)
}
