use std::collections::HashSet;

use tracing::debug;

use crate::toolkit::knowledge::{Catalog, Disease, Symptom};

fn collect_symptoms<'a>(diseases: impl Iterator<Item = &'a Disease>) -> Vec<Symptom> {
    let mut symptoms = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for disease in diseases {
        for syndrome in &disease.syndromes {
            for (kind, index, phrase) in syndrome.tagged_symptoms() {
                if seen.insert(phrase) {
                    symptoms.push(Symptom::derive(&syndrome.id, kind, index, phrase));
                }
            }
        }
    }

    symptoms
}

/// Symptoms of the given diseases, de-duplicated by exact phrase.
///
/// Order follows the caller's disease order, then catalog syndrome order, then
/// tcm before western, then list position. The first occurrence of a phrase
/// keeps its id. Unknown disease ids are skipped.
pub fn project_symptoms<S: AsRef<str>>(catalog: &Catalog, disease_ids: &[S]) -> Vec<Symptom> {
    let symptoms = collect_symptoms(catalog.resolve(disease_ids));
    debug!(
        "Projected {} symptoms for {} disease ids",
        symptoms.len(),
        disease_ids.len()
    );
    symptoms
}

/// Every symptom in the catalog, under the same ordering and de-duplication.
pub fn all_symptoms(catalog: &Catalog) -> Vec<Symptom> {
    collect_symptoms(catalog.diseases().iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::knowledge::{SymptomKind, Syndrome};

    fn names(symptoms: &[Symptom]) -> Vec<&str> {
        symptoms.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_project_hypertension_order() {
        let symptoms = project_symptoms(Catalog::builtin(), &["hypertension"]);
        assert_eq!(
            names(&symptoms),
            vec![
                "头目胀痛", "面红目赤", "口苦", "急躁易怒",
                "血压升高（收缩压/舒张压超过正常值）", "头痛", "头晕",
                "头晕头重（如布裹头）", "胸闷恶心", "食少多寐",
                "血压升高", "胸闷",
            ]
        );
        assert_eq!(symptoms[0].id, "hypertension_liver_yang_tcm_0");
        assert_eq!(symptoms[4].kind, SymptomKind::Western);
        // "头晕" is first seen in the liver-yang western list.
        let dizziness = symptoms.iter().find(|s| s.name == "头晕").unwrap();
        assert_eq!(dizziness.id, "hypertension_liver_yang_western_2");
        assert_eq!(symptoms.last().unwrap().id, "hypertension_phlegm_dampness_western_2");
    }

    #[test]
    fn test_project_is_deterministic() {
        let ids = ["diabetes_type2", "chronic_kidney_disease"];
        let first = project_symptoms(Catalog::builtin(), &ids);
        let second = project_symptoms(Catalog::builtin(), &ids);
        assert_eq!(first, second);
    }

    #[test]
    fn test_project_dedup_across_diseases() {
        // 腰膝酸软 appears in diabetes_kidney_yin and kidney_spleen_qi.
        let symptoms = project_symptoms(Catalog::builtin(), &["diabetes_type2", "chronic_kidney_disease"]);
        let hits: Vec<_> = symptoms.iter().filter(|s| s.name == "腰膝酸软").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "diabetes_kidney_yin_tcm_2");

        let reversed = project_symptoms(Catalog::builtin(), &["chronic_kidney_disease", "diabetes_type2"]);
        let hit = reversed.iter().find(|s| s.name == "腰膝酸软").unwrap();
        assert_eq!(hit.id, "kidney_spleen_qi_tcm_1");
    }

    #[test]
    fn test_project_unknown_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(
            project_symptoms(catalog, &["hypertension", "nonexistent_disease"]),
            project_symptoms(catalog, &["hypertension"])
        );
        assert!(project_symptoms(catalog, &["nonexistent_disease"]).is_empty());
        assert!(project_symptoms::<&str>(catalog, &[]).is_empty());
    }

    #[test]
    fn test_dedup_is_case_sensitive_and_untrimmed() {
        let catalog = Catalog::new(vec![
            Disease::new("d", "d", "d").with_syndromes(vec![
                Syndrome::new("s", "s", "s")
                    .with_tcm_symptoms(&["Pain", "pain", "pain "])
                    .with_western_symptoms(&["pain"]),
            ]),
        ])
        .unwrap();
        let symptoms = all_symptoms(&catalog);
        assert_eq!(names(&symptoms), vec!["Pain", "pain", "pain "]);
    }

    #[test]
    fn test_all_symptoms_matches_full_projection() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.diseases().iter().map(|d| d.id.as_str()).collect();
        let all = all_symptoms(catalog);
        assert_eq!(all, project_symptoms(catalog, &ids));
        assert_eq!(all.len(), catalog.stats().distinct_symptoms);
    }
}
