use crate::toolkit::knowledge::Catalog;

/// Full-width list delimiter used between names.
pub const LIST_DELIMITER: &str = "、";

/// Stands in for an empty clause.
pub const NOT_FILLED_IN: &str = "未填写";

fn join_or_placeholder<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined = items.collect::<Vec<_>>().join(LIST_DELIMITER);
    if joined.is_empty() {
        NOT_FILLED_IN.to_string()
    } else {
        joined
    }
}

/// Narrative summary of a consultation intake.
///
/// Two lines (disease history and recent symptoms) plus a third with the
/// preliminary assessment when `inferred_label` is present and non-empty.
/// Diseases with an empty display name are left out.
pub fn format_description<D, S>(
    catalog: &Catalog,
    disease_ids: &[D],
    observed: &[S],
    inferred_label: Option<&str>,
) -> String
where
    D: AsRef<str>,
    S: AsRef<str>,
{
    let diseases = join_or_placeholder(
        catalog
            .resolve(disease_ids)
            .map(|d| d.name.as_str())
            .filter(|name| !name.is_empty()),
    );
    let symptoms = join_or_placeholder(observed.iter().map(|s| s.as_ref()));

    let mut description = format!("患者主诉疾病史：{}。\n", diseases);
    description.push_str(&format!("近期症状：{}。\n", symptoms));

    if let Some(label) = inferred_label.filter(|l| !l.is_empty()) {
        description.push_str(&format!("初步分析：可能为{}。", label));
    }

    description
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_use_placeholder() {
        let text = format_description::<&str, &str>(Catalog::builtin(), &[], &[], None);
        assert_eq!(text, "患者主诉疾病史：未填写。\n近期症状：未填写。\n");
        assert!(!text.contains("初步分析"));
    }

    #[test]
    fn test_full_description() {
        let text = format_description(
            Catalog::builtin(),
            &["hypertension", "diabetes_type2"],
            &["头目胀痛", "口苦"],
            Some("高血压 - 肝阳上亢型"),
        );
        assert_eq!(
            text,
            "患者主诉疾病史：高血压、2型糖尿病。\n\
             近期症状：头目胀痛、口苦。\n\
             初步分析：可能为高血压 - 肝阳上亢型。"
        );
    }

    #[test]
    fn test_empty_label_omits_assessment() {
        let text = format_description::<&str, &str>(Catalog::builtin(), &[], &[], Some(""));
        assert_eq!(text, "患者主诉疾病史：未填写。\n近期症状：未填写。\n");
    }

    #[test]
    fn test_empty_disease_names_are_dropped() {
        use crate::toolkit::knowledge::{Disease, Syndrome};

        let syndrome = |id: &str| Syndrome::new(id, id, id).with_tcm_symptoms(&["口苦"]);
        let catalog = Catalog::new(vec![
            Disease::new("a", "", "A").with_syndromes(vec![syndrome("a_s")]),
            Disease::new("b", "乙", "B").with_syndromes(vec![syndrome("b_s")]),
        ])
        .unwrap();

        let text = format_description::<&str, &str>(&catalog, &["a", "b"], &[], None);
        assert!(text.starts_with("患者主诉疾病史：乙。\n"));

        let text = format_description::<&str, &str>(&catalog, &["a"], &[], None);
        assert!(text.starts_with("患者主诉疾病史：未填写。\n"));
    }

    #[test]
    fn test_unknown_ids_are_dropped() {
        let text = format_description(
            Catalog::builtin(),
            &["nonexistent_disease", "copd"],
            &["咳嗽"],
            None,
        );
        assert!(text.starts_with("患者主诉疾病史：慢性阻塞性肺疾病。\n"));

        let text = format_description(Catalog::builtin(), &["nonexistent_disease"], &["咳嗽"], None);
        assert!(text.starts_with("患者主诉疾病史：未填写。\n"));
    }
}
