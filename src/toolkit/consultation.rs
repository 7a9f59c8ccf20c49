

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::ConsultConfig;
use crate::core::error::Result;
use crate::toolkit::inference::{
    all_symptoms, format_description, infer_syndrome, project_symptoms, SyndromeMatch,
    SyndromeMatchSummary,
};
use crate::toolkit::knowledge::{Catalog, CatalogStats, Symptom};
use crate::utils::safe_truncate_ellipsis;


/// Selections collected from a consultation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationIntake {
    pub diseases: Vec<String>,
    pub symptoms: Vec<String>,
}

impl ConsultationIntake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diseases(mut self, diseases: &[&str]) -> Self {
        self.diseases = diseases.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_symptoms(mut self, symptoms: &[&str]) -> Self {
        self.symptoms = symptoms.iter().map(|s| s.to_string()).collect();
        self
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseSummary {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub tcm_aliases: Vec<String>,
}


/// Plain-data outcome of a consultation intake.
///
/// `description` is the text attached as user context to outbound chat
/// messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationReport {
    pub diseases: Vec<DiseaseSummary>,
    pub symptoms: Vec<String>,
    pub inferred_syndrome: Option<SyndromeMatchSummary>,
    pub description: String,
}

impl ConsultationReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}


pub struct ConsultationManager<'c> {
    catalog: &'c Catalog,
    config: ConsultConfig,
}

impl ConsultationManager<'static> {
    pub fn with_builtin(config: ConsultConfig) -> Self {
        Self::new(Catalog::builtin(), config)
    }
}

impl<'c> ConsultationManager<'c> {
    pub fn new(catalog: &'c Catalog, config: ConsultConfig) -> Self {
        Self { catalog, config }
    }

    pub fn symptoms_for(&self, disease_ids: &[String]) -> Vec<Symptom> {
        if disease_ids.is_empty() {
            all_symptoms(self.catalog)
        } else {
            project_symptoms(self.catalog, disease_ids)
        }
    }

    pub fn infer(&self, intake: &ConsultationIntake) -> Option<SyndromeMatch<'c>> {
        infer_syndrome(self.catalog, &intake.diseases, &intake.symptoms)
    }

    pub fn report(&self, intake: &ConsultationIntake) -> ConsultationReport {
        debug!(
            "Consultation intake: diseases={:?} symptoms={:?}",
            intake.diseases,
            intake
                .symptoms
                .iter()
                .map(|s| safe_truncate_ellipsis(s, self.config.max_symptom_chars))
                .collect::<Vec<_>>()
        );

        let inferred = self.infer(intake);
        let label = inferred.map(|m| m.label());
        let description = format_description(
            self.catalog,
            &intake.diseases,
            &intake.symptoms,
            label.as_deref(),
        );

        match &label {
            Some(label) => info!("Inferred syndrome: {}", label),
            None => debug!("No syndrome inferred"),
        }

        ConsultationReport {
            diseases: self
                .catalog
                .resolve(&intake.diseases)
                .map(|d| DiseaseSummary {
                    id: d.id.clone(),
                    name: d.name.clone(),
                    name_en: d.name_en.clone(),
                    tcm_aliases: d.tcm_aliases.clone(),
                })
                .collect(),
            symptoms: intake.symptoms.clone(),
            inferred_syndrome: inferred.map(|m| m.summary()),
            description,
        }
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }
}
