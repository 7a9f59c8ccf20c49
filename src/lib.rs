

pub mod core;
pub mod toolkit;
pub mod utils;

pub use utils::safe_truncate_ellipsis;


pub use crate::core::config::ConsultConfig;
pub use crate::core::error::{ConsultError, Result};
pub use toolkit::consultation::{ConsultationIntake, ConsultationManager, ConsultationReport};
pub use toolkit::inference::{all_symptoms, format_description, infer_syndrome, project_symptoms, SyndromeMatch};
pub use toolkit::knowledge::{Catalog, CatalogError, CatalogLoader, Disease, Symptom, SymptomKind, Syndrome};


/// Score added per matching traditional-medicine phrase.
pub const TCM_SYMPTOM_WEIGHT: u32 = 2;


/// Score added per matching biomedical phrase.
pub const WESTERN_SYMPTOM_WEIGHT: u32 = 1;


/// Lowest score accepted as an inference.
pub const MIN_MATCH_SCORE: u32 = 2;
