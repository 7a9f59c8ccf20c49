

pub mod formatter;
pub mod matcher;
pub mod projector;

pub use formatter::{format_description, LIST_DELIMITER, NOT_FILLED_IN};
pub use matcher::{infer_syndrome, phrases_overlap, score_syndrome, SyndromeMatch, SyndromeMatchSummary};
pub use projector::{all_symptoms, project_symptoms};
