

pub mod consultation;
pub mod inference;
pub mod knowledge;


pub use consultation::{ConsultationIntake, ConsultationManager, ConsultationReport, DiseaseSummary};
pub use inference::{SyndromeMatch, SyndromeMatchSummary};
pub use knowledge::{Catalog, CatalogStats};
