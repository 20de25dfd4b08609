pub mod additional;
pub mod laboratory;
pub mod patient;
pub mod physical;
pub mod symptoms;
pub mod vitals;

pub use additional::AdditionalSchema;
pub use laboratory::LaboratorySchema;
pub use patient::PatientSchema;
pub use physical::PhysicalExamSchema;
pub use symptoms::SymptomsSchema;
pub use vitals::VitalsSchema;
