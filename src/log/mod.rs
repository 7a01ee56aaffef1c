//! Stateless façades that render an event template and append the resulting
//! entry to the right journal on the target person. One logger per category;
//! each function knows its fixed template key and category.

mod assignment;
mod award;
mod medical;
mod patient;
mod performance;
mod personal;
mod service;

pub use assignment::AssignmentLogger;
pub use award::AwardLogger;
pub use medical::MedicalLogger;
pub use patient::PatientLogger;
pub use performance::PerformanceLogger;
pub use personal::PersonalLogger;
pub use service::ServiceLogger;
