pub mod course;
pub mod entities;
pub mod views;

pub use course::{
    Amount, CertificateLink, Course, CourseLevel, CourseSummary, CourseType, Pricing,
    PricingError, ResourceLink,
};
pub use entities::{normalize_skills, Certification, Job, Role, Stream, SubDomain};
pub use views::{PopulatedRole, RoleAdminView, RoleView, StreamWithSubDomains, SubDomainView};
