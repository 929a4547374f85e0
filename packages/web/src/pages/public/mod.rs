//! Public-facing pages

mod home;
mod materials;
mod resource;
mod submit;
mod syllabus;

pub use home::Home;
pub use materials::StudyMaterials;
pub use resource::ResourceDetail;
pub use submit::Submit;
pub use syllabus::Syllabus;
