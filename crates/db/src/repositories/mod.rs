//! Repository layer: one unit struct per table with async CRUD methods.

pub mod country_profile_repo;
pub mod output_repo;
pub mod project_repo;
pub mod source_repo;

pub use country_profile_repo::CountryProfileRepo;
pub use output_repo::OutputRepo;
pub use project_repo::ProjectRepo;
pub use source_repo::SourceRepo;
