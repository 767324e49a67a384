pub mod country_profile;
pub mod generate;
pub mod output;
pub mod project;
pub mod source;
