//! SeaORM entities for the database medium. Collection tables carry a
//! `position` primary key holding each record's index in its collection.

pub mod portfolio_profile;
pub mod portfolio_projects;
pub mod portfolio_sections;
pub mod portfolio_skills;
