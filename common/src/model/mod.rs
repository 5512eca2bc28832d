pub mod card;
pub mod dish;
pub mod query;
pub mod restaurant;
pub mod view;
