pub mod calendar;
pub mod meal;
