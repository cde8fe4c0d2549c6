pub mod collector;
pub mod sports;
