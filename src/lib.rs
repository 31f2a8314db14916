//! Animals that describe themselves and vehicles that move, shown off one
//! line at a time.

pub mod animal;
pub mod demo;
pub mod error;
pub mod output;
pub mod vehicle;
