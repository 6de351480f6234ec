pub mod analyze;
pub mod layouts;
