pub mod features;
pub mod invoke;
