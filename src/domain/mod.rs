// Domain layer - Core types, errors and input rules

pub mod errors;
pub mod model;
pub mod rules;
