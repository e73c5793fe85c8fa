// Domain layer: travel entities, fare classes and pricing rules.

pub mod model;
pub mod passenger;
pub mod ports;
pub mod pricing;
