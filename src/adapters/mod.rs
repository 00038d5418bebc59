// Adapters layer: concrete lookup implementations behind the domain ports.

pub mod fixed;
pub mod in_memory;
