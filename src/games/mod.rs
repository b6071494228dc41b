//! Concrete engines built on the rules layer.

pub mod classic;
