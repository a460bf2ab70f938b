//! Subnet expansion: turns an ordered list of subnets into every address they
//! contain, handing each one to a caller-supplied visitor.

pub mod expander;
