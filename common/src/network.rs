pub mod octets;
pub mod subnet;
