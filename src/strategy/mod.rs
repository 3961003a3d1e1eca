pub mod implementations;
pub mod risk;
pub mod traits;
