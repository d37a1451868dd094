pub mod aggregate;
pub mod delivery;
pub mod dto;
