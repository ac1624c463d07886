pub mod discord;
pub mod environment;
pub mod roles;
