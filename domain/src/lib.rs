pub mod guild_role;
pub mod ports;
