pub mod guild_role;
pub mod responses;
