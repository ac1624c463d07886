pub mod guild_role;
