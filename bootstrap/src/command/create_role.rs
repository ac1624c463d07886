use crate::command::{print_outcome, Completion};
use anyhow::bail;
use application_ports::guild_role::{GuildRolePort, RoleCreateRequest};
use clap::Args;
use domain_shared::environment::GuildEnv;
use serde_json::{Map, Value};
use std::io::Write;
use tracing::instrument;

#[derive(Args, Debug)]
pub struct CreateRoleArgs {
    /// Display name of the new role
    #[arg(long)]
    pub name: String,
    /// Additional role fields as a JSON object, e.g. '{"color": 3447003, "mentionable": true}'
    #[arg(long, value_parser = parse_fields)]
    pub fields: Option<Map<String, Value>>,
}

#[instrument(level = "info", skip(port, env, args, out))]
pub async fn run(
    port: &(dyn GuildRolePort + Send + Sync),
    env: &GuildEnv,
    args: CreateRoleArgs,
    out: &mut impl Write,
) -> anyhow::Result<Completion> {
    let CreateRoleArgs { name, fields } = args;
    let body = RoleCreateRequest {
        role_name: name,
        fields: fields.unwrap_or_default(),
    };

    match port.create_guild_role(body, env).await {
        Ok(role) => {
            print_outcome(out, &role)?;
            Ok(Completion::Succeeded)
        }
        Err(err) => {
            print_outcome(out, &err)?;
            Ok(Completion::Failed)
        }
    }
}

fn parse_fields(raw: &str) -> anyhow::Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(fields) => Ok(fields),
        other => bail!("expected a JSON object, got {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::stub::StubGuildRolePort;
    use application_ports::guild_role::ServiceError;
    use domain_shared::discord::GuildId;
    use domain_shared::environment::BotToken;
    use serde_json::json;

    async fn create(fail: bool) -> (Completion, String) {
        let port = StubGuildRolePort {
            roles: Vec::new(),
            fail,
        };
        let env = GuildEnv::new(BotToken::new("cli-token"), GuildId("1000".to_string()));
        let args = CreateRoleArgs {
            name: "group-rust".to_string(),
            fields: None,
        };
        let mut out = Vec::new();

        let completion = run(&port, &env, args, &mut out).await.unwrap();
        (completion, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn created_role_is_printed() {
        let (completion, printed) = create(false).await;

        assert_eq!(completion, Completion::Succeeded);
        assert_eq!(
            serde_json::from_str::<Value>(&printed).unwrap(),
            json!({ "id": "1", "name": "group-rust" })
        );
    }

    #[tokio::test]
    async fn service_error_is_printed_once_and_marks_failure() {
        let (completion, printed) = create(true).await;

        assert_eq!(completion, Completion::Failed);
        assert_eq!(printed.matches("\"code\"").count(), 1);
        assert_eq!(
            serde_json::from_str::<ServiceError>(&printed).unwrap(),
            ServiceError::internal_server_error()
        );
    }

    #[test]
    fn parse_fields_accepts_objects() {
        let fields = parse_fields(r#"{"color": 3447003, "hoist": true}"#).unwrap();
        assert_eq!(fields.get("color"), Some(&json!(3447003)));
        assert_eq!(fields.get("hoist"), Some(&json!(true)));
    }

    #[test]
    fn parse_fields_rejects_non_objects() {
        assert!(parse_fields("[1, 2]").is_err());
        assert!(parse_fields("not json").is_err());
    }
}
