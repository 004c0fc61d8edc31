use clap::Args;
use jiff::Timestamp;
use tiffin_app::{auth::PgAuthService, domain::tenants::records::TenantUuid};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Tenant UUID whose tokens should be listed
    #[arg(long)]
    tenant_uuid: Uuid,
}

fn or_label(value: Option<Timestamp>, label: &str) -> String {
    value.map_or_else(|| label.to_string(), |value| value.to_string())
}

pub(crate) async fn run(args: ListTokensArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let tokens = PgAuthService::new(pool)
        .list_api_tokens(TenantUuid::from_uuid(args.tenant_uuid))
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    if tokens.is_empty() {
        println!("no tokens found for tenant {}", args.tenant_uuid);
        return Ok(());
    }

    for token in tokens {
        println!("token_uuid: {}", token.uuid);
        println!("created_at: {}", token.created_at);
        println!("last_used_at: {}", or_label(token.last_used_at, "never"));
        println!("expires_at: {}", or_label(token.expires_at, "none"));
        println!("revoked_at: {}", or_label(token.revoked_at, "active"));
        println!();
    }

    Ok(())
}
