use clap::Args;
use tiffin_app::{
    auth::PgAuthService,
    domain::tenants::{PgTenantsService, TenantsService, data::NewTenant, records::TenantUuid},
};
use uuid::Uuid;

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CreateTenantArgs {
    /// Tenant display name
    #[arg(long)]
    name: String,

    #[command(flatten)]
    database: DatabaseArgs,

    /// Optional tenant UUID; generated when omitted
    #[arg(long)]
    tenant_uuid: Option<Uuid>,

    /// Restaurant to open with the tenant; repeat for several
    #[arg(long = "restaurant", value_name = "NAME")]
    restaurants: Vec<String>,
}

pub(crate) async fn run(args: CreateTenantArgs) -> Result<(), String> {
    let pool = args.database.connect().await?;

    let onboarded = PgTenantsService::new(pool.clone())
        .create_tenant(NewTenant::with_restaurant_names(
            args.tenant_uuid.map_or_else(TenantUuid::new, TenantUuid::from_uuid),
            args.name,
            args.restaurants,
        ))
        .await
        .map_err(|error| format!("failed to create tenant: {error}"))?;

    let issued = PgAuthService::new(pool)
        .issue_api_token(onboarded.tenant.uuid, None)
        .await
        .map_err(|error| format!("tenant created but token issue failed: {error}"))?;

    println!("tenant_uuid: {}", onboarded.tenant.uuid);
    println!("tenant_name: {}", onboarded.tenant.name);

    for restaurant in &onboarded.restaurants {
        println!("restaurant: {} {}", restaurant.uuid, restaurant.name);
    }

    println!("token_uuid: {}", issued.metadata.uuid);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
