use clap::Args;
use uuid::Uuid;
use vista::grants::{GuestToken, GuestTokenResource, GuestTokenUser};
use vista_app::context::AppContext;

use crate::cli::{CatalogArgs, GuestTokenArgs};

#[derive(Debug, Args)]
pub(crate) struct IssueTokenArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    #[command(flatten)]
    guest_token: GuestTokenArgs,

    /// Embed UUID of a dashboard to grant; repeatable
    #[arg(long = "dashboard", required = true)]
    dashboards: Vec<Uuid>,

    /// Guest username
    #[arg(long, default_value = "")]
    username: String,

    /// Guest first name
    #[arg(long, default_value = "")]
    first_name: String,

    /// Guest last name
    #[arg(long, default_value = "")]
    last_name: String,
}

pub(crate) async fn run(args: IssueTokenArgs) -> Result<(), String> {
    let settings = args.guest_token.settings()?;
    let flags = args.catalog.flags()?;

    let ctx = AppContext::from_catalog_path(&args.catalog.path, flags, &settings)
        .map_err(|error| format!("failed to load catalog: {error}"))?;

    let issued = ctx
        .auth
        .issue_guest_token(GuestToken {
            user: GuestTokenUser {
                username: args.username,
                first_name: args.first_name,
                last_name: args.last_name,
            },
            resources: args
                .dashboards
                .iter()
                .map(|uuid| GuestTokenResource::dashboard(uuid.to_string()))
                .collect(),
        })
        .await
        .map_err(|error| format!("failed to issue guest token: {error}"))?;

    for dashboard in &issued.dashboards {
        println!("dashboard_id: {dashboard}");
    }
    println!("issued_at: {}", issued.issued_at);
    println!("expires_at: {}", issued.expires_at);
    println!("guest_token: {}", issued.token);

    Ok(())
}
