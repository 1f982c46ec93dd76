use clap::Args;
use vista::catalog::Catalog;
use vista_app::{
    domain::embedded::{CatalogEmbeddedService, EmbeddedDashboardsService},
    store::CatalogStore,
};

use crate::cli::CatalogArgs;

#[derive(Debug, Args)]
pub(crate) struct ListEmbeddedArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
}

pub(crate) async fn run(args: &ListEmbeddedArgs) -> Result<(), String> {
    let catalog = Catalog::load(&args.catalog.path)
        .map_err(|error| format!("failed to load catalog: {error}"))?;

    let service = CatalogEmbeddedService::new(CatalogStore::new(catalog, args.catalog.flags()?));

    let embedded = service
        .list_embedded()
        .await
        .map_err(|error| format!("failed to list embedded dashboards: {error}"))?;

    if embedded.is_empty() {
        println!("no embedded dashboards");
    }

    for registration in embedded {
        println!(
            "{} dashboard_id={} allowed_domains={}",
            registration.uuid,
            registration.dashboard_id,
            registration.allowed_domains.join(",")
        );
    }

    Ok(())
}
