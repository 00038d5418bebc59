use anyhow::Context;
use catalog_detail::config::MediaSettings;
use catalog_detail::utils::{logger, validation::Validate};
use catalog_detail::{
    CatalogConfig, CatalogError, CategoryDetailResponse, CategoryDetailService, CategoryDetailView,
    CliConfig, FixedLookups,
};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);

    tracing::info!("Starting catalog-detail");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    match render(&config).await {
        Ok(Some(body)) => {
            println!("{}", body);
            Ok(())
        }
        Ok(None) => exit_with(&CatalogError::CategoryNotFound {
            category_id: config.category_id,
        }),
        Err(e) => match e.downcast_ref::<CatalogError>() {
            Some(catalog_error) => exit_with(catalog_error),
            None => Err(e),
        },
    }
}

async fn render(config: &CliConfig) -> anyhow::Result<Option<String>> {
    let overrides = config.media_overrides();

    let response = match &config.config {
        Some(path) => {
            let file = CatalogConfig::from_file(path)
                .with_context(|| format!("Failed to load catalog file '{}'", path))?;
            file.validate()?;

            let media = MediaSettings::resolve(&overrides, file.media.as_ref());
            media.validate()?;

            let catalog = Arc::new(file.to_catalog());
            tracing::info!(
                categories = catalog.category_count(),
                products = catalog.product_count(),
                "Loaded catalog from {}",
                path
            );

            let service = CategoryDetailService::new(
                catalog.clone(),
                catalog.clone(),
                catalog,
                media.image_url_builder(),
            );
            CategoryDetailView::new(service).get(config.category_id).await?
        }
        None => {
            let media = MediaSettings::resolve(&overrides, None);
            media.validate()?;
            tracing::info!("No catalog file given, serving the sample catalog");

            let lookups = FixedLookups::sample();
            let service = CategoryDetailService::new(
                lookups.clone(),
                lookups.clone(),
                lookups,
                media.image_url_builder(),
            );
            CategoryDetailView::new(service).get(config.category_id).await?
        }
    };

    if let CategoryDetailResponse::Ok(details) = &response {
        tracing::debug!("Rendering {} categories", details.len());
    }
    Ok(response.to_json(config.pretty)?)
}

fn exit_with(e: &CatalogError) -> ! {
    if e.is_not_found() {
        tracing::warn!("{}", e);
    } else {
        tracing::error!("{}", e);
        tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    }
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
