use archetype_core::{init_tracing, ArchetypeConfig, ServerSettings};
use person_service::BoxError;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = ArchetypeConfig::load("dev")?;
    let settings = ServerSettings::from_config(&config)?;
    init_tracing(settings.log_format);

    let pool = person_service::connect(&settings).await?;
    let app = person_service::app(pool, &settings)?;

    tracing::info!(path = %settings.base_path, "person archetype mounted");
    archetype_core::serve(app, &settings.bind_addr()).await?;
    Ok(())
}
