use dotenv::dotenv;
use garden_journal::configuration::get_configuration;
use garden_journal::startup::Application;
use garden_journal::telemetry::init_subscriber;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_subscriber("info");

    let configuration = get_configuration()?;
    let application = Application::build(configuration).await?;
    tracing::info!(port = application.port(), "Garden journal listening");
    application.run_until_stopped().await?;

    Ok(())
}
