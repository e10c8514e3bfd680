use anyhow::Context;
use contact_relay::startup::Application;
use contact_relay::telemetry::{get_subscriber, init_subscriber};
use contact_relay::get_configuration;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("contact_relay".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let application = Application::build(configuration)
        .await
        .context("Failed to build application.")?;
    application.run_until_stopped().await?;
    Ok(())
}
