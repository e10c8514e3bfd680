use crate::EmailClient;
use crate::configuration::Settings;
use crate::domain::MailboxAddress;
use crate::routes::{health_check, json_config, submit_contact};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web, web::Data};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let email_client = configuration.email_client.client()?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            email_client,
            configuration.email_client.recipient,
            configuration.application.base_path,
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Destination inbox for contact messages, shared with handlers as app data.
pub struct ContactRecipient(pub MailboxAddress);

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    recipient: MailboxAddress,
    base_path: String,
) -> Result<Server, std::io::Error> {
    let email_client = Data::new(email_client);
    let recipient = Data::new(ContactRecipient(recipient));
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .app_data(email_client.clone())
            .app_data(recipient.clone())
            .service(health_check)
            .service(web::scope(&base_path).service(submit_contact))
    })
    .listen(listener)?
    .run();
    Ok(server)
}
