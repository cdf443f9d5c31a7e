use std::net::TcpListener;

use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use secrecy::{ExposeSecret, Secret};
use tracing_actix_web::TracingLogger;

use crate::analytics::AnalyticsClient;
use crate::configuration::Settings;
use crate::relay_client::RelayClient;
use crate::routes::{
    contact_form, health_check, method_not_allowed, relay_lead, submit_contact_form,
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let relay_client = configuration.relay.client()?;
        let analytics_client = configuration
            .analytics
            .as_ref()
            .map(|settings| settings.client())
            .transpose()?;
        if analytics_client.is_none() {
            tracing::info!("Analytics is not configured. Lead events will not be reported");
        }

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            relay_client,
            analytics_client,
            RelayPolicy {
                surface_failures: configuration.relay.surface_failures,
            },
            configuration.application.base_url,
            configuration.application.hmac_secret,
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

pub struct ApplicationBaseUrl(pub String);

/// How the JSON lead endpoint answers when the relay could not be reached.
pub struct RelayPolicy {
    pub surface_failures: bool,
}

fn run(
    listener: TcpListener,
    relay_client: RelayClient,
    analytics_client: Option<AnalyticsClient>,
    relay_policy: RelayPolicy,
    base_url: String,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    let relay_client = web::Data::new(relay_client);
    let analytics_client = web::Data::new(analytics_client);
    let relay_policy = web::Data::new(relay_policy);
    let base_url = web::Data::new(ApplicationBaseUrl(base_url));
    let message_store =
        CookieMessageStore::builder(Key::from(hmac_secret.expose_secret().as_bytes())).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/contact", web::get().to(contact_form))
            .route("/contact", web::post().to(submit_contact_form))
            .service(
                web::resource("/api/lead")
                    .route(web::post().to(relay_lead))
                    .default_service(web::to(method_not_allowed)),
            )
            .app_data(relay_client.clone())
            .app_data(analytics_client.clone())
            .app_data(relay_policy.clone())
            .app_data(base_url.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
