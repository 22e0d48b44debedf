use std::net::TcpListener;
use contact_relay::configuration::get_configuration;
use contact_relay::email_client::EmailClient;
use contact_relay::startup::run;
use contact_relay::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(
        "contact-relay".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let config = get_configuration()
        .expect("Failed to read config file");

    let sender = config.email_client.sender()
        .expect("Invalid sender email found in config");
    let recipient = config.email_client.recipient()
        .expect("Invalid recipient email found in config");
    let timeout = config.email_client.timeout();
    let email_client = EmailClient::new(
        config.email_client.base_url,
        sender,
        recipient,
        config.email_client.authorization_token,
        timeout,
    );
    if !email_client.is_configured() {
        tracing::warn!(
            "No provider authorization token configured; \
             contact submissions will be answered with 503 until one is set"
        );
    }

    let address = format!(
        "{address}:{port}",
        address = config.application.host,
        port = config.application.port
    );
    let listener = TcpListener::bind(address)?;
    run(listener, email_client)?.await
}
