use std::net::TcpListener;

use actix_web::{App, HttpServer, web};
use actix_web::dev::Server;

use crate::email_client::EmailClient;
use crate::routes;
use tracing_actix_web::TracingLogger;
use actix_web::web::Data;

pub fn run(
    listener: TcpListener,
    email_client: EmailClient
) -> Result<Server, std::io::Error> {
    let email_client = Data::new(email_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(routes::home::home))
            .route("/health", web::get().to(routes::health_check::health_check))
            .route("/api/contact", web::post().to(routes::contact::submit_contact))
            .app_data(email_client.clone())
    })
        .listen(listener)?
        .run();
    Ok(server)
}
