//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::identity::{current_identity, list_roles};
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api/v1")
        .service(current_identity)
        .service(list_roles);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the HTTP server described by `settings`.
///
/// # Errors
/// Returns [`std::io::Error`] when the fixture role is invalid or binding
/// the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    settings: &ServerSettings,
) -> std::io::Result<Server> {
    let resolver = settings
        .identity_resolver()
        .map_err(|err| std::io::Error::other(format!("invalid fixture role: {err}")))?;
    if settings.fixture_identity {
        info!("fixture identity resolver enabled; every bearer token is accepted");
    }
    let http_state = web::Data::new(HttpState::new(resolver));
    let addr = settings.bind_addr();

    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .bind(addr.clone())?
        .run();

    info!(host = %addr.0, port = addr.1, "http server bound");
    health_state.mark_ready();
    Ok(server)
}
