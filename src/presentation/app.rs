use std::sync::Arc;

use poem::{
    Endpoint, EndpointExt, Route, endpoint::StaticFilesEndpoint, get, middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{
    config::Config,
    domain::models::User,
    presentation::{
        http::{
            endpoints::{health::HealthEndpoints, root::ApiState, timeline::TimelineEndpoints},
            form_body::default_form_body,
        },
        pages,
    },
};

/// Assembles the JSON API under `/api`, its docs under `/docs`, the static
/// assets and the profile pages.
pub fn build_app(
    state: Arc<ApiState>,
    owner: Arc<User>,
    config: &Config,
) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (
            HealthEndpoints::new(state.clone()),
            TimelineEndpoints::new(state),
        ),
        "Portfolio API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("{}/api", config.server_url()));
    let ui = api_service.swagger_ui();

    Route::new()
        .at("/", get(pages::index))
        .at("/hobbies", get(pages::hobbies))
        .at("/places", get(pages::places))
        .at("/timeline", get(pages::timeline))
        .nest("/api", api_service)
        .nest("/docs", ui)
        .nest("/static", StaticFilesEndpoint::new(config.static_dir.clone()))
        .data(owner)
        .before(default_form_body)
        .with(Tracing)
}
