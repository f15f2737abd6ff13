use axum::{Router, response::Html, routing::get};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{app_state::AppState, detect, health};

#[derive(OpenApi)]
#[openapi(tags(
    (name = "detect", description = "Headline veracity detection"),
    (name = "health", description = "Service health")
))]
struct ApiDoc;

async fn index() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

pub fn build_router(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(detect::handlers::detect_fake_news))
        .routes(routes!(health::health_check))
        .split_for_parts();

    Router::new()
        .route("/", get(index))
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}
