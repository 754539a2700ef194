//! Router assembly: entity resources, health checks, sitemap, middleware.
//!
//! Every path answers unregistered methods with a JSON 405.

pub mod common;

use crate::handlers::{self, RouteInfo, Sitemap};
use crate::repositories::{CharacterRepo, GalaxyRepo, PlanetRepo, Repository, UserRepo};
use crate::state::AppState;
use axum::{
    handler::Handler,
    routing::{delete, get},
    Extension, Router,
};
use std::sync::Arc;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

/// Router builder that records every route it registers so `/` can list them.
pub struct RouteTable {
    router: Router<AppState>,
    routes: Vec<RouteInfo>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            routes: Vec::new(),
        }
    }

    /// `GET|POST /{segment}` and `DELETE /{segment}/{id}` backed by `R`.
    pub fn resource<R: Repository>(mut self, segment: &str) -> Self {
        let collection = format!("/{segment}");
        self.router = self
            .router
            .route(
                &collection,
                get(handlers::list::<R>)
                    .post(handlers::create::<R>)
                    .fallback(handlers::method_not_allowed),
            )
            .route(
                &format!("/{segment}/:id"),
                delete(handlers::delete::<R>).fallback(handlers::method_not_allowed),
            );
        self.routes.push(RouteInfo {
            path: collection,
            methods: vec!["GET", "POST"],
        });
        self.routes.push(RouteInfo {
            path: format!("/{segment}/{{id}}"),
            methods: vec!["DELETE"],
        });
        self
    }

    pub fn get<H, T>(mut self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.router = self
            .router
            .route(path, get(handler).fallback(handlers::method_not_allowed));
        self.routes.push(RouteInfo {
            path: path.to_string(),
            methods: vec!["GET"],
        });
        self
    }

    pub fn routes(&self) -> &[RouteInfo] {
        &self.routes
    }

    /// Mount the sitemap at `/` and the JSON 404 fallback.
    pub fn into_router(self) -> Router<AppState> {
        let mut routes = self.routes;
        routes.insert(
            0,
            RouteInfo {
                path: "/".into(),
                methods: vec!["GET"],
            },
        );
        self.router
            .route("/", get(handlers::sitemap).fallback(handlers::method_not_allowed))
            .layer(Extension(Sitemap(Arc::new(routes))))
            .fallback(handlers::not_found)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

pub fn route_table() -> RouteTable {
    RouteTable::new()
        .resource::<UserRepo>("user")
        .resource::<GalaxyRepo>("galaxy")
        .resource::<PlanetRepo>("planet")
        .resource::<CharacterRepo>("character")
        .get("/health", common::health)
        .get("/ready", common::ready)
}

/// Full application with CORS, request tracing, and trailing-slash trimming.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = route_table()
        .into_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
