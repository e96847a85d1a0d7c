//! Route definitions for the TMSITI HTTP API.
//!
//! Every resource has public `GET` routes and admin routes under
//! `for_admin/`. Admin handlers take the `CurrentAdmin` extractor, which
//! is what puts them behind the session guard.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{MethodRouter, get, post, put},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    let public_prefix = state.config.storage.public_prefix.clone();
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(auth_routes())
        .merge(news_routes())
        .merge(vacancy_routes())
        .merge(legal_routes())
        .merge(menu_routes())
        .merge(standard_routes())
        .merge(staff_routes())
        .merge(health_routes())
        .nest_service(&public_prefix, ServeDir::new(state.storage.root()))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Registers `path` both with and without its trailing slash.
fn route_slashed(
    router: Router<AppState>,
    path: &str,
    method: MethodRouter<AppState>,
) -> Router<AppState> {
    let bare = path.trim_end_matches('/');
    router
        .route(bare, method.clone())
        .route(&format!("{bare}/"), method)
}

/// Standard public + admin routes for a resource under `prefix`.
fn resource_routes(
    prefix: &str,
    list: MethodRouter<AppState>,
    item: MethodRouter<AppState>,
    create: MethodRouter<AppState>,
    modify: MethodRouter<AppState>,
) -> Router<AppState> {
    let mut router = Router::new();
    router = route_slashed(router, prefix, list);
    router = router.route(&format!("{prefix}/{{id}}"), item);
    router = route_slashed(router, &format!("{prefix}/for_admin"), create);
    route_slashed(router, &format!("{prefix}/{{id}}/for_admin"), modify)
}

/// Admin auth endpoints: login, logout, register, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/admin-auth/login", post(handlers::auth::login))
        .route("/admin-auth/logout", post(handlers::auth::logout))
        .route("/admin-auth/register", post(handlers::auth::register))
        .route("/admin-auth/me", get(handlers::auth::me))
}

/// News (`yangiliklar`)
fn news_routes() -> Router<AppState> {
    use handlers::news;
    resource_routes(
        "/yangiliklar",
        get(news::list),
        get(news::get),
        post(news::create),
        put(news::update).delete(news::delete),
    )
}

/// Vacancies (`vakansiyalar`)
fn vacancy_routes() -> Router<AppState> {
    use handlers::vacancy;
    resource_routes(
        "/vakansiyalar",
        get(vacancy::list),
        get(vacancy::get),
        post(vacancy::create),
        put(vacancy::update).delete(vacancy::delete),
    )
}

/// Laws, resolutions, and decrees (`qonun-qaror-farmonlar`)
fn legal_routes() -> Router<AppState> {
    use handlers::legal;
    resource_routes(
        "/qonun-qaror-farmonlar",
        get(legal::list),
        get(legal::get),
        post(legal::create),
        put(legal::update).delete(legal::delete),
    )
}

/// Menus with their submenus
fn menu_routes() -> Router<AppState> {
    use handlers::menu;
    let menus = resource_routes(
        "/menus",
        get(menu::list),
        get(menu::get),
        post(menu::create),
        put(menu::update).delete(menu::delete),
    );

    let mut submenus = Router::new().route("/menus/submenus/{id}", get(menu::get_submenu));
    submenus = route_slashed(
        submenus,
        "/menus/submenus/for_admin",
        post(menu::create_submenu),
    );
    submenus = route_slashed(
        submenus,
        "/menus/submenus/{id}/for_admin",
        put(menu::update_submenu).delete(menu::delete_submenu),
    );

    menus.merge(submenus)
}

/// Standards with PDF documents (`standartlar`)
fn standard_routes() -> Router<AppState> {
    use handlers::standard;
    resource_routes(
        "/standartlar",
        get(standard::list),
        get(standard::get),
        post(standard::create),
        put(standard::update).delete(standard::delete),
    )
}

/// Leadership directory (`rahbariyat`)
fn staff_routes() -> Router<AppState> {
    use handlers::staff;
    resource_routes(
        "/rahbariyat",
        get(staff::list),
        get(staff::get),
        post(staff::create),
        put(staff::update).delete(staff::delete),
    )
}

/// Liveness endpoint
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
