use std::path::Path;
use actix_files::Files;
use actix_web::{guard, web};
use crate::server::controller::error::order_payload_error;
use crate::server::controller::frontend::{entry_point, ENTRY_POINT};
use crate::server::controller::orders::{get_order, get_orders, place_order};

/// largest accepted order body
const ORDER_BODY_LIMIT: usize = 100 * 1024;

/// json api under `/api`; unknown `/api` paths get the entry point like any other path
pub(crate) fn api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(
                web::JsonConfig::default()
                    .limit(ORDER_BODY_LIMIT)
                    .error_handler(order_payload_error),
            )
            .service(place_order)
            .service(get_orders)
            .service(get_order)
            .default_service(web::to(entry_point)),
    );
}

/// Static assets mounted at `/`; anything not found falls back to the entry point.
///
/// Must be registered after every other service since it matches all paths. Only GET and HEAD
/// are routed here, other methods fall through to the app's 404.
pub(crate) fn frontend(public_dir: &Path) -> Files {
    Files::new("/", public_dir)
        .guard(guard::Any(guard::Get()).or(guard::Head()))
        .index_file(ENTRY_POINT)
        .default_handler(web::to(entry_point))
}
