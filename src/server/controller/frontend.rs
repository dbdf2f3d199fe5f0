use actix_files::NamedFile;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use log::warn;
use crate::server::state::AppState;

/// html page answered for `/` and every unmatched GET
pub(crate) const ENTRY_POINT: &str = "customer-dashboard.html";

/// serve the frontend entry point, other methods than GET and HEAD get 404
pub(crate) async fn entry_point(req: HttpRequest, data: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    if !matches!(*req.method(), Method::GET | Method::HEAD) {
        return Ok(HttpResponse::NotFound().finish());
    }
    let path = data.public_dir().join(ENTRY_POINT);
    match NamedFile::open_async(&path).await {
        Ok(file) => Ok(file.into_response(&req)),
        Err(e) => {
            warn!("entry point {} unavailable, {}", path.display(), e);
            Err(e.into())
        }
    }
}
