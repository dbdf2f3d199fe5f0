use actix_web::{error, HttpRequest, HttpResponse};
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use log::warn;
use serde_json::json;

#[derive(Debug, Display, Error)]
pub(crate) enum CustomError {
    #[display("Missing order data")]
    MissingOrderData,
    #[display("Malformed order payload")]
    MalformedPayload,
    #[display("Order not found")]
    OrderNotFound,
    #[display("Failed to store order")]
    StorageFailure,
    #[display("Failed to read orders")]
    StorageUnreadable,
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::MissingOrderData | CustomError::MalformedPayload => StatusCode::BAD_REQUEST,
            CustomError::OrderNotFound => StatusCode::NOT_FOUND,
            CustomError::StorageFailure | CustomError::StorageUnreadable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match *self {
            CustomError::OrderNotFound => json!({ "error": self.to_string() }),
            _ => json!({ "success": false, "error": self.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Map json extractor failures of the order body.
///
/// A non-json content type or a well-formed body of the wrong shape counts as missing data, only
/// unparsable or oversized bodies are malformed.
pub(crate) fn order_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> error::Error {
    warn!("rejected order payload, {}", err);
    match err {
        JsonPayloadError::ContentType => CustomError::MissingOrderData.into(),
        JsonPayloadError::Deserialize(e) if e.is_data() => CustomError::MissingOrderData.into(),
        _ => CustomError::MalformedPayload.into(),
    }
}
