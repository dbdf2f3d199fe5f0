use actix_web::{get, post, web, Responder};
use log::{error, info};
use crate::server::controller::error::CustomError;
use crate::server::model::order::{PlaceOrderRequest, PlaceOrderResponse};
use crate::server::state::AppState;
use crate::server::util::order_id::generate_order_id;
use crate::server::util::time;

#[post("/placeOrder")]
/// place a new order
async fn place_order(
    req: web::Json<PlaceOrderRequest>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    let now = time::helper::get_utc_now();
    let order_id = generate_order_id(&now, &mut rand::thread_rng());
    let order = req
        .into_inner()
        .into_order(order_id.clone(), time::to_iso_millis(&now))
        .ok_or(CustomError::MissingOrderData)?;

    match data.get_store().append(order).await {
        Ok(()) => {
            info!("order {} placed", order_id);
            Ok(web::Json(PlaceOrderResponse {
                success: true,
                order_id,
            }))
        }
        Err(e) => {
            error!("place_order failed, {}", e);
            Err(CustomError::StorageFailure)
        }
    }
}

#[get("/orders")]
/// list every order in placement order
async fn get_orders(data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    match data.get_store().list().await {
        Ok(orders) => Ok(web::Json(orders)),
        Err(e) => {
            error!("get_orders failed, {}", e);
            Err(CustomError::StorageUnreadable)
        }
    }
}

#[get("/orders/{order_id}")]
/// get a single order
async fn get_order(order_id: web::Path<String>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    match data.get_store().find(&order_id).await {
        Ok(Some(order)) => Ok(web::Json(order)),
        Ok(None) => Err(CustomError::OrderNotFound),
        Err(e) => {
            error!("get_order failed, {}", e);
            Err(CustomError::StorageUnreadable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;
    use actix_web::http::header::ContentType;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use chrono::DateTime;
    use serde_json::{json, Value};
    use crate::server::routes;
    use crate::server::storage::json_file::tests::{cleanup, temp_orders_path};
    use crate::server::storage::json_file::JsonFileStore;
    use crate::server::util::time::helper::set_utc_now_millis;

    async fn state(path: &PathBuf) -> web::Data<AppState> {
        let store = JsonFileStore::open(path).await.unwrap();
        web::Data::new(AppState::new(Arc::new(store), PathBuf::from("public")))
    }

    fn alice() -> Value {
        json!({
            "customer": "Alice",
            "items": [{"sku": "A1", "qty": 2}],
            "total": 19.98,
            "paymentMethod": "card",
        })
    }

    #[actix_web::test]
    async fn place_then_list_and_lookup() {
        set_utc_now_millis(1_760_606_400_123);
        let path = temp_orders_path();
        let app = test::init_service(App::new().app_data(state(&path).await).configure(routes::api)).await;

        let req = test::TestRequest::post().uri("/api/placeOrder").set_json(alice()).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["success"], json!(true));
        let order_id = body["orderId"].as_str().expect("orderId").to_string();
        let digits = order_id.strip_prefix("ORD").expect("ORD prefix");
        assert!(digits.starts_with("1760606400123"));
        assert!(digits.chars().all(|c| c.is_ascii_digit()));

        let req = test::TestRequest::get().uri("/api/orders").to_request();
        let orders: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(orders.len(), 1);
        let stored = &orders[0];
        assert_eq!(stored["orderId"], json!(order_id));
        assert_eq!(stored["customer"], json!("Alice"));
        assert_eq!(stored["items"], json!([{"sku": "A1", "qty": 2}]));
        assert_eq!(stored["total"], json!(19.98));
        assert_eq!(stored["paymentMethod"], json!("card"));
        let timestamp = stored["timestamp"].as_str().expect("timestamp");
        assert_eq!(timestamp, "2025-10-16T09:20:00.123Z");
        assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());

        let req = test::TestRequest::get().uri(&format!("/api/orders/{}", order_id)).to_request();
        let found: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(&found, stored);

        cleanup(&path).await;
    }

    #[actix_web::test]
    async fn zero_total_is_accepted() {
        let path = temp_orders_path();
        let app = test::init_service(App::new().app_data(state(&path).await).configure(routes::api)).await;

        let mut body = alice();
        body["total"] = json!(0);
        let req = test::TestRequest::post().uri("/api/placeOrder").set_json(body).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert!(!body["orderId"].as_str().unwrap_or_default().is_empty());

        cleanup(&path).await;
    }

    #[actix_web::test]
    async fn missing_field_is_rejected_without_append() {
        let path = temp_orders_path();
        let app = test::init_service(App::new().app_data(state(&path).await).configure(routes::api)).await;

        for field in ["customer", "items", "total", "paymentMethod"] {
            let mut body = alice();
            body.as_object_mut().unwrap().remove(field);
            let req = test::TestRequest::post().uri("/api/placeOrder").set_json(body).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{field}");
            let body: Value = test::read_body_json(res).await;
            assert_eq!(body, json!({"success": false, "error": "Missing order data"}));
        }

        let req = test::TestRequest::post().uri("/api/placeOrder").set_json(json!({"total": null})).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api/orders").to_request();
        let orders: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(orders.is_empty());

        cleanup(&path).await;
    }

    #[actix_web::test]
    async fn unparsable_bodies_are_rejected() {
        let path = temp_orders_path();
        let app = test::init_service(App::new().app_data(state(&path).await).configure(routes::api)).await;

        let req = test::TestRequest::post()
            .uri("/api/placeOrder")
            .insert_header(ContentType::json())
            .set_payload("{\"customer\": ")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], json!("Malformed order payload"));

        let req = test::TestRequest::post()
            .uri("/api/placeOrder")
            .insert_header(ContentType::plaintext())
            .set_payload("customer=Alice")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], json!("Missing order data"));

        cleanup(&path).await;
    }

    #[actix_web::test]
    async fn listing_keeps_placement_order() {
        let path = temp_orders_path();
        let app = test::init_service(App::new().app_data(state(&path).await).configure(routes::api)).await;

        let mut placed = Vec::new();
        for (i, customer) in ["Alice", "Bob", "Carol", "Dave"].into_iter().enumerate() {
            set_utc_now_millis(1_700_000_000_000 + i as i64);
            let mut body = alice();
            body["customer"] = json!(customer);
            let req = test::TestRequest::post().uri("/api/placeOrder").set_json(body).to_request();
            let res: Value = test::call_and_read_body_json(&app, req).await;
            placed.push(res["orderId"].clone());
        }

        let req = test::TestRequest::get().uri("/api/orders").to_request();
        let orders: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(orders.len(), 4);
        assert_eq!(orders.iter().map(|o| o["orderId"].clone()).collect::<Vec<_>>(), placed);
        assert_eq!(orders[2]["customer"], json!("Carol"));

        cleanup(&path).await;
    }

    #[actix_web::test]
    async fn unknown_order_is_not_found() {
        let path = temp_orders_path();
        let app = test::init_service(App::new().app_data(state(&path).await).configure(routes::api)).await;

        let req = test::TestRequest::get().uri("/api/orders/ORD404").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"error": "Order not found"}));

        cleanup(&path).await;
    }

    #[actix_web::test]
    async fn stored_numeric_id_is_found_by_its_string_form() {
        let path = temp_orders_path();
        let data = state(&path).await;
        tokio::fs::write(&path, r#"[{"orderId": 20251016, "customer": "Eve", "total": 1}]"#)
            .await
            .unwrap();
        let app = test::init_service(App::new().app_data(data).configure(routes::api)).await;

        let req = test::TestRequest::get().uri("/api/orders/20251016").to_request();
        let found: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found["orderId"], json!(20251016));
        assert_eq!(found["customer"], json!("Eve"));

        cleanup(&path).await;
    }

    #[actix_web::test]
    async fn corrupt_store_lists_empty_and_accepts_new_orders() {
        let path = temp_orders_path();
        let data = state(&path).await;
        tokio::fs::write(&path, "this is not json").await.unwrap();
        let app = test::init_service(App::new().app_data(data).configure(routes::api)).await;

        let req = test::TestRequest::get().uri("/api/orders").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let orders: Vec<Value> = test::read_body_json(res).await;
        assert!(orders.is_empty());

        let req = test::TestRequest::post().uri("/api/placeOrder").set_json(alice()).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/orders").to_request();
        let orders: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(orders.len(), 1);

        cleanup(&path).await;
    }

    #[actix_web::test]
    async fn placing_keeps_existing_irregular_records() {
        let path = temp_orders_path();
        let data = state(&path).await;
        let existing = json!([
            {"orderId": "ORD1", "customer": "Alice", "items": [], "total": 3, "paymentMethod": "card", "status": "shipped"},
            {"customer": "legacy", "total": 2},
        ]);
        tokio::fs::write(&path, existing.to_string()).await.unwrap();
        let app = test::init_service(App::new().app_data(data).configure(routes::api)).await;

        let req = test::TestRequest::get().uri("/api/orders").to_request();
        let orders: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(orders.len(), 2);

        let req = test::TestRequest::post().uri("/api/placeOrder").set_json(alice()).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/api/orders").to_request();
        let orders: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0]["status"], json!("shipped"));
        assert_eq!(orders[1], json!({"customer": "legacy", "total": 2}));
        assert_eq!(orders[2]["customer"], json!("Alice"));

        let req = test::TestRequest::get().uri("/api/orders/ORD1").to_request();
        let found: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(found["status"], json!("shipped"));

        cleanup(&path).await;
    }

    #[actix_web::test]
    async fn unwritable_store_answers_server_error() {
        let path = temp_orders_path();
        let data = state(&path).await;
        // a directory where the file should be makes every write fail
        tokio::fs::remove_file(&path).await.unwrap();
        tokio::fs::create_dir(&path).await.unwrap();
        let app = test::init_service(App::new().app_data(data).configure(routes::api)).await;

        let req = test::TestRequest::post().uri("/api/placeOrder").set_json(alice()).to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({"success": false, "error": "Failed to store order"}));

        cleanup(&path).await;
    }
}
