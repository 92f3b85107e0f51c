use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use super::catalog::resource_routes;
use super::health;
use super::state::{AppState, Categories, Customers, Employees, Orders, Products, Suppliers};

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    let router = Router::new().route("/health", get(health::health_check));

    let router = resource_routes::<Products>(router);
    let router = resource_routes::<Categories>(router);
    let router = resource_routes::<Customers>(router);
    let router = resource_routes::<Employees>(router);
    let router = resource_routes::<Orders>(router);
    let router = resource_routes::<Suppliers>(router);

    router.with_state(state).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::create_app_state_with_config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn app() -> Router {
        let state = create_app_state_with_config(&AppConfig::default())
            .await
            .unwrap();
        create_router_with_state(state)
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app().await.oneshot(get_request("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_list_categories_with_filter_and_paging() {
        let response = app()
            .await
            .oneshot(get_request(
                "/api/categories?category_name=con&page=1&page_size=1&sort_field=CategoryName",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["outcome"], "ok");
        assert_eq!(json["data"][0]["category_name"], "Condiments");
        assert_eq!(json["pagination"]["total_count"], 2);
        assert_eq!(json["pagination"]["total_pages"], 2);
    }

    #[tokio::test]
    async fn test_empty_list_is_not_found() {
        let response = app()
            .await
            .oneshot(get_request("/api/products?product_name=no-such-product"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(read_json(response).await["outcome"], "not_found");
    }

    #[tokio::test]
    async fn test_get_customer_by_code() {
        let response = app()
            .await
            .oneshot(get_request("/api/customers/ALFKI"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await["data"]["company_name"],
            "Alfreds Futterkiste"
        );
    }

    #[tokio::test]
    async fn test_create_then_list_sees_new_row() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(get_request("/api/suppliers?company_name=northwind"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/suppliers",
                json!({ "company_name": "Northwind Traders" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(get_request("/api/suppliers?company_name=northwind"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            read_json(response).await["data"][0]["company_name"],
            "Northwind Traders"
        );
    }

    #[tokio::test]
    async fn test_invalid_create_is_bad_request() {
        let response = app()
            .await
            .oneshot(json_request(
                "POST",
                "/api/categories",
                json!({ "category_name": "" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(read_json(response).await["outcome"], "bad_request");
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let response = app()
            .await
            .oneshot(json_request("POST", "/api/categories", json!({ "name": 5 })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(read_json(response).await["outcome"], "bad_request");
    }

    #[tokio::test]
    async fn test_update_category() {
        let app = app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/categories",
                json!({ "category_id": 1, "category_name": "Drinks", "description": null }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/api/categories/1")).await.unwrap();
        assert_eq!(read_json(response).await["data"]["category_name"], "Drinks");
    }

    #[tokio::test]
    async fn test_soft_delete_keeps_row() {
        let app = app().await;

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/employees/1")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get_request("/api/employees/1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await["data"]["is_deleted"], true);
    }

    #[tokio::test]
    async fn test_hard_delete_removes_order() {
        let app = app().await;

        let request = Request::builder()
            .method("DELETE")
            .uri("/api/orders/10248")
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get_request("/api/orders/10248")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let response = app()
            .await
            .oneshot(get_request("/api/products/999"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
