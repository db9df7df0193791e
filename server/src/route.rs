use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_token;
use crate::handler::AppModule;

pub use self::{cart::*, item::*, order::*, user::*};

mod cart;
mod item;
mod order;
mod user;

/// Every route of the service. Only registration and authentication are reachable
/// without a bearer token.
pub fn router(module: AppModule) -> Router {
    let protected = Router::new()
        .route_user()
        .route_item()
        .route_cart()
        .route_order()
        .route_layer(from_fn_with_state(module.clone(), require_token));

    Router::new()
        .route_account()
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new())
        .with_state(module)
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use time::Duration;
    use tower::ServiceExt;

    use driver::config::JwtConfig;
    use driver::database::InMemoryDatabase;
    use driver::security::{Argon2PasswordHasher, JwtTokenIssuer};

    use crate::handler::{AppModule, Handler};
    use crate::route::router;

    fn app() -> Router {
        let handler = Handler::new(
            InMemoryDatabase::default(),
            Argon2PasswordHasher::with_cost(8, 1).expect("valid argon2 cost"),
            JwtTokenIssuer::new(JwtConfig {
                secret: "route-test-secret".to_string(),
                ttl: Duration::hours(1),
            }),
        );
        router(AppModule::from(handler))
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("valid request");

        let response = app.clone().oneshot(request).await.expect("infallible");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };
        (status, value)
    }

    async fn register(app: &Router, username: &str, password: &str, confirm: &str) -> StatusCode {
        let body = json!({
            "username": username,
            "password": password,
            "confirmPassword": confirm,
        });
        send(app, Method::POST, "/api/user/create", None, Some(body))
            .await
            .0
    }

    async fn login(app: &Router, username: &str, password: &str) -> String {
        let body = json!({ "username": username, "password": password });
        let (status, value) =
            send(app, Method::POST, "/api/user/authenticate", None, Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        value["jwttoken"]
            .as_str()
            .expect("token in body")
            .to_string()
    }

    fn modify(username: &str, item_id: i64, quantity: i32) -> Value {
        json!({ "username": username, "itemId": item_id, "quantity": quantity })
    }

    #[tokio::test]
    async fn registration() {
        let app = app();

        assert_eq!(
            register(&app, "alice", "pw123456", "pw123456").await,
            StatusCode::OK
        );
        assert_eq!(
            register(&app, "alice", "pw123456", "pw123456").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            register(&app, "bob", "pw123456", "pw654321").await,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            register(&app, "addToCart", "pw123456", "pw123456").await,
            StatusCode::BAD_REQUEST
        );

        let body = json!({ "username": "alice", "password": "wrong-password" });
        let (status, _) = send(&app, Method::POST, "/api/user/authenticate", None, Some(body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn protected_routes_require_a_valid_token() {
        let app = app();

        let (status, _) = send(&app, Method::GET, "/api/item", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, Method::GET, "/api/item", Some("garbage"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn user_lookups() {
        let app = app();
        register(&app, "alice", "pw123456", "pw123456").await;
        let token = login(&app, "alice", "pw123456").await;

        let (status, user) = send(&app, Method::GET, "/api/user/id/1", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user, json!({ "id": 1, "username": "alice" }));

        let (status, _) = send(&app, Method::GET, "/api/user/id/999", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, user) = send(&app, Method::GET, "/api/user/alice", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(user["id"], 1);

        let (status, _) = send(&app, Method::GET, "/api/user/ali", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn catalog() {
        let app = app();
        register(&app, "alice", "pw123456", "pw123456").await;
        let token = login(&app, "alice", "pw123456").await;

        let (status, items) = send(&app, Method::GET, "/api/item", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(items.as_array().map(Vec::len), Some(2));

        let (status, item) = send(&app, Method::GET, "/api/item/1", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item["name"], "Round Widget");
        assert_eq!(item["price"], "2.99");

        let (status, _) = send(&app, Method::GET, "/api/item/999", Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, items) = send(
            &app,
            Method::GET,
            "/api/item/name/Round%20Widget",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(items[0]["id"], 1);

        let (status, _) = send(
            &app,
            Method::GET,
            "/api/item/name/abcd123456",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn cart_and_order_flow() {
        let app = app();
        register(&app, "alice", "pw123456", "pw123456").await;
        let token = login(&app, "alice", "pw123456").await;

        let (status, cart) = send(
            &app,
            Method::POST,
            "/api/cart/addToCart",
            Some(&token),
            Some(modify("alice", 1, 2)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["items"][0]["quantity"], 2);
        assert_eq!(cart["total"], "5.98");

        let (status, cart) = send(
            &app,
            Method::POST,
            "/api/cart/removeFromCart",
            Some(&token),
            Some(modify("alice", 1, 1)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["items"][0]["quantity"], 1);

        let (status, order) = send(
            &app,
            Method::POST,
            "/api/order/submit/alice",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(order["items"].as_array().map(Vec::len), Some(1));
        assert_eq!(order["total"], "2.99");

        let (status, cart) = send(&app, Method::GET, "/api/cart/alice", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["items"], json!([]));

        let (status, history) = send(
            &app,
            Method::GET,
            "/api/order/history/alice",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(history.as_array().map(Vec::len), Some(1));
        assert_eq!(history[0]["id"], order["id"]);
    }

    #[tokio::test]
    async fn cart_and_order_errors() {
        let app = app();
        register(&app, "alice", "pw123456", "pw123456").await;
        let token = login(&app, "alice", "pw123456").await;

        for uri in ["/api/cart/addToCart", "/api/cart/removeFromCart"] {
            let (status, _) = send(
                &app,
                Method::POST,
                uri,
                Some(&token),
                Some(modify("ghost", 1, 1)),
            )
            .await;
            assert_eq!(status, StatusCode::NOT_FOUND);

            let (status, _) = send(
                &app,
                Method::POST,
                uri,
                Some(&token),
                Some(modify("alice", 999, 1)),
            )
            .await;
            assert_eq!(status, StatusCode::NOT_FOUND);
        }

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/cart/addToCart",
            Some(&token),
            Some(modify("alice", 1, 0)),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, cart) = send(
            &app,
            Method::POST,
            "/api/cart/removeFromCart",
            Some(&token),
            Some(modify("alice", 1, 1)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cart["items"], json!([]));

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/order/submit/ghost",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, history) = send(
            &app,
            Method::GET,
            "/api/order/history/alice",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(history, json!([]));

        let (status, _) = send(
            &app,
            Method::GET,
            "/api/order/history/ghost",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
