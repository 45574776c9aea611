use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use async_trait::async_trait;
use gallery_backend::{
    db::sqlite::{create_pool, run_migrations},
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    AppState,
};
use reqwest::Client;
use serde_json::Value;
use sqlx::SqlitePool;
use std::{net::TcpListener, time::Duration};
use uuid::Uuid;

#[derive(Clone)]
pub struct TestApp {
    pub address: String,
    pub db_pool: SqlitePool,
    pub client: Client,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config()).await
    }

    pub async fn spawn_with(config: AppConfig) -> Self {
        let db_pool = create_pool(&config.database_url)
            .await
            .expect("Failed to create test DB pool");

        run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let state = web::Data::new(AppState::new(&config, db_pool.clone()));

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(NormalizePath::trim())
                .configure(configure_routes)
        })
        .listen(listener)
        .expect("Failed to bind server")
        .workers(1)
        .run();

        tokio::spawn(server);

        let client = Client::new();
        while client
            .get(format!("{}/health", address))
            .send()
            .await
            .is_err()
        {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        Self {
            address,
            db_pool,
            client,
            config,
        }
    }
}

pub fn test_config() -> AppConfig {
    let mut db_path = std::env::temp_dir();
    db_path.push(format!("gallery_test_{}.db", Uuid::new_v4()));

    AppConfig {
        env: AppEnvironment::Testing,
        name: "Gallery Backend Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url: format!("sqlite://{}", db_path.display()),
        admin_emails: vec!["admin@example.com".to_string()],
        // Nothing listens here: relay failures are part of what the suite
        // exercises without reaching the real image host.
        imgbb_api_url: "http://127.0.0.1:9/upload".to_string(),
        imgbb_api_key: None,
        upload_allowed_origins: vec![
            "https://gallery.example.com".to_string(),
            "http://localhost:5173".to_string(),
        ],
    }
}

#[async_trait]
pub trait GalleryHelpers: Send + Sync {
    async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response;
    async fn put_json(&self, path: &str, body: &Value) -> reqwest::Response;
    async fn get_json(&self, path: &str) -> Value;
    async fn delete(&self, path: &str) -> reqwest::Response;
    async fn create_photo(&self, body: Value) -> String;
    async fn create_album(&self, body: Value) -> String;
}

#[async_trait]
impl GalleryHelpers for TestApp {
    async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request")
    }

    async fn put_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request")
    }

    async fn get_json(&self, path: &str) -> Value {
        let response = self
            .client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to send GET request");

        let status = response.status();
        assert!(status.is_success(), "GET {} failed with {}", path, status);

        response.json().await.expect("Failed to parse GET response")
    }

    async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to send DELETE request")
    }

    async fn create_photo(&self, body: Value) -> String {
        let response = self.post_json("/photos", &body).await;
        let status = response.status();
        let body: Value = response.json().await.expect("Failed to parse create response");
        assert_eq!(status.as_u16(), 201, "photo create failed: {}", body);
        assert_eq!(body["success"], true);

        body["id"].as_str().expect("create returned no id").to_string()
    }

    async fn create_album(&self, body: Value) -> String {
        let response = self.post_json("/albums", &body).await;
        let status = response.status();
        let body: Value = response.json().await.expect("Failed to parse create response");
        assert_eq!(status.as_u16(), 201, "album create failed: {}", body);
        assert_eq!(body["success"], true);

        body["id"].as_str().expect("create returned no id").to_string()
    }
}
