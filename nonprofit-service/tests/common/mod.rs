use nonprofit_service::config::{NonprofitConfig, ProPublicaConfig};
use nonprofit_service::startup::Application;
use service_core::config::Config;
use std::time::Duration;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub upstream: MockServer,
}

impl TestApp {
    /// Spawn the service with its ProPublica client pointed at a mock server.
    pub async fn spawn() -> Self {
        let upstream = MockServer::start().await;

        let config = NonprofitConfig {
            common: Config {
                port: 0, // Random port
                ..Config::default()
            },
            propublica: ProPublicaConfig {
                base_url: format!("{}/nonprofits/api/v2/search.json", upstream.uri()),
                timeout_secs: 2,
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address, upstream }
    }

    /// POST a raw body to `path`, the way `curl -d` does.
    pub async fn post_raw(&self, path: &str, body: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}{}", self.address, path))
            .header("content-type", "application/x-www-form-urlencoded")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to execute request")
    }
}
