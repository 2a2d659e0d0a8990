use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock authorization server built on `wiremock`. Its `POST /token`
/// endpoint answers with whatever error document a test mounts.
pub struct MockTokenEndpoint {
    server: MockServer,
}

impl MockTokenEndpoint {
    /// Start a new mock server on a random available port.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Full URL of the token endpoint.
    pub fn token_url(&self) -> String {
        format!("{}/token", self.server.uri())
    }

    /// Mount a handler that answers `POST /token` with the given status and
    /// a raw JSON body.
    pub async fn mock_json_error(&self, status: u16, body: Vec<u8>) {
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that answers `POST /token` with a form-encoded error
    /// body.
    pub async fn mock_form_error(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_raw(body.to_owned(), "application/x-www-form-urlencoded"),
            )
            .mount(&self.server)
            .await;
    }
}

/// POST a refresh grant to `url` and return the status and raw body.
pub async fn post_refresh_grant(url: &str) -> Result<(u16, Vec<u8>), reqwest::Error> {
    let response = reqwest::Client::new()
        .post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body("grant_type=refresh_token&refresh_token=expired")
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.bytes().await?.to_vec();
    Ok((status, body))
}
