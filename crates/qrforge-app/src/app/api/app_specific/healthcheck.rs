use salvo::{Router, handler};

#[handler]
async fn hello() -> &'static str {
    "OK"
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("healthcheck").get(hello)
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use salvo::test::{ResponseExt, TestClient};

    use super::*;

    #[tokio::test]
    async fn healthcheck_returns_ok() {
        let mut res = TestClient::get("http://127.0.0.1:5800/healthcheck")
            .send(routes())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(res.take_string().await.unwrap(), "OK");
    }
}
