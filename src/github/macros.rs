use reqwest::{
    header::{ACCEPT, USER_AGENT},
    RequestBuilder,
};

pub trait Headers {
    fn default_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn default_headers(self, token: &str) -> RequestBuilder {
        self.bearer_auth(token)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, "create-release")
    }
}

#[macro_export]
macro_rules! get {
    ($url:expr, $token:expr) => {{
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .get($url)
            .default_headers($token)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! post {
    ($url:expr, $token:expr, $body:expr) => {{
        use reqwest::header::CONTENT_TYPE;
        use $crate::{github::macros::Headers, http::ResponseHandler};

        $crate::http::HttpClient::new()
            .post($url)
            .default_headers($token)
            .header(CONTENT_TYPE, "application/json")
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[cfg(test)]
mod tests {
    use crate::http::Error;
    use anyhow::Result;
    use mockito::Server;

    #[tokio::test]
    async fn get_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let expected_body = "test_body";

        let m = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer test_token")
            .match_header("accept", "application/vnd.github+json")
            .match_header("x-github-api-version", "2022-11-28")
            .match_header("user-agent", "create-release")
            .with_body(expected_body)
            .create_async()
            .await;

        let response = get!(url, "test_token")?;

        m.assert_async().await;

        assert_eq!(response, expected_body);

        Ok(())
    }

    #[tokio::test]
    async fn post_macro() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let m = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer test_token")
            .match_header("content-type", "application/json")
            .match_header("user-agent", "create-release")
            .match_body(r#"{"key":"value"}"#)
            .with_status(201)
            .with_body("created")
            .create_async()
            .await;

        let response = post!(url, "test_token", r#"{"key":"value"}"#)?;

        m.assert_async().await;
        assert_eq!(response, "created");

        Ok(())
    }

    #[tokio::test]
    async fn get_macro_fails_on_error_status() -> Result<()> {
        let mut server = Server::new_async().await;
        let url = server.url();

        let m = server
            .mock("GET", "/")
            .with_status(401)
            .with_body(r#"{"message":"Bad credentials"}"#)
            .create_async()
            .await;

        let response = get!(url, "bad_token");

        m.assert_async().await;

        match response {
            Err(Error::GenericResponseError { message }) => {
                assert_eq!(message, "Bad credentials")
            }
            other => panic!("unexpected response: {:?}", other),
        }

        Ok(())
    }
}
