//! GraphQL client for the upstream indexer API

use fargoat_core::{FarGoatError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: &'a Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorEntry {
    message: String,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run `query` with `variables` and decode the `data` member into `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: &Map<String, Value>,
    ) -> Result<T> {
        debug!("GraphQL request to {}: {}", self.endpoint, query);

        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&GraphQlRequest { query, variables });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            warn!("GraphQL query failed: {}", e);
            FarGoatError::Upstream(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GraphQL endpoint returned {}", status);
            return Err(FarGoatError::Upstream(format!(
                "GraphQL endpoint returned {}",
                status
            )));
        }

        let body: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|e| FarGoatError::Upstream(format!("Invalid GraphQL response: {}", e)))?;

        if !body.errors.is_empty() {
            let messages = body
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!("GraphQL query failed: {}", messages);
            return Err(FarGoatError::Upstream(messages));
        }

        body.data
            .ok_or_else(|| FarGoatError::Upstream("GraphQL response has no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Contracts {
        contracts: Vec<String>,
    }

    fn vars() -> Map<String, Value> {
        let mut vars = Map::new();
        vars.insert("founder".to_string(), json!("goat"));
        vars
    }

    #[tokio::test]
    async fn test_execute_sends_query_and_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(header("authorization", "Bearer secret"))
            .and(body_partial_json(json!({"variables": {"founder": "goat"}})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"data": {"contracts": ["0xabc", "0xdef"]}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = GraphQlClient::new(
            format!("{}/graphql", server.uri()),
            Some("secret".to_string()),
        );
        let data: Contracts = client
            .execute("query($founder: String!) { contracts }", &vars())
            .await
            .unwrap();

        assert_eq!(data.contracts, vec!["0xabc", "0xdef"]);
    }

    #[tokio::test]
    async fn test_graphql_errors_surface() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{"message": "field not found"}]
            })))
            .mount(&server)
            .await;

        let client = GraphQlClient::new(server.uri(), None);
        let err = client
            .execute::<Value>("{ nope }", &Map::new())
            .await
            .unwrap_err();

        assert!(matches!(err, FarGoatError::Upstream(ref m) if m.contains("field not found")));
    }

    #[tokio::test]
    async fn test_http_status_is_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = GraphQlClient::new(server.uri(), None);
        assert!(matches!(
            client.execute::<Value>("{ x }", &Map::new()).await,
            Err(FarGoatError::Upstream(_))
        ));
    }
}
