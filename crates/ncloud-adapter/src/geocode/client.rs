/*
[INPUT]:  Geocode queries and API key credentials
[OUTPUT]: Typed geocoding responses
[POS]:    Geocode service - HTTP client for the Maps geocoding endpoint
[UPDATE]: When the endpoint, auth headers or response handling change
*/

use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::geocode::query::GeocodeQuery;
use crate::geocode::types::{GeocodeResponse, GeocodeStatus};
use crate::http::client::{build_http_client, send_json};
use crate::http::{ClientConfig, NcloudError, Result};

/// Base URL for the open API gateway
pub const GEOCODE_BASE_URL: &str = "https://naveropenapi.apigw.ntruss.com";
/// Geocoding endpoint path
pub const GEOCODE_ENDPOINT: &str = "/map-geocode/v2/geocode";

/// Header carrying the API key id
pub const CLIENT_ID_HEADER: &str = "x-ncp-apigw-api-key-id";
/// Header carrying the API key
pub const CLIENT_SECRET_HEADER: &str = "x-ncp-apigw-api-key";

/// Client for the Maps geocoding API
///
/// Authenticates with the API key id / API key header pair rather than
/// the gateway HMAC signature.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http_client: Client,
    base_url: Url,
    client_id: String,
    client_secret: String,
}

impl GeocodeClient {
    /// Create a new client with default configuration
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::default(), client_id, client_secret)
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        config: ClientConfig,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::with_base_url(config, GEOCODE_BASE_URL, client_id, client_secret)
    }

    /// Create a new client against an explicit base URL
    pub fn with_base_url(
        config: ClientConfig,
        base_url: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            http_client: build_http_client(&config)?,
            base_url: Url::parse(base_url)?,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        })
    }

    /// Look up addresses matching a query
    ///
    /// GET /map-geocode/v2/geocode?query={address}&...
    ///
    /// A response body with a status other than `OK` is mapped to an
    /// `Api` error carrying the server's error message.
    pub async fn geocode(&self, query: &GeocodeQuery) -> Result<GeocodeResponse> {
        let params = query.to_params()?;
        let url = self.base_url.join(GEOCODE_ENDPOINT)?;
        debug!(%url, "geocode lookup");

        let builder = self
            .http_client
            .get(url)
            .query(&params)
            .header(CLIENT_ID_HEADER, &self.client_id)
            .header(CLIENT_SECRET_HEADER, &self.client_secret);

        let response: GeocodeResponse = send_json(builder, StatusCode::OK).await?;
        if response.status != GeocodeStatus::Ok {
            return Err(NcloudError::api_error(
                response.status.as_str(),
                response.error_message,
            ));
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::query::Lang;
    use crate::geocode::types::{Address, AddressElement, Meta};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> GeocodeClient {
        GeocodeClient::with_base_url(
            ClientConfig::default(),
            &server.uri(),
            "test-client-id",
            "test-client-secret",
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_geocode_valid_query() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "status": "OK",
            "errorMessage": "",
            "meta": {"totalCount": 1, "page": 1, "count": 1},
            "addresses": [
                {
                    "roadAddress": "도로명 주소",
                    "jibunAddress": "지번 주소",
                    "englishAddress": "English Address",
                    "x": "127",
                    "y": "37",
                    "addressElements": [
                        {"types": ["POSTAL_CODE"], "longName": "1111", "shortName": "", "code": ""}
                    ]
                }
            ]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path(GEOCODE_ENDPOINT))
            .and(query_param("query", "valid-addr"))
            .and(header(CLIENT_ID_HEADER, "test-client-id"))
            .and(header(CLIENT_SECRET_HEADER, "test-client-secret"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = test_client(&server)
            .geocode(&GeocodeQuery::new("valid-addr"))
            .await
            .expect("geocode failed");

        let expected = GeocodeResponse {
            status: GeocodeStatus::Ok,
            error_message: String::new(),
            meta: Meta {
                total_count: 1,
                page: 1,
                count: 1,
            },
            addresses: vec![Address {
                road_address: "도로명 주소".to_string(),
                jibun_address: "지번 주소".to_string(),
                english_address: "English Address".to_string(),
                x: "127".to_string(),
                y: "37".to_string(),
                distance: 0.0,
                address_elements: vec![AddressElement {
                    types: vec!["POSTAL_CODE".to_string()],
                    long_name: "1111".to_string(),
                    short_name: String::new(),
                    code: String::new(),
                }],
            }],
        };
        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_geocode_passes_options_through() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path(GEOCODE_ENDPOINT))
            .and(query_param("query", "addr"))
            .and(query_param("coordinate", "127.105433,37.359596"))
            .and(query_param("language", "eng"))
            .and(query_param("filter", "BCODE@1168010300"))
            .and(query_param("page", "2"))
            .and(query_param("count", "5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"status": "OK"}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let query = GeocodeQuery::new("addr")
            .coordinate(127.1054328, 37.3595963)
            .language(Lang::Eng)
            .bcode(["1168010300"])
            .page(2)
            .count(5);

        let response = test_client(&server).geocode(&query).await.expect("geocode failed");
        assert_eq!(response.status, GeocodeStatus::Ok);
    }

    #[tokio::test]
    async fn test_geocode_invalid_status_is_error() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path(GEOCODE_ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{"status": "INVALID_REQUEST", "errorMessage": "query is incorrect!"}"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let err = test_client(&server)
            .geocode(&GeocodeQuery::new("invalid-addr"))
            .await
            .unwrap_err();

        match err {
            NcloudError::Api { code, message } => {
                assert_eq!(code, "INVALID_REQUEST");
                assert_eq!(message, "query is incorrect!");
            }
            other => panic!("Expected Api error but got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_geocode_empty_query_skips_network() {
        let server = MockServer::start().await;
        // No mock mounted: an empty query must fail before any request

        let err = test_client(&server)
            .geocode(&GeocodeQuery::new(""))
            .await
            .unwrap_err();
        assert!(matches!(err, NcloudError::InvalidQuery(_)));
    }
}
