//! Integration tests for OpenWeatherClient using wiremock.

use url::Url;
use weather_core::{Condition, Config, OpenWeatherClient, UpstreamError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer, city: &str, units: &str) -> Config {
    Config {
        api_key: "TEST_KEY".to_string(),
        city: city.to_string(),
        units: units.to_string(),
        endpoint: Url::parse(&format!("{}/data/2.5/weather", server.uri())).unwrap(),
    }
}

#[tokio::test]
async fn test_current_weather_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "São Paulo"))
        .and(query_param("units", "metric"))
        .and(query_param("APPID", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "coord": {"lon": -46.64, "lat": -23.55},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 21.6, "temp_min": 20.2, "temp_max": 23.1, "humidity": 88},
            "wind": {"speed": 4.1},
            "dt": 1700000000,
            "name": "São Paulo",
            "cod": 200
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = OpenWeatherClient::new();
    let report = client.current(&config_for(&mock_server, "São Paulo", "metric")).await.unwrap();

    assert_eq!(report.cod, 200);
    assert_eq!(report.condition(), Condition::Rain);
    assert_eq!(report.main.humidity, 88);
    assert_eq!(report.name, "São Paulo");
}

#[tokio::test]
async fn test_city_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = OpenWeatherClient::new();
    let err = client.current(&config_for(&mock_server, "Atlantis", "metric")).await.unwrap_err();

    assert_eq!(err.downcast_ref::<UpstreamError>(), Some(&UpstreamError::CityNotFound));
    assert_eq!(err.to_string(), "City not found");
}

#[tokio::test]
async fn test_invalid_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({"cod": 401})))
        .mount(&mock_server)
        .await;

    let client = OpenWeatherClient::new();
    let err = client.current(&config_for(&mock_server, "Berlin", "metric")).await.unwrap_err();

    assert_eq!(err.downcast_ref::<UpstreamError>(), Some(&UpstreamError::InvalidApiKey));
}

#[tokio::test]
async fn test_other_upstream_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(serde_json::json!({"cod": 429, "message": "too many requests"})),
        )
        .mount(&mock_server)
        .await;

    let client = OpenWeatherClient::new();
    let err = client.current(&config_for(&mock_server, "Berlin", "metric")).await.unwrap_err();

    assert_eq!(err.downcast_ref::<UpstreamError>(), Some(&UpstreamError::Other(429)));
    assert_eq!(err.to_string(), "ERROR");
}

#[tokio::test]
async fn test_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&mock_server)
        .await;

    let client = OpenWeatherClient::new();
    let err = client.current(&config_for(&mock_server, "Berlin", "metric")).await.unwrap_err();

    assert!(err.downcast_ref::<UpstreamError>().is_none());
    assert!(err.to_string().contains("Failed to parse OpenWeather JSON"));
}

#[tokio::test]
async fn test_fetch_returns_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"cod\":200}"))
        .mount(&mock_server)
        .await;

    let client = OpenWeatherClient::new();
    let url = Url::parse(&format!("{}/raw", mock_server.uri())).unwrap();
    let body = client.fetch(&url).await.unwrap();

    assert_eq!(body, b"{\"cod\":200}");
}

#[tokio::test]
async fn test_transport_error_is_surfaced() {
    // Bind and release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = Config {
        api_key: "TEST_KEY".to_string(),
        city: "Berlin".to_string(),
        units: "metric".to_string(),
        endpoint: Url::parse(&format!("http://{addr}/data/2.5/weather")).unwrap(),
    };

    let err = OpenWeatherClient::new().current(&config).await.unwrap_err();

    assert!(err.to_string().contains("Failed to send request to OpenWeather"));
    assert!(err.chain().count() > 1);

    let full = format!("{err:#}");
    assert!(!full.contains("TEST_KEY"), "API key leaked: {full}");
    assert!(!full.contains("APPID"), "request URL leaked: {full}");
}
