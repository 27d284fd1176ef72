//! HTTP-level tests for the OpenWeather provider against a mock server,
//! covering the happy path and the failure taxonomy.

use climapp_core::provider::openweather::OpenWeatherProvider;
use climapp_core::provider::{ProviderError, WeatherProvider};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_current() -> serde_json::Value {
    serde_json::json!({
        "name": "Madrid",
        "dt": 1_709_539_200,
        "sys": { "country": "ES" },
        "main": {
            "temp": 21.4,
            "temp_max": 23.0,
            "temp_min": 18.0,
            "humidity": 40,
            "pressure": 1013
        },
        "wind": { "speed": 3.0 },
        "weather": [ { "id": 800 } ]
    })
}

fn sample_forecast() -> serde_json::Value {
    serde_json::json!({
        "city": { "name": "Madrid", "country": "ES" },
        "list": [
            {
                "dt": 1_709_539_200,
                "main": {
                    "temp": 20.0,
                    "temp_max": 22.0,
                    "temp_min": 15.0,
                    "humidity": 50,
                    "pressure": 1010
                },
                "weather": [ { "id": 500 } ]
            },
            {
                "dt": 1_709_550_000,
                "main": {
                    "temp": 21.0,
                    "temp_max": 23.0,
                    "temp_min": 16.0,
                    "humidity": 45,
                    "pressure": 1011
                },
                "weather": [ { "id": 801 } ]
            }
        ]
    })
}

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::with_base_url("KEY".to_string(), server.uri()).expect("client must build")
}

#[tokio::test]
async fn current_parses_success_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Madrid"))
        .and(query_param("appid", "KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_current()))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let snapshot = provider.current("Madrid").await.expect("must parse");

    assert_eq!(snapshot.city, "Madrid");
    assert_eq!(snapshot.country_code, "ES");
    assert_eq!(snapshot.temperature_c, 21.4);
    assert_eq!(snapshot.temp_max_c, 23.0);
    assert_eq!(snapshot.temp_min_c, 18.0);
    assert_eq!(snapshot.humidity_pct, 40);
    assert_eq!(snapshot.wind_speed_mps, 3.0);
    assert_eq!(snapshot.pressure_hpa, 1013);
    assert_eq!(snapshot.condition_code, 800);
}

#[tokio::test]
async fn missing_weather_block_defaults_to_clear_sky() {
    let mut body = sample_current();
    body.as_object_mut()
        .expect("sample is an object")
        .remove("weather");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let snapshot = provider.current("Madrid").await.expect("must parse");

    assert_eq!(snapshot.condition_code, 800);
}

#[tokio::test]
async fn non_success_status_maps_to_bad_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string("{\"cod\":\"404\",\"message\":\"city not found\"}"),
        )
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.current("Nowhere").await.unwrap_err();

    match err {
        ProviderError::BadStatus { status, body } => {
            assert_eq!(status.as_u16(), 404);
            assert!(body.contains("city not found"));
        }
        other => panic!("expected BadStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_payload_maps_to_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.current("Madrid").await.unwrap_err();

    assert!(matches!(err, ProviderError::Parse(_)));
}

#[tokio::test]
async fn forecast_parses_chronological_series() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", "Madrid"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_forecast()))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let series = provider.forecast("Madrid").await.expect("must parse");

    assert_eq!(series.city, "Madrid");
    assert_eq!(series.country_code, "ES");
    assert_eq!(series.points.len(), 2);
    assert!(series.points[0].at < series.points[1].at);
    assert_eq!(series.points[0].condition_code, 500);
    assert_eq!(series.points[1].condition_code, 801);
}

#[tokio::test]
async fn forecast_failure_maps_to_bad_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500).set_body_string("mock outage"))
        .mount(&server)
        .await;

    let provider = provider_for(&server);
    let err = provider.forecast("Madrid").await.unwrap_err();

    assert!(matches!(err, ProviderError::BadStatus { .. }));
}
