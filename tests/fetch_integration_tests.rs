//! End-to-end fetches against a mock Ergast server

use f1_ergast::data_fetcher::api::create_http_client_with_timeout;
use f1_ergast::data_fetcher::models::QualifyingResults;
use f1_ergast::{
    ApiResponse, AppError, Config, Endpoint, Season, clear_http_response_cache, fetch_endpoint,
    fetch_endpoints, fetch_ergast_data, fetch_typed,
};
use serial_test::serial;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn mock_config(server: &MockServer) -> Config {
    Config {
        api_domain: server.uri(),
        ..Config::default()
    }
}

const CIRCUIT: &str = r#"{"circuitId":"suzuka","url":"http://en.wikipedia.org/wiki/Suzuka_Circuit",
    "circuitName":"Suzuka Circuit",
    "Location":{"lat":"34.8431","long":"136.541","locality":"Suzuka","country":"Japan"}}"#;

const DRIVER: &str = r#"{"driverId":"hakkinen","permanentNumber":null,"code":"HAK",
    "url":"http://en.wikipedia.org/wiki/Mika_H%C3%A4kkinen","givenName":"Mika","familyName":"Häkkinen",
    "dateOfBirth":"1968-09-28","nationality":"Finnish"}"#;

const CONSTRUCTOR: &str = r#"{"constructorId":"mclaren","url":"http://en.wikipedia.org/wiki/McLaren",
    "name":"McLaren","nationality":"British"}"#;

fn race_body(url: &str, children: &str) -> String {
    format!(
        r#"{{"MRData":{{"xmlns":"http://ergast.com/mrd/1.5","series":"f1","url":"{url}",
        "limit":"30","offset":"0","total":"1","RaceTable":{{"season":"1998","round":"16",
        "Races":[{{"season":"1998","round":"16","raceName":"Japanese Grand Prix",
        "Circuit":{CIRCUIT},"date":"1998-11-01",{children}}}]}}}}}}"#
    )
}

#[tokio::test]
#[serial]
async fn test_race_results_end_to_end() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;
    let body = race_body(
        "http://ergast.com/api/f1/1998/results.json",
        &format!(
            r#""Results":[{{"number":"8","position":"1","positionText":"1","points":"10",
            "Driver":{DRIVER},"Constructor":{CONSTRUCTOR},"grid":"2","laps":"51","status":"Finished",
            "Time":{{"millis":"5413799","time":"1:27:22.535"}}}}]"#
        ),
    );
    Mock::given(method("GET"))
        .and(path("/api/f1/1998/results.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let response = fetch_ergast_data(
        &mock_config(&server),
        &Endpoint::RaceResults(Season::Year(1998)),
    )
    .await
    .unwrap();

    match response {
        ApiResponse::RaceResults(results) => {
            let race = &results.data.races()[0];
            assert_eq!(race.race.race_name, "Japanese Grand Prix");
            assert_eq!(race.results[0].driver.full_name(), "Mika Häkkinen");
            assert_eq!(race.results[0].constructor.name, "McLaren");
        }
        other => panic!("expected race results, got {other:?}"),
    }
    clear_http_response_cache().await;
}

#[tokio::test]
#[serial]
async fn test_qualifying_fetched_as_typed_model() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;
    let body = race_body(
        "http://ergast.com/api/f1/1998/qualifying.json",
        &format!(
            r#""QualifyingResults":[{{"number":"8","position":"1",
            "Driver":{DRIVER},"Constructor":{CONSTRUCTOR},"Q1":"1:36.293"}}]"#
        ),
    );
    Mock::given(method("GET"))
        .and(path("/api/f1/1998/qualifying.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let client = create_http_client_with_timeout(5).unwrap();
    let qualifying: QualifyingResults = fetch_typed(
        &client,
        &mock_config(&server),
        &Endpoint::QualifyingResults(Season::Year(1998)),
    )
    .await
    .unwrap();

    let result = &qualifying.data.races()[0].qualifying_results[0];
    assert_eq!(result.best_time(), Some("1:36.293"));
    clear_http_response_cache().await;
}

#[tokio::test]
#[serial]
async fn test_server_error_maps_to_server_error_variant() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).insert_header("Retry-After", "0"))
        .mount(&server)
        .await;

    let client = create_http_client_with_timeout(5).unwrap();
    let result = fetch_endpoint(&client, &mock_config(&server), &Endpoint::Circuits(None)).await;

    match result {
        Err(e @ AppError::ApiServerError { status: 500, .. }) => assert!(e.is_retryable()),
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
#[serial]
async fn test_fan_out_mixes_supported_and_unsupported() {
    clear_http_response_cache().await;
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/f1/1998/5/pitstops.json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            race_body(
                "http://ergast.com/api/f1/1998/5/pitstops.json",
                r#""PitStops":[{"driverId":"hakkinen","lap":"28","stop":"1","time":"13:51:02","duration":"26.950"}]"#,
            ),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_http_client_with_timeout(5).unwrap();
    let endpoints = vec![
        Endpoint::PitStops {
            season: Some(Season::Year(1998)),
            race: "5".parse().unwrap(),
        },
        Endpoint::DriverStandings(Some(Season::Year(1998))),
    ];

    let results = fetch_endpoints(&client, &mock_config(&server), &endpoints).await;
    assert!(matches!(results[0], Ok(ApiResponse::PitStops(_))));
    assert!(matches!(
        results[1],
        Err(AppError::MissingTypeMapping {
            endpoint: "driverStandings"
        })
    ));
    clear_http_response_cache().await;
}
