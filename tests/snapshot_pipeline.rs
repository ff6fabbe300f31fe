use eds_rs::{Client, NarrationClient, NarrationSettings, Provider, SnapshotRequest};
use eds_rs::snapshot::{self, SnapshotError};
use mockito::Matcher;

const WB_SAMPLE: &str = r#"
[
  {"page":1,"pages":1,"per_page":"1","total":1,"country":[{"id":"US","value":"United States"}]},
  [
    {
      "indicator":{"id":"NY.GDP.MKTP.CD","value":"GDP (current US$)"},
      "country":{"id":"US","value":"United States"},
      "countryiso3code":"USA",
      "date":"2022",
      "value":25462700000000,
      "unit":"",
      "obs_status":"",
      "decimal":0
    }
  ]
]
"#;

fn wb_client(server: &mockito::Server) -> Client {
    let mut client = Client::default();
    client.base_url = server.url();
    client
}

fn narrator_for(server: &mockito::Server) -> NarrationClient {
    let mut settings = NarrationSettings::default();
    settings.lm_studio_url = server.url();
    settings.lm_studio_model = "local-model".to_string();
    settings.timeout_secs = 5;
    NarrationClient::new(&settings)
}

fn request() -> SnapshotRequest {
    SnapshotRequest {
        country_code: "USA".into(),
        indicator_codes: vec!["NY.GDP.MKTP.CD".into()],
        year: Some(2022),
        provider: Provider::LmStudio,
    }
}

#[test]
fn generate_assembles_data_and_narrative() {
    let mut wb = mockito::Server::new();
    let _data = wb
        .mock("GET", "/country/USA/indicator/NY.GDP.MKTP.CD")
        .match_query(Matcher::UrlEncoded("date".into(), "2022".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(WB_SAMPLE)
        .create();

    let mut llm = mockito::Server::new();
    let _chat = llm
        .mock("POST", "/chat/completions")
        // The prompt forwarded to the backend carries the fetched numbers.
        .match_body(Matcher::Regex("25462700000000".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"choices":[{"message":{"role":"assistant","content":"GDP held steady."}}]}"#,
        )
        .create();

    let snap = snapshot::generate(&wb_client(&wb), &narrator_for(&llm), &request()).unwrap();

    assert_eq!(snap.country_code, "USA");
    assert_eq!(snap.country_name, "United States");
    assert_eq!(snap.snapshot_text, "GDP held steady.");
    assert_eq!(snap.indicators.len(), 1);
    assert_eq!(snap.indicators[0].values[0].year, "2022");
    assert_eq!(snap.metadata.provider, Provider::LmStudio);
    assert_eq!(snap.metadata.year, Some(2022));
    assert_eq!(snap.metadata.indicator_count, 1);
}

#[test]
fn generate_survives_narration_failure() {
    let mut wb = mockito::Server::new();
    let _data = wb
        .mock("GET", "/country/USA/indicator/NY.GDP.MKTP.CD")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(WB_SAMPLE)
        .create();

    let mut llm = mockito::Server::new();
    let _chat = llm
        .mock("POST", "/chat/completions")
        .with_status(502)
        .create();

    let snap = snapshot::generate(&wb_client(&wb), &narrator_for(&llm), &request()).unwrap();

    // The data half of the response survives a dead narration backend.
    assert!(snap.snapshot_text.starts_with("Error generating snapshot:"));
    assert_eq!(snap.indicators.len(), 1);
}

#[test]
fn generate_maps_empty_upstream_to_no_data() {
    let mut wb = mockito::Server::new();
    let _data = wb
        .mock("GET", "/country/USA/indicator/NY.GDP.MKTP.CD")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"page":1,"pages":0,"per_page":"50","total":0}]"#)
        .create();

    let llm = mockito::Server::new();
    let err =
        snapshot::generate(&wb_client(&wb), &narrator_for(&llm), &request()).unwrap_err();
    assert_eq!(err, SnapshotError::NoData);
}

#[test]
fn invalid_input_is_rejected_before_any_fetch() {
    let mut wb = mockito::Server::new();
    let unreached = wb
        .mock("GET", Matcher::Any)
        .expect(0)
        .create();

    let llm = mockito::Server::new();
    let mut bad = request();
    bad.country_code = "usa".into();

    let err = snapshot::generate(&wb_client(&wb), &narrator_for(&llm), &bad).unwrap_err();
    assert_eq!(err, SnapshotError::InvalidCountryCode("usa".into()));
    unreached.assert();
}
