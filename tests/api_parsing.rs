use eds_rs::normalize::normalize;
use serde_json::Value;

#[test]
fn parse_sample_json() {
    let sample = r#"
    [
      {"page":1,"pages":1,"per_page":"2","total":2,"country":[{"id":"DE","value":"Germany"}]},
      [
        {
          "indicator":{"id":"SP.POP.TOTL","value":"Population, total"},
          "country":{"id":"DE","value":"Germany"},
          "countryiso3code":"DEU",
          "date":"2019",
          "value":83000000,
          "unit":"",
          "obs_status":null,
          "decimal":0
        },
        {
          "indicator":{"id":"SP.POP.TOTL","value":"Population, total"},
          "country":{"id":"DE","value":"Germany"},
          "countryiso3code":"DEU",
          "date":"2020",
          "value":83100000,
          "unit":"",
          "obs_status":null,
          "decimal":0
        }
      ]
    ]
    "#;

    let v: Value = serde_json::from_str(sample).unwrap();
    let raw = v.as_array().unwrap().clone();

    let data = normalize(&raw, "DEU", &["SP.POP.TOTL".to_string()]).unwrap();
    assert_eq!(data.country_name, "Germany");
    assert_eq!(data.total_indicators, 1);
    assert_eq!(data.data_point_count, 2);

    let series = &data.indicators[0];
    assert_eq!(series.code, "SP.POP.TOTL");
    assert_eq!(series.name, "Population, total");
    assert_eq!(series.values[0].year, "2019");
    assert_eq!(series.values[0].value, Some(83_000_000.0));
    // null obs_status defaults to empty, not a crash
    assert_eq!(series.values[0].obs_status, "");
}
