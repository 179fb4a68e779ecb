use trefle_client::prelude::*;

#[test]
fn test_client_display() {
    let client = Client::with_token("abc").expect("client builds");
    assert_eq!(
        client.to_string(),
        "An instance of the Trefle API client with token id: 'abc', querying version: 'v1'"
    );
}

#[test]
fn test_build_url_for_endpoint() {
    let client = Client::with_token("abc").expect("client builds");
    let url = client
        .http_client()
        .build_url(&Endpoint::Species.path(None), &QueryParams::new())
        .unwrap();
    assert_eq!(url.as_str(), "https://trefle.io/api/v1/species?token=abc");
}

#[test]
fn test_build_url_defaults_before_caller_params() {
    let config = Config::with_token("abc").default_param("page_size", 30);
    let client = Client::new(config).expect("client builds");
    let url = client
        .http_client()
        .build_url("species/search", &QueryParams::new().param("q", "tomato"))
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://trefle.io/api/v1/species/search?token=abc&page_size=30&q=tomato"
    );
}

#[test]
fn test_build_url_encodes_bracket_keys_losslessly() {
    let client = Client::with_token("abc").expect("client builds");
    let url = client
        .http_client()
        .build_url(
            "plants",
            &QueryParams::new().filter("common_name", "beach strawberry"),
        )
        .unwrap();

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("token".to_string(), "abc".to_string()),
            ("filter[common_name]".to_string(), "beach strawberry".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_navigation_before_any_fetch_is_none() {
    let client = Client::with_token("abc").expect("client builds");
    for navigation in Navigation::ALL {
        let result = client.navigate(navigation, QueryParams::new()).await.unwrap();
        assert!(result.is_none());
    }
    assert!(client.next(QueryParams::new()).await.unwrap().is_none());
    assert!(client.last_response().await.is_none());
}

#[tokio::test]
async fn test_required_identifier_rejected_before_request() {
    let client = Client::with_token("abc").expect("client builds");
    let err = client
        .plants_by(PlantsBy::Genus, Identifier::from(""), QueryParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
