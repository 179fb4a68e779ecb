use crate::common::{create_test_client, query_with_token};
use assert_json_diff::assert_json_eq;
use mockito::{Matcher, Server};
use trefle_client::prelude::*;

#[tokio::test]
async fn every_endpoint_hits_its_collection() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);

    for endpoint in Endpoint::ALL {
        let body = json!({"data": [{"slug": endpoint.as_str()}], "links": {}, "meta": {}});
        let mock = server
            .mock("GET", format!("/api/v1/{endpoint}").as_str())
            .match_query(query_with_token(&[]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let result = client.endpoint(endpoint, None, QueryParams::new()).await.unwrap();
        assert_json_eq!(result, body);
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn typed_methods_map_to_paths() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);

    let kingdom = server
        .mock("GET", "/api/v1/kingdoms/plantae")
        .match_query(query_with_token(&[]))
        .with_body(r#"{"data":{"slug":"plantae"}}"#)
        .create_async()
        .await;
    let families = server
        .mock("GET", "/api/v1/families")
        .match_query(query_with_token(&[("page", "4")]))
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;
    let distribution = server
        .mock("GET", "/api/v1/distributions/77")
        .match_query(query_with_token(&[]))
        .with_body(r#"{"data":{"id":77}}"#)
        .create_async()
        .await;

    let result = client
        .kingdoms(Some("plantae".into()), QueryParams::new())
        .await
        .unwrap();
    assert_eq!(result["data"]["slug"], "plantae");
    client
        .families(None, QueryParams::new().page(4))
        .await
        .unwrap();
    client
        .distributions(Some(77u64.into()), QueryParams::new())
        .await
        .unwrap();

    kingdom.assert_async().await;
    families.assert_async().await;
    distribution.assert_async().await;
}

#[tokio::test]
async fn single_item_by_primary_key() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);

    let body = json!({"data": {"id": 182512, "scientific_name": "Acacia melanoxylon"}, "meta": {}});
    let mock = server
        .mock("GET", "/api/v1/species/182512")
        .match_query(query_with_token(&[]))
        .with_body(body.to_string())
        .create_async()
        .await;

    let result = client
        .species(Some(182512u64.into()), QueryParams::new())
        .await
        .unwrap();

    assert!(result["data"].is_object());
    assert_json_eq!(result, body);
    mock.assert_async().await;
}

#[tokio::test]
async fn bracket_filters_reach_the_server_unmodified() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);

    let mock = server
        .mock("GET", "/api/v1/plants")
        .match_query(query_with_token(&[
            ("filter[common_name]", "beach strawberry"),
            ("filter_not[edible_part]", "null"),
            ("order[year]", "asc"),
            ("range[maximum_height_cm]", "5,20"),
        ]))
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    client
        .plants(
            None,
            QueryParams::new()
                .filter("common_name", "beach strawberry")
                .filter_not("edible_part", "null")
                .order("year", SortOrder::Asc)
                .range("maximum_height_cm", Some(5), Some(20)),
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn search_sends_q_on_target_path() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);

    let plants = server
        .mock("GET", "/api/v1/plants/search")
        .match_query(query_with_token(&[("q", "tomato")]))
        .with_body(r#"{"data":[{"slug":"solanum-lycopersicum"}]}"#)
        .create_async()
        .await;
    let species = server
        .mock("GET", "/api/v1/species/search")
        .match_query(query_with_token(&[("q", "coconut"), ("page", "2")]))
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let result = client
        .search("tomato", SearchTarget::default(), QueryParams::new())
        .await
        .unwrap();
    assert_eq!(result["data"][0]["slug"], "solanum-lycopersicum");
    client
        .search("coconut", SearchTarget::Species, QueryParams::new().page(2))
        .await
        .unwrap();

    plants.assert_async().await;
    species.assert_async().await;
}

#[tokio::test]
async fn plants_by_genus_and_distribution() {
    let mut server = Server::new_async().await;
    let client = create_test_client(&server);

    let genus = server
        .mock("GET", "/api/v1/genus/quercus/plants")
        .match_query(query_with_token(&[]))
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;
    let zone = server
        .mock("GET", "/api/v1/distributions/fra/plants")
        .match_query(query_with_token(&[("filter[establishment]", "native")]))
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    client
        .plants_by(PlantsBy::Genus, "quercus".into(), QueryParams::new())
        .await
        .unwrap();
    client
        .plants_by(
            "distributions".parse().unwrap(),
            "fra".into(),
            QueryParams::new().filter("establishment", "native"),
        )
        .await
        .unwrap();

    genus.assert_async().await;
    zone.assert_async().await;
}

#[tokio::test]
async fn default_params_are_sent_with_every_request() {
    let mut server = Server::new_async().await;
    let mut config = Config::with_token(crate::common::TOKEN)
        .base_url(&server.url())
        .default_param("page_size", 30)
        .retry(RetryConfig::disabled());
    config.rate_limiter.burst_size = 100;
    let client = Client::new(config).unwrap();

    let mock = server
        .mock("GET", "/api/v1/species/search")
        .match_query(Matcher::Exact(format!(
            "token={}&page_size=30&q=tomato",
            crate::common::TOKEN
        )))
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    client
        .search("tomato", SearchTarget::Species, QueryParams::new())
        .await
        .unwrap();
    mock.assert_async().await;
}
