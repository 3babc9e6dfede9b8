//! Integration tests for `FoodDataCentral` using wiremock HTTP mocks.

use macrotrack::fooddata::{FoodDataCentral, FoodDataError, FoodSearch, FoodSearchResult};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> FoodDataCentral {
    FoodDataCentral::with_base_url("test-key", 5, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn search_sends_documented_query_params() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "totalHits": 1,
        "currentPage": 1,
        "foods": [{
            "fdcId": 171688,
            "description": "Apples, raw, with skin",
            "dataType": "SR Legacy",
            "foodNutrients": [
                { "nutrientName": "Protein", "unitName": "G", "value": 0.26 },
                { "nutrientName": "Total lipid (fat)", "unitName": "G", "value": 0.17 },
                { "nutrientName": "Carbohydrate, by difference", "unitName": "G", "value": 13.81 },
                { "nutrientName": "Energy", "unitName": "KCAL", "value": 52.0 }
            ]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "apple"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("dataType", "SR Legacy"))
        .and(query_param("pageSize", "10"))
        .and(query_param("pageNumber", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let foods = client.search("apple").await.expect("should parse foods");

    assert_eq!(foods.len(), 1);
    let result = FoodSearchResult::from(&foods[0]);
    assert_eq!(result.description, "Apples, raw, with skin");
    assert_eq!(result.calories.expect("calories").value, 52.0);
    assert_eq!(result.carbs.expect("carbs").value, 13.81);
}

#[tokio::test]
async fn search_without_foods_key_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "totalHits": 0 })))
        .mount(&server)
        .await;

    let foods = test_client(&server.uri()).search("zzz").await.expect("empty search");
    assert!(foods.is_empty());
}

#[tokio::test]
async fn upstream_error_status_is_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = test_client(&server.uri()).search("apple").await.unwrap_err();
    assert!(matches!(err, FoodDataError::Http(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_body_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri()).search("apple").await.unwrap_err();
    assert!(matches!(err, FoodDataError::Deserialize { .. }), "got {err:?}");
}
