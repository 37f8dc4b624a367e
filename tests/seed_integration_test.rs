use httpmock::prelude::*;
use sales_analytics::core::SaleStore;
use sales_analytics::{
    AnalyticsEngine, AnalyticsError, AppConfig, HttpSeedPipeline, LocalStore, SeedEngine,
};
use std::sync::Arc;
use tempfile::TempDir;

fn config_for(url: String, data_file: &std::path::Path) -> AppConfig {
    AppConfig {
        seed_url: url,
        data_file: Some(data_file.to_str().unwrap().to_string()),
        ..AppConfig::default()
    }
}

#[tokio::test]
async fn test_seed_then_reopen_from_snapshot() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("sales.json");

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/product_transaction.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {
                    "id": 11,
                    "title": "Laptop sleeve",
                    "price": 25,
                    "description": "Neoprene",
                    "category": "electronics",
                    "sold": true,
                    "dateOfSale": "2022-06-11T10:00:00Z"
                },
                {
                    "id": 12,
                    "title": "Silver chain",
                    "price": 950,
                    "description": "Sterling",
                    "category": "jewelery",
                    "sold": false,
                    "dateOfSale": "2021-06-30T10:00:00Z"
                }
            ]));
    });

    let config = config_for(server.url("/product_transaction.json"), &data_file);
    let store = Arc::new(LocalStore::open(&data_file).await.unwrap());
    let pipeline = HttpSeedPipeline::new(Arc::clone(&store), config).unwrap();

    let report = SeedEngine::new(pipeline).run().await.unwrap();

    api_mock.assert();
    assert_eq!(report.records_loaded, 2);
    assert!(data_file.exists());

    let reopened = Arc::new(LocalStore::open(&data_file).await.unwrap());
    assert_eq!(reopened.total_records().await.unwrap(), 2);

    let engine = AnalyticsEngine::new(reopened);
    let histogram = engine.price_histogram(Some("6")).await.unwrap();
    assert_eq!(histogram[0].count, 1);
    assert_eq!(histogram[9].count, 1);
}

#[tokio::test]
async fn test_failed_seed_keeps_previous_contents() {
    let temp_dir = TempDir::new().unwrap();
    let data_file = temp_dir.path().join("sales.json");

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/broken.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"not": "an array"}));
    });

    let store = Arc::new(LocalStore::open(&data_file).await.unwrap());
    let config = config_for(server.url("/broken.json"), &data_file);
    let pipeline = HttpSeedPipeline::new(Arc::clone(&store), config).unwrap();

    let result = SeedEngine::new(pipeline).run().await;

    assert!(matches!(result, Err(AnalyticsError::BulkLoadError { .. })));
    assert_eq!(store.total_records().await.unwrap(), 0);
    assert!(!data_file.exists());
}
