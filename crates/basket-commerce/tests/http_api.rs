use std::sync::Arc;

use basket_cache::Cache;
use basket_commerce::prelude::*;
use basket_commerce::store::notify::ADD_FAILED;

fn config_for(server: &mockito::Server) -> StoreConfig {
    StoreConfig::default().with_api_base_url(server.url())
}

#[tokio::test]
async fn stock_lookup_decodes_record() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/stock/1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"amount":3}"#)
        .create_async()
        .await;

    let api = HttpStorefrontApi::from_config(&config_for(&server)).unwrap();
    let stock = api.stock(ProductId::new(1)).await.unwrap();

    assert_eq!(stock, Stock::new(ProductId::new(1), 3));
}

#[tokio::test]
async fn missing_product_maps_to_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/products/5")
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;

    let api = HttpStorefrontApi::from_config(&config_for(&server)).unwrap();
    let err = api.product(ProductId::new(5)).await.unwrap_err();

    assert!(matches!(err, LookupError::NotFound(id) if id == ProductId::new(5)));
}

#[tokio::test]
async fn mismatched_ids_are_malformed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/stock/2")
        .with_status(200)
        .with_body(r#"{"id":3,"amount":1}"#)
        .create_async()
        .await;

    let api = HttpStorefrontApi::from_config(&config_for(&server)).unwrap();
    let err = api.stock(ProductId::new(2)).await.unwrap_err();

    assert!(matches!(err, LookupError::Malformed(_)));
}

#[tokio::test]
async fn store_adds_product_over_http() {
    let mut server = mockito::Server::new_async().await;
    let stock = server
        .mock("GET", "/stock/7")
        .with_status(200)
        .with_body(r#"{"id":7,"amount":3}"#)
        .expect(2)
        .create_async()
        .await;
    let product = server
        .mock("GET", "/products/7")
        .with_status(200)
        .with_body(r#"{"id":7,"title":"X","price":10,"image":"https://cdn/x.jpg"}"#)
        .expect(1)
        .create_async()
        .await;

    let cache = Cache::in_memory();
    let notifier = Arc::new(RecordingNotifier::new());
    let store = CartStore::from_config(&config_for(&server), cache, notifier.clone()).unwrap();

    store.add_product(ProductId::new(7)).await.unwrap();
    let cart = store.add_product(ProductId::new(7)).await.unwrap();

    let line = cart.get(ProductId::new(7)).unwrap();
    assert_eq!(line.amount, 2);
    assert_eq!(line.product.name, "X");
    assert_eq!(line.product.image.as_deref(), Some("https://cdn/x.jpg"));
    assert!(notifier.messages().is_empty());

    stock.assert_async().await;
    product.assert_async().await;
}

#[tokio::test]
async fn store_reports_server_errors_as_add_failures() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/stock/1")
        .with_status(500)
        .create_async()
        .await;

    let notifier = Arc::new(RecordingNotifier::new());
    let store =
        CartStore::from_config(&config_for(&server), Cache::in_memory(), notifier.clone()).unwrap();

    let err = store.add_product(ProductId::new(1)).await.unwrap_err();

    assert!(matches!(
        err,
        CartError::OperationFailed {
            source: LookupError::Fetch(_),
            ..
        }
    ));
    assert!(store.cart().is_empty());
    assert_eq!(notifier.messages(), vec![ADD_FAILED]);
}
