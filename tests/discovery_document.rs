use tuner_lineup::{
    collection::ApiCollection,
    config::{DatabaseConfig, LineupDefaults},
    database::Database,
    discovery::{DEVICE_TYPE, DiscoveryDescriptor, RootDevice},
    models::{LineupCreateRequest, LineupUpdateRequest},
};

async fn create_test_collection() -> ApiCollection {
    let database = Database::new(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
    })
    .await
    .expect("Failed to open in-memory database");
    database.migrate().await.expect("Failed to run migrations");
    ApiCollection::from_database(&database)
}

#[tokio::test]
async fn stored_lineup_renders_stable_discovery_documents() {
    let collection = create_test_collection().await;
    let request = LineupCreateRequest::from_defaults(
        "telly",
        "10.0.0.5",
        "2b6c9a3e-7d41-4f0e-9a55-0c1d2e3f4a5b",
        &LineupDefaults::default(),
    );
    let lineup = collection.lineups().insert(request).await.unwrap();

    let descriptor = DiscoveryDescriptor::from_lineup(&lineup);
    assert_eq!(descriptor.base_url, "http://10.0.0.5:6077");
    assert_eq!(descriptor.lineup_url, "http://10.0.0.5:6077/lineup.json");

    let first = descriptor.to_document();
    let second = DiscoveryDescriptor::from_lineup(&lineup).to_document();
    assert_eq!(first, second);
    assert_eq!(first.to_xml().unwrap(), second.to_xml().unwrap());
    assert_eq!(
        descriptor.to_discover_json().unwrap(),
        DiscoveryDescriptor::from_lineup(&lineup)
            .to_discover_json()
            .unwrap()
    );

    assert_eq!(first.device.device_type, DEVICE_TYPE);
    assert_eq!(first.device.friendly_name, "telly");
    assert_eq!(first.device.udn, lineup.device_uuid);
    assert_eq!(first.device.serial_number, lineup.device_id);
}

#[tokio::test]
async fn discovery_follows_address_changes() {
    let collection = create_test_collection().await;
    let repo = collection.lineups();

    let lineup = repo
        .insert(LineupCreateRequest::from_defaults(
            "Den",
            "10.0.0.5",
            "uuid-den",
            &LineupDefaults::default(),
        ))
        .await
        .unwrap();

    let moved = repo
        .update(
            lineup.id,
            LineupUpdateRequest {
                discovery_address: Some("203.0.113.9".to_string()),
                port: Some(5004),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let document = RootDevice::from(&moved);
    assert_eq!(document.url_base, "http://203.0.113.9:5004");
    assert_eq!(moved.listen_address, lineup.listen_address);
}
