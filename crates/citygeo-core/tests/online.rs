use async_trait::async_trait;
use citygeo_core::{
    GeoError, GeocodeRequest, GeocodeTransport, LocationService, RemoteConfig, RemoteResolver,
    StaticIndex,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Canned transport that counts calls and remembers the last request.
struct FakeTransport {
    reply: std::result::Result<String, u16>,
    calls: AtomicUsize,
    last: Mutex<Option<(String, usize, String)>>,
}

impl FakeTransport {
    fn ok(body: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(body.to_string()),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    fn raw(body: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(body.to_string()),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    fn status(code: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(code),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GeocodeTransport for FakeTransport {
    async fn fetch(&self, request: GeocodeRequest<'_>) -> citygeo_core::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((
            request.query.to_string(),
            request.limit,
            request.lang.to_string(),
        ));
        match &self.reply {
            Ok(body) => Ok(body.clone()),
            Err(code) => Err(GeoError::Status(*code)),
        }
    }
}

fn paris_body() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [2.3483915, 48.8534951]},
                "properties": {
                    "osm_type": "R", "osm_id": 7444, "type": "city",
                    "name": "Paris", "country": "France", "countrycode": "FR"
                }
            },
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [-95.555513, 33.6617962]},
                "properties": {
                    "osm_type": "N", "osm_id": 115357, "type": "town",
                    "name": "Paris", "country": "United States", "countrycode": "US"
                }
            },
            {
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [2.29, 48.85]},
                "properties": {
                    "osm_type": "W", "osm_id": 1, "type": "street",
                    "name": "Rue de Paris", "country": "France", "countrycode": "FR"
                }
            }
        ]
    })
}

fn resolver(transport: Arc<FakeTransport>) -> RemoteResolver {
    RemoteResolver::with_transport(RemoteConfig::default(), transport)
}

#[tokio::test]
async fn single_character_query_never_reaches_the_network() {
    let transport = FakeTransport::ok(paris_body());
    let r = resolver(transport.clone());

    assert!(r.search_online("a", None).await.is_empty());
    assert!(r.search_online("  p  ", None).await.is_empty());
    assert_eq!(transport.calls(), 0);

    r.search_online("ab", None).await;
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn cache_hit_avoids_network_until_cleared() {
    let transport = FakeTransport::ok(paris_body());
    let r = resolver(transport.clone());

    let first = r.search_online("paris", None).await;
    let second = r.search_online("paris", None).await;
    assert_eq!(transport.calls(), 1);
    assert_eq!(first, second);

    // same normalized key
    r.search_online("  PARIS ", None).await;
    assert_eq!(transport.calls(), 1);

    r.clear_cache();
    r.search_online("paris", None).await;
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn expired_entries_trigger_a_fresh_request() {
    let transport = FakeTransport::ok(paris_body());
    let config = RemoteConfig::default().with_cache_ttl(Duration::ZERO);
    let r = RemoteResolver::with_transport(config, transport.clone());

    r.search_online("paris", None).await;
    r.search_online("paris", None).await;
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn raw_query_limit_and_lang_are_forwarded() {
    let transport = FakeTransport::ok(paris_body());
    let r = resolver(transport.clone());

    r.search_online(" Paris", Some(5)).await;
    let last = transport.last.lock().unwrap().clone();
    assert_eq!(last, Some((" Paris".to_string(), 5, "en".to_string())));

    let r = resolver(transport.clone());
    r.search_online("Lyon", None).await;
    let last = transport.last.lock().unwrap().clone();
    assert_eq!(last.map(|l| l.1), Some(10));
}

#[tokio::test]
async fn coordinates_are_read_as_longitude_latitude() {
    let transport = FakeTransport::ok(json!({
        "features": [{
            "geometry": {"coordinates": [35.0, 32.0]},
            "properties": {"type": "city", "name": "Somewhere"}
        }]
    }));
    let out = resolver(transport).search_online("somewhere", None).await;

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].longitude, 35.0);
    assert_eq!(out[0].latitude, 32.0);
    assert_eq!(out[0].timezone, "Etc/GMT-2");
    assert_eq!(out[0].country, "Unknown");
}

#[tokio::test]
async fn only_settlements_are_returned() {
    let out = resolver(FakeTransport::ok(paris_body()))
        .search_online("paris", None)
        .await;

    let names: Vec<(&str, &str)> = out
        .iter()
        .map(|c| (c.name.as_str(), c.country_code.as_str()))
        .collect();
    assert_eq!(names, vec![("Paris", "FR"), ("Paris", "US")]);
    assert_eq!(out[0].id, "photon-R7444");
    assert_eq!(out[0].timezone, "Europe/Paris");
    assert_eq!(out[1].timezone, "America/New_York");
    assert!(out.iter().all(|c| c.population.is_none()));
}

#[tokio::test]
async fn limit_applies_to_cached_results() {
    let transport = FakeTransport::ok(paris_body());
    let r = resolver(transport.clone());

    assert_eq!(r.search_online("paris", Some(1)).await.len(), 1);
    assert_eq!(r.search_online("paris", Some(1)).await.len(), 1);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn cache_key_ignores_the_limit() {
    let transport = FakeTransport::ok(paris_body());
    let r = resolver(transport.clone());

    // the first fetch asks the provider for one result; the cache keeps what came back
    assert_eq!(r.search_online("paris", Some(1)).await.len(), 1);
    assert_eq!(transport.last.lock().unwrap().as_ref().map(|l| l.1), Some(1));

    // the fake ignores the requested limit, so both settlements were cached
    assert_eq!(r.search_online("paris", None).await.len(), 2);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn provider_failure_degrades_to_empty() {
    let r = resolver(FakeTransport::status(503));
    assert!(r.search_online("paris", None).await.is_empty());

    let err = r.try_search_online("paris", None).await.unwrap_err();
    assert!(matches!(err, GeoError::Status(503)));
}

#[tokio::test]
async fn malformed_bodies_degrade_to_empty() {
    for body in ["not json", r#"{"type":"FeatureCollection"}"#, r#"{"features":"nope"}"#] {
        let transport = FakeTransport::raw(body);
        let r = resolver(transport.clone());
        assert!(r.search_online("paris", None).await.is_empty(), "{body}");
        assert!(r.try_search_online("paris", None).await.is_err(), "{body}");
        // failures are not cached
        assert_eq!(transport.calls(), 2);
    }
}

#[tokio::test]
async fn service_exposes_both_strategies() {
    let index = StaticIndex::bundled().unwrap();
    let transport = FakeTransport::ok(paris_body());
    let service = LocationService::new(index, resolver(transport.clone()));

    assert_eq!(service.search_cities("paris", Some(1))[0].id, "fr-paris");
    assert_eq!(service.get_all_cities().len(), index.len());

    assert_eq!(service.search_online("paris", None).await.len(), 2);
    service.search_online("paris", None).await;
    assert_eq!(transport.calls(), 1);

    service.clear_cache();
    service.search_online("paris", None).await;
    assert_eq!(transport.calls(), 2);
}
