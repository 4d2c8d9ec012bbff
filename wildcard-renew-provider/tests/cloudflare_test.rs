//! Cloudflare provider tests against a mock API server

use serde_json::json;
use wildcard_renew_provider::{
    CloudflareProvider, CreateDnsRecordRequest, DnsProvider, DnsRecordType, DomainStatus,
    ProviderError, RecordQueryParams,
};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn provider(server: &MockServer) -> CloudflareProvider {
    CloudflareProvider::with_base_url(TOKEN.to_string(), server.uri())
        .expect("provider should build")
}

fn ns_record_json(id: &str, content: &str) -> serde_json::Value {
    json!({
        "id": id,
        "type": "NS",
        "name": "example.com",
        "content": content,
        "ttl": 86400,
        "proxied": false
    })
}

#[tokio::test]
async fn find_zones_by_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zones"))
        .and(query_param("name", "example.com"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "result": [{"id": "zone-1", "name": "example.com", "status": "active"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let zones = provider(&server)
        .find_zones("example.com")
        .await
        .expect("lookup should succeed");

    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].id, "zone-1");
    assert_eq!(zones[0].status, DomainStatus::Active);
}

#[tokio::test]
async fn find_zones_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "result": []
        })))
        .mount(&server)
        .await;

    let zones = provider(&server)
        .find_zones("missing.example")
        .await
        .expect("empty lookup is not an error");

    assert!(zones.is_empty());
}

#[tokio::test]
async fn auth_failure_maps_to_invalid_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zones"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "success": false,
            "errors": [{"code": 10000, "message": "Authentication error"}],
            "result": null
        })))
        .mount(&server)
        .await;

    let err = provider(&server)
        .find_zones("example.com")
        .await
        .expect_err("lookup should fail");

    assert!(
        matches!(&err, ProviderError::InvalidCredentials { raw_message: Some(m), .. } if m == "Authentication error"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn non_json_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .find_zones("example.com")
        .await
        .expect_err("lookup should fail");

    assert!(matches!(err, ProviderError::ParseError { .. }), "{err:?}");
}

#[tokio::test]
async fn list_ns_records_follows_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zones/zone-1/dns_records"))
        .and(query_param("type", "NS"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "result": [ns_record_json("rec-1", "ns1.example.com")],
            "result_info": {"page": 1, "per_page": 100, "total_pages": 2, "total_count": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/zones/zone-1/dns_records"))
        .and(query_param("type", "NS"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "result": [ns_record_json("rec-2", "ns2.example.com")],
            "result_info": {"page": 2, "per_page": 100, "total_pages": 2, "total_count": 2}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = provider(&server)
        .list_records("zone-1", &RecordQueryParams::of_type(DnsRecordType::Ns))
        .await
        .expect("listing should succeed");

    let contents: Vec<_> = records.iter().map(|r| r.content.as_str()).collect();
    assert_eq!(contents, ["ns1.example.com", "ns2.example.com"]);
    assert!(records.iter().all(|r| r.zone_id == "zone-1"));
    assert!(records.iter().all(|r| r.record_type == DnsRecordType::Ns));
    assert_eq!(
        records[1].raw.as_ref(),
        Some(&ns_record_json("rec-2", "ns2.example.com"))
    );
}

#[tokio::test]
async fn delete_record_hits_record_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/zones/zone-1/dns_records/rec-1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "result": {"id": "rec-1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    provider(&server)
        .delete_record("rec-1", "zone-1")
        .await
        .expect("delete should succeed");
}

#[tokio::test]
async fn delete_missing_record_reports_id() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "errors": [{"code": 81044, "message": "Record does not exist."}],
            "result": null
        })))
        .mount(&server)
        .await;

    let err = provider(&server)
        .delete_record("rec-9", "zone-1")
        .await
        .expect_err("delete should fail");

    assert!(
        matches!(&err, ProviderError::RecordNotFound { record_id, .. } if record_id == "rec-9"),
        "{err:?}"
    );
}

#[tokio::test]
async fn create_record_sends_unproxied_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/zones/zone-1/dns_records"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "type": "NS",
            "name": "example.com",
            "content": "ns1.example.com",
            "proxied": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "result": ns_record_json("rec-new", "ns1.example.com")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let record = provider(&server)
        .create_record(&CreateDnsRecordRequest {
            zone_id: "zone-1".to_string(),
            record_type: DnsRecordType::Ns,
            name: "example.com".to_string(),
            content: "ns1.example.com".to_string(),
            ttl: None,
            proxied: Some(false),
        })
        .await
        .expect("create should succeed");

    assert_eq!(record.id, "rec-new");
    assert_eq!(record.proxied, Some(false));
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "5"))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider(&server)
        .create_record(&CreateDnsRecordRequest {
            zone_id: "zone-1".to_string(),
            record_type: DnsRecordType::Ns,
            name: "example.com".to_string(),
            content: "ns1.example.com".to_string(),
            ttl: None,
            proxied: Some(false),
        })
        .await
        .expect_err("create should fail");

    assert!(
        matches!(err, ProviderError::RateLimited { retry_after: Some(5), .. }),
        "{err:?}"
    );
}
