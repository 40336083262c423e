//! Cache lifetime and failure handling, end to end.

#[path = "../common/mod.rs"]
mod common;
use common::{TestAuthority, TestResolverBuilder};
use std::time::Duration;

#[tokio::test]
async fn test_cached_answer_survives_zone_change_within_ttl() {
    let root = TestAuthority::start("example.com,1.2.3.7,A\n").await;
    let resolver = TestResolverBuilder::new(root.addr())
        .with_ttl(Duration::from_secs(30))
        .start()
        .await;
    let client = resolver.client();

    assert_eq!(client.query_raw("example.com").await, "example.com,1.2.3.7,A");
    root.load("example.com,9.9.9.9,A\n");

    assert_eq!(client.query_raw("example.com").await, "example.com,1.2.3.7,A");
    assert_eq!(resolver.metrics.snapshot().walks, 1);
}

#[tokio::test]
async fn test_expired_entry_triggers_fresh_walk() {
    let root = TestAuthority::start("example.com,1.2.3.7,A\n").await;
    let resolver = TestResolverBuilder::new(root.addr())
        .with_ttl(Duration::from_millis(100))
        .start()
        .await;
    let client = resolver.client();

    assert_eq!(client.query_raw("example.com").await, "example.com,1.2.3.7,A");
    root.load("example.com,9.9.9.9,A\n");
    tokio::time::sleep(Duration::from_millis(250)).await;

    assert_eq!(client.query_raw("example.com").await, "example.com,9.9.9.9,A");
    assert_eq!(resolver.metrics.snapshot().walks, 2);
    assert_eq!(resolver.cache.metrics().snapshot().expirations, 1);
}

#[tokio::test]
async fn test_negative_answers_are_not_cached() {
    let root = TestAuthority::start("example.com,1.2.3.7,A\n").await;
    let resolver = TestResolverBuilder::new(root.addr()).start().await;
    let client = resolver.client();

    assert_eq!(client.query_raw("late.example").await, "non-existent domain");
    root.load("example.com,1.2.3.7,A\nlate.example,4.4.4.4,A\n");

    assert_eq!(client.query_raw("late.example").await, "late.example,4.4.4.4,A");
    assert_eq!(resolver.metrics.snapshot().walks, 2);
}

#[tokio::test]
async fn test_delegation_cycle_ends_negative() {
    let first = TestAuthority::start("").await;
    let second = TestAuthority::start(&format!(".loop.test,{},NS\n", first.endpoint())).await;
    first.load(&format!(".loop.test,{},NS\n", second.endpoint()));
    let resolver = TestResolverBuilder::new(first.addr()).start().await;

    let reply = resolver.client().query_raw("a.loop.test").await;

    assert_eq!(reply, "non-existent domain");
    let stats = resolver.metrics.snapshot();
    assert_eq!(stats.delegation_loops, 1);
    assert!(resolver.cache.is_empty());
}

#[tokio::test]
async fn test_long_chain_hits_hop_limit() {
    let leaf = TestAuthority::start("x.deep.test,7.7.7.7,A\n").await;
    let middle = TestAuthority::start(&format!(".deep.test,{},NS\n", leaf.endpoint())).await;
    let root = TestAuthority::start(&format!(".test,{},NS\n", middle.endpoint())).await;

    let limited = TestResolverBuilder::new(root.addr())
        .with_max_hops(1)
        .start()
        .await;
    assert_eq!(limited.client().query_raw("x.deep.test").await, "non-existent domain");

    let unlimited = TestResolverBuilder::new(root.addr()).start().await;
    assert_eq!(unlimited.client().query_raw("x.deep.test").await, "x.deep.test,7.7.7.7,A");
}

#[tokio::test]
async fn test_unreachable_authority_ends_negative() {
    let gone = TestAuthority::start("").await;
    let gone_endpoint = gone.endpoint();
    drop(gone);
    tokio::time::sleep(Duration::from_millis(50)).await;

    let root = TestAuthority::start(&format!(".co.il,{gone_endpoint},NS\n")).await;
    let resolver = TestResolverBuilder::new(root.addr()).start().await;

    let reply = resolver.client().query_raw("www.google.co.il").await;

    assert_eq!(reply, "non-existent domain");
    assert_eq!(resolver.metrics.snapshot().upstream_timeouts, 1);
}
