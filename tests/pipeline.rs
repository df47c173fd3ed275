//! End-to-end runs through real files.

use listing_matcher::config::{AppConfig, MatchPolicy};
use listing_matcher::model::{AppError, InputError};
use listing_matcher::pipeline::run;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

const PRODUCTS: &str = r#"{"product_name":"Acme PL170","manufacturer":"Acme","model":"PL 170"}
{"product_name":"Sony_Cyber-shot_DSC-W310","manufacturer":"Sony","model":"DSC-W310","family":"Cyber-shot","announced-date":"2010-01-06T19:00:00.000-05:00"}
{"product_name":"Canon_EOS_7D","manufacturer":"Canon","model":"7D","family":"EOS"}
{"product_name":"Nikon_D3","manufacturer":"Nikon","model":"D3"}
"#;

const LISTING_ACME: &str = r#"{"title":"Acme PL-170 digital camera","manufacturer":"Acme Inc.","currency":"CAD","price":"149.00"}"#;
const LISTING_SONY: &str = r#"{"title":"Sony Cyber-shot DSC-W310 12.1MP Digital Camera (Black)","manufacturer":"Sony","currency":"USD","price":"99.99"}"#;
const LISTING_CANON: &str = r#"{"title":"Canon EOS 7D 18MP Digital SLR Camera (Body Only)","manufacturer":"Canon Canada","currency":"CAD","price": 1449.5}"#;
const LISTING_NOISE: &str = r#"{"title":"Universal lens cap 52mm","manufacturer":"Generic","currency":"EUR","price":"4.99"}"#;
const LISTING_WRONG_MAKER: &str = r#"{"title":"Battery for Canon EOS 7D","manufacturer":"PowerMax","currency":"USD","price":"19.99"}"#;

fn write_inputs(dir: &Path, listings: &[&str]) -> AppConfig {
    let products_file = dir.join("products.txt");
    let listings_file = dir.join("listings.txt");
    fs::write(&products_file, PRODUCTS).unwrap();
    fs::write(&listings_file, listings.join("\n") + "\n").unwrap();
    AppConfig {
        products_file,
        listings_file,
        output_file: dir.join("results.txt"),
        ..AppConfig::default()
    }
}

fn read_output(path: &Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn all_listings() -> Vec<&'static str> {
    vec![LISTING_ACME, LISTING_SONY, LISTING_CANON, LISTING_NOISE, LISTING_WRONG_MAKER]
}

#[tokio::test]
async fn groups_listings_under_products() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), &all_listings());

    let summary = run(&config).await.unwrap();

    let output = read_output(&config.output_file);
    assert_eq!(output.len(), 4);
    assert_eq!(
        output[0],
        json!({
            "product_name": "Acme PL170",
            "listings": [serde_json::from_str::<Value>(LISTING_ACME).unwrap()],
        })
    );
    assert_eq!(output[1]["product_name"], "Sony_Cyber-shot_DSC-W310");
    assert_eq!(output[1]["listings"].as_array().unwrap().len(), 1);
    assert_eq!(output[2]["product_name"], "Canon_EOS_7D");
    assert_eq!(output[2]["listings"][0]["price"], json!(1449.5));
    assert_eq!(output[3], json!({"product_name": "Nikon_D3", "listings": []}));

    assert_eq!(summary.matched_listings, 3);
    assert_eq!(summary.unmatched_listings, 2);
    assert_eq!(summary.empty_products, 1);
}

#[tokio::test]
async fn matched_listings_are_written_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), &all_listings());

    run(&config).await.unwrap();

    let text = fs::read_to_string(&config.output_file).unwrap();
    for listing in [LISTING_ACME, LISTING_SONY, LISTING_CANON] {
        assert!(text.contains(listing), "missing verbatim record {listing}");
    }
    assert!(!text.contains("title_lower"));
    assert!(!text.contains("matched"));
}

#[tokio::test]
async fn unmatched_listings_are_written_when_requested() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_inputs(dir.path(), &all_listings());
    config.unmatched_file = Some(dir.path().join("unmatched.txt"));

    run(&config).await.unwrap();

    let unmatched = fs::read_to_string(dir.path().join("unmatched.txt")).unwrap();
    assert_eq!(unmatched, format!("{LISTING_NOISE}\n{LISTING_WRONG_MAKER}\n"));
}

#[tokio::test]
async fn worker_count_does_not_change_output() {
    for policy in [MatchPolicy::All, MatchPolicy::First, MatchPolicy::Last] {
        let mut outputs = Vec::new();
        for workers in [1, 2, 5] {
            let dir = tempfile::tempdir().unwrap();
            let listings: Vec<&str> = all_listings().into_iter().cycle().take(23).collect();
            let mut config = write_inputs(dir.path(), &listings);
            config.matching.policy = policy;
            config.matching.workers = workers;

            run(&config).await.unwrap();
            outputs.push(fs::read_to_string(&config.output_file).unwrap());
        }
        assert!(outputs.windows(2).all(|w| w[0] == w[1]), "policy {policy:?}");
    }
}

#[tokio::test]
async fn missing_listings_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = write_inputs(dir.path(), &all_listings());
    config.listings_file = dir.path().join("nope.txt");

    let err = run(&config).await.unwrap_err();
    assert!(matches!(err, AppError::Input(InputError::Unavailable { .. })));
    assert!(!config.output_file.exists());
}

#[tokio::test]
async fn missing_title_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_inputs(dir.path(), &[LISTING_ACME, r#"{"manufacturer":"Acme"}"#]);

    let err = run(&config).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Input(InputError::MissingField { line: 2, field: "title", .. })
    ));
    assert!(!config.output_file.exists());
}
