// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! End-to-end processor scenarios driven through the host adapter.

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use crate::processors::fan_out_by_attribute::{
    FanOutByAttribute, REL_DERIVED_SUCCESS, REL_FAILURE, REL_ORIGINAL,
};
use crate::runner::FlowRunner;

fn fan_out_runner() -> FlowRunner {
    FlowRunner::new(
        Arc::new(FanOutByAttribute::new()),
        HashMap::from([
            ("source_attribute".to_string(), "list_of_things".to_string()),
            ("output_attribute".to_string(), "thing".to_string()),
        ]),
    )
    .expect("required properties are configured")
}

fn attributes(list_value: &str) -> HashMap<String, String> {
    HashMap::from([("list_of_things".to_string(), list_value.to_string())])
}

#[tokio::test]
async fn well_formed_list_fans_out() {
    let mut runner = fan_out_runner();
    runner.enqueue(b"some content".to_vec(), attributes("lions,tigers,bears"));
    runner.run().await;

    assert_eq!(runner.transfer_count(REL_DERIVED_SUCCESS), 3);
    assert_eq!(runner.transfer_count(REL_FAILURE), 0);
    assert_eq!(runner.transfer_count(REL_ORIGINAL), 1);

    let expected: HashSet<&str> = HashSet::from(["lions", "tigers", "bears"]);
    let mut actual = HashSet::new();
    for unit in runner.transferred(REL_DERIVED_SUCCESS) {
        assert_eq!(unit.attribute("list_of_things"), None);
        assert_eq!(unit.content(), b"some content");
        actual.insert(unit.attribute("thing").expect("thing attribute exists"));
    }
    assert_eq!(actual, expected);

    let original = runner.transferred(REL_ORIGINAL)[0];
    assert_eq!(
        original.attribute("list_of_things"),
        Some("lions,tigers,bears")
    );
    assert_eq!(original.attribute("thing"), None);
    assert_eq!(original.content(), b"some content");
}

#[tokio::test]
async fn malformed_quoting_routes_to_failure() {
    let mut runner = fan_out_runner();
    runner.enqueue(
        b"some content".to_vec(),
        attributes("\"lions,\"tigers\",\"bears\""),
    );
    runner.run().await;

    assert_eq!(runner.transfer_count(REL_DERIVED_SUCCESS), 0);
    assert_eq!(runner.transfer_count(REL_ORIGINAL), 0);
    assert_eq!(runner.transfer_count(REL_FAILURE), 1);

    let failed = runner.transferred(REL_FAILURE)[0];
    assert_eq!(
        failed.attribute("list_of_things"),
        Some("\"lions,\"tigers\",\"bears\"")
    );
    assert_eq!(failed.attribute("thing"), None);
    assert_eq!(failed.content(), b"some content");
}

#[tokio::test]
async fn empty_list_value_routes_original_with_zero_copies() {
    let mut runner = fan_out_runner();
    runner.enqueue(b"some content".to_vec(), attributes(""));
    runner.run().await;

    assert_eq!(runner.transfer_count(REL_DERIVED_SUCCESS), 0);
    assert_eq!(runner.transfer_count(REL_ORIGINAL), 1);
    assert_eq!(runner.transfer_count(REL_FAILURE), 0);
}

#[tokio::test]
async fn other_attributes_survive_on_derived_units() {
    let mut runner = fan_out_runner();
    let mut attrs = attributes("a,b");
    attrs.insert("kept".to_string(), "yes".to_string());
    runner.enqueue(b"content".to_vec(), attrs);
    runner.run().await;

    for unit in runner.transferred(REL_DERIVED_SUCCESS) {
        assert_eq!(unit.attribute("kept"), Some("yes"));
        assert_eq!(unit.attributes().len(), 2); // kept + thing
    }
}

#[tokio::test]
async fn processing_identical_units_is_idempotent() {
    let run = |value: &'static str| async move {
        let mut runner = fan_out_runner();
        runner.enqueue(b"same bytes".to_vec(), attributes(value));
        runner.run().await;
        let outcomes: Vec<(String, Vec<(String, String)>)> = runner
            .transmissions()
            .iter()
            .map(|t| {
                let mut attrs: Vec<(String, String)> = t
                    .unit
                    .attributes()
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                attrs.sort();
                (t.relationship.name.to_string(), attrs)
            })
            .collect();
        outcomes
    };

    assert_eq!(
        run("lions,tigers,bears").await,
        run("lions,tigers,bears").await
    );
    assert_eq!(
        run("\"lions,\"tigers\"").await,
        run("\"lions,\"tigers\"").await
    );
}

#[tokio::test]
async fn each_unit_resolves_its_own_routing() {
    // One malformed unit between two well-formed ones must not disturb them.
    let mut runner = fan_out_runner();
    runner.enqueue(b"1".to_vec(), attributes("a,b"));
    runner.enqueue(b"2".to_vec(), attributes("\"broken"));
    runner.enqueue(b"3".to_vec(), attributes("c"));
    runner.run().await;

    assert_eq!(runner.transfer_count(REL_DERIVED_SUCCESS), 3);
    assert_eq!(runner.transfer_count(REL_ORIGINAL), 2);
    assert_eq!(runner.transfer_count(REL_FAILURE), 1);
    assert_eq!(runner.transferred(REL_FAILURE)[0].content(), b"2");
}
