//! Unit tests for the properties store.

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use serde::Deserialize;

use super::Properties;
use crate::PropertiesError;

#[fixture]
fn app_props() -> Properties {
    [
        ("app.home", "/opt/app"),
        ("app.conf", "${app.home}/conf"),
        ("app.jaas", "${app.conf}/jaas.properties"),
        ("app.rest.address", "http://localhost:21000"),
        ("app.blank", "   "),
    ]
    .into_iter()
    .collect()
}

#[rstest]
#[case::present("app.home", Some("/opt/app"))]
#[case::blank("app.blank", None)]
#[case::absent("app.missing", None)]
fn non_empty_lookup_treats_blank_as_absent(
    app_props: Properties,
    #[case] key: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(app_props.get_non_empty(key), expected);
}

#[rstest]
fn set_and_clear_return_previous_values(mut app_props: Properties) {
    assert_eq!(
        app_props.set_property("app.home", "/srv/app"),
        Some(String::from("/opt/app"))
    );
    assert_eq!(app_props.get("app.home"), Some("/srv/app"));
    assert_eq!(
        app_props.clear_property("app.home"),
        Some(String::from("/srv/app"))
    );
    assert!(!app_props.contains_key("app.home"));
    assert_eq!(app_props.clear_property("app.home"), None);
}

#[rstest]
fn iteration_is_ordered_by_key(app_props: Properties) {
    let keys: Vec<&str> = app_props.iter().map(|(key, _)| key).collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
    assert_eq!(app_props.len(), 5);
}

#[test]
fn parse_keeps_last_duplicate() -> Result<()> {
    let props: Properties = "a=1\na=2\n".parse()?;
    ensure!(props.get("a") == Some("2"), "expected last value to win");
    ensure!(props.len() == 1, "duplicate key stored twice");
    Ok(())
}

#[rstest]
fn interpolation_expands_nested_references(app_props: Properties) -> Result<()> {
    let value = app_props.get_interpolated("app.jaas")?;
    ensure!(
        value.as_deref() == Some("/opt/app/conf/jaas.properties"),
        "unexpected expansion {value:?}"
    );
    ensure!(app_props.get_interpolated("app.missing")?.is_none());
    Ok(())
}

#[rstest]
#[case::unterminated("prefix ${app.home", "prefix ${app.home")]
#[case::unknown("${nope}/x", "${nope}/x")]
#[case::repeated("${app.home}:${app.home}", "/opt/app:/opt/app")]
#[case::empty_name("${}", "${}")]
fn interpolation_edge_cases(
    mut app_props: Properties,
    #[case] raw: &str,
    #[case] expected: &str,
) -> Result<()> {
    app_props.set_property("probe", raw);
    let value = app_props.get_interpolated("probe")?;
    ensure!(
        value.as_deref() == Some(expected),
        "unexpected expansion {value:?}"
    );
    Ok(())
}

#[test]
fn interpolation_cycles_are_errors() -> Result<()> {
    let props = Properties::parse("a=${b}\nb=x${c}\nc=${a}")?;
    let err = props
        .get_interpolated("a")
        .err()
        .ok_or_else(|| anyhow!("expected cycle error"))?;
    match err.as_ref() {
        PropertiesError::Interpolation { key, message } => {
            ensure!(key == "a", "unexpected key {key}");
            ensure!(
                message.contains("a -> b -> c -> a"),
                "unexpected message {message}"
            );
        }
        other => return Err(anyhow!("unexpected error {other:?}")),
    }
    Ok(())
}

/// `a0 = x`, and each `aN` references `a(N-1)` twice.
fn doubling_chain(levels: usize) -> Properties {
    let mut props: Properties = [("a0", "x")].into_iter().collect();
    for level in 1..=levels {
        let previous = format!("${{a{}}}", level - 1);
        props.set_property(format!("a{level}"), format!("{previous}{previous}"));
    }
    props
}

#[test]
fn shared_references_expand_once_per_call() -> Result<()> {
    let props = doubling_chain(16);
    let value = props
        .get_interpolated("a16")?
        .ok_or_else(|| anyhow!("a16 missing"))?;
    ensure!(value.len() == 1 << 16, "unexpected length {}", value.len());
    ensure!(value.bytes().all(|byte| byte == b'x'));
    Ok(())
}

#[test]
fn oversized_expansion_is_an_error() -> Result<()> {
    let props = doubling_chain(64);
    let err = props
        .get_interpolated("a64")
        .err()
        .ok_or_else(|| anyhow!("expected size error"))?;
    match err.as_ref() {
        PropertiesError::Interpolation { key, message } => {
            ensure!(key == "a64", "unexpected key {key}");
            ensure!(
                message.contains(&super::interpolate::MAX_EXPANDED_LEN.to_string()),
                "unexpected message {message}"
            );
        }
        other => return Err(anyhow!("unexpected error {other:?}")),
    }
    Ok(())
}

#[rstest]
#[case::nested("app", 5)]
#[case::trailing_dot("app.", 5)]
#[case::deeper("app.rest", 1)]
#[case::partial_segment("ap", 0)]
#[case::whole_store("", 5)]
fn subset_strips_prefix(app_props: Properties, #[case] prefix: &str, #[case] count: usize) {
    assert_eq!(app_props.subset(prefix).len(), count);
}

#[rstest]
fn subset_keys_are_relative(app_props: Properties) {
    let rest = app_props.subset("app.rest");
    assert_eq!(rest.get("address"), Some("http://localhost:21000"));
}

#[derive(Debug, Deserialize, PartialEq)]
struct Graph {
    storage: Storage,
    cache: bool,
    name: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Storage {
    backend: String,
    port: u16,
}

#[test]
fn extract_builds_nested_structures() -> Result<()> {
    let props = Properties::parse(
        "graph.storage.backend=hbase\n\
         graph.storage.port=2181\n\
         graph.cache=true\n\
         graph.name=primary\n",
    )?;
    let graph: Graph = props.subset("graph").extract()?;
    ensure!(
        graph
            == Graph {
                storage: Storage {
                    backend: String::from("hbase"),
                    port: 2181,
                },
                cache: true,
                name: String::from("primary"),
            },
        "unexpected extraction {graph:?}"
    );
    Ok(())
}

#[test]
fn extract_reports_type_mismatches() -> Result<()> {
    let props = Properties::parse("storage.backend=hbase\nstorage.port=not-a-port")?;
    let err = props
        .extract::<Graph>()
        .err()
        .ok_or_else(|| anyhow!("expected extraction to fail"))?;
    ensure!(
        matches!(err.as_ref(), PropertiesError::Extract(_)),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[test]
fn nested_keys_replace_scalar_prefixes() -> Result<()> {
    let props = Properties::parse("storage=plain\nstorage.backend=hbase\nstorage.port=1")?;
    let figment = props.to_figment();
    let storage: Storage = figment.extract_inner("storage")?;
    ensure!(storage.backend == "hbase" && storage.port == 1);
    Ok(())
}
