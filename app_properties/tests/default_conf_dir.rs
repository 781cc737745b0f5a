//! Behaviour of the default resolver, which reads `APP_CONF_DIR`.

use anyhow::{Result, anyhow, ensure};
use app_properties::{
    CONF_DIR_ENV, FailureKind, Properties, ResourceOrigin, ResourceResolver, resolve_file,
};
use serial_test::serial;
use test_helpers::conf_tree::ConfTree;
use test_helpers::env as test_env;

#[test]
#[serial]
fn resolve_file_reads_app_conf_dir_per_call() -> Result<()> {
    let first = ConfTree::new()?.with_file("app-jaas.properties", "tree=first")?;
    let second = ConfTree::new()?.with_file("app-jaas.properties", "tree=second")?;
    let props = Properties::new();

    let guard = test_env::set_var(CONF_DIR_ENV, first.root());
    let text = resolve_file(&props, "jaas.properties.file", Some("app-jaas.properties"))?
        .read_text()?;
    ensure!(text == "tree=first", "unexpected content {text:?}");

    let override_guard = test_env::set_var(CONF_DIR_ENV, second.root());
    let stream = resolve_file(&props, "jaas.properties.file", Some("app-jaas.properties"))?;
    ensure!(
        stream.origin() == &ResourceOrigin::ConfDir(second.path("app-jaas.properties")),
        "unexpected origin {}",
        stream.origin()
    );
    drop(override_guard);
    drop(guard);
    Ok(())
}

#[test]
#[serial]
fn unset_app_conf_dir_is_reported() -> Result<()> {
    let _guard = test_env::remove_var(CONF_DIR_ENV);
    let result = resolve_file(
        &Properties::new(),
        "jaas.properties.file",
        Some("nowhere.properties"),
    );
    let err = match result {
        Ok(stream) => return Err(anyhow!("unexpectedly resolved {}", stream.origin())),
        Err(err) => err,
    };
    let failure = err
        .as_resolution()
        .ok_or_else(|| anyhow!("expected resolution failure, got {err}"))?;
    ensure!(failure.kind == FailureKind::DefaultFileNotFound);
    ensure!(failure.conf_dir.is_none());
    ensure!(
        err.to_string().contains("no configuration directory set"),
        "unexpected message {err}"
    );
    Ok(())
}

#[test]
#[serial]
fn default_properties_load_from_app_conf_dir() -> Result<()> {
    let tree = ConfTree::new()?.with_file(
        "application.properties",
        "app.source = conf\napp.port = 21000",
    )?;
    let _guard = test_env::set_var(CONF_DIR_ENV, tree.root());
    let props = ResourceResolver::default().load_default_properties()?;
    ensure!(props.get("app.source") == Some("conf"));
    let port: u16 = props.to_figment().extract_inner("app.port")?;
    ensure!(port == 21000);
    Ok(())
}

#[test]
#[serial]
fn directory_in_app_conf_dir_is_not_a_resource() -> Result<()> {
    let tree = ConfTree::new()?;
    tree.mkdir("app-jaas.properties")?;
    let _guard = test_env::set_var(CONF_DIR_ENV, tree.root());
    let result = resolve_file(
        &Properties::new(),
        "jaas.properties.file",
        Some("app-jaas.properties"),
    );
    let err = match result {
        Ok(stream) => return Err(anyhow!("unexpectedly resolved {}", stream.origin())),
        Err(err) => err,
    };
    let failure = err
        .as_resolution()
        .ok_or_else(|| anyhow!("expected resolution failure, got {err}"))?;
    ensure!(failure.kind == FailureKind::DefaultFileNotFound);
    ensure!(failure.conf_dir.as_deref() == Some(tree.root()));
    Ok(())
}
