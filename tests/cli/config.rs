use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_config_custom_receiver() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".callauditrc.json",
        r#"{
         "receiver": "sessionStore",
         "methods": ["open", "close"],
         "requiredMarker": "traceID:"
     }"#,
    )?;
    test.write_file(
        "macfuseGui/Store.swift",
        "sessionStore.open(path, traceID: t)\nsessionStore.close(path)\nmountManager.connect(a)\n",
    )?;

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    OK: macfuseGui/Store.swift:1 open (path, traceID: t)
    MISSING traceID: macfuseGui/Store.swift:2 close (path)

    ----- stderr -----

    FAIL: 1 callsite(s) missing explicit traceID forwarding.
    ");

    Ok(())
}

#[test]
fn test_config_source_root_and_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".callauditrc.json",
        r#"{
         "sourceRoot": "Sources",
         "ignores": ["**/Generated/**"]
     }"#,
    )?;
    test.write_file(
        "Sources/App.swift",
        "mountManager.connect(a, operationID: op)\n",
    )?;
    test.write_file("Sources/Generated/Mocks.swift", "mountManager.connect(a)\n")?;

    assert_cmd_snapshot!(test.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    OK: Sources/App.swift:1 connect (a, operationID: op)

    PASS: 1 callsite(s) include explicit operationID.

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_config_extensions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".callauditrc.json", r#"{ "extensions": ["swift", "m"] }"#)?;
    test.write_file("macfuseGui/Legacy.m", "[x y]; mountManager.connect(a);\n")?;

    assert_cmd_snapshot!(test.command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    MISSING operationID: macfuseGui/Legacy.m:1 connect (a)

    ----- stderr -----

    FAIL: 1 callsite(s) missing explicit operationID forwarding.
    ");

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".callauditrc.json", r#"{ "methods": [] }"#)?;
    test.write_file("macfuseGui/App.swift", "mountManager.connect(a)\n")?;

    test.settings().bind(|| {
        assert_cmd_snapshot!(test.command(), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        error: Invalid config file: [TEMP]/.callauditrc.json: 'methods' must list at least one method name
        ");
    });

    Ok(())
}

#[test]
fn test_cli_root_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".callauditrc.json", r#"{ "sourceRoot": "Sources" }"#)?;
    test.write_file("macfuseGui/App.swift", "mountManager.connect(a)\n")?;

    assert_cmd_snapshot!(test.command().args(["--root", "macfuseGui"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    MISSING operationID: macfuseGui/App.swift:1 connect (a)

    ----- stderr -----

    FAIL: 1 callsite(s) missing explicit operationID forwarding.
    ");

    Ok(())
}
