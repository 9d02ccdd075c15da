use anyhow::Result;

use crate::{CLIENT_EL, CliTest, run};

const ACTIVITY_EL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el">
<context>
    <name>OCC::Activity</name>
    <message>
        <source>%1 has been removed.</source>
        <comment>%1 names a file.</comment>
        <translation>Το αρχείο %1 αφαιρέθηκε.</translation>
    </message>
    <message>
        <source>%1 has been removed.</source>
        <translation>Το %1 αφαιρέθηκε.</translation>
    </message>
</context>
</TS>
"#;

#[test]
fn test_query_finished_translation() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let output = run(test
        .query_command()
        .args(["OCC::Folder", "%1 on %2", "--arg", "Documents", "--arg", "server1"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Documents σε server1"));
    assert!(output.stdout.contains("✓ translation [el]"));
    Ok(())
}

#[test]
fn test_query_fallback_when_unfinished() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let output = run(test.query_command().args([
        "OCC::AccountSettings",
        "Server %1 is currently in maintenance mode.",
    ]))?;

    assert_eq!(output.code, Some(0), "fallback is an answer, not a failure");
    assert!(
        output
            .stdout
            .contains("Server %1 is currently in maintenance mode.")
    );
    assert!(
        output
            .stdout
            .contains("✘ source fallback (translation unfinished) [el]")
    );
    Ok(())
}

#[test]
fn test_query_plural_selection() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let one = run(test
        .query_command()
        .args(["OCC::Folder", "%n file(s) downloaded.", "-n", "1"]))?;
    assert!(one.stdout.contains("Λήφθηκε 1 αρχείο."));

    let many = run(test
        .query_command()
        .args(["OCC::Folder", "%n file(s) downloaded.", "-n", "5"]))?;
    assert!(many.stdout.contains("Λήφθηκαν 5 αρχεία."));
    assert!(many.stdout.contains("✓ translation [el]"));
    Ok(())
}

#[test]
fn test_query_unknown_message_falls_back() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let output = run(test.query_command().args(["OCC::Folder", "No such text"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("No such text"));
    assert!(
        output
            .stdout
            .contains("✘ source fallback (message not found) [el]")
    );
    Ok(())
}

#[test]
fn test_query_comment_disambiguation() -> Result<()> {
    let test = CliTest::with_catalog(ACTIVITY_EL)?;

    let with_comment = run(test.query_command().args([
        "OCC::Activity",
        "%1 has been removed.",
        "--comment",
        "%1 names a file.",
        "--arg",
        "photo.jpg",
    ]))?;
    assert!(with_comment.stdout.contains("Το αρχείο photo.jpg αφαιρέθηκε."));

    let without_comment = run(test
        .query_command()
        .args(["OCC::Activity", "%1 has been removed.", "--arg", "photo.jpg"]))?;
    assert!(without_comment.stdout.contains("Το photo.jpg αφαιρέθηκε."));
    Ok(())
}

#[test]
fn test_query_unknown_comment_retries_without() -> Result<()> {
    let test = CliTest::with_catalog(ACTIVITY_EL)?;

    let output = run(test.query_command().args([
        "OCC::Activity",
        "%1 has been removed.",
        "--comment",
        "no such comment",
    ]))?;

    assert!(output.stdout.contains("Το %1 αφαιρέθηκε."));
    assert!(output.stdout.contains("✓ translation [el]"));
    Ok(())
}

#[test]
fn test_query_selects_catalog_by_language() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;
    test.write_file(
        "translations/client_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>OCC::Folder</name>
    <message>
        <source>Local folder</source>
        <translation>Lokaler Ordner</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(test
        .query_command()
        .args(["OCC::Folder", "Local folder", "--catalog", "de"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Lokaler Ordner"));
    assert!(output.stdout.contains("✓ translation [de]"));
    Ok(())
}

#[test]
fn test_query_requires_catalog_choice() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;
    test.write_file(
        "translations/client_de.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de">
<context>
    <name>OCC::Folder</name>
    <message>
        <source>Local folder</source>
        <translation>Lokaler Ordner</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(test.query_command().args(["OCC::Folder", "Local folder"]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: Found 2 catalogs"));
    Ok(())
}

#[test]
fn test_query_without_catalogs_errors() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.query_command().args(["OCC::Folder", "Local folder"]))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: No catalog files found"));
    Ok(())
}
