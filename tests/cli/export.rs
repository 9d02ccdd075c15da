use anyhow::Result;
use serde_json::Value;

use crate::{CLIENT_EL, CliTest, run};

#[test]
fn test_export_writes_json_to_stdout() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let output = run(&mut test.export_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"language\": \"el\""));
    assert!(output.stdout.contains("\"%1 on %2\": \"%1 σε %2\""));
    assert!(output.stdout.contains("Λήφθηκαν %n αρχεία."));
    // Drafts and retired strings stay out of a shipping export
    assert!(!output.stdout.contains("maintenance mode"));
    assert!(!output.stdout.contains("Old sync text"));
    Ok(())
}

#[test]
fn test_export_all_includes_drafts_and_retired() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let output = run(test.export_command().arg("--all"))?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Server %1 is currently in maintenance mode.")
    );
    assert!(output.stdout.contains("\"Old sync text\": \"Παλιό κείμενο\""));
    Ok(())
}

#[test]
fn test_export_to_file() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let output = run(test.export_command().args(["-o", "exported.json"]))?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Exported 3 message(s) from 2 context(s) to exported.json")
    );

    let document: Value = serde_json::from_str(&test.read_file("exported.json")?)?;
    assert_eq!(document["language"], "el");
    assert_eq!(document["contexts"]["OCC::Folder"]["%1 on %2"], "%1 σε %2");
    assert_eq!(
        document["contexts"]["OCC::Folder"]["%n file(s) downloaded."][1],
        "Λήφθηκαν %n αρχεία."
    );
    Ok(())
}

#[test]
fn test_export_appends_comment_to_key() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<?xml version="1.0" encoding="utf-8"?>
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
"#,
    )?;

    let output = run(&mut test.export_command())?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("\"%1 has been removed. [%1 names a file.]\"")
    );
    assert!(output.stdout.contains("\"%1 has been removed.\""));
    Ok(())
}

#[test]
fn test_export_select_catalog() -> Result<()> {
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

    let output = run(test.export_command().args(["--catalog", "de"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("\"language\": \"de\""));
    assert!(output.stdout.contains("Lokaler Ordner"));
    assert!(!output.stdout.contains("client_el"));
    Ok(())
}
