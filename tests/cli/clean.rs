use anyhow::Result;

use crate::{CATALOG_PATH, CLIENT_EL, CliTest, run};

#[test]
fn test_clean_dry_run_lists_retired() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let output = run(&mut test.clean_command())?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Would remove 1 retired message(s) in 1 file(s):")
    );
    assert!(output.stdout.contains("OCC::Folder: \"Old sync text\" (vanished, line"));
    assert!(output.stdout.contains("Run with --apply to remove these messages."));
    // A dry run must leave the catalog untouched
    assert!(test.read_file(CATALOG_PATH)?.contains("Old sync text"));
    Ok(())
}

#[test]
fn test_clean_apply_rewrites_catalog() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let output = run(test.clean_command().arg("--apply"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Removed 1 retired message(s) in 1 file(s)."));

    let rewritten = test.read_file(CATALOG_PATH)?;
    assert!(!rewritten.contains("Old sync text"));
    assert!(rewritten.contains("Χώρος αποθήκευσης: %1"));
    assert!(rewritten.contains("%1 σε %2"));
    assert!(rewritten.contains("<numerusform>Λήφθηκαν %n αρχεία.</numerusform>"));
    // Provenance and draft markers survive the rewrite
    assert!(rewritten.contains("<location filename=\"../src/gui/folder.cpp\" line=\"254\"/>"));
    assert!(rewritten.contains("<translation type=\"unfinished\"/>"));
    Ok(())
}

#[test]
fn test_clean_apply_drops_emptied_context() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el">
<context>
    <name>OCC::Folder</name>
    <message>
        <source>Local folder</source>
        <translation>Τοπικός φάκελος</translation>
    </message>
</context>
<context>
    <name>OCC::WizardPage</name>
    <message>
        <source>Old wizard text</source>
        <translation type="obsolete">Παλιός οδηγός</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(test.clean_command().arg("--apply"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Removed 1 retired message(s) in 1 file(s)."));
    assert!(output.stdout.contains("dropped 1 emptied context(s)"));

    let rewritten = test.read_file(CATALOG_PATH)?;
    assert!(!rewritten.contains("OCC::WizardPage"));
    assert!(rewritten.contains("OCC::Folder"));
    Ok(())
}

#[test]
fn test_clean_dry_run_announces_context_drop() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el">
<context>
    <name>OCC::WizardPage</name>
    <message>
        <source>Old wizard text</source>
        <translation type="obsolete">Παλιός οδηγός</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(&mut test.clean_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("OCC::WizardPage: \"Old wizard text\" (obsolete, line"));
    assert!(output.stdout.contains("would drop 1 emptied context(s)"));
    assert!(test.read_file(CATALOG_PATH)?.contains("OCC::WizardPage"));
    Ok(())
}

#[test]
fn test_clean_nothing_to_remove() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el">
<context>
    <name>OCC::Folder</name>
    <message>
        <source>Local folder</source>
        <translation>Τοπικός φάκελος</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(&mut test.clean_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("No retired messages found."));
    Ok(())
}
