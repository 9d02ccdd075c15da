use anyhow::Result;

use crate::{CLIENT_EL, CliTest, run};

const CLIENT_DE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
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
"#;

#[test]
fn test_stats_single_catalog() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let output = run(&mut test.stats_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("translations/client_el.ts"));
    assert!(output.stdout.contains("(el)"));
    assert!(output.stdout.contains("contexts:   2"));
    assert!(output.stdout.contains("messages:   5"));
    assert!(output.stdout.contains("finished:   3 (75.0%)"));
    assert!(output.stdout.contains("unfinished: 1"));
    assert!(output.stdout.contains("retired:    1"));
    assert!(output.stdout.contains("numerus:    1"));
    Ok(())
}

#[test]
fn test_stats_multiple_catalogs() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;
    test.write_file("translations/client_de.ts", CLIENT_DE)?;

    let output = run(&mut test.stats_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("client_de.ts"));
    assert!(output.stdout.contains("(de)"));
    assert!(output.stdout.contains("client_el.ts"));
    assert!(output.stdout.contains("finished:   1 (100.0%)"));
    Ok(())
}

#[test]
fn test_stats_select_catalog() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;
    test.write_file("translations/client_de.ts", CLIENT_DE)?;

    let output = run(test.stats_command().args(["--catalog", "de"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("(de)"));
    assert!(!output.stdout.contains("client_el.ts"));
    Ok(())
}

#[test]
fn test_stats_empty_project() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.stats_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("No catalog files found."));
    Ok(())
}

#[test]
fn test_stats_parse_error_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/broken.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el>
"#,
    )?;

    let output = run(&mut test.stats_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stderr.contains("could not be parsed"));
    Ok(())
}
