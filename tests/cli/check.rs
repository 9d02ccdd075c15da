use anyhow::Result;

use crate::{CLIENT_EL, CliTest, run};

#[test]
fn test_check_reports_unfinished_and_obsolete() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0), "warnings alone must not fail the run");
    assert!(output.stdout.contains("warning:"));
    assert!(
        output
            .stdout
            .contains("\"Server %1 is currently in maintenance mode.\"")
    );
    assert!(output.stdout.contains("unfinished"));
    assert!(output.stdout.contains("\"Old sync text\""));
    assert!(output.stdout.contains("obsolete"));
    assert!(output.stdout.contains("translations/client_el.ts:"));
    assert!(output.stdout.contains("2 problems (0 errors, 2 warnings)"));
    Ok(())
}

#[test]
fn test_check_clean_catalog_reports_success() -> Result<()> {
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

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("no issues found"));
    assert!(output.stdout.contains("1 catalog file, 1 message"));
    Ok(())
}

#[test]
fn test_check_duplicate_message_fails() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el">
<context>
    <name>OCC::Folder</name>
    <message>
        <source>Sync now</source>
        <translation>Συγχρονισμός τώρα</translation>
    </message>
    <message>
        <source>Sync now</source>
        <translation>Άμεσος συγχρονισμός</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("error:"));
    assert!(output.stdout.contains("duplicate-message"));
    assert!(output.stdout.contains("already defines this message at line"));
    assert!(output.stdout.contains("the first entry wins on lookup"));
    Ok(())
}

#[test]
fn test_check_placeholder_mismatch_fails() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el">
<context>
    <name>OCC::Folder</name>
    <message>
        <source>%1 on %2</source>
        <translation>%1 στον διακομιστή</translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("placeholder-mismatch"));
    assert!(output.stdout.contains("translation is missing %2"));
    Ok(())
}

#[test]
fn test_check_empty_finished_translation_fails() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el">
<context>
    <name>OCC::Folder</name>
    <message>
        <source>Local folder</source>
        <translation></translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("empty-translation"));
    assert!(output.stdout.contains("finished translation is empty"));
    assert!(output.stdout.contains("mark the entry unfinished"));
    Ok(())
}

#[test]
fn test_check_plural_forms_fails() -> Result<()> {
    let test = CliTest::with_catalog(
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el">
<context>
    <name>OCC::Folder</name>
    <message numerus="yes">
        <source>%n file(s) downloaded.</source>
        <translation>
            <numerusform>Λήφθηκαν %n αρχεία.</numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("plural-forms"));
    assert!(
        output
            .stdout
            .contains("language 'el' needs 2 plural forms, found 1")
    );
    Ok(())
}

#[test]
fn test_check_language_override() -> Result<()> {
    // The catalog declares no language and the file name carries no code,
    // so --language decides which plural rule applies.
    let test = CliTest::new()?;
    test.write_file(
        "translations/catalog.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1">
<context>
    <name>OCC::Folder</name>
    <message numerus="yes">
        <source>%n file(s) downloaded.</source>
        <translation>
            <numerusform>%n файл загружен.</numerusform>
        </translation>
    </message>
</context>
</TS>
"#,
    )?;

    let output = run(test.check_command().args(["--language", "ru"]))?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("language 'ru' needs 3 plural forms, found 1")
    );
    Ok(())
}

#[test]
fn test_check_rule_selection() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;

    let output = run(test.check_command().arg("unfinished"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("unfinished"));
    assert!(output.stdout.contains("1 problems (0 errors, 1 warning)"));
    assert!(!output.stdout.contains("obsolete"));
    Ok(())
}

#[test]
fn test_check_ignored_context() -> Result<()> {
    let test = CliTest::with_catalog(CLIENT_EL)?;
    test.write_file(
        ".glossarc.json",
        r#"{ "ignoreContexts": ["OCC::AccountSettings"] }"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(!output.stdout.contains("maintenance mode"));
    assert!(output.stdout.contains("obsolete"));
    assert!(output.stdout.contains("1 problems (0 errors, 1 warning)"));
    Ok(())
}

#[test]
fn test_check_parse_error() -> Result<()> {
    // The language attribute quote never closes, so parsing must fail.
    let test = CliTest::new()?;
    test.write_file(
        "translations/broken.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el>
<context>
"#,
    )?;

    let output = run(&mut test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains("parse-error"));
    assert!(output.stdout.contains("Failed to parse catalog file"));
    assert!(
        output
            .stderr
            .contains("warning: 1 file(s) could not be parsed (use -v for details)")
    );
    Ok(())
}

#[test]
fn test_check_verbose_notes_missing_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "translations/broken.ts",
        r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el>
"#,
    )?;

    let output = run(test.check_command().arg("-v"))?;

    assert!(
        output
            .stdout
            .contains("Note: No .glossarc.json found, using default configuration")
    );
    // Verbose mode reports parse failures inline, not as an aggregate hint
    assert!(!output.stderr.contains("could not be parsed"));
    Ok(())
}

#[test]
fn test_check_catalog_root_option() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("client/translations/client_el.ts", CLIENT_EL)?;

    let output = run(test.check_command().args(["--catalog-root", "client"]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("client/translations/client_el.ts:"));
    assert!(output.stdout.contains("2 problems (0 errors, 2 warnings)"));
    Ok(())
}

#[test]
fn test_no_command_shows_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(&mut test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Usage: glossa"));
    assert!(output.stdout.contains("check"));
    assert!(output.stdout.contains("query"));
    Ok(())
}
