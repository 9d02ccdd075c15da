use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Created .glossarc.json"));

    let content = test.read_file(".glossarc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert!(parsed["ignores"].is_array());
    assert!(parsed["ignoreContexts"].is_array());
    let includes = parsed["includes"]
        .as_array()
        .context("includes should be an array")?;
    assert!(includes.contains(&Value::String("translations".into())));
    assert!(includes.contains(&Value::String("l10n".into())));
    Ok(())
}

#[test]
fn test_init_fails_when_config_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".glossarc.json", "{}")?;

    let output = run(test.command().arg("init"))?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Error: .glossarc.json already exists"));
    // The existing file is left alone
    assert_eq!(test.read_file(".glossarc.json")?, "{}");
    Ok(())
}
