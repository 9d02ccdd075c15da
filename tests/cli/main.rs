use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod clean;
mod export;
mod init;
mod query;
mod stats;

const BIN_NAME: &str = "glossa";

/// Default catalog path used by `with_catalog`.
pub const CATALOG_PATH: &str = "translations/client_el.ts";

/// A Greek catalog in the shape a desktop sync client ships: finished
/// messages with placeholders, a numerus message, an unfinished draft and
/// a vanished leftover.
pub const CLIENT_EL: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="el">
<context>
    <name>OCC::AccountSettings</name>
    <message>
        <location filename="../src/gui/accountsettings.cpp" line="612"/>
        <source>Server %1 is currently in maintenance mode.</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <location filename="../src/gui/accountsettings.cpp" line="640"/>
        <source>Storage space: %1</source>
        <translation>Χώρος αποθήκευσης: %1</translation>
    </message>
</context>
<context>
    <name>OCC::Folder</name>
    <message>
        <location filename="../src/gui/folder.cpp" line="254"/>
        <source>%1 on %2</source>
        <translation>%1 σε %2</translation>
    </message>
    <message numerus="yes">
        <location filename="../src/gui/folder.cpp" line="380"/>
        <source>%n file(s) downloaded.</source>
        <translation>
            <numerusform>Λήφθηκε %n αρχείο.</numerusform>
            <numerusform>Λήφθηκαν %n αρχεία.</numerusform>
        </translation>
    </message>
    <message>
        <source>Old sync text</source>
        <translation type="vanished">Παλιό κείμενο</translation>
    </message>
</context>
</TS>
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

pub struct CmdOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(cmd: &mut Command) -> Result<CmdOutput> {
    let output = cmd.output().context("Failed to run the glossa binary")?;
    Ok(CmdOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Config discovery walks up to the nearest .git; without one it
        // could pick up a stray .glossarc.json above the temp dir.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn with_catalog(content: &str) -> Result<Self> {
        let test = Self::new()?;
        test.write_file(CATALOG_PATH, content)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn stats_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("stats");
        cmd
    }

    pub fn query_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("query");
        cmd
    }

    pub fn export_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("export");
        cmd
    }

    pub fn clean_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("clean");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}
