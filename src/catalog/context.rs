//! Shared context for commands.
//!
//! A `CheckContext` resolves configuration, discovers catalog files and
//! parses them on first use. Commands and the MCP server both build one
//! from the common CLI arguments.

use std::cell::OnceCell;
use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use rayon::prelude::*;

use crate::catalog::model::Catalog;
use crate::catalog::scan::scan_catalog_files;
use crate::catalog::ts::parse_ts_file;
use crate::cli::CommonArgs;
use crate::config::{Config, ConfigLoadResult, load_config};
use crate::issues::ParseErrorIssue;

#[derive(Default)]
struct ParsedCatalogs {
    catalogs: Vec<Catalog>,
    errors: Vec<ParseErrorIssue>,
}

pub struct CheckContext {
    pub config: Config,
    pub root_dir: PathBuf,
    /// Catalog files discovered under the root, sorted.
    pub files: Vec<String>,
    pub ignore_contexts: HashSet<String>,
    pub verbose: bool,
    parsed: OnceCell<ParsedCatalogs>,
}

impl CheckContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let root_dir = common
            .catalog_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let ConfigLoadResult {
            mut config,
            from_file,
        } = load_config(&root_dir)?;
        if !from_file && common.verbose {
            println!("Note: No .glossarc.json found, using default configuration");
        }
        if let Some(language) = &common.language {
            config.language = Some(language.clone());
        }

        let scan = scan_catalog_files(
            &root_dir.to_string_lossy(),
            &config.includes,
            &config.ignores,
            common.verbose,
        );
        if scan.skipped_count > 0 && !common.verbose {
            eprintln!(
                "warning: {} path(s) could not be scanned (use -v for details)",
                scan.skipped_count
            );
        }

        let ignore_contexts = config.ignore_contexts.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir,
            files: scan.files,
            ignore_contexts,
            verbose: common.verbose,
            parsed: OnceCell::new(),
        })
    }

    fn parsed(&self) -> &ParsedCatalogs {
        self.parsed.get_or_init(|| {
            let fallback = self.config.language.clone();
            let results: Vec<Result<Catalog>> = self
                .files
                .par_iter()
                .map(|file| parse_ts_file(file, fallback.as_deref()))
                .collect();
            let mut parsed = ParsedCatalogs::default();
            for (file, result) in self.files.iter().zip(results) {
                match result {
                    Ok(catalog) => parsed.catalogs.push(catalog),
                    Err(err) => parsed.errors.push(ParseErrorIssue {
                        file_path: file.clone(),
                        error: format!("{:#}", err),
                    }),
                }
            }
            parsed
        })
    }

    /// Parses all discovered catalogs on first use, in parallel, keeping
    /// file order. Files that fail to parse become issues instead.
    pub fn catalogs(&self) -> &[Catalog] {
        &self.parsed().catalogs
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parsed().errors
    }

    pub fn message_count(&self) -> usize {
        self.catalogs().iter().map(Catalog::message_count).sum()
    }

    /// Selects a catalog by language code or path suffix. With no selector
    /// the sole discovered catalog is used.
    pub fn find_catalog(&self, selector: Option<&str>) -> Result<&Catalog> {
        let catalogs = self.catalogs();
        match selector {
            None => match catalogs {
                [] if self.files.is_empty() => {
                    bail!("No catalog files found under {}", self.root_dir.display())
                }
                [] => bail!(
                    "{} catalog file(s) failed to parse (run `glossa check` for details)",
                    self.files.len()
                ),
                [only] => Ok(only),
                _ => bail!(
                    "Found {} catalogs; pass --catalog <path or language> to choose one",
                    catalogs.len()
                ),
            },
            Some(selector) => catalogs
                .iter()
                .find(|c| c.language == selector || c.file_path.ends_with(selector))
                .ok_or_else(|| anyhow!("No catalog matching '{}'", selector)),
        }
    }
}
