use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde_json;

use crate::{
    catalog::context::CheckContext,
    catalog::format::substitute_args,
    catalog::lookup::Translator,
    catalog::model::TranslationState,
    cli::args::CommonArgs,
    cli::commands::CatalogStats,
    cli::commands::check::{self, CheckRule},
    issues::{Report, Severity},
};

use super::types::{
    CatalogOverview, ContextInfo, ContextsResult, IssueItem, IssueScanResult, IssueStats,
    ListContextsParams, LookupMessageParams, LookupResult, Pagination, RuleCount,
    ScanIssuesParams, ScanOverviewParams, ScanOverviewResult,
};

#[derive(Clone)]
pub struct GlossaMcpServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl GlossaMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get overview statistics of all catalogs and their issues
    #[tool(
        description = "Get per-catalog message statistics and issue counts without detailed items. Use this first to understand the overall state before diving into details."
    )]
    async fn scan_overview(
        &self,
        params: Parameters<ScanOverviewParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = check_context(&params.0.catalog_root_path)?;

        let catalogs: Vec<CatalogOverview> = ctx
            .catalogs()
            .iter()
            .map(CatalogStats::for_catalog)
            .map(|stats| CatalogOverview::from(&stats))
            .collect();

        // Parse errors come back as issues, so the counts below include them
        let issues = check::collect_issues(&ctx, &CheckRule::all());

        let error_count = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();

        let mut by_rule: Vec<RuleCount> = Vec::new();
        for issue in &issues {
            let rule = issue.report_rule().to_string();
            match by_rule.iter_mut().find(|rc| rc.rule == rule) {
                Some(rc) => rc.count += 1,
                None => by_rule.push(RuleCount { rule, count: 1 }),
            }
        }
        by_rule.sort_by(|a, b| a.rule.cmp(&b.rule));

        let overview = ScanOverviewResult {
            catalog_count: ctx.files.len(),
            parse_error_count: ctx.parse_errors().len(),
            catalogs,
            issues: IssueStats {
                total_count: issues.len(),
                error_count,
                warning_count: issues.len() - error_count,
                by_rule,
            },
        };

        let json_str = serde_json::to_string_pretty(&overview).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Scan the catalogs for issues
    #[tool(
        description = "Scan all catalogs for translation issues. Returns paginated list, optionally restricted to one rule."
    )]
    async fn scan_issues(
        &self,
        params: Parameters<ScanIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let checks = match params.0.rule.as_deref() {
            Some(name) => {
                let rule = CheckRule::from_str(name, true).map_err(|_| {
                    McpError::invalid_params(format!("unknown rule '{}'", name), None)
                })?;
                vec![rule]
            }
            None => CheckRule::all(),
        };

        let ctx = check_context(&params.0.catalog_root_path)?;

        let mut issues = check::collect_issues(&ctx, &checks);
        issues.sort();

        let total_count = issues.len();

        // Apply pagination
        let items: Vec<IssueItem> = issues
            .iter()
            .skip(offset)
            .take(limit)
            .map(IssueItem::from)
            .collect();

        let has_more = offset + items.len() < total_count;

        let scan_result = IssueScanResult {
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        let json_str = serde_json::to_string_pretty(&scan_result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Resolve a message the way the running application would
    #[tool(
        description = "Resolve a message by context, source text and optional disambiguation comment. Applies plural selection for a count and substitutes %1..%99 arguments. Falls back to the source text when no usable translation exists."
    )]
    async fn lookup_message(
        &self,
        params: Parameters<LookupMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;
        let ctx = check_context(&p.catalog_root_path)?;
        let catalog = ctx
            .find_catalog(p.catalog.as_deref())
            .map_err(|e| McpError::invalid_params(format!("{}", e), None))?;

        let translator = Translator::new(catalog);
        let resolved = match p.count {
            Some(n) => translator.translate_n(&p.context, &p.source, p.comment.as_deref(), n),
            None => translator.translate(&p.context, &p.source, p.comment.as_deref()),
        };

        let text = match &p.arguments {
            Some(arguments) if !arguments.is_empty() => substitute_args(&resolved.text, arguments),
            _ => resolved.text,
        };

        let result = LookupResult {
            context: p.context,
            source: p.source,
            text,
            origin: resolved.origin.to_string(),
            is_fallback: resolved.origin.is_fallback(),
            language: catalog.language.clone(),
            file_path: catalog.file_path.clone(),
        };

        let json_str = serde_json::to_string_pretty(&result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// List the contexts of one catalog
    #[tool(
        description = "List the contexts of a catalog with per-state message counts. Returns paginated list."
    )]
    async fn list_contexts(
        &self,
        params: Parameters<ListContextsParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let ctx = check_context(&params.0.catalog_root_path)?;
        let catalog = ctx
            .find_catalog(params.0.catalog.as_deref())
            .map_err(|e| McpError::invalid_params(format!("{}", e), None))?;

        let total_count = catalog.contexts.len();

        // Apply pagination
        let items: Vec<ContextInfo> = catalog
            .contexts
            .iter()
            .skip(offset)
            .take(limit)
            .map(|context| {
                let mut info = ContextInfo {
                    name: context.name.clone(),
                    messages: context.messages.len(),
                    finished: 0,
                    unfinished: 0,
                    retired: 0,
                };
                for message in &context.messages {
                    match message.translation.state {
                        TranslationState::Finished => info.finished += 1,
                        TranslationState::Unfinished => info.unfinished += 1,
                        TranslationState::Vanished | TranslationState::Obsolete => {
                            info.retired += 1
                        }
                    }
                }
                info
            })
            .collect();

        let has_more = offset + items.len() < total_count;

        let result = ContextsResult {
            file_path: catalog.file_path.clone(),
            language: catalog.language.clone(),
            total_count,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        let json_str = serde_json::to_string_pretty(&result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }
}

fn check_context(path: &str) -> Result<CheckContext, McpError> {
    let common = CommonArgs {
        catalog_root: Some(PathBuf::from(path)),
        language: None,
        verbose: false,
    };

    CheckContext::new(&common)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

#[tool_handler]
impl ServerHandler for GlossaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Glossa MCP helps AI agents inspect and resolve Qt Linguist (.ts) translation catalogs.\n\n\
                 Available tools:\n\
                 1. scan_overview - Get per-catalog message statistics and issue counts\n\
                 2. scan_issues - Get detailed issue list (paginated, optionally filtered by rule)\n\
                 3. lookup_message - Resolve a message the way the running application would\n\
                 4. list_contexts - List the contexts of a catalog with per-state message counts\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_overview to understand the state of each catalog\n\
                 2. Use scan_issues to walk through the problems rule by rule\n\
                 3. Use lookup_message to verify what a string resolves to, including plural\n\
                    forms (count) and %1..%99 argument substitution\n\n\
                 Lookups never fail: when a translation is missing, unfinished or retired, the\n\
                 source text is returned and isFallback tells you which happened."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = GlossaMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
