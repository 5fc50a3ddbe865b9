//! Command dispatch: turns parsed arguments into builders and renders them.

use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{CodeBuilder, HtmlBuilder, IndentUnit, NodeId, Render, TreeNodeConvert};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::{InfraError, InfraResult};

/// Split `NAME=VALUE` on the first `=`; a missing `=` means an empty value.
pub fn parse_pair(raw: &str) -> (String, String) {
    match raw.split_once('=') {
        Some((name, value)) => (name.to_string(), value.to_string()),
        None => (raw.to_string(), String::new()),
    }
}

/// Build an element tree from `NAME=TEXT` specs.
///
/// Each leading `>` nests one level deeper, under the most recent element of the
/// level above. Without `>` the child goes directly under the root.
pub fn build_html(root: &str, children: &[String], indent: IndentUnit) -> CliResult<HtmlBuilder> {
    let mut builder = HtmlBuilder::with_indent(root, indent);
    // last element seen at each depth; index 0 is the root
    let mut open: Vec<NodeId> = vec![builder.root()];

    for spec in children {
        let level = spec.chars().take_while(|&c| c == '>').count();
        let (name, text) = parse_pair(&spec[level..]);
        let Some(&parent) = open.get(level) else {
            return Err(CliError::InvalidArgs(format!(
                "{spec:?} nests {} levels but only {} are open",
                level + 1,
                open.len()
            )));
        };
        let id = builder
            .add_child_to(parent, name, text)
            .map_err(ApplicationError::from)?;
        open.truncate(level + 1);
        open.push(id);
    }

    debug!("built {:?} with {} nodes", root, builder.iter().count());
    Ok(builder)
}

/// Build a class declaration from `NAME=VALUE` specs, in order.
pub fn build_code(class: &str, fields: &[String], indent: IndentUnit) -> CodeBuilder {
    let mut builder = CodeBuilder::with_indent(class, indent);
    for spec in fields {
        let (name, value) = parse_pair(spec);
        builder.add_field(name, value);
    }
    builder
}

/// Write a rendered document plus a trailing newline to `out`.
pub fn write_document(out: &mut impl Write, text: &str) -> InfraResult<()> {
    writeln!(out, "{text}")
        .and_then(|()| out.flush())
        .map_err(|e| InfraError::io("write document to stdout", e))
}

fn indent_override(indent: Option<usize>, configured: IndentUnit) -> CliResult<IndentUnit> {
    match indent {
        Some(0) => Err(CliError::InvalidArgs("--indent must be at least 1".into())),
        Some(width) => Ok(IndentUnit::new(width)),
        None => Ok(configured),
    }
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, run with --help for usage".into(),
        ));
    };

    match command {
        Commands::Completion { shell } => {
            print_completions(*shell);
            Ok(())
        }
        Commands::Config { command } => _config(command),
        Commands::Html {
            root,
            children,
            indent,
            output,
        } => {
            let container = ServiceContainer::new(Settings::load()?);
            let indent = indent_override(*indent, container.settings.html_indent_unit())?;
            let builder = build_html(root, children, indent)?;
            emit(&container, &builder, output.as_deref(), cli.verbose)
        }
        Commands::Code {
            class,
            fields,
            indent,
            output,
        } => {
            let container = ServiceContainer::new(Settings::load()?);
            let indent = indent_override(*indent, container.settings.code_indent_unit())?;
            let builder = build_code(class, fields, indent);
            emit(&container, &builder, output.as_deref(), cli.verbose)
        }
        Commands::Outline { root, children } => {
            let builder = build_html(root, children, IndentUnit::TAG)?;
            output::info(&builder.to_tree_string());
            Ok(())
        }
    }
}

#[instrument(skip(container, doc))]
fn emit<R: Render>(
    container: &ServiceContainer,
    doc: &R,
    dest: Option<&Path>,
    verbose: bool,
) -> CliResult<()> {
    let service = container.document_service();
    match dest {
        None => write_document(&mut io::stdout().lock(), &service.render(doc))?,
        Some(dest) => {
            let written = service.save(doc, dest)?;
            output::action("Written", &written.display());
            if verbose {
                output::detail(&format!("{} lines", doc.render(0).len()));
            }
        }
    }
    Ok(())
}

#[instrument]
fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::header("Effective settings");
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(CliError::Usage(
                    "no home directory, cannot locate global config".into(),
                ))
            }
        },
    }
    Ok(())
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
