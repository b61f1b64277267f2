use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use super::{
    error::GenerateError,
    extract::extract,
    reader::read_schema,
    render::{ConstantKind, RenderOptions, Target, output_file_name, render},
    writer::write_output,
};

/// Inputs of one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub schema_path: PathBuf,
    pub output_dir: PathBuf,
    /// Languages to generate, in write order.
    pub targets: Vec<Target>,
    pub namespace: String,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub schema_path: PathBuf,
    pub columns: BTreeSet<String>,
    pub tables: BTreeSet<String>,
    pub skipped: BTreeSet<String>,
    /// Written files, per target the column file first.
    pub written: Vec<PathBuf>,
}

/// Read the schema, extract names and write both constant files per target.
///
/// Stops at the first failure. Files written before the failure are left
/// in place.
pub fn generate(options: &GenerateOptions) -> Result<GenerateReport, GenerateError> {
    let content = read_schema(&options.schema_path)?;
    let extraction = extract(&content);
    let source = source_name(&options.schema_path);

    let mut written = Vec::with_capacity(options.targets.len() * 2);
    for &target in &options.targets {
        let render_options = RenderOptions {
            target,
            namespace: options.namespace.clone(),
            source_name: source.clone(),
        };

        for kind in ConstantKind::all() {
            let names = match kind {
                ConstantKind::Column => &extraction.columns,
                ConstantKind::Table => &extraction.tables,
            };
            let body = render(names, kind, &render_options);
            let file_name = output_file_name(kind, target);
            written.push(write_output(&options.output_dir, &file_name, &body)?);
        }
    }

    Ok(GenerateReport {
        schema_path: options.schema_path.clone(),
        columns: extraction.columns,
        tables: extraction.tables,
        skipped: extraction.skipped,
        written,
    })
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
