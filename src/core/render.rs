//! Rendering of constant classes.
//!
//! Both output kinds share one rendering function. A [`ConstantKind`] only
//! selects the class name and doc text; a [`Target`] selects the language
//! template.

use std::collections::BTreeSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NAMESPACE: &str = r"SquareRouting\Core\Scheme";
pub const DEFAULT_SOURCE_NAME: &str = "Scheme.php";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantKind {
    Column,
    Table,
}

/// Class name and doc line of one generated class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSpec {
    pub class_name: &'static str,
    pub doc: &'static str,
}

impl ConstantKind {
    pub fn all() -> [ConstantKind; 2] {
        [ConstantKind::Column, ConstantKind::Table]
    }

    pub fn class_spec(self) -> ClassSpec {
        match self {
            ConstantKind::Column => ClassSpec {
                class_name: "ColumnName",
                doc: "Constants for database column names",
            },
            ConstantKind::Table => ClassSpec {
                class_name: "TableName",
                doc: "Constants for database table names",
            },
        }
    }
}

/// Output language of one generated file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Target {
    #[default]
    Php,
    TypeScript,
}

impl Target {
    pub fn extension(self) -> &'static str {
        match self {
            Target::Php => "php",
            Target::TypeScript => "ts",
        }
    }
}

/// Languages generated by one run, as selected by `--target` or the config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetSelection {
    #[default]
    Php,
    #[value(name = "typescript", alias = "ts")]
    #[serde(alias = "ts")]
    TypeScript,
    /// PHP classes and TypeScript enums side by side.
    All,
}

impl TargetSelection {
    pub fn targets(self) -> Vec<Target> {
        match self {
            TargetSelection::Php => vec![Target::Php],
            TargetSelection::TypeScript => vec![Target::TypeScript],
            TargetSelection::All => vec![Target::Php, Target::TypeScript],
        }
    }

    pub fn includes(self, target: Target) -> bool {
        self.targets().contains(&target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub target: Target,
    /// PHP namespace of the generated classes. Unused for TypeScript.
    pub namespace: String,
    /// File name quoted in the "Auto-generated from" doc line.
    pub source_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            target: Target::default(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            source_name: DEFAULT_SOURCE_NAME.to_string(),
        }
    }
}

/// Convert an identifier to its constant name.
///
/// Only ASCII letters change case, so the result does not depend on locale.
///
/// # Examples
///
/// ```
/// use schemeconst::core::render::constant_name;
///
/// assert_eq!(constant_name("user_id"), "USER_ID");
/// assert_eq!(constant_name("createdAt"), "CREATEDAT");
/// assert_eq!(constant_name("v2_token"), "V2_TOKEN");
/// ```
pub fn constant_name(name: &str) -> String {
    name.to_ascii_uppercase()
}

pub fn output_file_name(kind: ConstantKind, target: Target) -> String {
    format!("{}.{}", kind.class_spec().class_name, target.extension())
}

/// Render the complete file body for `names`.
///
/// Declarations follow the set's ascending order. Values are embedded as-is.
pub fn render(names: &BTreeSet<String>, kind: ConstantKind, options: &RenderOptions) -> String {
    let spec = kind.class_spec();
    let declarations = names
        .iter()
        .map(|name| declaration(name, options.target))
        .collect::<Vec<_>>()
        .join("\n");

    match options.target {
        Target::Php => format!(
            "<?php\n\
             \n\
             declare(strict_types=1);\n\
             \n\
             namespace {namespace};\n\
             \n\
             /**\n \
             * {doc}\n \
             * Auto-generated from {source}\n \
             */\n\
             class {class}\n\
             {{\n\
             {declarations}\n\
             }}\n",
            namespace = options.namespace,
            doc = spec.doc,
            source = options.source_name,
            class = spec.class_name,
        ),
        Target::TypeScript => format!(
            "/**\n \
             * {doc}\n \
             * Auto-generated from {source}\n \
             */\n\
             export enum {class} {{\n\
             {declarations}\n\
             }}\n",
            doc = spec.doc,
            source = options.source_name,
            class = spec.class_name,
        ),
    }
}

fn declaration(name: &str, target: Target) -> String {
    let constant = constant_name(name);
    match target {
        Target::Php => format!("    const {} = '{}';", constant, name),
        Target::TypeScript => format!("  {} = '{}',", constant, name),
    }
}
