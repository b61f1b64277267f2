//! Generation pipeline: read → extract → render → write.
//!
//! - `reader`: loads the Scheme source
//! - `extract`: regex scans for column and table names
//! - `render`: builds the constant class bodies
//! - `writer`: writes generated files into the output directory
//! - `generate`: runs the whole pipeline once

pub mod error;
pub mod extract;
pub mod generate;
pub mod reader;
pub mod render;
pub mod writer;

pub use error::GenerateError;
pub use extract::{EXCLUDED_KEYWORDS, Extraction, extract};
pub use generate::{GenerateOptions, GenerateReport, generate};
pub use render::{ConstantKind, RenderOptions, Target, TargetSelection, constant_name, render};
