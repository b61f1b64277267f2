use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::Workspace;

const SCHEME: &str = r#"<?php

declare(strict_types=1);

namespace SquareRouting\Core;

use SquareRouting\Core\Database\ColumnType;
use SquareRouting\Core\Database\Table;

class Scheme
{
    public function account(): Table
    {
        $account = new Table('users');

        $account->id = ColumnType::INT;
        $account->email = ColumnType::VARCHAR;
        $account->created_at = ColumnType::DATETIME;

        $account->id->autoIncrement = true;
        $account->email->length = 255;
        $account->email->unique = true;

        return $account;
    }

    public function configuration(): Table
    {
        $configuration = new Table("configuration");

        $configuration->id = ColumnType::INT;
        $configuration->name = ColumnType::VARCHAR;
        $configuration->nullable = false;

        return $configuration;
    }
}
"#;

#[test]
fn test_generate_with_defaults() -> Result<()> {
    let workspace = Workspace::with_scheme(SCHEME)?;

    assert_cmd_snapshot!(workspace.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Reading scheme file: ./Scheme.php
    Found 4 unique column names
    Found 2 unique table names
    Generated: ./Scheme/ColumnName.php
    Generated: ./Scheme/TableName.php
    ✓ Const class generation completed successfully!

    Column Names Found:
      - created_at
      - email
      - id
      - name

    Table Names Found:
      - configuration
      - users

    ----- stderr -----
    ");

    assert_eq!(
        workspace.read("Scheme/TableName.php")?,
        "\
<?php

declare(strict_types=1);

namespace SquareRouting\\Core\\Scheme;

/**
 * Constants for database table names
 * Auto-generated from Scheme.php
 */
class TableName
{
    const CONFIGURATION = 'configuration';
    const USERS = 'users';
}
"
    );

    let columns = workspace.read("Scheme/ColumnName.php")?;
    assert!(columns.contains(
        "class ColumnName\n{\n    const CREATED_AT = 'created_at';\n    const EMAIL = 'email';\n    const ID = 'id';\n    const NAME = 'name';\n}\n"
    ));

    Ok(())
}

#[test]
fn test_generate_twice_is_byte_identical() -> Result<()> {
    let workspace = Workspace::with_scheme(SCHEME)?;

    workspace.command().output()?;
    let first = (
        workspace.read("Scheme/ColumnName.php")?,
        workspace.read("Scheme/TableName.php")?,
    );

    workspace.command().output()?;
    let second = (
        workspace.read("Scheme/ColumnName.php")?,
        workspace.read("Scheme/TableName.php")?,
    );

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_missing_scheme_file() -> Result<()> {
    let workspace = Workspace::new()?;

    assert_cmd_snapshot!(workspace.command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ Error: Scheme file not found: ./Scheme.php

    ----- stderr -----
    ");
    assert!(!workspace.exists("Scheme"));

    Ok(())
}

#[test]
fn test_missing_scheme_leaves_existing_output_untouched() -> Result<()> {
    let workspace = Workspace::new()?;
    workspace.write("Scheme/TableName.php", "previous")?;

    let output = workspace.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(workspace.read("Scheme/TableName.php")?, "previous");

    Ok(())
}

#[test]
fn test_write_failure_stops_the_run() -> Result<()> {
    let workspace = Workspace::with_scheme(SCHEME)?;
    workspace.create_dir("Scheme/TableName.php")?;

    assert_cmd_snapshot!(workspace.command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ Error: Failed to write file ./Scheme/TableName.php: Is a directory (os error 21)

    ----- stderr -----
    ");

    // The column file written before the failure stays.
    assert!(workspace.read("Scheme/ColumnName.php")?.contains("const NAME = 'name';"));

    Ok(())
}

#[test]
fn test_flags_select_paths_and_target() -> Result<()> {
    let workspace = Workspace::new()?;
    workspace.write("backend/Core/Schema.php", SCHEME)?;

    let output = workspace
        .command()
        .args([
            "--schema",
            "backend/Core/Schema.php",
            "--output-dir",
            "frontend/generated",
            "--target",
            "typescript",
        ])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        workspace.read("frontend/generated/TableName.ts")?,
        "\
/**
 * Constants for database table names
 * Auto-generated from Schema.php
 */
export enum TableName {
  CONFIGURATION = 'configuration',
  USERS = 'users',
}
"
    );
    assert!(workspace.exists("frontend/generated/ColumnName.ts"));
    assert!(!workspace.exists("Scheme"));

    Ok(())
}

#[test]
fn test_target_all_writes_php_and_typescript() -> Result<()> {
    let workspace = Workspace::with_scheme("new Table('orders')")?;

    let output = workspace.command().args(["--target", "all"]).output()?;

    assert!(output.status.success());
    for file in [
        "Scheme/ColumnName.php",
        "Scheme/TableName.php",
        "Scheme/ColumnName.ts",
        "Scheme/TableName.ts",
    ] {
        assert!(workspace.exists(file), "{} should exist", file);
    }
    assert!(workspace.read("Scheme/TableName.ts")?.contains("  ORDERS = 'orders',\n"));

    Ok(())
}

#[test]
fn test_config_file_is_used() -> Result<()> {
    let workspace = Workspace::new()?;
    workspace.write("db/Scheme.php", "new Table('orders')")?;
    workspace.write(
        ".schemeconstrc.json",
        r#"{
          "schemaFile": "db/Scheme.php",
          "outputDir": "db/Scheme",
          "namespace": "App\\Db"
      }"#,
    )?;

    let output = workspace.command().output()?;

    assert!(output.status.success());
    let tables = workspace.read("db/Scheme/TableName.php")?;
    assert!(tables.contains("namespace App\\Db;\n"));
    assert!(tables.contains("    const ORDERS = 'orders';\n"));

    Ok(())
}

#[test]
fn test_flag_overrides_config_file() -> Result<()> {
    let workspace = Workspace::with_scheme("new Table('orders')")?;
    workspace.write(".schemeconstrc.json", r#"{ "target": "typescript" }"#)?;

    let output = workspace.command().args(["--target", "php"]).output()?;

    assert!(output.status.success());
    assert!(workspace.exists("Scheme/TableName.php"));
    assert!(!workspace.exists("Scheme/TableName.ts"));

    Ok(())
}

#[test]
fn test_php_flag_over_namespaceless_config_is_rejected() -> Result<()> {
    let workspace = Workspace::with_scheme("new Table('orders')")?;
    workspace.write(
        ".schemeconstrc.json",
        r#"{ "namespace": "", "target": "typescript" }"#,
    )?;

    assert_cmd_snapshot!(workspace.command().args(["--target", "php"]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ Error: 'namespace' must not be empty for php output

    ----- stderr -----
    ");
    assert!(!workspace.exists("Scheme"));

    Ok(())
}

#[test]
fn test_empty_namespace_flag_is_rejected() -> Result<()> {
    let workspace = Workspace::with_scheme("new Table('orders')")?;

    assert_cmd_snapshot!(workspace.command().args(["--namespace", ""]), @r"
    success: false
    exit_code: 1
    ----- stdout -----
    ✘ Error: 'namespace' must not be empty for php output

    ----- stderr -----
    ");
    assert!(!workspace.exists("Scheme"));

    Ok(())
}

#[test]
fn test_invalid_config_file() -> Result<()> {
    let workspace = Workspace::with_scheme(SCHEME)?;
    workspace.write(".schemeconstrc.json", r#"{ "target": "python" }"#)?;

    let output = workspace.command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Failed to parse config file"));
    assert!(!workspace.exists("Scheme"));

    Ok(())
}

#[test]
fn test_invalid_flag_value_exits_with_failure() -> Result<()> {
    let workspace = Workspace::with_scheme(SCHEME)?;

    let output = workspace.command().args(["--target", "go"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("invalid value 'go'"));
    assert!(output.stderr.is_empty());
    assert!(!workspace.exists("Scheme"));

    Ok(())
}

#[test]
fn test_help_exits_successfully() -> Result<()> {
    let workspace = Workspace::new()?;

    let output = workspace.command().arg("--help").output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--target <TARGET>"));

    Ok(())
}

#[test]
fn test_empty_scheme_yields_empty_classes() -> Result<()> {
    let workspace = Workspace::with_scheme("<?php\n")?;

    assert_cmd_snapshot!(workspace.command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Reading scheme file: ./Scheme.php
    Found 0 unique column names
    Found 0 unique table names
    Generated: ./Scheme/ColumnName.php
    Generated: ./Scheme/TableName.php
    ✓ Const class generation completed successfully!

    Column Names Found:

    Table Names Found:

    ----- stderr -----
    ");
    assert!(
        workspace
            .read("Scheme/ColumnName.php")?
            .ends_with("class ColumnName\n{\n\n}\n")
    );

    Ok(())
}

#[test]
fn test_verbose_lists_skipped_keywords() -> Result<()> {
    let workspace = Workspace::with_scheme(SCHEME)?;

    let output = workspace.command().arg("-v").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("config: defaults\n"));
    assert!(stdout.contains("skipped keywords: nullable\n"));

    Ok(())
}
