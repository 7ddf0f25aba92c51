use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::{CliTest, stderr, stdout};

const BUTTON_JSX: &str = r#"
import React from "react";
import { default as styled } from "styled-components";

const Wrapper = styled.div`color:red;`;

export function Button() {
  return <Wrapper>Click</Wrapper>;
}
"#;

#[test]
fn test_extract_from_archives() -> Result<()> {
    let test = CliTest::new()?;
    test.write_archive_file("acme/web", "src/Button.jsx", BUTTON_JSX)?;

    let output = test
        .extract_command()
        .args(["--archives", "archives", "--out", "out/set.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Extracted 1 record from 1 file"));

    let dataset = test.read_dataset("out/set.json")?;
    assert_eq!(
        dataset,
        vec![json!({
            "id": "acme/web::src/Button.jsx::Wrapper",
            "repo": "acme/web",
            "path": "src/Button.jsx",
            "name_o": "Wrapper",
            "name_t": "wrapper",
            "el": "div",
            "value": "color:red;"
        })]
    );

    Ok(())
}

#[test]
fn test_extract_from_db() -> Result<()> {
    let test = CliTest::new()?;
    test.write_db(
        "s.db",
        &[
            (
                "acme/web",
                "src/Card.tsx",
                "tsx",
                "import styled from '@emotion/styled';\nconst StyledCardTitle = styled.h2<{ dim: boolean }>`\n  font-size: 2em;\n  opacity: ${(p) => (p.dim ? 0.5 : 1)};\n`;",
            ),
            (
                "acme/web",
                "src/theme.ts",
                "ts",
                "import styled from 'styled-components';\nexport const T = styled.div`a: b;`;",
            ),
        ],
    )?;

    let output = test
        .extract_command()
        .args(["--db", "s.db", "--out", "set.json"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let dataset = test.read_dataset("set.json")?;
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset[0]["name_o"], "StyledCardTitle");
    assert_eq!(dataset[0]["name_t"], "card-title");
    assert_eq!(dataset[0]["el"], "h2");
    assert_eq!(dataset[0]["value"], "\nfont-size: 2em;\nopacity: ;\n");

    Ok(())
}

#[test]
fn test_parse_failure_is_skipped() -> Result<()> {
    let test = CliTest::new()?;
    test.write_archive_file("acme/web", "src/A.jsx", BUTTON_JSX)?;
    test.write_archive_file("acme/web", "src/B.jsx", "const = <div")?;
    test.write_archive_file("acme/web", "src/C.jsx", BUTTON_JSX)?;

    let output = test
        .extract_command()
        .args(["--archives", "archives", "--out", "set.json"])
        .output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("1 file could not be parsed"));

    let dataset = test.read_dataset("set.json")?;
    let paths: Vec<&str> = dataset.iter().filter_map(|r| r["path"].as_str()).collect();
    assert_eq!(paths, vec!["src/A.jsx", "src/C.jsx"]);

    Ok(())
}

#[test]
fn test_verbose_lists_parse_failures() -> Result<()> {
    let test = CliTest::new()?;
    test.write_archive_file("acme/web", "Broken.jsx", "const = <div")?;

    let output = test
        .extract_command()
        .args(["--archives", "archives", "--out", "set.json", "-v"])
        .output()?;

    assert!(output.status.success());
    assert!(stderr(&output).contains("[parse-error] acme/web::Broken.jsx: syntax error at 1:"));

    Ok(())
}

#[test]
fn test_no_styling_import_writes_empty_dataset() -> Result<()> {
    let test = CliTest::new()?;
    test.write_archive_file(
        "acme/web",
        "App.jsx",
        "import styled from './styled';\nconst Box = styled.div`color: red;`;",
    )?;

    let output = test
        .extract_command()
        .args(["--archives", "archives", "--out", "set.json"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.read_file("set.json")?, "[]\n");
    assert!(stdout(&output).contains("Extracted 0 records from 1 file (0 with a styling import)"));

    Ok(())
}

#[test]
fn test_missing_corpus_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .extract_command()
        .args(["--db", "missing.db", "--out", "set.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Corpus database not found"));
    assert!(!test.root().join("set.json").exists());

    Ok(())
}

#[test]
fn test_output_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".styledsetrc.json",
        r#"{ "output": "data/styled.json", "stylingModules": ["goober"] }"#,
    )?;
    test.write_archive_file(
        "acme/web",
        "App.jsx",
        "import { styled } from 'goober';\nconst Title = styled.h1`margin: 0;`;",
    )?;

    let output = test.extract_command().args(["--archives", "archives"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let dataset = test.read_dataset("data/styled.json")?;
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset[0]["el"], "h1");

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".styledsetrc.json", r#"{ "stylingModules": [] }"#)?;
    test.write_archive_file("acme/web", "App.jsx", BUTTON_JSX)?;

    let output = test
        .extract_command()
        .args(["--archives", "archives", "--out", "set.json"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("stylingModules"));

    Ok(())
}

#[test]
fn test_corpus_source_required() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.extract_command().output()?;

    assert!(!output.status.success());

    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".styledsetrc.json",
        r#"{ "output": "styled.json", "stylingModules": ["goober"] }"#,
    )?;
    test.write_archive_file(
        "acme/web",
        "App.jsx",
        "import { styled } from 'goober';\nconst Title = styled.h1`margin: 0;`;",
    )?;
    test.write_file("work/.keep", "")?;

    let output = test
        .extract_command()
        .current_dir(test.root().join("work"))
        .args(["--archives", "../archives"])
        .output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let dataset = test.read_dataset("work/styled.json")?;
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset[0]["name_o"], "Title");

    Ok(())
}
