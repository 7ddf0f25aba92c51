use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_files_lists_styled_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_archive_file(
        "acme/web",
        "src/A.jsx",
        "import styled from 'styled-components';",
    )?;
    test.write_archive_file("acme/web", "src/B.jsx", "import React from 'react';")?;
    test.write_archive_file(
        "zed/ui",
        "Tab.tsx",
        "import styled, { css } from \"@emotion/styled\";",
    )?;

    let output = test.files_command().args(["--archives", "archives"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "acme/web::src/A.jsx\nzed/ui::Tab.tsx\n\u{2713} 2 of 3 files import a styling library\n"
    );

    Ok(())
}

#[test]
fn test_files_from_db() -> Result<()> {
    let test = CliTest::new()?;
    test.write_db(
        "s.db",
        &[
            ("r", "a.jsx", "jsx", "import styled from 'linaria/react';"),
            ("r", "b.js", "js", "import styled from 'linaria/react';"),
        ],
    )?;

    let output = test.files_command().args(["--db", "s.db"]).output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).starts_with("r::a.jsx\n"));
    assert!(stdout(&output).contains("1 of 1 file import a styling library"));

    Ok(())
}
