use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created paths.yml"));

    let content = test.read_file("paths.yml")?;
    assert!(content.contains("data_catalogs:"));
    assert!(content.contains("catalogs/reconstruction.json"));
    assert!(content.contains("ERA5-Land"));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file("paths.yml", "extract: {}\n")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("paths.yml already exists"));
    assert_eq!(test.read_file("paths.yml")?, "extract: {}\n");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file(
        "catalogs/reconstruction.json",
        r#"{"catalog_file": "reconstruction.csv"}"#,
    )?;
    test.write_file(
        "catalogs/reconstruction.csv",
        "source,variable,frequency\nCaSR,\"(pr,)\",1hr\n",
    )?;

    let output = test.build_command().output()?;
    assert!(
        output.status.success(),
        "Build should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert!(test.root().join("variables_by_source.html").exists());

    Ok(())
}
