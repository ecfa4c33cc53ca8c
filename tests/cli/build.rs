use anyhow::Result;

use crate::{CliTest, stderr, stdout};

const RECONSTRUCTION_JSON: &str = r#"{
  "esmcat_version": "0.1.0",
  "id": "reconstruction",
  "description": "Reconstruction datasets",
  "catalog_file": "tables/reconstruction.csv",
  "attributes": []
}"#;

const RECONSTRUCTION_CSV: &str = "\
id,type,processing_level,source,variable,frequency,path
era5_pr,reconstruction,raw,ERA5-Land,\"(pr,)\",day,/data/era5/pr.zarr
era5_pr_dup,reconstruction,raw,ERA5-Land,pr,day,/data/era5/pr2.zarr
era5_tas,reconstruction,raw,ERA5-Land,\"('tas',)\",1hr,/data/era5/tas.zarr
emdna_pr,reconstruction,raw,EMDNA,pr,day,/data/emdna/pr.zarr
era5_global,reconstruction,raw,ERA5,pr,day,/data/era5-global/pr.zarr
";

const OBS_CSV: &str = "\
source,variable,frequency
CaSR,\"(pr,)\",1hr
CaSR,???,day
";

fn project() -> Result<CliTest> {
    let test = CliTest::with_catalogs(&["catalogs/reconstruction.json", "catalogs/obs.csv"])?;
    test.write_file("catalogs/reconstruction.json", RECONSTRUCTION_JSON)?;
    test.write_file("catalogs/tables/reconstruction.csv", RECONSTRUCTION_CSV)?;
    test.write_file("catalogs/obs.csv", OBS_CSV)?;
    Ok(test)
}

#[test]
fn test_build_writes_report() -> Result<()> {
    let test = project()?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("variable  frequency  CaSR  EMDNA  ERA5-Land"));
    assert!(out.contains("pr        1hr        Yes   No     No"));
    assert!(out.contains("pr        day        No    Yes    Yes"));
    assert!(out.contains("tas       1hr        No    No     Yes"));
    assert!(out.contains("(3 rows × 3 sources from 2 catalogs)"));

    let html = test.read_file("variables_by_source.html")?;
    assert!(html.contains("<th class=\"col_heading\">CaSR</th><th class=\"col_heading\">EMDNA</th><th class=\"col_heading\">ERA5-Land</th>"));
    assert!(!html.contains(">ERA5<"));
    assert_eq!(html.matches("<tr>").count(), 2 + 3);

    Ok(())
}

#[test]
fn test_build_source_override() -> Result<()> {
    let test = project()?;

    let output = test
        .build_command()
        .args(["--source", "EMDNA", "--source", "ERA5"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let html = test.read_file("variables_by_source.html")?;
    assert!(html.contains("<th class=\"col_heading\">EMDNA</th><th class=\"col_heading\">ERA5</th></tr>"));
    assert!(!html.contains("CaSR"));
    assert!(stdout(&output).contains("(1 row × 2 sources from 2 catalogs)"));

    Ok(())
}

#[test]
fn test_build_sources_from_config() -> Result<()> {
    let test = project()?;
    test.write_file(
        "paths.yml",
        "extract:\n  reconstruction:\n    search_data_catalogs:\n      data_catalogs: [catalogs/obs.csv]\n\
         variables_by_source:\n  output: reports/presence.html\n  sources: [CaSR]\n",
    )?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let html = test.read_file("reports/presence.html")?;
    assert!(html.contains("<th class=\"col_heading\">CaSR</th></tr>"));

    Ok(())
}

#[test]
fn test_build_missing_catalog_writes_nothing() -> Result<()> {
    let test = CliTest::with_catalogs(&["catalogs/obs.csv", "catalogs/gone.json"])?;
    test.write_file("catalogs/obs.csv", OBS_CSV)?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.starts_with("Error: Failed to open catalog"), "stderr: {}", err);
    assert!(err.contains("gone.json"));
    assert!(!test.root().join("variables_by_source.html").exists());

    Ok(())
}

#[test]
fn test_build_catalog_missing_column() -> Result<()> {
    let test = CliTest::with_catalogs(&["catalogs/obs.csv"])?;
    test.write_file("catalogs/obs.csv", "source,variable\nCaSR,pr\n")?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("has no 'frequency' column"));
    assert!(!test.root().join("variables_by_source.html").exists());

    Ok(())
}

#[test]
fn test_build_without_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No paths.yml found"));

    Ok(())
}

#[test]
fn test_build_config_only_from_flag_or_discovery() -> Result<()> {
    let test = CliTest::with_file(
        "alt/paths.yml",
        "extract:\n  reconstruction:\n    search_data_catalogs:\n      data_catalogs: []\n",
    )?;

    let output = test
        .build_command()
        .env("VARMATRIX_CONFIG", "alt/paths.yml")
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("No paths.yml found"));

    Ok(())
}

#[test]
fn test_build_empty_catalog_list() -> Result<()> {
    let test = CliTest::with_file(
        "paths.yml",
        "extract:\n  reconstruction:\n    search_data_catalogs:\n      data_catalogs: []\n",
    )?;

    let output = test.build_command().output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("the matrix is empty"));
    assert!(stdout(&output).contains("(0 rows × 0 sources from 0 catalogs)"));
    let html = test.read_file("variables_by_source.html")?;
    assert!(html.contains("<table>"));
    assert!(!html.contains("<td"));

    Ok(())
}

#[test]
fn test_build_quiet() -> Result<()> {
    let test = project()?;

    let output = test.build_command().arg("--quiet").output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(!out.contains("frequency"));
    assert!(out.contains("Wrote"));

    Ok(())
}

#[test]
fn test_build_verbose_reports_dropped_records() -> Result<()> {
    let test = project()?;

    let output = test.build_command().arg("-v").output()?;

    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("Using config:"));
    assert!(err.contains("reconstruction.json: 4 of 5 rows kept"));
    assert!(err.contains("obs.csv: 2 of 2 rows kept"));
    assert!(err.contains(
        "warning: skipped CaSR record (variable \"???\", frequency \"day\"): no variable name"
    ));

    Ok(())
}

#[test]
fn test_build_explicit_config_and_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "config/paths.yml",
        "extract:\n  reconstruction:\n    search_data_catalogs:\n      data_catalogs: [\"../catalogs/*.csv\"]\n",
    )?;
    test.write_file("catalogs/a.csv", "source,variable,frequency\nEMDNA,pr,day\n")?;
    test.write_file("catalogs/b.csv", "source,variable,frequency\nPCICBlend,tasmax,day\n")?;

    let output = test
        .build_command()
        .args(["--config", "config/paths.yml", "--output", "out/matrix.html"])
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("(2 rows × 2 sources from 2 catalogs)"));
    let html = test.read_file("out/matrix.html")?;
    assert!(html.contains("PCICBlend"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("build"));
    assert!(out.contains("init"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));

    Ok(())
}
