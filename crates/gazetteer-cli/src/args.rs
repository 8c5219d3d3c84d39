use clap::Parser;

/// CLI arguments for the gazetteer batch run.
///
/// The run is fully determined by built-in constants; the parser only provides
/// `--help` and `--version`.
#[derive(Debug, Parser)]
#[command(
    name = "gazetteer",
    version,
    about = "Download the Burkina Faso GeoNames dump and write the CSV and workbook reports",
    long_about = "Downloads BF.zip from GeoNames, extracts BF.txt, cleans it into \
                  burkina_location.csv, runs the four fixed analyses and writes \
                  gounghin.csv and mini_projet.xlsx into the current directory."
)]
pub struct CliArgs {}
