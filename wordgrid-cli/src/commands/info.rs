//! Region, grid and vocabulary summary.

use crate::error::CliError;
use crate::runner::CliRunner;

/// Run the info command.
pub fn run(runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("info");
    let converter = runner.create_converter()?;

    let region = converter.region();
    let indexer = converter.indexer();
    let extent = converter.extent();
    let cell_count = converter.cell_count();
    let capacity = converter.capacity();

    println!("wordgrid v{}", wordgrid::VERSION);
    println!();
    println!("Region");
    println!("  Latitude:   [{}, {})", region.min_lat(), region.max_lat());
    println!("  Longitude:  [{}, {})", region.min_lng(), region.max_lng());
    println!("  Reference:  {:.4} degrees latitude", region.reference_latitude());
    println!("  Cell size:  {} m", region.cell_size_meters());
    println!();
    println!("Grid");
    println!("  Extent:     {}", extent);
    println!("  Cells:      {}", cell_count);
    println!(
        "  Step:       {:.9} deg lat x {:.9} deg lng",
        indexer.lat_step(),
        indexer.lng_step()
    );
    println!();
    println!("Vocabulary");
    match &runner.config().vocabulary.path {
        Some(path) => println!("  Source:     {}", path.display()),
        None => println!("  Source:     generated"),
    }
    println!("  Words:      {}", converter.vocabulary().len());
    println!("  Addresses:  {}", capacity);
    println!(
        "  Used:       {:.2}%",
        cell_count as f64 / capacity as f64 * 100.0
    );

    Ok(())
}
