use kapack::core::KapResult;

// Placeholder; updating a module will need pull support in the
// version-control collaborator.
pub fn run(url: String) -> KapResult<()> {
    println!("Updating package: {}", url);
    println!("Update is not implemented yet.");
    Ok(())
}
