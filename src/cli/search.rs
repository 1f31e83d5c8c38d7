use kapack::core::KapResult;

// Placeholder until a module registry exists to search against.
pub fn run(query: String) -> KapResult<()> {
    println!("Searching for package: {}", query);
    println!("Search is not implemented yet.");
    Ok(())
}
