use binary_flag::{FlagError, MultipleBinaryFlag};

fn main() {
    println!("=== Binary Flag Examples ===\n");

    // Example 1: Tracking task completion
    let _ = example_checklist();

    // Example 2: Footprint per tier
    let _ = example_footprint();
}

fn example_checklist() -> Result<(), FlagError> {
    println!("Example 1: Five-step checklist");

    let mut steps = MultipleBinaryFlag::with_length(5)?;
    for step in [0, 2, 4] {
        steps.set_flag(step)?;
    }
    println!("  Progress: {}", steps);
    println!("  Done: {}", steps.get_flag()?);

    steps.set_flag(1)?;
    steps.set_flag(3)?;
    println!("  Progress: {}", steps);
    println!("  Done: {}", steps.get_flag()?);

    steps.dispose();
    println!("  After dispose: {:?}", steps.get_flag());
    println!();

    Ok(())
}

fn example_footprint() -> Result<(), FlagError> {
    println!("Example 2: Storage per tier");

    for length in [16, 48, 1000, 100_000] {
        let flags = MultipleBinaryFlag::new(length, true)?;
        println!(
            "  {:>7} flags -> {:?}, {} bytes",
            length,
            flags.tier(),
            flags.storage_bytes()
        );
    }

    Ok(())
}
