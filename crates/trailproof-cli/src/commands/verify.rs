//! Verify command implementation.

use crate::commands::open_existing;

pub fn run(
    journal: String,
    signing_key: Option<String>,
    strict: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let trail = open_existing(&journal, signing_key)?;
    let result = trail.verify()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.intact {
        println!("intact: {} events verified", result.total);
    } else {
        let broken: Vec<String> = result.broken.iter().map(|i| i.to_string()).collect();
        println!(
            "broken: {} of {} events fail verification (indices {})",
            result.broken.len(),
            result.total,
            broken.join(", ")
        );
    }

    if strict && !result.intact {
        return Err("chain verification failed".into());
    }

    Ok(())
}
