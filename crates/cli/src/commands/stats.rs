use anyhow::{bail, Result};
use serde_json::json;
use slimsweep_analysis::{
    encode_alignment, nucleotide_diversity, tajimas_d, wattersons_theta, AlleleCounts,
};

/// Toy four-sample alignment used to sanity-check the statistics against
/// published implementations.
const DEMO_SEQUENCES: [&str; 4] = [
    "ATGCTAGCTAAT",
    "ATGCTAGCTATT",
    "ATGCGAGCTATT",
    "ATGCGAGCTATA",
];

/// Compute π, θ_W and Tajima's D over the built-in demo alignment.
pub fn print_stats(format: &str) -> Result<()> {
    let alignment = encode_alignment(&DEMO_SEQUENCES)?;
    let counts = AlleleCounts::from_alignment(&alignment);

    let pi = nucleotide_diversity(&counts);
    let theta_w = wattersons_theta(&counts);
    let tajima = tajimas_d(&counts);

    match format {
        "pretty" => {
            println!("📊 Population Genetics Summary");
            println!("================================");
            println!("Sequences analyzed: {}", counts.haplotypes());
            println!("Sequence length: {} bp", counts.sites());
            println!("Segregating sites: {}", counts.segregating_sites());
            println!();
            println!("Watterson's theta (θ_W): {theta_w:.6}");
            println!("Nucleotide diversity (π): {pi:.6}");
            println!("Tajima's D: {tajima:.4}");
        }
        "json" => {
            let value = json!({
                "sequences": counts.haplotypes(),
                "length": counts.sites(),
                "segregating_sites": counts.segregating_sites(),
                "wattersons_theta": theta_w,
                "nucleotide_diversity": pi,
                "tajimas_d": tajima,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        other => bail!("Unknown format: {other} (expected 'pretty' or 'json')"),
    }

    Ok(())
}
