use base1000::{CorpusIndex, encode, encode_seeded};

pub fn handle(
    text: &str,
    seed: Option<u64>,
    index: &CorpusIndex,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoded = match seed {
        Some(seed) => encode_seeded(text, index, seed)?,
        None => encode(text, index)?,
    };
    println!("{}", encoded);
    Ok(())
}
