use base1000::CorpusRegistry;

pub fn handle(json: bool, config: &CorpusRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let mut corpora: Vec<_> = config.corpora.iter().collect();
    corpora.sort_by_key(|(name, _)| *name);

    if json {
        let entries: Vec<_> = corpora
            .iter()
            .map(|(name, corpus)| {
                serde_json::json!({
                    "name": name,
                    "description": corpus.description,
                    "builtin": corpus.builtin,
                    "files": corpus.files,
                    "default": *name == config.default_corpus(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Available corpora:\n");
    for (name, corpus) in corpora {
        let marker = if name == config.default_corpus() { "*" } else { " " };
        let texts = corpus.builtin.len() + corpus.files.len();
        println!(
            "{} {:<15} {:>2} text(s)  {}",
            marker,
            name,
            texts,
            corpus.description.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
