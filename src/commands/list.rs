//! List loaded content

use anyhow::Result;

use crate::content::ContentStore;
use crate::Site;

/// Load every content file and print what was found
pub async fn run(site: &Site, json: bool) -> Result<()> {
    let store = site.load_content().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&store)?);
    } else {
        print!("{}", summary(&store, site.config.content_files.len()));
    }

    Ok(())
}

/// One line per record: its name and field names
pub fn summary(store: &ContentStore, expected: usize) -> String {
    let mut out = format!("Content ({}/{}):\n", store.len(), expected);
    for (name, record) in store.iter() {
        let keys: Vec<_> = record.keys().collect();
        out.push_str(&format!("  {} [{}]\n", name, keys.join(", ")));
    }
    out
}
