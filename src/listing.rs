use chromiumoxide::Page;
use serde::Deserialize;

use crate::{records::CreatorStub, Result};

#[derive(Deserialize)]
struct RawStub {
    name: String,
    url: String,
}

// Walks the listing grid in DOM order. A page without the grid container
// yields an empty array, not an error.
const LISTING_SCRIPT: &str = r#"(() => {
    const grid = document.querySelector("main div.grid");
    if (!grid) return "[]";
    const stubs = Array.from(grid.querySelectorAll("a[href]")).map(a => {
        const heading = a.querySelector("h1, h2, h3, h4, h5, h6");
        return { name: heading ? heading.textContent : "", url: a.href };
    });
    return JSON.stringify(stubs);
})()"#;

/// Extracts every creator stub visible on a loaded category page, in
/// discovery order. Navigation and settling are the caller's job.
pub async fn extract_listing(page: &Page) -> Result<Vec<CreatorStub>> {
    let raw: String = page.evaluate(LISTING_SCRIPT).await?.into_value()?;
    let stubs: Vec<RawStub> = serde_json::from_str(&raw)?;

    Ok(stubs
        .into_iter()
        .map(|stub| CreatorStub::new(&stub.name, stub.url))
        .collect())
}
