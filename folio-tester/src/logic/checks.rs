use anyhow::{Context, Result};
use folio_core::{
    AlbumCatalog, AlbumFilter, Page, decode_fragment, encode_fragment, filter_albums,
    history_push_for, location_hash,
};
use std::path::Path;

pub fn load_catalog(path: &Path) -> Result<AlbumCatalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    AlbumCatalog::from_json(&json).with_context(|| format!("parsing catalog {}", path.display()))
}

/// Record-level problems that would render a broken grid card.
pub fn catalog_failures(catalog: &AlbumCatalog) -> (usize, Vec<String>) {
    let mut failures: Vec<String> = catalog.issues().iter().map(ToString::to_string).collect();
    if catalog.is_empty() {
        failures.push("catalog has no albums".to_string());
    }
    (catalog.len() + 1, failures)
}

pub fn filter_counts(catalog: &AlbumCatalog) -> Vec<(AlbumFilter, usize)> {
    AlbumFilter::ALL
        .into_iter()
        .map(|filter| (filter, filter_albums(&catalog.albums, filter).len()))
        .collect()
}

/// Filters are idempotent, never invent records, and the format filters
/// partition the catalog.
pub fn filter_failures(catalog: &AlbumCatalog) -> (usize, Vec<String>) {
    let mut failures = Vec::new();
    let mut checks = 0;

    for filter in AlbumFilter::ALL {
        let once = filter_albums(&catalog.albums, filter);
        let twice = filter_albums(&once, filter);
        checks += 2;
        if once != twice {
            failures.push(format!("filter '{}' is not idempotent", filter.name()));
        }
        if once.iter().any(|album| !catalog.albums.contains(album)) {
            failures.push(format!("filter '{}' produced an unknown record", filter.name()));
        }
    }

    let all = filter_albums(&catalog.albums, AlbumFilter::All);
    checks += 1;
    if all != catalog.albums {
        failures.push("filter 'all' changed the catalog order or contents".to_string());
    }

    let by_format: usize = [AlbumFilter::Albums, AlbumFilter::Eps, AlbumFilter::Singles]
        .into_iter()
        .map(|filter| filter_albums(&catalog.albums, filter).len())
        .sum();
    checks += 1;
    if by_format != catalog.len() {
        failures.push(format!(
            "format filters cover {by_format} of {} albums",
            catalog.len()
        ));
    }

    (checks, failures)
}

pub fn routing_failures() -> (usize, Vec<String>) {
    let mut failures = Vec::new();
    let mut checks = 0;

    for page in Page::ALL {
        checks += 4;
        if decode_fragment(encode_fragment(page)) != page {
            failures.push(format!("{page} does not survive an encode/decode round trip"));
        }
        let hash = location_hash(page);
        if decode_fragment(&hash.to_uppercase()) != page
            || decode_fragment(&hash.to_lowercase()) != page
        {
            failures.push(format!("{page} fragment decoding is case-sensitive"));
        }
        if history_push_for(page, &hash).is_some() {
            failures.push(format!("{page} re-pushes history for its own URL"));
        }
        if page.is_content() && !hash.starts_with('#') {
            failures.push(format!("{page} is not addressed by a fragment"));
        }
    }

    checks += 1;
    if decode_fragment("#NoSuchPage") != Page::Home {
        failures.push("unknown fragments do not fall back to home".to_string());
    }

    (checks, failures)
}
