use folio_core::{
    AlbumCatalog, AlbumFilter, AlbumFormat, Overflow, Page, SiteConfig, TransitionStep,
    Transitioner, classify, decode_fragment, encode_fragment, filter_albums,
};

const SHIPPED_CATALOG: &str = include_str!("../../folio-web/static/content/albums.json");
const SHIPPED_CONFIG: &str = include_str!("../../folio-web/static/site.json");

fn titles(catalog: &AlbumCatalog, filter: AlbumFilter) -> Vec<String> {
    filter_albums(&catalog.albums, filter)
        .into_iter()
        .map(|album| album.title)
        .collect()
}

#[test]
fn two_record_catalog_filters_as_documented() {
    let json = r#"[
        {"title":"X","artist":"A","year":2024,"type":["ep"],"role":["producer"],"img":"x.jpg","url":"https://x"},
        {"title":"Y","artist":"B","year":2020,"type":["album","featured"],"role":["mixer"],"img":"y.jpg","url":"https://y"}
    ]"#;
    let catalog = AlbumCatalog::from_json(json).expect("catalog parses");
    assert_eq!(titles(&catalog, AlbumFilter::Eps), ["X"]);
    assert_eq!(titles(&catalog, AlbumFilter::Featured), ["Y"]);
    assert_eq!(titles(&catalog, AlbumFilter::Recent), ["X"]);
    assert_eq!(titles(&catalog, AlbumFilter::All), ["X", "Y"]);
    assert_eq!(
        titles(&catalog, AlbumFilter::from_name("not-a-filter")),
        ["X", "Y"]
    );
}

#[test]
fn shipped_catalog_is_renderable() {
    let catalog = AlbumCatalog::from_json(SHIPPED_CATALOG).expect("shipped catalog parses");
    assert!(!catalog.is_empty());
    assert!(catalog.issues().is_empty(), "{:?}", catalog.issues());
}

#[test]
fn shipped_catalog_filter_counts() {
    let catalog = AlbumCatalog::from_json(SHIPPED_CATALOG).expect("shipped catalog parses");
    let count = |filter| filter_albums(&catalog.albums, filter).len();
    assert_eq!(count(AlbumFilter::All), catalog.len());
    assert_eq!(
        count(AlbumFilter::Albums) + count(AlbumFilter::Eps) + count(AlbumFilter::Singles),
        catalog.len(),
        "every record has exactly one format"
    );
    assert_eq!(count(AlbumFilter::Albums), 3);
    assert_eq!(count(AlbumFilter::Eps), 2);
    assert_eq!(count(AlbumFilter::Singles), 1);
    assert_eq!(count(AlbumFilter::Featured), 2);
    assert_eq!(count(AlbumFilter::Recent), 2);
}

#[test]
fn untyped_shipped_record_defaults_to_album() {
    let catalog = AlbumCatalog::from_json(SHIPPED_CATALOG).expect("shipped catalog parses");
    let untyped = catalog
        .albums
        .iter()
        .find(|album| album.kinds.is_empty())
        .expect("catalog keeps one untyped record");
    assert_eq!(classify(untyped).format, AlbumFormat::Album);
}

#[test]
fn shipped_config_matches_defaults() {
    let config = SiteConfig::from_json(SHIPPED_CONFIG).expect("shipped config parses");
    assert_eq!(config, SiteConfig::default_config());
}

#[test]
fn every_page_round_trips_through_its_fragment() {
    for page in Page::ALL {
        assert_eq!(decode_fragment(encode_fragment(page)), page);
    }
}

#[test]
fn back_navigation_returns_home_with_home_styling() {
    let config = SiteConfig::default_config();
    let mut machine = Transitioner::default();
    let mut home_reveal = None;

    for target in [Page::Audio, Page::Home] {
        let ticket = machine.begin(target).expect("ticket");
        let steps = machine.plan(ticket, &config, 1440.0);
        for step in &steps {
            assert!(machine.record(ticket, step));
            if let TransitionStep::Reveal(reveal) = step
                && reveal.page == Page::Home
            {
                home_reveal = Some(reveal.clone());
            }
        }
        if target == Page::Home {
            assert!(steps.contains(&TransitionStep::FadeOutVisible));
        }
    }

    assert_eq!(machine.current(), Page::Home);
    let reveal = home_reveal.expect("home was revealed");
    assert_eq!(reveal.body_background.as_deref(), Some("#121212"));
    assert_eq!(reveal.body_overflow, Overflow::Hidden);
}
