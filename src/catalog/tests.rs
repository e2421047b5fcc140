use super::*;
use crate::config::ListingOrder;
use crate::library::ValidationError;

fn titles(tracks: &[&crate::library::Track]) -> Vec<String> {
    tracks.iter().map(|t| t.title().to_string()).collect()
}

#[test]
fn add_numbers_tracks_and_skips_ids_for_rejects() {
    let mut catalog = Catalog::new();

    let a = catalog.add("Alpha", "One", 100, 3).unwrap();
    assert_eq!(
        catalog.add("Beta", "Two", 100, 7),
        Err(ValidationError::RatingOutOfRange(7))
    );
    let b = catalog.add("Gamma", "Three", 100, 4).unwrap();

    assert_eq!(a.get(), 1);
    assert_eq!(b.get(), 2);
    assert_eq!(catalog.len(), 2);
}

#[test]
fn with_first_id_offsets_numbering() {
    let mut catalog = Catalog::with_first_id(100);
    assert_eq!(catalog.add("Alpha", "One", 100, 3).unwrap().get(), 100);
}

#[test]
fn add_with_tags_keeps_track_when_some_tags_are_rejected() {
    let mut catalog = Catalog::new();
    let id = catalog
        .add_with_tags("Song", "Artist", 90, 2, ["Rock", "rock", " ", "Live"])
        .unwrap();

    let track = catalog.get(id).unwrap();
    assert_eq!(track.tags().iter().collect::<Vec<_>>(), vec!["Rock", "Live"]);
}

#[test]
fn get_mut_and_remove_by_id() {
    let mut catalog = Catalog::new();
    let a = catalog.add("Alpha", "One", 100, 3).unwrap();
    let b = catalog.add("Beta", "Two", 100, 3).unwrap();

    catalog.get_mut(a).unwrap().set_rating(5).unwrap();
    assert_eq!(catalog.get(a).unwrap().rating(), 5);

    let removed = catalog.remove(b).unwrap();
    assert_eq!(removed.title(), "Beta");
    assert!(catalog.get(b).is_none());
    assert!(catalog.remove(b).is_none());

    let c = catalog.add("Gamma", "Three", 100, 3).unwrap();
    assert_eq!(c.get(), 3);
}

#[test]
fn search_keeps_insertion_order() {
    let mut catalog = Catalog::new();
    catalog.add("Black Dog", "Led Zeppelin", 296, 5).unwrap();
    catalog.add("Paranoid", "Black Sabbath", 170, 4).unwrap();
    catalog
        .add_with_tags("Imagine", "John Lennon", 183, 5, ["piano"])
        .unwrap();

    assert_eq!(
        titles(&catalog.search("BLACK")),
        vec!["Black Dog", "Paranoid"]
    );
    assert_eq!(titles(&catalog.search("pia")), vec!["Imagine"]);
    assert!(catalog.search("").is_empty());
}

#[test]
fn ranked_sorts_best_first() {
    let mut catalog = Catalog::new();
    catalog.add("B", "X", 10, 5).unwrap();
    catalog.add("A", "X", 10, 5).unwrap();
    catalog.add("A", "X", 10, 3).unwrap();

    let ranked = catalog.ranked();
    let ids: Vec<u64> = ranked.iter().map(|t| t.id().get()).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn listing_applies_filter_then_order() {
    let mut catalog = Catalog::new();
    catalog.add("Zebra Song", "Rock Band", 10, 2).unwrap();
    catalog.add("Apple Song", "Pop Band", 10, 2).unwrap();
    catalog.add("Rock Anthem", "Someone", 10, 5).unwrap();

    assert_eq!(
        titles(&catalog.listing(ListingOrder::Insertion, None)),
        vec!["Zebra Song", "Apple Song", "Rock Anthem"]
    );
    assert_eq!(
        titles(&catalog.listing(ListingOrder::Ranked, None)),
        vec!["Rock Anthem", "Apple Song", "Zebra Song"]
    );
    assert_eq!(
        titles(&catalog.listing(ListingOrder::Ranked, Some("rock"))),
        vec!["Rock Anthem", "Zebra Song"]
    );
    assert_eq!(
        titles(&catalog.listing(ListingOrder::Insertion, Some("   "))),
        vec!["Zebra Song", "Apple Song", "Rock Anthem"]
    );
}
