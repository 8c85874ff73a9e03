use noteease_core::{
    InMemoryNoteRepository, ListPresenter, ManualClock, NoteDraft, NoteRepository, NoteStore,
    EMPTY_LIST_MESSAGE,
};
use std::sync::Arc;
use std::time::Duration;

fn seeded_repo_with_clock() -> (Arc<InMemoryNoteRepository>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(1_000));
    let repo = InMemoryNoteRepository::with_clock(NoteStore::new(), clock.clone());
    repo.upsert(&NoteDraft::new("Groceries", "milk, eggs"));
    clock.advance(1);
    repo.upsert(&NoteDraft::new("Work", "ship the release"));
    clock.advance(1);
    repo.upsert(&NoteDraft::new("Ideas", "Buy more MILK crates"));
    (Arc::new(repo), clock)
}

fn seeded_repo() -> Arc<InMemoryNoteRepository> {
    seeded_repo_with_clock().0
}

#[test]
fn empty_query_shows_full_collection_in_store_order() {
    let repo = seeded_repo();
    let presenter = ListPresenter::new(repo.clone());

    let state = presenter.state();
    assert_eq!(state.query, "");
    assert!(!state.is_refreshing);
    let titles: Vec<_> = state.notes.iter().map(|note| note.title.as_str()).collect();
    assert_eq!(titles, vec!["Ideas", "Work", "Groceries"]);
    assert_eq!(presenter.all_notes().len(), 3);
}

#[test]
fn query_filters_title_and_content_case_insensitively() {
    let repo = seeded_repo();
    let mut presenter = ListPresenter::new(repo.clone());

    presenter.on_query_change("Milk");
    let titles: Vec<_> = presenter
        .state()
        .notes
        .iter()
        .map(|note| note.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Ideas", "Groceries"]);

    presenter.on_query_change("WORK");
    assert_eq!(presenter.state().notes.len(), 1);

    presenter.on_query_change("nothing matches");
    assert!(presenter.state().is_empty());

    presenter.on_query_change("");
    assert_eq!(presenter.state().notes.len(), 3);
}

#[test]
fn filtered_view_is_subset_matching_query() {
    let repo = seeded_repo();
    let mut presenter = ListPresenter::new(repo.clone());

    for query in ["e", "ship", "CRATES", "x"] {
        presenter.on_query_change(query);
        let needle = query.to_lowercase();
        for note in &presenter.state().notes {
            assert!(repo.get(note.id).is_some(), "filtered note should exist in the store");
            assert!(
                note.title.to_lowercase().contains(&needle)
                    || note.content.to_lowercase().contains(&needle)
            );
        }
    }
}

#[test]
fn poll_applies_store_writes_with_active_query() {
    let repo = seeded_repo();
    let mut presenter = ListPresenter::new(repo.clone());
    presenter.on_query_change("milk");
    assert!(!presenter.poll());

    repo.upsert(&NoteDraft::new("Bakery", "milk bread"));
    assert!(presenter.poll());
    assert_eq!(presenter.state().notes.len(), 3);
    assert_eq!(presenter.state().query, "milk");
    assert_eq!(presenter.all_notes().len(), 4);
}

#[test]
fn refresh_keeps_content_and_clears_refreshing_flag() {
    let repo = seeded_repo();
    let mut presenter = ListPresenter::new(repo.clone());
    let before = presenter.state().clone();

    presenter.refresh();
    assert_eq!(presenter.state(), &before);
    assert!(!presenter.state().is_refreshing);
}

#[test]
fn cards_project_snippet_and_label() {
    let repo = Arc::new(InMemoryNoteRepository::with_clock(
        NoteStore::new(),
        Arc::new(ManualClock::new(1_709_586_300_000)),
    ));
    repo.upsert(&NoteDraft::new("Groceries", "milk,\neggs"));
    let presenter = ListPresenter::new(repo.clone());

    let cards = presenter.state().cards();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].title, "Groceries");
    assert_eq!(cards[0].snippet, "milk, eggs");
    assert_eq!(cards[0].updated_label, "Mar 4, 2024 9:05 PM");
}

#[test]
fn empty_store_renders_empty_state() {
    let repo = Arc::new(InMemoryNoteRepository::new(NoteStore::new()));
    let presenter = ListPresenter::new(repo);
    assert!(presenter.state().is_empty());
    assert!(EMPTY_LIST_MESSAGE.starts_with("No notes yet."));
}

#[tokio::test]
async fn changed_wakes_on_store_emission() {
    let (repo, clock) = seeded_repo_with_clock();
    let mut presenter = ListPresenter::new(repo.clone());

    let writer = repo.clone();
    clock.advance(1);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        writer.upsert(&NoteDraft::new("Late", "arrival"));
    });

    assert!(presenter.changed().await);
    assert_eq!(presenter.state().notes[0].title, "Late");
    assert_eq!(presenter.all_notes().len(), 4);
}

#[test]
fn write_at_same_timestamp_keeps_every_note_visible() {
    let repo = seeded_repo();
    let mut presenter = ListPresenter::new(repo.clone());

    repo.upsert(&NoteDraft::new("Tied", "same millisecond as Ideas"));
    assert!(presenter.poll());
    let titles: Vec<_> = presenter
        .state()
        .notes
        .iter()
        .map(|note| note.title.as_str())
        .collect();
    assert_eq!(titles.len(), 4);
    assert!(titles.contains(&"Tied"));
    assert_eq!(titles[2..], ["Work", "Groceries"]);
}

#[test]
fn whitespace_query_shows_everything() {
    let repo = seeded_repo();
    let mut presenter = ListPresenter::new(repo.clone());

    presenter.on_query_change("   ");
    assert_eq!(presenter.state().notes.len(), 3);
    assert!(presenter
        .state()
        .notes
        .iter()
        .all(|note| note.matches(&presenter.state().query)));
}
