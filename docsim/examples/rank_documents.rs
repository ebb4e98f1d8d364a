use docsim::{Comparator, MemoryStore};

fn main() {
    let store: MemoryStore = [
        ("a", "Welcome to Jimbocho, the town of books and curry!"),
        ("b", "Welcome to Jimbocho, the city of books and curry!"),
        ("c", "We welcome you to Jimbocho, the town of books and curry."),
        ("d", "Fresh snow covered the mountain pass overnight."),
    ]
    .into_iter()
    .collect();

    let comparator = Comparator::new(&store);
    let ranked = comparator.rank_against_all_in_parallel("a", Some(2)).unwrap();
    for c in &ranked {
        println!("{}\t{:.4}", c.id, c.final_score);
    }

    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|c| c.id != "d"));
}
