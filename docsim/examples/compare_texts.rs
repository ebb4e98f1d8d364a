use docsim::compare_texts;

fn main() {
    let original = "Welcome to Jimbocho, the town of books and curry! \
                    Its bookshops line the streets near the station.";
    let suspect = "Welcome to Jimbocho, the town of books and curry! \
                   Its bookshops line the avenues near the station.";

    let result = compare_texts(original, suspect);
    println!("nearDuplicate   = {:.4}", result.near_duplicate);
    println!("topicSimilarity = {:.4}", result.topic_similarity);
    println!("final           = {:.4}", result.final_score);
    for m in &result.matching_segments {
        println!("[{:.2}] {:?} <-> {:?}", m.score, m.text_a, m.text_b);
    }

    // Both sentences pair up with their counterparts.
    assert_eq!(result.matching_segments.len(), 2);
    assert!(result.near_duplicate > 0.3);
    assert!(result.final_score < 1.);
}
