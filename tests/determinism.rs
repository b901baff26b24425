use count_ledger::{Ledger, PackedCount, RankConfig, RankingReport, Ranker, RankingRule, ThresholdFilter};

const CORPUS: &str = "the quick brown fox jumps over the lazy dog the fox";
const EXACT_HITS: [&str; 3] = ["fox", "dog", "fox"];

fn ingest() -> Ledger<String> {
    let mut ledger = Ledger::new();
    for word in CORPUS.split_whitespace() {
        ledger.add_search(word.to_string());
    }
    for word in EXACT_HITS {
        ledger.add_exact(word.to_string());
    }
    ledger
}

#[test]
fn end_to_end_ingest_prune_rank_is_deterministic() {
    let run = || {
        let mut ledger = ingest();
        let mut filter = ThresholdFilter::new(2);
        filter.retain(&mut ledger);
        (ledger.descending(), filter.max(), filter.sum())
    };

    let (first, max1, sum1) = run();
    let (second, max2, sum2) = run();

    assert_eq!(first, second);
    assert_eq!((max1, sum1), (max2, sum2));

    // fox: exact 2 search 2; dog: exact 1 search 1; the: search 3; others pruned
    let keys: Vec<&str> = first.iter().map(|e| e.key().as_str()).collect();
    assert_eq!(keys, vec!["fox", "dog", "the"]);

    assert_eq!(max1, PackedCount::pack(2, 2).raw());
}

#[test]
fn fingerprint_ignores_generation_time() {
    let ledger = ingest();
    let ranker = Ranker::default();

    let report1 = RankingReport::build(&ranker, &ledger, PackedCount::ZERO).unwrap();
    let report2 = RankingReport::build(&ranker, &ledger.clone(), PackedCount::ZERO).unwrap();

    assert_eq!(report1.fingerprint, report2.fingerprint);
    assert_eq!(
        serde_json::to_string(&report1.entries).unwrap(),
        serde_json::to_string(&report2.entries).unwrap()
    );
}

#[test]
fn fingerprint_tracks_config_and_limit() {
    let ledger = ingest();
    let default_ranker = Ranker::default();
    let combined_ranker = Ranker::new(RankConfig::with_rule(RankingRule::Combined));

    let base = RankingReport::build(&default_ranker, &ledger, PackedCount::ZERO).unwrap();
    let other_rule = RankingReport::build(&combined_ranker, &ledger, PackedCount::ZERO).unwrap();
    let other_limit = RankingReport::build(&default_ranker, &ledger, PackedCount::ONE_SEARCH).unwrap();

    assert_ne!(base.fingerprint, other_rule.fingerprint);
    assert_ne!(base.fingerprint, other_limit.fingerprint);
}
