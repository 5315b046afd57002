use std::{collections::BTreeSet, sync::Arc, thread};

use quotebook::{context::CallContext, core::store::QuoteStore, quote::Quote};

const WORKERS: usize = 100;

#[test]
fn concurrent_distinct_inserts_all_land_with_unique_ids() {
    let store = Arc::new(QuoteStore::new());

    let handles: Vec<_> = (0..WORKERS)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut quote = Quote::new("Concurrent", format!("quote {i}"));
                store
                    .insert(&CallContext::background(), &mut quote)
                    .map(|()| quote.id)
            })
        })
        .collect();

    let mut returned = BTreeSet::new();
    for handle in handles {
        let id = handle.join().expect("worker panicked").expect("insert");
        assert!(returned.insert(id), "id {id} handed out twice");
    }

    let quotes = store.list_all(&CallContext::background()).expect("list");
    assert_eq!(quotes.len(), WORKERS);
    let listed: BTreeSet<_> = quotes.iter().map(|q| q.id).collect();
    assert_eq!(listed, returned);
    assert_eq!(listed, (1..=WORKERS as u64).collect::<BTreeSet<_>>());
}

#[test]
fn concurrent_identical_inserts_store_exactly_one() {
    let store = Arc::new(QuoteStore::new());

    let handles: Vec<_> = (0..WORKERS)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let mut quote = Quote::new("Concurrent", "same words");
                store.insert(&CallContext::background(), &mut quote).is_ok()
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().expect("worker panicked"))
        .filter(|ok| *ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn readers_and_writers_interleave_without_losing_updates() {
    let store = Arc::new(QuoteStore::new());
    let ctx = CallContext::background();
    for i in 0..50 {
        let mut quote = Quote::new("Seed", format!("seed {i}"));
        store.insert(&ctx, &mut quote).expect("seed insert");
    }

    let writers: Vec<_> = (0..4)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let ctx = CallContext::background();
                for i in 0..25 {
                    let mut quote = Quote::new("Writer", format!("w{w}-{i}"));
                    store.insert(&ctx, &mut quote).expect("insert");
                    store.delete(&ctx, quote.id).expect("delete");
                    let mut keep = Quote::new("Writer", format!("keep w{w}-{i}"));
                    store.insert(&ctx, &mut keep).expect("insert");
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let ctx = CallContext::background();
                for _ in 0..100 {
                    let all = store.list_all(&ctx).expect("list");
                    let ids: BTreeSet<_> = all.iter().map(|q| q.id).collect();
                    assert_eq!(ids.len(), all.len());
                    store.random_quote(&ctx).expect("random");
                    store.quotes_by_author(&ctx, "Seed").expect("seed quotes");
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().expect("thread panicked");
    }

    let all = store.list_all(&ctx).expect("list");
    assert_eq!(all.len(), 150);
    store.inspect(|table| {
        assert_eq!(table.high_water_mark(), 150);
        assert!(table.free_ids().is_empty());
    });
}
