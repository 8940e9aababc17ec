//! Concurrent access tests.

use super::common::{create_result, ganjil, setup_db};
use std::sync::Arc;
use std::thread;
use uuid::Uuid;

#[test]
fn test_readers_never_see_a_mixed_or_empty_period() {
    let (db, _tmp) = setup_db();
    let db = Arc::new(db);
    let p = ganjil();
    let initial = Uuid::new_v4();
    let rows: Vec<_> = (1..=20).map(|s| create_result(&p, s, initial, 2)).collect();
    db.replace_results(&p, &rows).expect("initial replace");

    println!("=== CONCURRENT REPLACE TEST ===");
    println!("TRIGGER: 1 writer replacing 50 times, 4 readers scanning");

    let writer = {
        let db = Arc::clone(&db);
        let p = p.clone();
        thread::spawn(move || {
            for _ in 0..50 {
                let run = Uuid::new_v4();
                let rows: Vec<_> = (1..=20).map(|s| create_result(&p, s, run, 2)).collect();
                db.replace_results(&p, &rows).expect("replace");
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let db = Arc::clone(&db);
            let p = p.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    let stored = db.results_for_period(&p).expect("list");
                    assert_eq!(stored.len(), 20, "period must never look empty or partial");
                    let run = stored[0].run_id;
                    assert!(stored.iter().all(|r| r.run_id == run), "rows from two runs");
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for r in readers {
        r.join().unwrap();
    }
    println!("RESULT: PASSED");
}
