use chrono::{Duration, Utc};
use firemock::errors::FirestoreResult;
use firemock::{doc, CollectionReference, Document, DocumentSnapshot, MockFirestore, Timestamp};
use std::backtrace::Backtrace;
use std::time::Instant;

/// Runs `test` between `before` and `after`, reporting failures and panics
/// with the elapsed time and a backtrace. `after` runs even when `test` fails.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> FirestoreResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    B: Fn() -> FirestoreResult<TestContext> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    A: Fn(TestContext) -> FirestoreResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
{
    let start_time = Instant::now();

    let result = std::panic::catch_unwind(|| {
        let backtrace = Backtrace::capture();
        match before() {
            Ok(ctx) => match test(ctx.clone()) {
                Ok(_) => after(ctx)
                    .map_err(|e| (format!("After run failed: {:?}", e), backtrace.to_string())),
                Err(e) => {
                    let _ = after(ctx);
                    Err((format!("Test failed: {:?}", e), backtrace.to_string()))
                }
            },
            Err(e) => Err((format!("Before run failed: {:?}", e), backtrace.to_string())),
        }
    });

    let elapsed = start_time.elapsed();
    let (error, backtrace) = match result {
        Ok(Ok(_)) => return,
        Ok(Err((e, bt))) => (e, bt),
        Err(panic_err) => {
            let message = if let Some(s) = panic_err.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_err.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            (format!("Panic: {}", message), Backtrace::capture().to_string())
        }
    };

    eprintln!("\n==================== TEST FAILED ====================");
    eprintln!("Failed after {:?}", elapsed);
    eprintln!("Error: {}", error);
    if !backtrace.is_empty() && !backtrace.contains("disabled") {
        eprintln!("\nBacktrace:\n{}", backtrace);
    }
    eprintln!("=====================================================\n");

    panic!("Test failed: {}", error);
}

#[derive(Clone)]
pub struct TestContext {
    db: MockFirestore,
}

impl TestContext {
    pub fn new(db: MockFirestore) -> Self {
        Self { db }
    }

    pub fn db(&self) -> MockFirestore {
        self.db.clone()
    }
}

pub fn create_test_context() -> FirestoreResult<TestContext> {
    Ok(TestContext::new(MockFirestore::new()))
}

pub fn cleanup(ctx: TestContext) -> FirestoreResult<()> {
    ctx.db().reset();
    Ok(())
}

/// Writes each `(id, data)` pair into the collection at `path`.
pub fn seed(db: &MockFirestore, path: &str, documents: Vec<(&str, Document)>) -> FirestoreResult<CollectionReference> {
    let collection = db.collection(path)?;
    for (id, data) in documents {
        collection.add_with_id(data, id)?;
    }
    Ok(collection)
}

/// The `foo` collection with documents `first`, `second` and `third`
/// holding `id` 1, 2 and 3.
pub fn seed_numbered(db: &MockFirestore) -> FirestoreResult<CollectionReference> {
    seed(
        db,
        "foo",
        vec![
            ("first", doc! { "id": 1 }),
            ("second", doc! { "id": 2 }),
            ("third", doc! { "id": 3 }),
        ],
    )
}

pub fn ids(snapshots: &[DocumentSnapshot]) -> Vec<String> {
    snapshots.iter().map(|s| s.id().to_string()).collect()
}

pub fn dicts(snapshots: &[DocumentSnapshot]) -> Vec<Option<Document>> {
    snapshots.iter().map(|s| s.to_dict()).collect()
}

pub fn now() -> Timestamp {
    Timestamp::from_datetime(Utc::now())
}

pub fn days_ago(days: i64) -> Timestamp {
    Timestamp::from_datetime(Utc::now() - Duration::days(days))
}
