use firemock::errors::ErrorKind;
use firemock::{doc, MockFirestore, WriteOperation};
use firemock_int_test::test_util::{cleanup, create_test_context, dicts, ids, run_test, seed};

#[test]
fn test_batch_set() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let foo = db.collection("foo")?;
            let first = foo.document("first")?;
            let second = foo.document("second")?;

            let mut batch = db.batch();
            batch
                .set(&first, doc! { "id": 1 })
                .set(&second, doc! { "id": 2 });
            batch.commit()?;

            assert_eq!(dicts(&foo.query().get()?), vec![Some(doc! { "id": 1 }), Some(doc! { "id": 2 })]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_batch_set_with_merge() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let foo = seed(&db, "foo", vec![("first", doc! { "id": 1, "name": "a" })])?;
            let first = foo.document("first")?;

            let mut batch = db.batch();
            batch.set_with_merge(&first, doc! { "name": "b", "extra": true }, true);
            batch.commit()?;

            assert_eq!(
                first.get()?.to_dict(),
                Some(doc! { "id": 1, "name": "b", "extra": true })
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_batch_update() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let foo = seed(&db, "foo", vec![("first", doc! { "id": 1, "name": "x" })])?;
            let first = foo.document("first")?;

            let mut batch = db.batch();
            batch.update(&first, doc! { "name": "y" });
            batch.commit()?;

            assert_eq!(first.get()?.to_dict(), Some(doc! { "id": 1, "name": "y" }));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_batch_delete() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let foo = seed(
                &db,
                "foo",
                vec![("first", doc! { "id": 1 }), ("second", doc! { "id": 2 })],
            )?;

            let mut batch = db.batch();
            batch.delete(&foo.document("first")?);
            batch.commit()?;

            assert_eq!(ids(&foo.query().get()?), vec!["second"]);
            assert!(!foo.document("first")?.get()?.exists());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_batch_mixed_operations() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let foo = seed(
                &db,
                "foo",
                vec![("first", doc! { "id": 1 }), ("second", doc! { "id": 2 })],
            )?;

            let mut batch = db.batch();
            batch
                .set(&foo.document("third")?, doc! { "id": 3 })
                .update(&foo.document("first")?, doc! { "updated": true })
                .delete(&foo.document("second")?);
            assert_eq!(batch.len(), 3);
            assert!(matches!(batch.operations()[0], WriteOperation::Set { .. }));
            assert!(matches!(batch.operations()[2], WriteOperation::Delete { .. }));
            batch.commit()?;

            assert_eq!(ids(&foo.query().get()?), vec!["first", "third"]);
            assert_eq!(
                foo.document("first")?.get()?.to_dict(),
                Some(doc! { "id": 1, "updated": true })
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_batch_applies_in_order() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let first = db.collection("foo")?.document("first")?;

            let mut batch = db.batch();
            batch
                .set(&first, doc! { "step": 1 })
                .update(&first, doc! { "step": 2 })
                .delete(&first)
                .set(&first, doc! { "step": 4 });
            batch.commit()?;

            assert_eq!(first.get()?.to_dict(), Some(doc! { "step": 4 }));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_batch_commit_through_database() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let first = db.collection("foo")?.document("first")?;

            let mut batch = db.batch();
            batch.set(&first, doc! { "id": 1 });
            MockFirestore::batch_commit(&mut batch)?;

            assert_eq!(first.get()?.to_dict(), Some(doc! { "id": 1 }));
            assert!(batch.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_multiple_batches() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let foo = db.collection("foo")?;

            let mut first_batch = db.batch();
            first_batch.set(&foo.document("a")?, doc! { "n": 1 });
            let mut second_batch = db.batch();
            second_batch.set(&foo.document("b")?, doc! { "n": 2 });

            second_batch.commit()?;
            assert_eq!(dicts(&foo.query().get()?), vec![Some(doc! {}), Some(doc! { "n": 2 })]);

            first_batch.commit()?;
            assert_eq!(
                dicts(&foo.query().get()?),
                vec![Some(doc! { "n": 1 }), Some(doc! { "n": 2 })]
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_failed_commit_keeps_earlier_writes() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let foo = db.collection("foo")?;
            let written = foo.document("written")?;
            let missing = db.document("foo/missing")?;
            let skipped = db.document("foo/skipped")?;

            let mut batch = db.batch();
            batch
                .set(&written, doc! { "id": 1 })
                .update(&missing, doc! { "id": 2 })
                .set(&skipped, doc! { "id": 3 });

            let err = batch.commit().err().unwrap();
            assert_eq!(err.kind(), &ErrorKind::NotFound);

            assert_eq!(written.get()?.to_dict(), Some(doc! { "id": 1 }));
            assert!(!missing.get()?.exists());
            assert!(!skipped.get()?.exists());
            assert!(batch.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_commit_clears_batch() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let first = db.collection("foo")?.document("first")?;

            let mut batch = db.batch();
            batch.set(&first, doc! { "id": 1 });
            batch.commit()?;
            assert!(batch.is_empty());

            first.set(doc! { "id": 2 })?;
            batch.commit()?;
            assert_eq!(first.get()?.to_dict(), Some(doc! { "id": 2 }));
            Ok(())
        },
        cleanup,
    )
}
