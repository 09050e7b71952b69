use firemock::doc;
use firemock_int_test::test_util::{cleanup, create_test_context, run_test, seed};

#[test]
fn test_stream_returns_documents() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed(
                &ctx.db(),
                "foo",
                vec![("first", doc! { "id": 1 }), ("second", doc! { "id": 2 })],
            )?;
            let docs = foo.stream()?.collect::<Result<Vec<_>, _>>()?;
            assert_eq!(docs[0].to_dict(), Some(doc! { "id": 1 }));
            assert_eq!(docs[1].to_dict(), Some(doc! { "id": 2 }));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_stream_missing_collection() {
    run_test(
        create_test_context,
        |ctx| {
            assert_eq!(ctx.db().collection("foo")?.stream()?.count(), 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_stream_orders_by_ascending_id() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed(
                &ctx.db(),
                "foo",
                vec![("beta", doc! { "id": 1 }), ("alpha", doc! { "id": 2 })],
            )?;
            let first = foo.stream()?.next().unwrap()?;
            assert_eq!(first.to_dict(), Some(doc! { "id": 2 }));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_stream_nested_collection() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            seed(&db, "foo", vec![("first", doc! { "id": 1 })])?;
            seed(&db, "foo/first/bar", vec![("first_nested", doc! { "id": 1.1 })])?;

            let chained = db.collection("foo")?.document("first")?.collection("bar")?;
            let docs = chained.stream()?.collect::<Result<Vec<_>, _>>()?;
            assert_eq!(docs[0].to_dict(), Some(doc! { "id": 1.1 }));

            let by_path = db.collection("foo/first/bar")?;
            let docs = by_path.stream()?.collect::<Result<Vec<_>, _>>()?;
            assert_eq!(docs[0].to_dict(), Some(doc! { "id": 1.1 }));

            let parent = db.document("foo/first")?.get()?;
            assert_eq!(parent.to_dict(), Some(doc! { "id": 1 }));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_stream_nested_collection_missing() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            seed(&db, "foo", vec![("first", doc! { "id": 1 })])?;

            let chained = db.collection("foo")?.document("first")?.collection("bar")?;
            assert_eq!(chained.stream()?.count(), 0);
            assert_eq!(db.collection("foo/first/bar")?.stream()?.count(), 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_stream_is_restartable() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed(&ctx.db(), "foo", vec![("a", doc! { "n": 1 })])?;
            assert_eq!(foo.stream()?.count(), 1);

            foo.add_with_id(doc! { "n": 2 }, "b")?;
            assert_eq!(foo.stream()?.count(), 2);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_stream_sees_writes_during_iteration() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed(
                &ctx.db(),
                "foo",
                vec![("a", doc! { "n": 1 }), ("b", doc! { "n": 2 }), ("c", doc! { "n": 3 })],
            )?;

            let mut stream = foo.stream()?;
            assert_eq!(stream.next().unwrap()?.id(), "a");

            foo.document("b")?.delete()?;
            foo.document("c")?.set(doc! { "n": 30 })?;

            let rest = stream.collect::<Result<Vec<_>, _>>()?;
            assert_eq!(rest.len(), 1);
            assert_eq!(rest[0].to_dict(), Some(doc! { "n": 30 }));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_snapshot_is_immutable() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed(&ctx.db(), "foo", vec![("a", doc! { "n": 1 })])?;
            let snapshot = foo.document("a")?.get()?;

            foo.document("a")?.set(doc! { "n": 2 })?;
            assert_eq!(snapshot.to_dict(), Some(doc! { "n": 1 }));
            Ok(())
        },
        cleanup,
    )
}
