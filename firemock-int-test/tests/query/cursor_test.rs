use firemock::{doc, SortOrder};
use firemock_int_test::test_util::{cleanup, create_test_context, dicts, ids, run_test, seed, seed_numbered};

#[test]
fn test_start_at() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed_numbered(&ctx.db())?;

            let docs = foo.start_at(doc! { "id": 2 }).get()?;
            assert_eq!(dicts(&docs), vec![Some(doc! { "id": 2 }), Some(doc! { "id": 3 })]);

            let docs = foo.order_by("id", SortOrder::Ascending).start_at(doc! { "id": 2 }).get()?;
            assert_eq!(dicts(&docs), vec![Some(doc! { "id": 2 }), Some(doc! { "id": 3 })]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_start_at_snapshot() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed(
                &ctx.db(),
                "foo",
                vec![
                    ("first", doc! { "id": 1 }),
                    ("second", doc! { "id": 2 }),
                    ("third", doc! { "id": 3 }),
                    ("fourth", doc! { "id": 4 }),
                    ("fifth", doc! { "id": 5 }),
                ],
            )?;
            let cursor = foo.document("second")?.get()?;

            let docs = foo.order_by("id", SortOrder::Ascending).start_at(&cursor).get()?;
            assert_eq!(ids(&docs), vec!["second", "third", "fourth", "fifth"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_start_after() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed_numbered(&ctx.db())?;

            let docs = foo.start_after(doc! { "id": 1 }).get()?;
            assert_eq!(dicts(&docs), vec![Some(doc! { "id": 2 }), Some(doc! { "id": 3 })]);

            let docs = foo.order_by("id", SortOrder::Ascending).start_after(doc! { "id": 2 }).get()?;
            assert_eq!(dicts(&docs), vec![Some(doc! { "id": 3 })]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_start_after_similar_objects() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed(
                &ctx.db(),
                "foo",
                vec![
                    ("first", doc! { "id": 1, "value": 1 }),
                    ("second", doc! { "id": 2, "value": 2 }),
                    ("third", doc! { "id": 3, "value": 2 }),
                    ("fourth", doc! { "id": 4, "value": 3 }),
                ],
            )?;
            let docs = foo
                .order_by("id", SortOrder::Ascending)
                .start_after(doc! { "id": 3, "value": 2 })
                .get()?;
            assert_eq!(dicts(&docs), vec![Some(doc! { "id": 4, "value": 3 })]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_start_after_excludes_equal_values_with_other_ids() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed(
                &ctx.db(),
                "foo",
                vec![
                    ("a", doc! { "score": 1 }),
                    ("b", doc! { "score": 2 }),
                    ("c", doc! { "score": 2 }),
                    ("d", doc! { "score": 3 }),
                ],
            )?;
            let cursor = foo.document("b")?.get()?;
            let docs = foo.order_by("score", SortOrder::Ascending).start_after(cursor).get()?;
            assert_eq!(ids(&docs), vec!["d"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_start_after_snapshot() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed(
                &ctx.db(),
                "foo",
                vec![
                    ("second", doc! { "id": 2 }),
                    ("third", doc! { "id": 3 }),
                    ("fourth", doc! { "id": 4 }),
                    ("fifth", doc! { "id": 5 }),
                ],
            )?;
            let cursor = foo.document("second")?.get()?;
            let docs = foo.order_by("id", SortOrder::Ascending).start_after(&cursor).get()?;
            assert_eq!(
                dicts(&docs),
                vec![Some(doc! { "id": 3 }), Some(doc! { "id": 4 }), Some(doc! { "id": 5 })]
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_end_before() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed_numbered(&ctx.db())?;

            let docs = foo.end_before(doc! { "id": 2 }).get()?;
            assert_eq!(dicts(&docs), vec![Some(doc! { "id": 1 })]);

            let docs = foo.order_by("id", SortOrder::Ascending).end_before(doc! { "id": 2 }).get()?;
            assert_eq!(dicts(&docs), vec![Some(doc! { "id": 1 })]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_end_at() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed_numbered(&ctx.db())?;

            let docs = foo.end_at(doc! { "id": 2 }).get()?;
            assert_eq!(dicts(&docs), vec![Some(doc! { "id": 1 }), Some(doc! { "id": 2 })]);

            let docs = foo.order_by("id", SortOrder::Ascending).end_at(doc! { "id": 2 }).get()?;
            assert_eq!(dicts(&docs), vec![Some(doc! { "id": 1 }), Some(doc! { "id": 2 })]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_end_cursors_with_snapshot() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed(
                &ctx.db(),
                "foo",
                vec![
                    ("first", doc! { "id": 1 }),
                    ("second", doc! { "id": 2 }),
                    ("third", doc! { "id": 3 }),
                    ("fourth", doc! { "id": 4 }),
                    ("fifth", doc! { "id": 5 }),
                ],
            )?;
            let cursor = foo.document("fourth")?.get()?;
            let ordered = foo.order_by("id", SortOrder::Ascending);

            let docs = ordered.end_before(&cursor).get()?;
            assert_eq!(ids(&docs), vec!["first", "second", "third"]);

            let docs = ordered.end_at(&cursor).get()?;
            assert_eq!(ids(&docs), vec!["first", "second", "third", "fourth"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_cursors_on_descending_order() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed_numbered(&ctx.db())?;
            let docs = foo
                .order_by("id", SortOrder::Descending)
                .start_at(doc! { "id": 2 })
                .get()?;
            assert_eq!(ids(&docs), vec!["second", "first"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_snapshot_cursor_without_order_uses_id() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed_numbered(&ctx.db())?;
            let cursor = foo.document("second")?.get()?;
            assert_eq!(ids(&foo.start_after(&cursor).get()?), vec!["third"]);
            assert_eq!(ids(&foo.end_at(&cursor).get()?), vec!["first", "second"]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_cursor_window_with_limit() {
    run_test(
        create_test_context,
        |ctx| {
            let foo = seed(
                &ctx.db(),
                "foo",
                vec![
                    ("a", doc! { "n": 1 }),
                    ("b", doc! { "n": 2 }),
                    ("c", doc! { "n": 3 }),
                    ("d", doc! { "n": 4 }),
                    ("e", doc! { "n": 5 }),
                ],
            )?;
            let docs = foo
                .order_by("n", SortOrder::Ascending)
                .start_after(doc! { "n": 1 })
                .end_before(doc! { "n": 5 })
                .offset(1)
                .limit(2)
                .get()?;
            assert_eq!(ids(&docs), vec!["c", "d"]);
            Ok(())
        },
        cleanup,
    )
}
