use firemock::errors::ErrorKind;
use firemock::{doc, Value};
use firemock_int_test::test_util::{cleanup, create_test_context, run_test};

#[test]
fn test_set_and_get() {
    run_test(
        create_test_context,
        |ctx| {
            let reference = ctx.db().document("users/alice")?;
            reference.set(doc! { "name": "Alice", "age": 30 })?;

            let snapshot = reference.get()?;
            assert!(snapshot.exists());
            assert_eq!(snapshot.id(), "alice");
            assert_eq!(snapshot.get("age")?, Some(Value::from(30)));
            assert_eq!(snapshot.reference(), &reference);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_get_missing_document() {
    run_test(
        create_test_context,
        |ctx| {
            let snapshot = ctx.db().document("users/nobody")?.get()?;
            assert!(!snapshot.exists());
            assert_eq!(snapshot.to_dict(), None);
            assert_eq!(snapshot.get("name")?, None);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_get_nested_field() {
    run_test(
        create_test_context,
        |ctx| {
            let reference = ctx.db().document("users/alice")?;
            reference.set(doc! { "address": { "city": "London", "zip": "N1" } })?;
            assert_eq!(reference.get()?.get("address.city")?, Some(Value::from("London")));
            assert_eq!(reference.get()?.get("address.country")?, None);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_set_replaces_document() {
    run_test(
        create_test_context,
        |ctx| {
            let reference = ctx.db().document("users/alice")?;
            reference.set(doc! { "a": 1, "b": 2 })?;
            reference.set(doc! { "c": 3 })?;
            assert_eq!(reference.get()?.to_dict(), Some(doc! { "c": 3 }));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_set_replaces_subcollections() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let reference = db.document("users/alice")?;
            reference.set(doc! { "a": 1 })?;
            reference.collection("orders")?.add_with_id(doc! { "total": 5 }, "o1")?;
            assert_eq!(reference.collections()?.len(), 1);

            reference.set(doc! { "a": 2 })?;
            assert!(reference.collections()?.is_empty());
            assert_eq!(db.collection("users/alice/orders")?.stream()?.count(), 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_set_with_merge() {
    run_test(
        create_test_context,
        |ctx| {
            let reference = ctx.db().document("users/alice")?;
            reference.set(doc! { "name": "Alice", "age": 30 })?;
            reference.set_with_merge(doc! { "age": 31, "city": "Paris" }, true)?;
            assert_eq!(
                reference.get()?.to_dict(),
                Some(doc! { "name": "Alice", "age": 31, "city": "Paris" })
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_merge_keeps_subcollections() {
    run_test(
        create_test_context,
        |ctx| {
            let reference = ctx.db().document("users/alice")?;
            reference.set(doc! { "a": 1 })?;
            reference.collection("orders")?.add_with_id(doc! { "total": 5 }, "o1")?;

            reference.set_with_merge(doc! { "b": 2 }, true)?;
            reference.update(doc! { "c": 3 })?;
            assert_eq!(reference.collection("orders")?.stream()?.count(), 1);
            assert_eq!(reference.get()?.to_dict(), Some(doc! { "a": 1, "b": 2, "c": 3 }));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_is_shallow() {
    run_test(
        create_test_context,
        |ctx| {
            let reference = ctx.db().document("users/alice")?;
            reference.set(doc! { "address": { "city": "London", "zip": "N1" } })?;
            reference.update(doc! { "address": { "city": "Leeds" } })?;
            assert_eq!(
                reference.get()?.to_dict(),
                Some(doc! { "address": { "city": "Leeds" } })
            );
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_update_missing_document() {
    run_test(
        create_test_context,
        |ctx| {
            let reference = ctx.db().document("users/nobody")?;
            let err = reference.update(doc! { "a": 1 }).err().unwrap();
            assert_eq!(err.kind(), &ErrorKind::NotFound);
            assert!(!reference.get()?.exists());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_delete() {
    run_test(
        create_test_context,
        |ctx| {
            let reference = ctx.db().document("users/alice")?;
            reference.set(doc! { "a": 1 })?;
            reference.delete()?;
            assert_eq!(reference.get()?.to_dict(), None);

            let never_written = ctx.db().document("users/bob")?;
            never_written.delete()?;
            assert_eq!(never_written.get()?.to_dict(), None);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_set_after_delete() {
    run_test(
        create_test_context,
        |ctx| {
            let reference = ctx.db().document("users/alice")?;
            reference.set(doc! { "a": 1 })?;
            reference.delete()?;
            reference.set(doc! { "b": 2 })?;
            assert_eq!(reference.get()?.to_dict(), Some(doc! { "b": 2 }));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_write_under_deleted_parent() {
    run_test(
        create_test_context,
        |ctx| {
            let db = ctx.db();
            let parent = db.document("users/alice")?;
            parent.set(doc! { "a": 1 })?;
            parent.delete()?;

            let child = db.document("users/alice/orders/o1")?;
            child.set(doc! { "total": 5 })?;
            assert_eq!(child.get()?.to_dict(), Some(doc! { "total": 5 }));
            assert_eq!(parent.get()?.to_dict(), Some(doc! {}));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_document_path_parity() {
    run_test(
        create_test_context,
        |ctx| {
            let err = ctx.db().document("users").err().unwrap();
            assert_eq!(err.kind(), &ErrorKind::InvalidPath);
            let err = ctx.db().document("users/alice/orders").err().unwrap();
            assert_eq!(err.kind(), &ErrorKind::InvalidPath);
            Ok(())
        },
        cleanup,
    )
}
