use std::fmt::Display;

use itertools::Itertools;

use crate::common::{FieldPath, SortOrder, Timestamp, Value, DOCUMENT_ID};
use crate::errors::FirestoreResult;
use crate::filter::FieldFilter;
use crate::query::{sort_key, sort_snapshots, Bound, Cursor, QueryStream};
use crate::reference::{CollectionReference, DocumentSnapshot};

/// A declarative query over one collection.
///
/// A query is an immutable value. Every builder method returns a new query
/// with one more clause and leaves the receiver untouched, so a base query
/// can be refined in several directions. Nothing is read until
/// [Query::stream] or [Query::get], and each call re-runs the query against
/// the current state of the store.
///
/// Execution order is fixed: filters, then sorting (explicit orders, ties by
/// ascending document id), then the start and end cursors, then offset and
/// limit.
///
/// # Examples
///
/// ```rust,ignore
/// let page = db
///     .collection("cities")?
///     .where_field("population", ">", 1_000_000)?
///     .order_by("population", SortOrder::Descending)
///     .limit(10)
///     .get()?;
/// ```
#[derive(Clone, Debug)]
pub struct Query {
    collection: CollectionReference,
    filters: Vec<(FieldPath, FieldFilter)>,
    orders: Vec<(String, SortOrder)>,
    limit: Option<usize>,
    offset: Option<usize>,
    start: Option<Bound>,
    end: Option<Bound>,
}

impl Query {
    pub(crate) fn new(collection: CollectionReference) -> Self {
        Query {
            collection,
            filters: Vec::new(),
            orders: Vec::new(),
            limit: None,
            offset: None,
            start: None,
            end: None,
        }
    }

    /// The collection this query reads from.
    pub fn collection(&self) -> &CollectionReference {
        &self.collection
    }

    /// Adds the filter `field <op> value`. See [crate::filter::Operator] for
    /// the accepted operator strings.
    ///
    /// # Errors
    ///
    /// [crate::errors::ErrorKind::InvalidArgument] for an empty or malformed
    /// field path or an unknown operator, and
    /// [crate::errors::ErrorKind::FilterError] when a membership operator
    /// gets a non-array operand.
    pub fn where_field<T: Into<Value>>(
        &self,
        field: &str,
        op: &str,
        value: T,
    ) -> FirestoreResult<Query> {
        let filter = FieldFilter::parse(field, op, value)?;
        self.where_filter(filter)
    }

    /// Adds a prebuilt filter, typically from [crate::filter::field].
    pub fn where_filter(&self, filter: FieldFilter) -> FirestoreResult<Query> {
        filter.validate()?;
        let path = self.field_path(filter.field())?;

        let mut query = self.clone();
        query.filters.push((path, filter));
        Ok(query)
    }

    /// Appends a sort key. `__name__` sorts by document id. Documents that
    /// lack the field are left out of the result.
    pub fn order_by(&self, field: &str, direction: SortOrder) -> Query {
        let mut query = self.clone();
        query.orders.push((field.to_string(), direction));
        query
    }

    pub fn limit(&self, limit: usize) -> Query {
        let mut query = self.clone();
        query.limit = Some(limit);
        query
    }

    pub fn offset(&self, offset: usize) -> Query {
        let mut query = self.clone();
        query.offset = Some(offset);
        query
    }

    /// Starts the result at the cursor, inclusive.
    pub fn start_at<C: Into<Cursor>>(&self, cursor: C) -> Query {
        self.with_start(Bound::new(cursor.into(), true))
    }

    /// Starts the result right after the cursor.
    pub fn start_after<C: Into<Cursor>>(&self, cursor: C) -> Query {
        self.with_start(Bound::new(cursor.into(), false))
    }

    /// Ends the result at the cursor, inclusive.
    pub fn end_at<C: Into<Cursor>>(&self, cursor: C) -> Query {
        self.with_end(Bound::new(cursor.into(), true))
    }

    /// Ends the result right before the cursor.
    pub fn end_before<C: Into<Cursor>>(&self, cursor: C) -> Query {
        self.with_end(Bound::new(cursor.into(), false))
    }

    /// Runs the query and returns the matching documents in order.
    ///
    /// Fails only when an order-by field path is malformed.
    pub fn stream(&self) -> FirestoreResult<QueryStream> {
        log::debug!("Executing {}", self);

        let orders = self
            .orders
            .iter()
            .map(|(field, direction)| Ok((self.field_path(field)?, *direction)))
            .collect::<FirestoreResult<Vec<_>>>()?;

        let read_time = Timestamp::now();
        let mut snapshots: Vec<DocumentSnapshot> = match self
            .collection
            .store()
            .collection(self.collection.segments())?
        {
            Some(collection) => collection
                .documents()
                .map(|(id, data)| {
                    DocumentSnapshot::new(
                        self.collection.child_unchecked(id),
                        Some(data.without_collections()),
                        read_time,
                    )
                })
                .collect(),
            None => Vec::new(),
        };

        snapshots.retain(|snapshot| {
            self.filters
                .iter()
                .all(|(path, filter)| filter.matches(sort_key(snapshot, path).as_ref()))
        });

        snapshots.retain(|snapshot| orders.iter().all(|(path, _)| sort_key(snapshot, path).is_some()));
        sort_snapshots(&mut snapshots, &orders);

        let start = self.start.as_ref().map(|bound| bound.resolve(&orders));
        let end = self.end.as_ref().map(|bound| bound.resolve(&orders));
        snapshots.retain(|snapshot| {
            start.as_ref().map_or(true, |bound| bound.admits_start(snapshot))
                && end.as_ref().map_or(true, |bound| bound.admits_end(snapshot))
        });

        let results: Vec<DocumentSnapshot> = snapshots
            .into_iter()
            .skip(self.offset.unwrap_or(0))
            .take(self.limit.unwrap_or(usize::MAX))
            .collect();

        log::debug!("Query on {} matched {} documents", self.collection.path(), results.len());
        Ok(QueryStream::new(results))
    }

    /// Runs the query and collects the result.
    pub fn get(&self) -> FirestoreResult<Vec<DocumentSnapshot>> {
        Ok(self.stream()?.collect())
    }

    fn with_start(&self, bound: Bound) -> Query {
        let mut query = self.clone();
        query.start = Some(bound);
        query
    }

    fn with_end(&self, bound: Bound) -> Query {
        let mut query = self.clone();
        query.end = Some(bound);
        query
    }

    fn field_path(&self, field: &str) -> FirestoreResult<FieldPath> {
        if field == DOCUMENT_ID {
            return Ok(FieldPath::document_id());
        }
        let separator = self.collection.store().config().field_separator();
        FieldPath::parse(field, &separator)
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "query on {}", self.collection.path())?;
        if !self.filters.is_empty() {
            let filters = self.filters.iter().map(|(_, filter)| filter).join(" && ");
            write!(f, " where {}", filters)?;
        }
        if !self.orders.is_empty() {
            let orders = self
                .orders
                .iter()
                .map(|(field, direction)| format!("{} {}", field, direction))
                .join(", ");
            write!(f, " order by {}", orders)?;
        }
        if let Some(bound) = &self.start {
            write!(f, " start {}", if bound.is_inclusive() { "at" } else { "after" })?;
        }
        if let Some(bound) = &self.end {
            write!(f, " end {}", if bound.is_inclusive() { "at" } else { "before" })?;
        }
        if let Some(offset) = self.offset {
            write!(f, " offset {}", offset)?;
        }
        if let Some(limit) = self.limit {
            write!(f, " limit {}", limit)?;
        }
        Ok(())
    }
}
