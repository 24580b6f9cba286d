use deferq::backend::{Backend, MemoryBackend};
use deferq::expression::{Expression, FieldEquals};
use deferq::query::{QueryError, QueryNode, QueryProvider};
use deferq::record::{ElementType, Person, Record};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use tempfile::tempdir;

/// Backend that answers every fetch with the same rows and remembers the filters it saw
struct StubBackend {
    rows: Vec<Person>,
    filters: Mutex<Vec<Option<FieldEquals>>>,
}

impl StubBackend {
    fn new(rows: Vec<Person>) -> Self {
        Self {
            rows,
            filters: Mutex::new(Vec::new()),
        }
    }

    fn filters(&self) -> Vec<Option<FieldEquals>> {
        self.filters.lock().clone()
    }
}

impl Backend<Person> for StubBackend {
    fn fetch(
        &self,
        element_type: &ElementType,
        filter: Option<&FieldEquals>,
    ) -> anyhow::Result<Vec<Person>> {
        assert_eq!(*element_type, Person::element_type());
        self.filters.lock().push(filter.cloned());
        Ok(self.rows.clone())
    }
}

fn age_over(n: i32) -> Expression {
    Expression::gt(Expression::field("Age"), Expression::literal(n))
}

#[test]
fn test_unfiltered_query_returns_all_rows() {
    let rows: Vec<Person> = (0..7).map(|i| Person::new(format!("p{}", i), i)).collect();
    let backend = Arc::new(StubBackend::new(rows.clone()));
    let provider: Arc<QueryProvider<Person>> =
        Arc::new(QueryProvider::new(backend.clone()));

    let people = provider.query().to_vec().unwrap();

    assert_eq!(people.len(), 7);
    assert_eq!(people, rows);
    assert_eq!(backend.filters(), vec![None]);
}

#[test]
fn test_name_filter_is_sent_to_backend() {
    let backend = Arc::new(StubBackend::new(vec![Person::new("Dan", 40)]));
    let provider: Arc<QueryProvider<Person>> =
        Arc::new(QueryProvider::new(backend.clone()));

    let people = provider.query().where_eq("Name", "Dan").to_vec().unwrap();

    assert_eq!(people, vec![Person::new("Dan", 40)]);
    assert_eq!(backend.filters(), vec![Some(FieldEquals::new("Name", "Dan"))]);
}

#[test]
fn test_name_then_age_filters() {
    let backend = Arc::new(StubBackend::new(vec![Person::new("Dan", 40)]));
    let provider: Arc<QueryProvider<Person>> =
        Arc::new(QueryProvider::new(backend.clone()));

    let older_than_10 = provider
        .query()
        .where_eq("Name", "Dan")
        .filter(age_over(10))
        .to_vec()
        .unwrap();
    assert_eq!(older_than_10, vec![Person::new("Dan", 40)]);

    let older_than_100 = provider
        .query()
        .where_eq("Name", "Dan")
        .filter(age_over(100))
        .to_vec()
        .unwrap();
    assert!(older_than_100.is_empty());

    // Only the name filter ever reached the backend
    assert_eq!(
        backend.filters(),
        vec![
            Some(FieldEquals::new("Name", "Dan")),
            Some(FieldEquals::new("Name", "Dan")),
        ]
    );
}

#[test]
fn test_both_filters_hold_in_result() {
    let backend = Arc::new(MemoryBackend::new(vec![
        Person::new("Dan", 40),
        Person::new("Dan", 5),
        Person::new("Ann", 50),
    ]));
    let provider: Arc<QueryProvider<Person>> =
        Arc::new(QueryProvider::new(backend.clone()));

    let people = provider
        .query()
        .where_eq("Name", "Dan")
        .filter(age_over(10))
        .to_vec()
        .unwrap();

    assert_eq!(people, vec![Person::new("Dan", 40)]);
    assert_eq!(backend.fetch_count(), 1);
}

#[test]
fn test_same_chain_built_twice_evaluates_identically() {
    let backend = Arc::new(MemoryBackend::new(vec![
        Person::new("Dan", 40),
        Person::new("Dan", 5),
        Person::new("Ann", 50),
    ]));
    let provider: Arc<QueryProvider<Person>> =
        Arc::new(QueryProvider::new(backend.clone()));
    let build = || provider.query().where_eq("Name", "Dan").filter(age_over(1));

    assert_eq!(build().expression(), build().expression());
    assert_eq!(build().to_vec().unwrap(), build().to_vec().unwrap());
    assert_eq!(backend.fetch_count(), 2);
}

#[test]
fn test_queries_from_shared_provider_on_threads() {
    let backend = Arc::new(MemoryBackend::new(vec![
        Person::new("Dan", 40),
        Person::new("Ann", 33),
        Person::new("Bob", 71),
    ]));
    let provider: Arc<QueryProvider<Person>> =
        Arc::new(QueryProvider::new(backend.clone()));

    let handles: Vec<_> = ["Dan", "Ann", "Bob"]
        .into_iter()
        .map(|name| {
            let provider = Arc::clone(&provider);
            thread::spawn(move || provider.query().where_eq("Name", name).to_vec().unwrap())
        })
        .collect();

    for (handle, name) in handles.into_iter().zip(["Dan", "Ann", "Bob"]) {
        let people = handle.join().unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name, name);
    }
    assert_eq!(backend.fetch_count(), 3);
}

#[test]
fn test_foreign_tree_is_rejected_before_fetch() {
    let backend = Arc::new(StubBackend::new(vec![Person::new("Dan", 40)]));
    let provider: Arc<QueryProvider<Person>> =
        Arc::new(QueryProvider::new(backend.clone()));

    let tree = QueryNode::source_of(ElementType::new("Order"))
        .filter(Expression::field_eq("Name", "Dan"));
    let result = provider.create_query(tree);

    assert!(matches!(
        result,
        Err(QueryError::UnsupportedElementType { .. })
    ));
    assert!(backend.filters().is_empty());
}

#[test]
fn test_snapshot_backed_query() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("people.snapshot");
    MemoryBackend::new(vec![
        Person::new("Dan", 40),
        Person::new("Ann", 33),
        Person::new("Dan", 3),
    ])
    .save(&path)?;

    let backend = Arc::new(MemoryBackend::<Person>::load(&path)?);
    let provider: Arc<QueryProvider<Person>> =
        Arc::new(QueryProvider::new(backend.clone()));
    let people = provider
        .query()
        .where_eq("Name", "Dan")
        .filter(age_over(10))
        .to_vec()?;

    assert_eq!(people, vec![Person::new("Dan", 40)]);
    assert_eq!(
        backend.fetch_log()[0].filter,
        Some(FieldEquals::new("Name", "Dan"))
    );
    Ok(())
}
