//! Performance benchmarks for filtering and sorting.
//!
//! These benchmarks measure `PhoneBook::apply` under various conditions:
//! - Empty filter (every contact matches, sorted by update time)
//! - Multi-token search query
//! - Text sort, both directions
//! - Different dataset sizes

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use phone_book::{Contact, ContactFilter, ContactSort, PhoneBook};

const FIRST_NAMES: [&str; 6] = ["John", "Jane", "Joe", "Ada", "Grace", "Alan"];
const LAST_NAMES: [&str; 5] = ["Doe", "Smith", "Lovelace", "Hopper", "Turing"];

/// Build a phone book with `size` deterministic contacts.
fn create_phone_book(size: usize) -> PhoneBook {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let contacts = (0..size).map(|i| {
        let created = start + Duration::minutes(i as i64);
        let contact = Contact::new(
            FIRST_NAMES[i % FIRST_NAMES.len()],
            LAST_NAMES[i % LAST_NAMES.len()],
            format!("(555) {:03}-{:04}", i % 1000, i % 10_000),
        )
        .unwrap()
        .with_timestamps(created, created + Duration::minutes((i % 7) as i64))
        .unwrap();
        if i % 3 == 0 {
            contact.with_email(format!("user{}@example.com", i)).unwrap()
        } else {
            contact
        }
    });
    PhoneBook::with_contacts(contacts).unwrap()
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for size in [100, 1_000, 10_000] {
        let mut phone_book = create_phone_book(size);

        group.bench_with_input(BenchmarkId::new("empty_filter", size), &size, |b, _| {
            b.iter(|| black_box(phone_book.apply(ContactFilter::default()).len()))
        });

        let search = ContactFilter::default().with_search_query(Some("ne th example".into()));
        group.bench_with_input(BenchmarkId::new("search_query", size), &size, |b, _| {
            b.iter(|| black_box(phone_book.apply(search.clone()).len()))
        });

        let by_last_name = ContactFilter::default()
            .with_sort_field(Some(ContactSort::LastName))
            .with_ascending(false);
        group.bench_with_input(BenchmarkId::new("sort_last_name_desc", size), &size, |b, _| {
            b.iter(|| black_box(phone_book.apply(by_last_name.clone()).len()))
        });
    }

    group.finish();
}

fn bench_add_contact(c: &mut Criterion) {
    let mut phone_book = create_phone_book(1_000);
    phone_book.apply(ContactFilter::default().with_search_query(Some("smith".into())));

    c.bench_function("add_then_delete_with_active_filter", |b| {
        b.iter(|| {
            let contact = Contact::new("Bench", "Smith", "(555) 000-0000").unwrap();
            let id = contact.id().to_string();
            phone_book.add_contact(contact).unwrap();
            black_box(phone_book.delete_contacts_by_id(&id).unwrap())
        })
    });
}

criterion_group!(benches, bench_apply, bench_add_contact);
criterion_main!(benches);
