//! Hash join: inner-join semantics, ordering, cardinality, and rebuild per cursor.

mod test_data_gen;

use std::fmt;

use lazyq::{from, QueryConfig};
use test_data_gen::{shuffled, span, Calls};

#[test]
fn test_join_identity_keys() {
    let q = from(vec![4, 5, 6, 7, 8, 9]).join(
        &from(vec![1, 2, 3, 4, 5, 6]),
        |o| *o,
        |i| *i,
        |o, _| *o,
    );
    assert_eq!(q.to_vec(), vec![4, 5, 6]);
}

#[test]
fn test_join_pairs() {
    let q = from(vec![1, 2, 3, 4, 5]).join(
        &from(vec![3, 4, 5, 6, 7]),
        |o| *o,
        |i| *i,
        |o, i| format!("[{o} {i}]"),
    );
    assert_eq!(q.to_string(), "[[3 3] [4 4] [5 5]]");
}

#[test]
fn test_join_emits_group_in_inner_order() {
    let outer = from(vec![(2, "two"), (1, "one"), (9, "nine"), (2, "deux")]);
    let inner = from(vec![(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd'), (2, 'e')]);
    let q = outer.join(&inner, |o| o.0, |i| i.0, |o, i| format!("{}{}", o.1, i.1));
    assert_eq!(
        q.to_vec(),
        vec!["twob", "twod", "twoe", "onea", "onec", "deuxb", "deuxd", "deuxe"]
    );
}

#[test]
fn test_join_cardinality_matches_group_sizes() {
    let outer = shuffled(&span(1, 300));
    let inner: Vec<i64> = span(1, 300).into_iter().map(|x| x % 7).collect();
    let q = from(outer.clone()).join(&from(inner.clone()), |o| o % 11, |i| *i, |o, i| (*o, *i));

    let expected: usize = outer
        .iter()
        .map(|o| inner.iter().filter(|i| **i == o % 11).count())
        .sum();
    let rows = q.to_vec();
    assert_eq!(rows.len(), expected);
    assert!(rows.iter().all(|(o, i)| o % 11 == *i));
}

#[test]
fn test_join_empty_sides() {
    let empty: Vec<i32> = vec![];
    let q = from(empty.clone()).join(&from(vec![1, 2]), |o| *o, |i| *i, |o, _| *o);
    assert!(q.is_empty());
    let q = from(vec![1, 2]).join(&from(empty), |o| *o, |i| *i, |o, _| *o);
    assert!(q.is_empty());
}

#[test]
fn test_join_builds_lookup_on_first_pull_per_cursor() {
    let inner_pulls = Calls::new();
    let seen = inner_pulls.clone();
    let inner = from(vec![1, 2, 3]).map_to(move |x| {
        seen.hit();
        *x
    });
    let q = from(vec![3, 2, 1]).join(&inner, |o| *o, |i| *i, |o, i| o * 10 + i);
    assert_eq!(inner_pulls.get(), 0);

    let mut cur = q.iter();
    assert_eq!(inner_pulls.get(), 0);
    assert_eq!(cur.next(), Some(33));
    assert_eq!(inner_pulls.get(), 3);
    assert_eq!(cur.next(), Some(22));
    assert_eq!(inner_pulls.get(), 3);

    // A second traversal re-scans the inner side.
    assert_eq!(q.to_vec(), vec![33, 22, 11]);
    assert_eq!(inner_pulls.get(), 6);
}

#[test]
fn test_join_drives_outer_lazily() {
    let outer_pulls = Calls::new();
    let seen = outer_pulls.clone();
    let outer = from(span(1, 100)).map_to(move |x| {
        seen.hit();
        *x
    });
    let q = outer.join(&from(vec![2, 4]), |o| *o, |i| *i, |o, _| *o);
    assert_eq!(q.first(), Some(2));
    assert_eq!(outer_pulls.get(), 2);
}

#[derive(Clone)]
struct Author {
    id: i32,
    name: &'static str,
}

#[derive(Clone)]
struct AuthorBook {
    author_id: i32,
    book_id: i32,
}

#[derive(Clone)]
struct Book {
    id: i32,
    title: &'static str,
    year: i32,
}

#[derive(Clone, Debug, PartialEq)]
struct AuthorTitleYear {
    author: &'static str,
    title: &'static str,
    year: i32,
}

impl fmt::Display for AuthorTitleYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}: {} ({})}}", self.author, self.title, self.year)
    }
}

#[test]
fn test_join_across_record_types_then_sort_and_filter() {
    let authors = vec![
        Author { id: 1, name: "Austen, Jane" },
        Author { id: 2, name: "Brontë, Emily" },
        Author { id: 3, name: "Hunter, Rachel" },
    ];
    let books = vec![
        Book { id: 1, title: "Sense & Sensibility", year: 1811 },
        Book { id: 2, title: "Pride & Prejudice", year: 1813 },
        Book { id: 3, title: "Mansfield Park", year: 1814 },
        Book { id: 4, title: "Emma", year: 1815 },
        Book { id: 5, title: "Persuasion", year: 1817 },
        Book { id: 6, title: "Northanger Abbey", year: 1817 },
        Book { id: 7, title: "Sanditon", year: 1817 },
        Book { id: 8, title: "Wuthering Heights", year: 1847 },
        Book { id: 9, title: "Letitia, or, The Castle without a Spectre", year: 1801 },
        Book { id: 10, title: "The History of the Grubthorpe Family", year: 1802 },
        Book { id: 12, title: "The Unexpected Legacy", year: 1804 },
        Book { id: 13, title: "Family Annals", year: 1807 },
        Book { id: 14, title: "The Schoolmistress", year: 1811 },
    ];
    let author_books: Vec<AuthorBook> = [(1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (1, 7)]
        .into_iter()
        .chain([(2, 8), (3, 9), (3, 10), (3, 12), (3, 13), (3, 14)])
        .map(|(author_id, book_id)| AuthorBook { author_id, book_id })
        .collect();

    let q = from(authors)
        .join(
            &from(author_books),
            |a| a.id,
            |ab| ab.author_id,
            |a, ab| (a.name, ab.book_id),
        )
        .join(
            &from(books),
            |nb| nb.1,
            |b| b.id,
            |nb, b| AuthorTitleYear {
                author: nb.0,
                title: b.title,
                year: b.year,
            },
        )
        .sort(vec![
            lazyq::less(|a: &AuthorTitleYear, b: &AuthorTitleYear| a.year > b.year),
            lazyq::less(|a: &AuthorTitleYear, b: &AuthorTitleYear| a.author < b.author),
        ])
        .filter(|r| r.year >= 1804)
        .filter(|r| r.year <= 1815);

    assert_eq!(
        q.to_string(),
        "[{Austen, Jane: Emma (1815)} {Austen, Jane: Mansfield Park (1814)} \
         {Austen, Jane: Pride & Prejudice (1813)} {Austen, Jane: Sense & Sensibility (1811)} \
         {Hunter, Rachel: The Schoolmistress (1811)} {Hunter, Rachel: Family Annals (1807)} \
         {Hunter, Rachel: The Unexpected Legacy (1804)}]"
    );
}

#[test]
fn test_join_with_oversized_capacity_hint() {
    let cfg = QueryConfig::default().with_join_capacity_hint(usize::MAX);
    let q = from(vec![1, 2, 3])
        .with_config(cfg)
        .join(&from(vec![2, 3, 3, 4]), |o| *o, |i| *i, |o, i| o * 10 + i);
    assert_eq!(q.to_vec(), vec![22, 33, 33]);
}
