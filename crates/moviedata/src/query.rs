//! Read-only queries over a [`Dataset`] snapshot.
//!
//! Every function here is pure: same snapshot and arguments, same answer.
//! Sequence results keep dataset order.

use crate::{Dataset, MovieId, MovieRecord, QueryError, QueryResult};

/// Lenient integer parse: surrounding whitespace is ignored, an optional
/// sign is accepted and the leading run of digits is used, so `"12abc"`
/// is 12. Returns `None` when there are no leading digits or the value
/// does not fit an `i64`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'-' | b'+')));
    let digits = s[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

pub fn by_index(ds: &Dataset, index: i64) -> QueryResult<&MovieRecord> {
    usize::try_from(index)
        .ok()
        .and_then(|pos| ds.get(pos))
        .ok_or_else(|| QueryError::OutOfRange { index: index.to_string(), len: ds.len() })
}

/// Text that is not an integer is reported as out of range.
pub fn by_index_str<'a>(ds: &'a Dataset, raw: &str) -> QueryResult<&'a MovieRecord> {
    match parse_int(raw) {
        Some(index) => by_index(ds, index),
        None => Err(QueryError::OutOfRange { index: raw.to_string(), len: ds.len() }),
    }
}

/// First record carrying `id`.
pub fn by_id(ds: &Dataset, id: MovieId) -> QueryResult<&MovieRecord> {
    ds.position_of(id)
        .and_then(|pos| ds.get(pos))
        .ok_or(QueryError::NotFound(id))
}

pub fn by_id_str<'a>(ds: &'a Dataset, raw: &str) -> QueryResult<&'a MovieRecord> {
    let id = parse_int(raw).ok_or_else(|| QueryError::InvalidInput(raw.to_string()))?;
    by_id(ds, id)
}

/// Case-insensitive substring match on the title. An empty term matches
/// every movie.
pub fn search_by_title<'a>(ds: &'a Dataset, term: &str) -> Vec<&'a MovieRecord> {
    let needle = term.to_lowercase();
    filter_by_attribute(ds, |m| m.title.to_lowercase().contains(&needle))
}

pub fn filter_by_attribute<'a, P>(ds: &'a Dataset, predicate: P) -> Vec<&'a MovieRecord>
where
    P: Fn(&MovieRecord) -> bool,
{
    ds.movies().iter().filter(|m| predicate(*m)).collect()
}

/// Exact, case-sensitive rating match.
pub fn rated(rating: &str) -> impl Fn(&MovieRecord) -> bool + '_ {
    move |m| m.rated == rating
}

pub fn with_metascore(m: &MovieRecord) -> bool {
    m.has_metascore()
}

pub fn blank_metascore(m: &MovieRecord) -> bool {
    m.is_metascore_blank()
}
