//! Structural comparison of records
//!
//! Two records compare over the names they both expose, walked in the
//! left-hand record's visible order. The first pair that is strictly less or
//! greater decides. A pair with no ordering, such as NaN or text against an
//! integer, is passed over by the ordering walk but still counts as unequal,
//! so records differing only in such pairs are neither ordered nor equal.
//!
//! Records with no shared names compare equal.

use crate::value::Value;
use fieldwire_core::Identifier;
use std::cmp::Ordering;

/// Anything exposing named values to the comparator
pub trait Visible {
    /// Names this value exposes, own fields first, then promoted ones
    fn visible_names(&self) -> &[Identifier];

    /// Value for a visible name
    fn lookup(&self, name: &Identifier) -> Option<&Value>;
}

/// Field-wise comparison over the shared visible names
pub fn compare<L, R>(lhs: &L, rhs: &R) -> Option<Ordering>
where
    L: Visible + ?Sized,
    R: Visible + ?Sized,
{
    let pairs = lhs
        .visible_names()
        .iter()
        .filter_map(|name| Some((lhs.lookup(name)?, rhs.lookup(name)?)));
    walk(pairs, Ordering::Equal)
}

/// First strict ordering among the pairs, else `tie` when every pair was
/// equal, else `None`
fn walk<'a, I>(pairs: I, tie: Ordering) -> Option<Ordering>
where
    I: Iterator<Item = (&'a Value, &'a Value)>,
{
    let mut incomparable = false;
    for (a, b) in pairs {
        match compare_values(a, b) {
            Some(Ordering::Equal) => {}
            Some(decided) => return Some(decided),
            None => incomparable = true,
        }
    }
    match tie {
        Ordering::Equal if incomparable => None,
        tie => Some(tie),
    }
}

/// Compare two field values
pub fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a.is_present(), b.is_present()) {
        (false, false) => return Some(Ordering::Equal),
        (false, true) => return Some(Ordering::Less),
        (true, false) => return Some(Ordering::Greater),
        (true, true) => {}
    }

    match (a, b) {
        (Value::Optional(Some(a)), b) => compare_values(a, b),
        (a, Value::Optional(Some(b))) => compare_values(a, b),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Seq(a), Value::Seq(b)) => compare_seq(a, b),
        (Value::Record(a), Value::Record(b)) => compare(a, b),
        _ => match (a.as_i128(), b.as_i128()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ => a.as_f64()?.partial_cmp(&b.as_f64()?),
        },
    }
}

fn compare_seq(a: &[Value], b: &[Value]) -> Option<Ordering> {
    walk(a.iter().zip(b), a.len().cmp(&b.len()))
}

/// `lhs < rhs`
pub fn less<L: Visible + ?Sized, R: Visible + ?Sized>(lhs: &L, rhs: &R) -> bool {
    compare(lhs, rhs) == Some(Ordering::Less)
}

/// `lhs > rhs`
pub fn greater<L: Visible + ?Sized, R: Visible + ?Sized>(lhs: &L, rhs: &R) -> bool {
    compare(lhs, rhs) == Some(Ordering::Greater)
}

/// `lhs <= rhs`
pub fn less_or_equal<L: Visible + ?Sized, R: Visible + ?Sized>(lhs: &L, rhs: &R) -> bool {
    matches!(compare(lhs, rhs), Some(Ordering::Less | Ordering::Equal))
}

/// `lhs >= rhs`
pub fn greater_or_equal<L: Visible + ?Sized, R: Visible + ?Sized>(lhs: &L, rhs: &R) -> bool {
    matches!(compare(lhs, rhs), Some(Ordering::Greater | Ordering::Equal))
}

/// `lhs == rhs`
pub fn equal<L: Visible + ?Sized, R: Visible + ?Sized>(lhs: &L, rhs: &R) -> bool {
    compare(lhs, rhs) == Some(Ordering::Equal)
}

/// `lhs != rhs`
pub fn not_equal<L: Visible + ?Sized, R: Visible + ?Sized>(lhs: &L, rhs: &R) -> bool {
    !equal(lhs, rhs)
}
