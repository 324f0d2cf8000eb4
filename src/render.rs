//! Console rendering of a subset listing.
use std::fmt::Display;
use std::io::{self, Write};

/// Header line printed before the listing.
pub const HEADER: &str = "All subsets:";

/// Render one subset as `{ e1 e2 ... }`.
///
/// Every element is followed by a single space, so the empty subset renders as
/// `{ }` and `[1, 2]` as `{ 1 2 }`.
pub fn format_subset<T: Display>(subset: &[T]) -> String {
    let mut line = String::from("{ ");
    for x in subset {
        line.push_str(&x.to_string());
        line.push(' ');
    }
    line.push('}');
    line
}

/// Write the header followed by one line per subset, in the given order.
pub fn write_subsets<W: Write, T: Display>(out: &mut W, subsets: &[Vec<T>]) -> io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    for subset in subsets {
        tracing::trace!(len = subset.len(), "writing subset");
        writeln!(out, "{}", format_subset(subset))?;
    }
    out.flush()
}
