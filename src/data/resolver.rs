use std::collections::HashSet;

use super::catalog::AliasCatalog;
use super::model::{CanonicalField, ColumnMapping, FIELD_COUNT};

/// Pick one source column per canonical field.
///
/// For each field the catalog's spellings are tried in order (candidates
/// outer, casing variants inner) and the first one present among `columns`
/// wins. Matching is exact string equality. A field with no match stays
/// unresolved; that is not an error here.
pub fn resolve<'a, I>(columns: I, catalog: &AliasCatalog) -> ColumnMapping
where
    I: IntoIterator<Item = &'a str>,
{
    let available: HashSet<&str> = columns.into_iter().collect();

    let mut sources: [Option<String>; FIELD_COUNT] = Default::default();
    for field in CanonicalField::ALL {
        sources[field.index()] = resolve_field(field, &available, catalog);
    }
    ColumnMapping::new(sources)
}

fn resolve_field(
    field: CanonicalField,
    available: &HashSet<&str>,
    catalog: &AliasCatalog,
) -> Option<String> {
    let found = catalog
        .spellings(field)
        .find(|spelling| available.contains(spelling.text.as_str()));

    match &found {
        Some(spelling) => log::debug!(
            "{field} -> '{}' (candidate '{}', {:?})",
            spelling.text,
            spelling.candidate,
            spelling.variant
        ),
        None => log::debug!("{field} -> unresolved"),
    }
    found.map(|spelling| spelling.text)
}
