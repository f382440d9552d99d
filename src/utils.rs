use crate::error::CatalogError;

pub const MAX_LIMIT: i64 = 50;
pub const MAX_ARTIST_IDS: usize = 50;
pub const MAX_ALBUM_IDS: usize = 20;
pub const MAX_TRACK_IDS: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl PageRequest {
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

/// Checks caller supplied paging bounds: `limit` in 0..=50, `offset` >= 0.
pub fn validate_pagination(limit: Option<i64>, offset: Option<i64>) -> Result<PageRequest, CatalogError> {
    let limit = match limit {
        Some(l) if !(0..=MAX_LIMIT).contains(&l) => {
            return Err(CatalogError::validation(format!(
                "limit {l} is invalid - must be between 0 and {MAX_LIMIT}"
            )));
        }
        Some(l) => Some(l as u32),
        None => None,
    };

    let offset = match offset {
        Some(o) if o < 0 => {
            return Err(CatalogError::validation(format!(
                "offset {o} is invalid - must be 0 or above"
            )));
        }
        Some(o) if o > u32::MAX as i64 => {
            return Err(CatalogError::validation(format!(
                "offset {o} is invalid - must be at most {}",
                u32::MAX
            )));
        }
        Some(o) => Some(o as u32),
        None => None,
    };

    Ok(PageRequest { limit, offset })
}

/// Checks that `id` is a Spotify base62 ID.
///
/// IDs end up as a path segment or inside the `ids` query value, so anything
/// besides ASCII letters and digits is rejected.
pub fn validate_id(kind: &str, id: &str) -> Result<(), CatalogError> {
    if id.is_empty() {
        return Err(CatalogError::validation(format!("{kind} id must not be empty")));
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(CatalogError::validation(format!(
            "{kind} id '{id}' is invalid - only letters and digits are allowed"
        )));
    }
    Ok(())
}

/// Validates a batch of IDs and joins them for the `ids` query parameter.
pub fn join_ids<S: AsRef<str>>(kind: &str, ids: &[S], max: usize) -> Result<String, CatalogError> {
    if ids.is_empty() {
        return Err(CatalogError::validation(format!(
            "at least one {kind} id is required"
        )));
    }
    if ids.len() > max {
        return Err(CatalogError::validation(format!(
            "too many {kind} ids - got {}, at most {max} are allowed",
            ids.len()
        )));
    }
    for id in ids {
        validate_id(kind, id.as_ref())?;
    }

    Ok(ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(","))
}
