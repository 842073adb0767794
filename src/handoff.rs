//! Pre-filled link to the hosted form endpoint, which receives the contact
//! request for real. The wizard only prepares the values.

use crate::core::form_state::FormState;
use crate::error::HandoffError;
use url::Url;

pub fn handoff_url(base: &str, values: &FormState) -> Result<Url, HandoffError> {
    let mut url = Url::parse(base).map_err(|source| HandoffError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;

    let filled: Vec<_> = values.iter().filter(|(_, v)| !v.is_blank()).collect();
    if !filled.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (id, value) in filled {
            pairs.append_pair(id, value.to_query_value().trim());
        }
    }
    Ok(url)
}
