//! Per-token encoder options table

use onvif_api::ApiError;
use onvif_state::model::EncoderOptions;
use tracing::debug;

use crate::config::OptionsRebuild;

/// Rebuild `table` with one entry per token, in token order
///
/// `fetch` performs the query for a single token. With
/// [`OptionsRebuild::Atomic`] the table is only replaced when every query
/// succeeds; with [`OptionsRebuild::Partial`] it is cleared up front and a
/// failure leaves the entries for the tokens before the failing one.
pub fn rebuild<F>(
    tokens: &[String],
    table: &mut Vec<EncoderOptions>,
    mode: OptionsRebuild,
    mut fetch: F,
) -> Result<(), ApiError>
where
    F: FnMut(&str) -> Result<EncoderOptions, ApiError>,
{
    match mode {
        OptionsRebuild::Atomic => {
            let mut side = Vec::with_capacity(tokens.len());
            for token in tokens {
                side.push(fetch(token)?);
                debug!(token = %token, "fetched encoder options");
            }
            *table = side;
        }
        OptionsRebuild::Partial => {
            table.clear();
            for token in tokens {
                table.push(fetch(token)?);
                debug!(token = %token, "fetched encoder options");
            }
        }
    }
    Ok(())
}
