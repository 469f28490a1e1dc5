use futures_util::{Stream, TryStreamExt, stream};
use serde_json::Value;

use crate::spotify::{SpotifyApi, SpotifyError};

/// Number of saved tracks requested per call. Also the largest page Spotify serves.
pub const PAGE_SIZE: u32 = 50;

/// Lazily walks the listener's saved tracks, one upstream call per page.
///
/// Pages are requested at offsets `0, 50, 100, ...` and only after the
/// previous page has been consumed. The stream ends right after the first
/// page holding fewer than [`PAGE_SIZE`] items, so a library whose size is an
/// exact multiple of the page size ends with one extra, empty page. An error
/// is yielded once and nothing is requested after it.
///
/// Calling this again restarts from offset 0.
pub fn saved_track_pages<'a>(
    api: &'a dyn SpotifyApi,
    token: &'a str,
) -> impl Stream<Item = Result<Vec<Value>, SpotifyError>> + Send + 'a {
    stream::try_unfold(Some(0u32), move |offset| async move {
        let Some(offset) = offset else {
            return Ok::<_, SpotifyError>(None);
        };

        let page = api.saved_tracks(token, PAGE_SIZE, offset).await?;
        let next = next_offset(offset, page.items.len())?;

        Ok::<_, SpotifyError>(Some((page.items, next)))
    })
}

/// Offset of the page after the one fetched at `offset`, or `None` when
/// `returned` items make it the last page.
///
/// # Errors
///
/// Returns [`SpotifyError::Decode`] if Spotify keeps sending full pages past
/// the largest representable offset, rather than wrapping around and walking
/// the library again.
///
/// # Example
///
/// ```
/// assert_eq!(next_offset(0, 50).unwrap(), Some(50));
/// assert_eq!(next_offset(50, 12).unwrap(), None);
/// assert!(next_offset(u32::MAX - 10, 50).is_err());
/// ```
pub fn next_offset(offset: u32, returned: usize) -> Result<Option<u32>, SpotifyError> {
    if returned < PAGE_SIZE as usize {
        return Ok(None);
    }

    offset.checked_add(PAGE_SIZE).map(Some).ok_or_else(|| {
        SpotifyError::Decode(format!(
            "saved tracks continue past offset {}, the largest page offset supported",
            offset
        ))
    })
}

/// Collects every saved track, in upstream order.
///
/// Drives [`saved_track_pages`] to the end and concatenates the pages.
///
/// # Arguments
///
/// * `api` - Upstream capability used for each page request
/// * `token` - Listener's bearer token, passed through unchanged
///
/// # Returns
///
/// - `Ok(Vec<Value>)` - Every saved-track item exactly as Spotify sent it
/// - `Err(SpotifyError)` - The first failing page's error
///
/// All or nothing: if any page fails the whole call fails and the items
/// gathered so far are dropped. There is no retry and no rate-limit
/// handling; a 429 surfaces to the caller like any other status.
///
/// # Example
///
/// ```
/// let tracks = all_saved_tracks(state.spotify.as_ref(), &token).await?;
/// println!("{} saved tracks", tracks.len());
/// ```
pub async fn all_saved_tracks(
    api: &dyn SpotifyApi,
    token: &str,
) -> Result<Vec<Value>, SpotifyError> {
    saved_track_pages(api, token).try_concat().await
}
