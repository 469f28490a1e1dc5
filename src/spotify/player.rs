use crate::spotify::{SpotifyApi, SpotifyError};

/// Starts playback of a single track on the listener's active device.
pub async fn play_track(api: &dyn SpotifyApi, token: &str, uri: &str) -> Result<(), SpotifyError> {
    api.start_playback(token, &[uri.to_string()]).await
}

/// Moves playback to `device_id` and always resumes it there.
///
/// Used by the browser player right after its Web Playback device comes
/// online, so the device is playing whether or not anything was playing
/// before.
pub async fn transfer_to_device(
    api: &dyn SpotifyApi,
    token: &str,
    device_id: &str,
) -> Result<(), SpotifyError> {
    api.transfer_playback(token, device_id, true).await
}
