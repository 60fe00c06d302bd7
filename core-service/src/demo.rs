//! Fixed demonstration playlist.

use core_playback::{Playlist, Track};
use core_runtime::config::DemoPlaylistConfig;

/// Root playlist holding the chosen media, the bonus track, and the nested mix.
pub fn demo_playlist(media_name: &str, config: &DemoPlaylistConfig) -> Playlist {
    let mix = config
        .mix_tracks
        .iter()
        .fold(Playlist::new(config.mix_title.as_str()), |mix, track| {
            mix.with(Track::new(track.as_str()))
        });

    Playlist::new(config.root_title.as_str())
        .with(Track::new(media_name))
        .with(Track::new(config.bonus_track.as_str()))
        .with(mix)
}
