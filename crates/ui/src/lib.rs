pub mod browser;
pub mod constants;
pub mod inspector;
pub mod preview;
pub mod theme;
pub mod timeline;

use std::path::Path;

use reelmark_media::import::Coverage;
use reelmark_media::metadata::AssetMetadata;
use reelmark_media::preview::PreviewState;
use reelmark_state::project::AppState;

/// Media-side answers the panels need but must not compute themselves.
pub trait MediaLookup {
    fn preview<'a>(&self, state: &'a AppState) -> PreviewState<'a>;
    fn metadata(&self, path: &Path) -> Option<&AssetMetadata>;
    fn coverage(&self, state: &AppState) -> Option<Coverage>;
}
