pub mod config;
pub mod geometry;
pub mod host;
pub mod scale;
pub mod style;
pub mod synchronizer;
pub mod zoom;

pub use config::{ConfigError, StageConfig, StageSelectors};
pub use geometry::{DesignSize, Rect, Viewport};
pub use host::StageHost;
pub use scale::compute_scale;
pub use style::StyleBlock;
pub use synchronizer::{Adjustment, OverlayReport, ScaleSynchronizer};
pub use zoom::{PixelRatioTracker, RatioChange};
