// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the smooth balance chart API.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod interaction;
pub mod scale;
pub mod scene;
pub mod series;
pub mod spline;
pub mod svg;
pub mod theme;
pub mod types;
pub mod view;

pub use animation::{FrameHandle, FrameScheduler, ManualScheduler, RevealTicker};
pub use chart::{ChartLayout, RenderOptions, SmoothLineChart};
pub use error::ChartError;
pub use interaction::{FocusEvent, FocusState, PointerEvent};
pub use scene::{Frame, Layer, Scene};
pub use series::{Sample, Series};
pub use theme::Theme;
pub use types::Insets;
pub use view::Viewport;
