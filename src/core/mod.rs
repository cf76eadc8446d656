pub mod geometry;
pub mod layout;
pub mod measure;
pub mod scale;
pub mod types;

pub use geometry::{Point, point_around, point_by_angle};
pub use layout::{
    LayoutMetrics, expected_height_from_width, expected_width_from_height, working_size,
};
pub use measure::{MeasureRequest, MeasureSpec, MeasuredSize, measure_gauge};
pub use scale::{
    GaugeScale, MaxValue, SCALE_START_ANGLE, SCALE_SWEEP_ANGLE, ValueOverflowPolicy,
};
pub use types::{Padding, Rect, Viewport};
