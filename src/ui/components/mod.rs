//! Reusable UI components shared by the three feature panels.
//!
//! - `TabSelector` - Horizontal screen selector with a `▶` marker
//! - `InputField` - Labelled text box with focus cursor
//! - `StatusIndicator` - Spinner and error lines for a screen's request status
//! - `ResultArea` - Scrollable titled box holding a screen's result lines

mod input_field;
mod result_area;
mod status_indicator;
mod tab_selector;

pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
pub use result_area::render_result_area;
pub use status_indicator::{get_spinner_char, render_status_indicator};
pub use tab_selector::{render_tab_selector, TabItem};
