//! Editor-wide constants.
//!
//! Centralizes class names, slider ranges and initial style values so the
//! editor, the properties panel and the settings defaults agree.

use std::ops::RangeInclusive;

// ============================================================================
// Class Names
// ============================================================================

/// Marker class carried by the currently selected element
pub const SELECTED_CLASS: &str = "selected-element";

/// Class flagging a container that accepts dropped components
pub const DROP_ZONE_CLASS: &str = "drop-zone";

/// Class flagging a palette entry as a draggable component template
pub const COMPONENT_CLASS: &str = "component-item";

/// Class of the canvas region that receives drops
pub const CANVAS_CLASS: &str = "editor-canvas";

// ============================================================================
// Drag & Drop
// ============================================================================

/// Transfer format used for component payloads
pub const TRANSFER_FORMAT: &str = "text/html";

// ============================================================================
// Properties Panel
// ============================================================================

/// Message shown in the properties panel when nothing is selected
pub const PANEL_PLACEHOLDER: &str = "Select an element";

/// Font size slider range in pixels
pub const FONT_SIZE_RANGE: RangeInclusive<i32> = 10..=72;

/// Padding slider range in pixels
pub const PADDING_RANGE: RangeInclusive<i32> = 0..=50;

/// Margin slider range in pixels
pub const MARGIN_RANGE: RangeInclusive<i32> = 0..=50;

/// Fallback for colours that cannot be parsed
pub const DEFAULT_HEX_COLOR: &str = "#000000";

// ============================================================================
// Initial Computed Values
// ============================================================================

/// Computed background colour when nothing sets one
pub const INITIAL_BACKGROUND_COLOR: &str = "rgba(0, 0, 0, 0)";

/// Computed text colour when neither the element nor an ancestor sets one
pub const INITIAL_COLOR: &str = "rgb(0, 0, 0)";

/// Computed font size when neither the element nor an ancestor sets one
pub const INITIAL_FONT_SIZE: &str = "16px";

/// Computed padding / margin when the element does not set one
pub const INITIAL_LENGTH: &str = "0px";

// ============================================================================
// Notifications
// ============================================================================

/// How long a notification stays on screen, in seconds
pub const NOTIFICATION_DURATION_SECS: u64 = 5;

// ============================================================================
// Project API
// ============================================================================

/// Default base URL of the project REST API
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Request timeout for project API calls, in seconds
pub const API_TIMEOUT_SECS: u64 = 30;
