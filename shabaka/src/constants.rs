use std::f64::consts::PI;

/// ======================= Graph =======================
/// Leading transactions of a fetched page that make it into the graph
pub const DEFAULT_TRANSACTION_LIMIT: usize = 20;
pub const NODE_GROUP: u32 = 1;
pub const NODE_VALUE: u32 = 6;
pub const LINK_WEIGHT: u32 = 1;

pub const DISPLAY_NAME_PREFIX_CHARS: usize = 3;
pub const DISPLAY_NAME_SUFFIX_CHARS: usize = 3;
pub const DISPLAY_NAME_ELLIPSIS: &str = "...";

/// ======================= Node paint =======================
pub const NODE_RADIUS_PER_VALUE: f64 = 2.0;
pub const NODE_FILL_COLOR: &str = "#181816";
pub const NODE_GLOW_COLOR: &str = "#FFFFFF";
pub const NODE_SHADOW_BLUR: f64 = 20.0;
pub const NODE_TEXT_COLOR: &str = "#FFFFFF";
pub const NODE_FONT_FAMILY: &str = "Bai Jamjuree";
/// Font size in screen units at scale 1 (12 * 2)
pub const NODE_FONT_SIZE: f64 = 24.0;
/// Icon edge length in screen units at scale 1 (10 * 3)
pub const NODE_ICON_SIZE: f64 = 30.0;
pub const FULL_CIRCLE: f64 = 2.0 * PI;

/// ======================= Link style =======================
pub const LINK_WIDTH: f64 = 5.0;
pub const LINK_COLOR: &str = "rgba(255,255,255,0.8)";
pub const LINK_CURVATURE: f64 = 0.0;
pub const LINK_DIRECTIONAL_PARTICLES: u32 = 4;
pub const LINK_DIRECTIONAL_PARTICLE_WIDTH: f64 = 4.0;
pub const LINK_ARROW_LENGTH: f64 = 5.0;
pub const LINK_ARROW_REL_POS: f64 = 1.0;
pub const LINK_ARROW_COLOR: &str = "rgba(255,255,255,0.8)";

/// ======================= Simulation =======================
/// The layout engine default is -30
pub const CHARGE_STRENGTH: f64 = -200.0;
pub const LINK_DISTANCE: f64 = 40.0;
pub const COOLDOWN_TICKS: u32 = 20;
pub const ZOOM_TO_FIT_DURATION_MS: u64 = 1000;
pub const ZOOM_TO_FIT_PADDING: f64 = 100.0;

/// ======================= Covalent =======================
pub const COVALENT_BASE_URL: &str = "https://api.covalenthq.com";
/// Polygon Mumbai testnet
pub const COVALENT_CHAIN_ID: u64 = 80001;
pub const COVALENT_QUOTE_CURRENCY: &str = "USD";
pub const COVALENT_API_KEY_ENV: &str = "COVALENT_API_KEY";
