/// Slice units one half of a box holds.
pub const SLICES_PER_SIDE: u32 = 4;

/// Halves per box.
pub const SIDES_PER_BOX: usize = 2;

/// Slices in one "pizza deal" (what a single pre-order buys).
pub const SLICES_PER_DEAL: f64 = 2.0;

// ─────────────────────────────────────────────────────────────────────────────
// Order defaults (manual entry and start.gg import)
// ─────────────────────────────────────────────────────────────────────────────

/// Slices per order when none is given.
pub const DEFAULT_SLICE_COUNT: u32 = 2;

/// Drinks per order when none is given.
pub const DEFAULT_DRINK_COUNT: u32 = 1;

/// Most slices a single order may carry.
pub const MAX_SLICE_COUNT: u32 = 64;

/// Most drinks a single order may carry.
pub const MAX_DRINK_COUNT: u32 = 24;

/// Topping preselected in the manual order form.
pub const FORM_DEFAULT_TOPPING: &str = "Pepperoni";

/// Drink preselected in the manual order form.
pub const FORM_DEFAULT_DRINK: &str = "Coke";

/// Topping used when an imported row leaves it blank.
pub const DEFAULT_TOPPING: &str = "Cheese";

/// Drink used when an imported row leaves it blank.
pub const DEFAULT_DRINK: &str = "Iced Tea";

// ─────────────────────────────────────────────────────────────────────────────
// start.gg registration export columns
// ─────────────────────────────────────────────────────────────────────────────

pub const CSV_COL_GAMER_TAG: &str = "GamerTag";
pub const CSV_COL_TOPPING: &str = "Pizza Deal Pre-order: Toppings";
pub const CSV_COL_DRINK: &str = "Pizza Deal: Drink";

// ─────────────────────────────────────────────────────────────────────────────
// Preferences
// ─────────────────────────────────────────────────────────────────────────────

/// Event selected on first run.
pub const DEFAULT_EVENT_SLUG: &str = "back-to-the-lab-again-39";

/// How many recently used events are remembered.
pub const MAX_RECENT_EVENTS: usize = 5;

/// Minimum Jaro-Winkler score for a player name suggestion.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;
