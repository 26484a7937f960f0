pub mod prompts;
pub mod render;

pub use prompts::{
    form_defaults, parse_count, prompt_order_form, prompt_yes_no, resolve_player,
    suggest_players,
};
pub use render::{
    display_door, display_handoffs, display_menu, display_oven_plan, display_tally, format_box,
    plan_json,
};
