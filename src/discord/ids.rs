//! Custom ids carried by buttons, menus and modals.
//!
//! Entry buttons on the setup message use fixed ids so they keep working
//! after a restart. Everything opened from them is scoped to a session: the id
//! of the interaction that opened it, appended as `<action>:<session>`.

pub const SIGN_UP: &str = "squadseek_sign_up";
pub const FIND_PLAYERS: &str = "squadseek_find_players";
pub const DELETE_DATA: &str = "squadseek_delete_data";

pub const SIGN_UP_FORM: &str = "squadseek_sign_up_form";
pub const GAME_PICKER: &str = "squadseek_game_picker";
pub const PREVIOUS: &str = "squadseek_previous";
pub const NEXT: &str = "squadseek_next";
pub const CONFIRM_DELETION: &str = "squadseek_confirm_deletion";
pub const CANCEL_DELETION: &str = "squadseek_cancel_deletion";

pub fn scoped(action: &str, session: u64) -> String {
    format!("{action}:{session}")
}

/// Split a scoped id back into its action and session.
pub fn parse_scoped(custom_id: &str) -> Option<(&str, u64)> {
    let (action, session) = custom_id.split_once(':')?;
    Some((action, session.parse().ok()?))
}

pub fn in_session(custom_id: &str, session: u64) -> bool {
    parse_scoped(custom_id).is_some_and(|(_, id)| id == session)
}
