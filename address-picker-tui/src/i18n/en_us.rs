//! 英文翻译 (en-US)

use super::keys::{
    AddressesTexts, CommonTexts, HelpTexts, HintTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Fundingift Address Picker",
        quit: "Quit",
        back: "Back",
    },

    hints: HintTexts {
        move_up_down: "Move",
        select: "Select",
        clear: "Clear",
        help: "Help",
    },

    addresses: AddressesTexts {
        title: "Shipping Address",
        empty: "No saved addresses",
        empty_hint: "Add an address in your profile to continue",
        default_badge: "Default",
        selected_badge: "Selected",
        zip_code: "Zip",
    },

    status: StatusTexts {
        selected: "Delivering to",
        cleared: "Selection cleared",
        select_failed: "Could not select address",
        drifted: "Selected address is no longer in the list",
        reloaded: "Addresses reloaded",
        reload_ignored: "Address list is frozen, reload ignored",
        reload_failed: "Could not reload addresses",
    },

    help: HelpTexts {
        title: "Help",
        move_cursor: "Move cursor",
        jump: "First / last address",
        select: "Select address",
        clear: "Clear selection",
        reload: "Reload addresses",
        close: "Close help",
        quit: "Quit",
    },
};
