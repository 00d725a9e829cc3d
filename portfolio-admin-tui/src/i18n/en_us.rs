//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, FormTexts, HelpTexts, HintTexts, HomeTexts, ModalTexts, NavTexts, ProjectsTexts,
    Translations, UrlGrpsTexts, UrlsTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Portfolio Admin",
        loading: "Loading...",
        error: "Error",
        yes: "Yes",
        no: "No",
        cancel: "Cancel",
        delete: "Delete",
        save: "Save",
    },

    hints: HintTexts {
        switch_panel: "Switch panel",
        navigate: "Navigate",
        select: "Select",
        open: "Open",
        add: "New",
        edit: "Edit",
        delete: "Delete",
        reload: "Reload",
        filter: "Filter",
        back: "Back",
        quit: "Quit",
        next_field: "Field",
        toggle: "Toggle",
        change_group: "Group",
        submit: "Save",
        close: "Close",
        help: "Help",
    },

    nav: NavTexts {
        title: "Menu",
        home: "Home",
        url_grps: "Groups",
        urls: "URLs",
        projects: "Projects",
    },

    home: HomeTexts {
        welcome: "Welcome to Portfolio Admin",
        welcome_desc: "Manage the link groups and URLs shown on the portfolio",
        api_url: "API",
        get_started: "Pick a section in the left menu and press Enter",
    },

    url_grps: UrlGrpsTexts {
        title: "URL groups",
        empty: "No groups yet",
        col_id: "Id",
        col_name: "Name",
        col_status: "Status",
    },

    urls: UrlsTexts {
        title: "URLs",
        empty: "No URLs yet",
        col_name: "Name",
        col_link: "Link",
        col_group: "Group",
        col_status: "Status",
        filter: "Filter",
        all_groups: "All groups",
        unknown_group: "(no group)",
    },

    projects: ProjectsTexts {
        title: "Public projects",
        empty: "No public projects",
        count: "projects",
    },

    form: FormTexts {
        new_group: "New group",
        edit_group: "Edit group",
        new_url: "New URL",
        edit_url: "Edit URL",
        name: "Name",
        link: "Link",
        group: "Group",
        enabled: "Enabled",
        select_group: "Select a group",
        loading_groups: "Loading groups...",
        submitting: "Saving...",
        redirecting: "Returning to the list...",
    },

    modal: ModalTexts {
        confirm_delete_title: "Confirm deletion",
        confirm_delete_group: "Delete this group?",
        confirm_delete_url: "Delete this URL?",
        notification_error: "Error",
        notification_success: "Success",
        press_to_close: "Press Enter or Esc to close",
    },

    help: HelpTexts {
        title: "Help",
        lines: &[
            ("Tab", "Switch between menu and content"),
            ("↑↓ / j k", "Move selection"),
            ("Enter", "Open / confirm"),
            ("Alt+a", "Create"),
            ("Alt+e", "Edit"),
            ("Alt+d", "Delete"),
            ("Alt+r", "Reload"),
            ("Alt+f", "Filter URLs by group"),
            ("Esc", "Back / close"),
            ("Alt+q / Ctrl+c", "Quit"),
        ],
    },
};
