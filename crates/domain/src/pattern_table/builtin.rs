use super::{DualPatternRule, PatternRule};

// Path-bearing and host-qualified fragments come before the broader
// fragments that would otherwise shadow them.
const SINGLE_RULES: &[(&str, &str)] = &[
    ("developer.apple.com/xcode", "xcode"),
    ("xcode", "xcode"),
    ("testflight", "testflight"),
    ("ios simulator", "simulator"),
    ("icloud.com/mail", "icloud_mail"),
    ("icloud.com/notes", "apple_notes"),
    ("icloud.com/calendar", "apple_calendar"),
    ("icloud.com/reminders", "apple_reminders"),
    ("icloud.com/photos", "apple_photos"),
    ("icloud.com/iclouddrive", "icloud_drive"),
    ("icloud.com", "icloud"),
    ("apps.apple.com", "app_store"),
    ("app store", "app_store"),
    ("music.apple.com", "apple_music"),
    ("podcasts.apple.com", "apple_podcasts"),
    ("tv.apple.com", "apple_tv"),
    ("finder", "finder"),
    ("safari", "safari"),
    ("imessage", "messages"),
    ("facetime", "facetime"),
    ("system settings", "system_settings"),
    ("system preferences", "system_settings"),
    ("activity monitor", "activity_monitor"),
    ("quicktime", "quicktime"),
    ("textedit", "textedit"),
    ("keynote", "keynote"),
    ("garageband", "garageband"),
    ("final cut", "final_cut_pro"),
    ("logic pro", "logic_pro"),
    ("imovie", "imovie"),
    ("iterm", "iterm"),
    ("terminal", "terminal"),
    ("visual studio code", "vscode"),
    ("vscode", "vscode"),
    ("github", "github"),
    ("gitlab", "gitlab"),
    ("stackoverflow", "stack_overflow"),
    ("stack overflow", "stack_overflow"),
    ("mail.google.com", "gmail"),
    ("gmail", "gmail"),
    ("calendar.google.com", "google_calendar"),
    ("docs.google.com", "google_docs"),
    ("sheets.google.com", "google_sheets"),
    ("drive.google.com", "google_drive"),
    ("meet.google.com", "google_meet"),
    ("chrome", "chrome"),
    ("firefox", "firefox"),
    ("outlook", "outlook"),
    ("teams.microsoft.com", "teams"),
    ("microsoft teams", "teams"),
    ("microsoft excel", "excel"),
    ("powerpoint", "powerpoint"),
    ("slack", "slack"),
    ("discord", "discord"),
    ("zoom.us", "zoom"),
    ("whatsapp", "whatsapp"),
    ("telegram", "telegram"),
    ("notion", "notion"),
    ("obsidian", "obsidian"),
    ("figma", "figma"),
    ("linear.app", "linear"),
    ("jira", "jira"),
    ("confluence", "confluence"),
    ("asana", "asana"),
    ("trello", "trello"),
    ("todoist", "todoist"),
    ("1password", "1password"),
    ("raycast", "raycast"),
    ("dropbox", "dropbox"),
    ("chatgpt", "chatgpt"),
    ("chat.openai.com", "chatgpt"),
    ("claude.ai", "claude"),
    ("spotify", "spotify"),
    ("youtube", "youtube"),
    ("netflix", "netflix"),
    ("twitch", "twitch"),
    ("reddit", "reddit"),
    ("linkedin", "linkedin"),
    ("wikipedia", "wikipedia"),
];

// Generic words that only name an Apple first-party app next to "apple".
const DUAL_RULES: &[(&str, &str, &str)] = &[
    ("mail", "apple", "apple_mail"),
    ("music", "apple", "apple_music"),
    ("notes", "apple", "apple_notes"),
    ("calendar", "apple", "apple_calendar"),
    ("reminders", "apple", "apple_reminders"),
    ("photos", "apple", "apple_photos"),
    ("maps", "apple", "apple_maps"),
    ("messages", "apple", "messages"),
    ("podcasts", "apple", "apple_podcasts"),
    ("books", "apple", "apple_books"),
    ("news", "apple", "apple_news"),
    ("pages", "apple", "pages"),
    ("numbers", "apple", "numbers"),
    ("preview", "apple", "preview"),
    ("shortcuts", "apple", "shortcuts"),
    ("instruments", "apple", "instruments"),
];

pub(super) fn single_rules() -> Vec<PatternRule> {
    SINGLE_RULES
        .iter()
        .map(|(pattern, asset_id)| PatternRule::new(pattern, asset_id))
        .collect()
}

pub(super) fn dual_rules() -> Vec<DualPatternRule> {
    DUAL_RULES
        .iter()
        .map(|(a, b, asset_id)| DualPatternRule::new(a, b, asset_id))
        .collect()
}
