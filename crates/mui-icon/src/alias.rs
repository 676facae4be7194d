//! Curated identifier to export-name mappings.
//!
//! Most identifiers convert mechanically (see [`crate::name::to_symbol_name`]).
//! This table pins the common ones and covers exports whose capitalization or
//! wording does not follow from the identifier.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Identifier → package export name.
const ALIASES: &[(&str, &str)] = &[
    // Common icons
    ("shopping-cart", "ShoppingCartIcon"),
    ("home", "HomeIcon"),
    ("check", "CheckIcon"),
    ("close", "CloseIcon"),
    ("arrow-back", "ArrowBackIcon"),
    ("arrow-forward", "ArrowForwardIcon"),
    ("menu", "MenuIcon"),
    ("search", "SearchIcon"),
    ("settings", "SettingsIcon"),
    ("account-circle", "AccountCircleIcon"),
    ("favorite", "FavoriteIcon"),
    ("star", "StarIcon"),
    ("delete", "DeleteIcon"),
    ("edit", "EditIcon"),
    ("save", "SaveIcon"),
    ("email", "EmailIcon"),
    ("notifications", "NotificationsIcon"),
    ("local-shipping", "LocalShippingIcon"),
    ("payment", "PaymentIcon"),
    ("receipt", "ReceiptIcon"),
    ("more-vert", "MoreVertIcon"),
    ("more-horiz", "MoreHorizIcon"),
    ("done", "DoneIcon"),
    ("add", "AddIcon"),
    ("remove", "RemoveIcon"),
    ("info", "InfoIcon"),
    ("warning", "WarningIcon"),
    ("error", "ErrorIcon"),
    ("help", "HelpIcon"),
    ("phone", "PhoneIcon"),
    ("message", "MessageIcon"),
    ("chat", "ChatIcon"),
    ("lock", "LockIcon"),
    ("lock-open", "LockOpenIcon"),
    ("person", "PersonIcon"),
    ("people", "PeopleIcon"),
    ("location-on", "LocationOnIcon"),
    ("share", "ShareIcon"),
    ("file-copy", "FileCopyIcon"),
    ("folder", "FolderIcon"),
    ("attach-file", "AttachFileIcon"),
    ("link", "LinkIcon"),
    ("print", "PrintIcon"),
    ("download", "DownloadIcon"),
    ("upload", "UploadIcon"),
    ("dashboard", "DashboardIcon"),
    ("calendar-today", "CalendarTodayIcon"),
    ("event", "EventIcon"),
    ("access-time", "AccessTimeIcon"),
    ("alarm", "AlarmIcon"),
    ("visibility", "VisibilityIcon"),
    ("visibility-off", "VisibilityOffIcon"),
    ("expand-more", "ExpandMoreIcon"),
    ("expand-less", "ExpandLessIcon"),
    ("refresh", "RefreshIcon"),
    ("clear", "ClearIcon"),
    ("send", "SendIcon"),
    // Brand capitalization
    ("github", "GitHubIcon"),
    ("linkedin", "LinkedInIcon"),
    ("youtube", "YouTubeIcon"),
    ("whatsapp", "WhatsAppIcon"),
    // Numeric names are spelled out in the package
    ("3d-rotation", "ThreeDRotationIcon"),
    ("360", "ThreeSixtyIcon"),
    // Synonyms
    ("trash", "DeleteIcon"),
    ("cart", "ShoppingCartIcon"),
    ("user", "PersonIcon"),
    ("gear", "SettingsIcon"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| ALIASES.iter().copied().collect())
}

/// Look up the export name pinned for an identifier.
pub fn lookup(identifier: &str) -> Option<&'static str> {
    table().get(identifier).copied()
}

/// Check whether an identifier has an alias entry.
pub fn contains(identifier: &str) -> bool {
    table().contains_key(identifier)
}

/// Number of alias entries.
pub fn len() -> usize {
    table().len()
}

/// Iterate over all alias entries in declaration order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    ALIASES.iter().copied()
}
