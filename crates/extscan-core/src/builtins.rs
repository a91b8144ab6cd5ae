//! Extensions bundled with Chrome.
//!
//! These identifiers ship with the browser rather than being installed by
//! the user. They are hidden from the report unless explicitly requested,
//! and are named from this table instead of the web store.

/// Number of built-in extensions.
pub const BUILTIN_COUNT: usize = 10;

/// A bundled extension identifier and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinExtension {
    pub id: &'static str,
    pub name: &'static str,
}

/// All known built-in extensions.
pub const BUILTIN_EXTENSIONS: [BuiltinExtension; BUILTIN_COUNT] = [
    BuiltinExtension {
        id: "aapocclcgogkmnckokdopfmhonfmgoek",
        name: "Google Slides",
    },
    BuiltinExtension {
        id: "aohghmighlieiainnegkcijnfilokake",
        name: "Google Docs",
    },
    BuiltinExtension {
        id: "apdfllckaahabafndbhieahigkjlhalf",
        name: "Google Drive",
    },
    BuiltinExtension {
        id: "blpcfgokakmgnkcojhhkbfbldkacnbeo",
        name: "YouTube",
    },
    BuiltinExtension {
        id: "coobgpohoikkiipiblmjeljniedjpjpf",
        name: "Google Search",
    },
    BuiltinExtension {
        id: "felcaaldnbdncclmgdcncolpebgiejap",
        name: "Google Sheets",
    },
    BuiltinExtension {
        id: "ghbmnnjooekpmoecnnnilnnbdlolhkhi",
        name: "Google Docs Offline",
    },
    BuiltinExtension {
        id: "nmmhkkegccagdldgiimedpiccmgmieda",
        name: "Google Wallet",
    },
    BuiltinExtension {
        id: "pjkljhegncpnkpknbcohdijeoejaedia",
        name: "Gmail",
    },
    BuiltinExtension {
        id: "pkedcjkdefgpdelpbcmbmeomcjbeemfm",
        name: "Chrome Media Router",
    },
];

/// Look up the canonical name of a built-in extension.
pub fn builtin_name(identifier: &str) -> Option<&'static str> {
    BUILTIN_EXTENSIONS
        .iter()
        .find(|builtin| builtin.id == identifier)
        .map(|builtin| builtin.name)
}

/// Whether the identifier belongs to a bundled extension.
pub fn is_builtin(identifier: &str) -> bool {
    builtin_name(identifier).is_some()
}
