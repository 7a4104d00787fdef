use serde::Serialize;

/// One OS entry from the compatibility FAQ. Field declaration order is the
/// JSON key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OsRecord {
    pub distro: String,
    pub os_name: String,
    pub bits: String,
    pub uefi_support: bool,
    pub remarks: String,
}
