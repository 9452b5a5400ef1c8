//! Field-data collaborator interface.
//!
//! Device and subscriber identity fields are acquired by an external
//! provider (on a UICC: file reads and local-information commands, including
//! BCD decoding and check-digit computation). This crate only consumes the
//! decoded ASCII spans. Providers are expected to fetch each field lazily on
//! the first [`load`](DeviceIdentity::load) and cache it; the getters then
//! hand out cheap shared borrows.

/// Provider of the four identity fields included in a report.
pub trait DeviceIdentity {
    /// Fetch and cache any fields that have not been loaded yet.
    fn load(&mut self);

    /// Identity-document serial number (ICCID), as ASCII digits.
    fn serial_id(&self) -> &[u8];

    /// Device equipment identifier (IMEI), as ASCII digits.
    fn equipment_id(&self) -> &[u8];

    /// Mobile country code, as ASCII digits.
    fn country_code(&self) -> &[u8];

    /// Mobile network code, as ASCII digits.
    fn network_code(&self) -> &[u8];
}
