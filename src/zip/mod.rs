//! ZIP container integrity checks.
//!
//! Before a score archive is trusted for a storage write, and again for
//! read-time diagnostics, its bytes are checked for structural
//! plausibility without parsing the ZIP directory:
//!
//! 1. A magic-number check on the leading 4 bytes rejects non-archive
//!    uploads early.
//! 2. An End-Of-Central-Directory (EOCD) completeness check verifies the
//!    trailing record and its declared comment length account for the
//!    whole buffer, catching truncation.
//!
//! ## ZIP Format Overview
//!
//! A ZIP file ends with a 22-byte EOCD record plus an optional comment of
//! up to 65535 bytes. Locating that record and comparing its declared end
//! against the buffer length is enough to detect an incomplete transfer,
//! which is all this system needs; a full directory parse is out of scope.

mod integrity;

pub use integrity::*;
