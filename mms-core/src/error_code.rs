//! MMS service error codes
//!
//! Every failed read reported by an MMS client carries one of these codes.
//! The label of each code is the stable string consumers of the JSON output
//! match on, so it must never change once published.

use serde::{Serialize, Serializer};
use std::fmt;

macro_rules! mms_error_codes {
    ($($variant:ident = $code:literal => $label:literal,)+) => {
        /// Closed set of MMS error codes
        ///
        /// Grouped by class: client/session, VMD state, application reference,
        /// definition, resource, service, preempt, time resolution, access,
        /// file and reject. Codes the table does not know are kept as
        /// [`MmsErrorCode::Unrecognized`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MmsErrorCode {
            $($variant,)+
            /// Code outside the known set
            Unrecognized(i32),
        }

        impl MmsErrorCode {
            /// Every known code, in numeric order
            pub const ALL: &'static [MmsErrorCode] = &[$(MmsErrorCode::$variant,)+];

            /// Create from the numeric code used by the client stack
            ///
            /// Unknown codes map to [`MmsErrorCode::Unrecognized`].
            #[must_use]
            pub const fn from_code(code: i32) -> Self {
                match code {
                    $($code => MmsErrorCode::$variant,)+
                    other => MmsErrorCode::Unrecognized(other),
                }
            }

            /// Get the numeric code
            #[must_use]
            pub const fn code(self) -> i32 {
                match self {
                    $(MmsErrorCode::$variant => $code,)+
                    MmsErrorCode::Unrecognized(code) => code,
                }
            }

            /// Canonical label of this code
            ///
            /// The label equals the enumerator name of the client stack.
            /// Unrecognized codes share the sentinel `MMS_ERROR_UNKNOWN`.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(MmsErrorCode::$variant => $label,)+
                    MmsErrorCode::Unrecognized(_) => UNKNOWN_LABEL,
                }
            }
        }
    };
}

/// Label used for any code not in the known table
pub const UNKNOWN_LABEL: &str = "MMS_ERROR_UNKNOWN";

mms_error_codes! {
    None = 0 => "MMS_ERROR_NONE",
    ConnectionRejected = 1 => "MMS_ERROR_CONNECTION_REJECTED",
    ConnectionLost = 2 => "MMS_ERROR_CONNECTION_LOST",
    ServiceTimeout = 3 => "MMS_ERROR_SERVICE_TIMEOUT",
    ParsingResponse = 4 => "MMS_ERROR_PARSING_RESPONSE",
    HardwareFault = 5 => "MMS_ERROR_HARDWARE_FAULT",
    ConcludeRejected = 6 => "MMS_ERROR_CONCLUDE_REJECTED",
    InvalidArguments = 7 => "MMS_ERROR_INVALID_ARGUMENTS",
    OutstandingCallLimit = 8 => "MMS_ERROR_OUTSTANDING_CALL_LIMIT",
    Other = 9 => "MMS_ERROR_OTHER",
    VmdStateOther = 10 => "MMS_ERROR_VMDSTATE_OTHER",
    ApplicationReferenceOther = 20 => "MMS_ERROR_APPLICATION_REFERENCE_OTHER",
    DefinitionOther = 30 => "MMS_ERROR_DEFINITION_OTHER",
    DefinitionInvalidAddress = 31 => "MMS_ERROR_DEFINITION_INVALID_ADDRESS",
    DefinitionTypeUnsupported = 32 => "MMS_ERROR_DEFINITION_TYPE_UNSUPPORTED",
    DefinitionTypeInconsistent = 33 => "MMS_ERROR_DEFINITION_TYPE_INCONSISTENT",
    DefinitionObjectUndefined = 34 => "MMS_ERROR_DEFINITION_OBJECT_UNDEFINED",
    DefinitionObjectExists = 35 => "MMS_ERROR_DEFINITION_OBJECT_EXISTS",
    DefinitionObjectAttributeInconsistent = 36 => "MMS_ERROR_DEFINITION_OBJECT_ATTRIBUTE_INCONSISTENT",
    ResourceOther = 40 => "MMS_ERROR_RESOURCE_OTHER",
    ResourceCapabilityUnavailable = 41 => "MMS_ERROR_RESOURCE_CAPABILITY_UNAVAILABLE",
    ServiceOther = 50 => "MMS_ERROR_SERVICE_OTHER",
    ServiceObjectConstraintConflict = 55 => "MMS_ERROR_SERVICE_OBJECT_CONSTRAINT_CONFLICT",
    ServicePreemptOther = 60 => "MMS_ERROR_SERVICE_PREEMPT_OTHER",
    TimeResolutionOther = 70 => "MMS_ERROR_TIME_RESOLUTION_OTHER",
    AccessOther = 80 => "MMS_ERROR_ACCESS_OTHER",
    AccessObjectNonExistent = 81 => "MMS_ERROR_ACCESS_OBJECT_NON_EXISTENT",
    AccessObjectAccessUnsupported = 82 => "MMS_ERROR_ACCESS_OBJECT_ACCESS_UNSUPPORTED",
    AccessObjectAccessDenied = 83 => "MMS_ERROR_ACCESS_OBJECT_ACCESS_DENIED",
    AccessObjectInvalidated = 84 => "MMS_ERROR_ACCESS_OBJECT_INVALIDATED",
    AccessObjectValueInvalid = 85 => "MMS_ERROR_ACCESS_OBJECT_VALUE_INVALID",
    AccessTemporarilyUnavailable = 86 => "MMS_ERROR_ACCESS_TEMPORARILY_UNAVAILABLE",
    FileOther = 90 => "MMS_ERROR_FILE_OTHER",
    FileFilenameAmbiguous = 91 => "MMS_ERROR_FILE_FILENAME_AMBIGUOUS",
    FileFileBusy = 92 => "MMS_ERROR_FILE_FILE_BUSY",
    FileFilenameSyntaxError = 93 => "MMS_ERROR_FILE_FILENAME_SYNTAX_ERROR",
    FileContentTypeInvalid = 94 => "MMS_ERROR_FILE_CONTENT_TYPE_INVALID",
    FilePositionInvalid = 95 => "MMS_ERROR_FILE_POSITION_INVALID",
    FileFileAccessDenied = 96 => "MMS_ERROR_FILE_FILE_ACCESS_DENIED",
    FileFileNonExistent = 97 => "MMS_ERROR_FILE_FILE_NON_EXISTENT",
    FileDuplicateFilename = 98 => "MMS_ERROR_FILE_DUPLICATE_FILENAME",
    FileInsufficientSpaceInFilestore = 99 => "MMS_ERROR_FILE_INSUFFICIENT_SPACE_IN_FILESTORE",
    RejectOther = 100 => "MMS_ERROR_REJECT_OTHER",
    RejectUnknownPduType = 101 => "MMS_ERROR_REJECT_UNKNOWN_PDU_TYPE",
    RejectInvalidPdu = 102 => "MMS_ERROR_REJECT_INVALID_PDU",
    RejectUnrecognizedService = 103 => "MMS_ERROR_REJECT_UNRECOGNIZED_SERVICE",
    RejectUnrecognizedModifier = 104 => "MMS_ERROR_REJECT_UNRECOGNIZED_MODIFIER",
    RejectRequestInvalidArgument = 105 => "MMS_ERROR_REJECT_REQUEST_INVALID_ARGUMENT",
}

impl MmsErrorCode {
    /// Check if this code signals success
    pub fn is_none(&self) -> bool {
        matches!(self, MmsErrorCode::None)
    }
}

/// Label lookup for a raw numeric code
pub fn label_for_code(code: i32) -> &'static str {
    MmsErrorCode::from_code(code).label()
}

impl fmt::Display for MmsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MmsErrorCode::Unrecognized(code) => write!(f, "{} ({})", UNKNOWN_LABEL, code),
            known => f.write_str(known.label()),
        }
    }
}

impl Serialize for MmsErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
