//! Documented error ids returned in the `id` field of failed responses.

use std::fmt;

macro_rules! api_error_codes {
    ($( $variant:ident = $id:literal => $description:literal, )+) => {
        /// Remote error reported alongside `stat: "fail"`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ApiErrorCode {
            $( $variant, )+
        }

        impl ApiErrorCode {
            /// Look up a documented error id.
            pub const fn from_id(id: u32) -> Option<Self> {
                match id {
                    $( $id => Some(Self::$variant), )+
                    _ => None,
                }
            }

            pub const fn id(self) -> u32 {
                match self {
                    $( Self::$variant => $id, )+
                }
            }

            pub const fn description(self) -> &'static str {
                match self {
                    $( Self::$variant => $description, )+
                }
            }
        }
    };
}

api_error_codes! {
    ApiKeyWrongFormat = 100 => "apiKey not mentioned or in a wrong format",
    ApiKeyWrong = 101 => "apiKey is wrong",
    WrongFormat = 102 => "format is wrong (should be xml or json)",
    NoSuchMethod = 103 => "No such method exists",
    MonitorIdShouldBeInteger = 200 => "monitorID(s) should be integers",
    MonitorUrlInvalid = 201 => "monitorUrl is invalid",
    MonitorTypeInvalid = 202 => "monitorType is invalid",
    MonitorSubTypeInvalid = 203 => "monitorSubType is invalid",
    MonitorKeywordTypeInvalid = 204 => "monitorKeywordType is invalid",
    MonitorPortInvalid = 205 => "monitorPort is invalid",
    MonitorFriendlyNameRequired = 206 => "monitorFriendlyName is required",
    MonitorAlreadyExists = 207 => "The monitor already exists",
    MonitorSubTypeRequired = 208 => "monitorSubType is required for this type of monitors",
    MonitorKeywordRequired = 209 => "monitorKeyWordType and monitorKeyWordValue are required for this type of monitors",
    MonitorIdNotExists = 210 => "monitorID doesn't exist",
    MonitorIdRequired = 211 => "monitorID is required",
    AccountHasNoMonitors = 212 => "The account has no monitors",
    NoEditsFound = 213 => "At least one of the parameters to be edited are required",
    HttpCredentialsMismatch = 214 => "monitorHTTPUsername and monitorHTTPPassword should both be empty or have values",
    InvalidApiScope = 215 => "monitor specific apiKeys can only use getMonitors method",
    EmailInUse = 216 => "A user with this e-mail already exists",
    NameAndEmailRequired = 217 => "userFirstLastName and userEmail are both required",
    EmailFormatInvalid = 218 => "userEmail is not in the right e-mail format",
    UserCreateNotAllowed = 219 => "This account is not authorized to create users",
    MonitorAlertContactsInvalid = 220 => "monitorAlertContacts value is wrong",
    AccountHasNoAlertContacts = 221 => "The account has no alert contacts",
    AlertContactIdShouldBeInteger = 222 => "alertcontactID(s) should be integers",
    AlertContactTypeAndValueRequired = 223 => "alertContactType and alertContactValue are both required",
    AlertContactTypeNotSupported = 224 => "This alertContactType is not supported",
    AlertContactAlreadyExists = 225 => "The alert contact already exists",
    AlertContactNotFollowing = 226 => "The alert contact is not following @uptimerobot Twitter user. It is required so that the Twitter direct messages (DM) can be sent",
    BoxcarUserNotExists = 227 => "The Boxcar user mentioned does not exist",
    BoxcarUserNotAdded = 228 => "The Boxcar alert contact couldn't be added, please try again later",
    AlertContactIdNotExists = 229 => "alertContactID doesn't exist",
    AlertContactValueShouldBeEmail = 230 => "alertContactValue should be a valid e-mail for this alertContactType",
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (error {})", self.description(), self.id())
    }
}
