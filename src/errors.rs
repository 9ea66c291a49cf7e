/// Errors produced by cluster operations.
///
/// The connection and wire layers produce these; the retry executor only
/// inspects them. `OperationFailure`, `QueryFailure` and `ReplicaSetReconfigured`
/// are specialisations of a potential reconfiguration, but only the base
/// [Error::PotentialReconfiguration] kind takes part in master-change detection.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    // Errors from external libraries
    Io(std::io::Error),

    // Errors raised by the cluster or a node
    ConnectionFailure(String),
    PotentialReconfiguration(String),
    OperationFailure(String),
    QueryFailure(String),
    ReplicaSetReconfigured(String),
    CursorNotFound(String),
    AuthenticationFailure(String),

    // Errors raised by this library
    InvalidArgument(String),
    Simple(String),
}

impl Error {
    /// Stable name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Error::Io(_) => "Io",
            Error::ConnectionFailure(_) => "ConnectionFailure",
            Error::PotentialReconfiguration(_) => "PotentialReconfiguration",
            Error::OperationFailure(_) => "OperationFailure",
            Error::QueryFailure(_) => "QueryFailure",
            Error::ReplicaSetReconfigured(_) => "ReplicaSetReconfigured",
            Error::CursorNotFound(_) => "CursorNotFound",
            Error::AuthenticationFailure(_) => "AuthenticationFailure",
            Error::InvalidArgument(_) => "InvalidArgument",
            Error::Simple(_) => "Simple",
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Io(ref err) => write!(f, "{err}"),

            Error::ConnectionFailure(message)
            | Error::PotentialReconfiguration(message)
            | Error::OperationFailure(message)
            | Error::QueryFailure(message)
            | Error::ReplicaSetReconfigured(message)
            | Error::CursorNotFound(message)
            | Error::AuthenticationFailure(message) => write!(f, "{message}"),

            Error::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Error::Simple(ref err) => write!(f, "error occurred: {err}"),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
