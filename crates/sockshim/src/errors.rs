//! Canonical socket error codes and their platform mappings.

use std::io;
use thiserror::Error;

/// Cross-platform socket error set.
///
/// One variant per code the platform wrappers translate. Each platform
/// maps its native error numbers onto this set so transport code never
/// branches on platform specifics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SockError {
    #[error("operation interrupted")]
    Interrupted,
    #[error("access denied")]
    AccessDenied,
    #[error("bad address")]
    BadAddress,
    #[error("invalid argument")]
    InvalidInput,
    #[error("operation not permitted")]
    NotPermitted,
    #[error("operation not implemented")]
    Unimplemented,
    #[error("operation would block")]
    WouldBlock,
    #[error("operation in progress")]
    InProgress,
    #[error("operation already in progress")]
    AlreadyInProgress,
    #[error("not a socket")]
    NotSocket,
    #[error("destination address required")]
    DestinationRequired,
    #[error("message too large")]
    MessageTooLarge,
    #[error("wrong protocol type for socket")]
    WrongProtocolType,
    #[error("bad protocol option")]
    BadProtocolOption,
    #[error("protocol not supported")]
    ProtocolUnsupported,
    #[error("operation not supported")]
    OperationUnsupported,
    #[error("address family not supported")]
    AddressFamilyUnsupported,
    #[error("address in use")]
    AddressInUse,
    #[error("address not available")]
    AddressUnavailable,
    #[error("network is down")]
    NetworkDown,
    #[error("network unreachable")]
    NetworkUnreachable,
    #[error("network dropped connection on reset")]
    NetworkReset,
    #[error("connection aborted")]
    ConnectionAborted,
    #[error("connection reset by peer")]
    ConnectionReset,
    #[error("no buffer space available")]
    NoBuffers,
    #[error("out of memory")]
    OutOfMemory,
    #[error("socket already connected")]
    AlreadyConnected,
    #[error("socket not connected")]
    NotConnected,
    #[error("operation timed out")]
    TimedOut,
    #[error("connection refused")]
    ConnectionRefused,
    #[error("host unreachable")]
    HostUnreachable,
    #[error("socket type not supported")]
    SocketTypeUnsupported,
    #[error("protocol family not supported")]
    ProtocolFamilyUnsupported,
    #[error("socket shut down")]
    Shutdown,
    #[error("host is down")]
    HostDown,
    #[error("broken pipe")]
    BrokenPipe,
}

impl SockError {
    /// A send or receive against a locally shut down direction.
    pub const LOCAL_SHUTDOWN: SockError = SockError::BrokenPipe;
    /// The peer shut the connection down mid-operation.
    pub const PEER_SHUTDOWN: SockError = SockError::BrokenPipe;
    /// A non-blocking connect that has not finished yet.
    pub const CONN_IN_PROGRESS: SockError = SockError::InProgress;
    /// A send/receive timeout expired.
    pub const SND_RCV_TIMED_OUT: SockError = SockError::WouldBlock;
    /// The socket subsystem is not available on this host.
    pub const SYS_NOT_READY: SockError = SockError::OperationUnsupported;
    /// A receive against a locally shut down receive direction
    /// surfaces as success, not as an error.
    pub const LOCAL_RCV_SHUTDOWN: Option<SockError> = None;

    /// All canonical codes, for exhaustive table checks.
    pub const ALL: [SockError; 36] = [
        SockError::Interrupted,
        SockError::AccessDenied,
        SockError::BadAddress,
        SockError::InvalidInput,
        SockError::NotPermitted,
        SockError::Unimplemented,
        SockError::WouldBlock,
        SockError::InProgress,
        SockError::AlreadyInProgress,
        SockError::NotSocket,
        SockError::DestinationRequired,
        SockError::MessageTooLarge,
        SockError::WrongProtocolType,
        SockError::BadProtocolOption,
        SockError::ProtocolUnsupported,
        SockError::OperationUnsupported,
        SockError::AddressFamilyUnsupported,
        SockError::AddressInUse,
        SockError::AddressUnavailable,
        SockError::NetworkDown,
        SockError::NetworkUnreachable,
        SockError::NetworkReset,
        SockError::ConnectionAborted,
        SockError::ConnectionReset,
        SockError::NoBuffers,
        SockError::OutOfMemory,
        SockError::AlreadyConnected,
        SockError::NotConnected,
        SockError::TimedOut,
        SockError::ConnectionRefused,
        SockError::HostUnreachable,
        SockError::SocketTypeUnsupported,
        SockError::ProtocolFamilyUnsupported,
        SockError::Shutdown,
        SockError::HostDown,
        SockError::BrokenPipe,
    ];

    /// Native errno value for this code.
    #[cfg(unix)]
    pub fn errno(&self) -> i32 {
        match self {
            SockError::Interrupted => libc::EINTR,
            SockError::AccessDenied => libc::EACCES,
            SockError::BadAddress => libc::EFAULT,
            SockError::InvalidInput => libc::EINVAL,
            SockError::NotPermitted => libc::EPERM,
            SockError::Unimplemented => libc::ENOSYS,
            SockError::WouldBlock => libc::EAGAIN,
            SockError::InProgress => libc::EINPROGRESS,
            SockError::AlreadyInProgress => libc::EALREADY,
            SockError::NotSocket => libc::ENOTSOCK,
            SockError::DestinationRequired => libc::EDESTADDRREQ,
            SockError::MessageTooLarge => libc::EMSGSIZE,
            SockError::WrongProtocolType => libc::EPROTOTYPE,
            SockError::BadProtocolOption => libc::ENOPROTOOPT,
            SockError::ProtocolUnsupported => libc::EPROTONOSUPPORT,
            SockError::OperationUnsupported => libc::EOPNOTSUPP,
            SockError::AddressFamilyUnsupported => libc::EAFNOSUPPORT,
            SockError::AddressInUse => libc::EADDRINUSE,
            SockError::AddressUnavailable => libc::EADDRNOTAVAIL,
            SockError::NetworkDown => libc::ENETDOWN,
            SockError::NetworkUnreachable => libc::ENETUNREACH,
            SockError::NetworkReset => libc::ENETRESET,
            SockError::ConnectionAborted => libc::ECONNABORTED,
            SockError::ConnectionReset => libc::ECONNRESET,
            SockError::NoBuffers => libc::ENOBUFS,
            SockError::OutOfMemory => libc::ENOMEM,
            SockError::AlreadyConnected => libc::EISCONN,
            SockError::NotConnected => libc::ENOTCONN,
            SockError::TimedOut => libc::ETIMEDOUT,
            SockError::ConnectionRefused => libc::ECONNREFUSED,
            SockError::HostUnreachable => libc::EHOSTUNREACH,
            SockError::SocketTypeUnsupported => libc::ESOCKTNOSUPPORT,
            SockError::ProtocolFamilyUnsupported => libc::EPFNOSUPPORT,
            SockError::Shutdown => libc::ESHUTDOWN,
            SockError::HostDown => libc::EHOSTDOWN,
            SockError::BrokenPipe => libc::EPIPE,
        }
    }

    /// Canonical code for a native errno value, if the table maps it.
    ///
    /// Partial inverse of [`SockError::errno`]: platforms alias some
    /// numbers (`EWOULDBLOCK` and `EAGAIN` share a value on Linux), so
    /// aliased inputs resolve to the canonical variant.
    #[cfg(unix)]
    pub fn from_errno(errno: i32) -> Option<SockError> {
        SockError::ALL.iter().copied().find(|e| e.errno() == errno)
    }

    /// Closest [`io::ErrorKind`] for embedding in `std::io` surfaces.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            SockError::Interrupted => io::ErrorKind::Interrupted,
            SockError::AccessDenied | SockError::NotPermitted => io::ErrorKind::PermissionDenied,
            SockError::BadAddress
            | SockError::InvalidInput
            | SockError::DestinationRequired
            | SockError::MessageTooLarge
            | SockError::WrongProtocolType
            | SockError::BadProtocolOption => io::ErrorKind::InvalidInput,
            SockError::Unimplemented
            | SockError::ProtocolUnsupported
            | SockError::OperationUnsupported
            | SockError::AddressFamilyUnsupported
            | SockError::SocketTypeUnsupported
            | SockError::ProtocolFamilyUnsupported => io::ErrorKind::Unsupported,
            SockError::WouldBlock | SockError::InProgress | SockError::AlreadyInProgress => {
                io::ErrorKind::WouldBlock
            }
            SockError::AddressInUse => io::ErrorKind::AddrInUse,
            SockError::AddressUnavailable => io::ErrorKind::AddrNotAvailable,
            SockError::ConnectionAborted => io::ErrorKind::ConnectionAborted,
            SockError::ConnectionReset | SockError::NetworkReset => io::ErrorKind::ConnectionReset,
            SockError::OutOfMemory | SockError::NoBuffers => io::ErrorKind::OutOfMemory,
            SockError::NotConnected => io::ErrorKind::NotConnected,
            SockError::TimedOut => io::ErrorKind::TimedOut,
            SockError::ConnectionRefused => io::ErrorKind::ConnectionRefused,
            SockError::Shutdown | SockError::BrokenPipe => io::ErrorKind::BrokenPipe,
            SockError::NotSocket
            | SockError::AlreadyConnected
            | SockError::NetworkDown
            | SockError::NetworkUnreachable
            | SockError::HostUnreachable
            | SockError::HostDown => io::ErrorKind::Other,
        }
    }
}
