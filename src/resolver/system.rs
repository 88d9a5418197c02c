//! POSIX resolver backend (`getaddrinfo` / `getnameinfo`).
//!
//! Reverse lookups go through `dns_lookup`. Forward lookups walk the
//! `getaddrinfo` list directly so entries of unknown families are kept.

#![allow(unsafe_code)]

use std::ffi::{CStr, CString};
use std::marker::PhantomData;
use std::mem;
use std::net::SocketAddr;
use std::ptr;

use socket2::SockAddr;
use tracing::{debug, trace};

use super::{ResolveError, Resolver};
use crate::state::{
    AddressFamily, Endpoint, FamilyFilter, Protocol, Query, ReverseInfo, SocketTypeFilter,
};

/// Resolver backed by the C library's name-resolution functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    /// Creates a new system resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Resolver for SystemResolver {
    fn forward(&self, query: &Query) -> Result<Vec<Endpoint>, ResolveError> {
        let host = CString::new(query.host.as_str())
            .map_err(|_| ResolveError::new(libc::EAI_NONAME, "host contains a NUL byte"))?;
        let service = query
            .service
            .as_deref()
            .map(CString::new)
            .transpose()
            .map_err(|_| ResolveError::new(libc::EAI_SERVICE, "service contains a NUL byte"))?;

        // SAFETY: `addrinfo` is a plain C struct for which all-zero is the documented
        // "no hints" value; the fields that matter are set below.
        let mut hints: libc::addrinfo = unsafe { mem::zeroed() };
        hints.ai_flags = libc::AI_CANONNAME;
        hints.ai_family = match query.family {
            FamilyFilter::Any => libc::AF_UNSPEC,
            FamilyFilter::Ipv4 => libc::AF_INET,
            FamilyFilter::Ipv6 => libc::AF_INET6,
        };
        hints.ai_socktype = match query.socket_type {
            SocketTypeFilter::Any => 0,
            SocketTypeFilter::Stream => libc::SOCK_STREAM,
            SocketTypeFilter::Datagram => libc::SOCK_DGRAM,
        };

        debug!(
            host = %query.host,
            service = ?query.service,
            family = hints.ai_family,
            socktype = hints.ai_socktype,
            "getaddrinfo"
        );

        let mut res: *mut libc::addrinfo = ptr::null_mut();
        // SAFETY: `host` and `service` are NUL-terminated and outlive the call, `hints`
        // is initialized and `res` is a valid out-pointer.
        let ret = unsafe {
            libc::getaddrinfo(
                host.as_ptr(),
                service.as_ref().map_or(ptr::null(), |s| s.as_ptr()),
                &hints,
                &mut res,
            )
        };
        if ret != 0 {
            let os_error = std::io::Error::last_os_error();
            return Err(gai_error(ret, &os_error));
        }

        let list = AddrInfoList(res);
        let endpoints: Vec<Endpoint> = list
            .iter()
            .enumerate()
            .map(|(index, info)| to_endpoint(info, index == 0))
            .collect();

        debug!(count = endpoints.len(), "getaddrinfo returned");

        Ok(endpoints)
    }

    fn reverse(&self, address: SocketAddr, protocol: Protocol) -> Option<ReverseInfo> {
        let flags = if protocol == Protocol::Udp {
            libc::NI_DGRAM
        } else {
            0
        };

        match dns_lookup::getnameinfo(&address, flags) {
            Ok((host, service)) => {
                trace!(%address, %host, %service, "getnameinfo");
                Some(ReverseInfo { host, service })
            }
            Err(e) => {
                trace!(%address, error = ?e, "getnameinfo failed");
                None
            }
        }
    }
}

/// Owns the list returned by `getaddrinfo` and frees it on drop.
struct AddrInfoList(*mut libc::addrinfo);

impl AddrInfoList {
    fn iter(&self) -> AddrInfoIter<'_> {
        AddrInfoIter {
            cur: self.0,
            _list: PhantomData,
        }
    }
}

impl Drop for AddrInfoList {
    fn drop(&mut self) {
        if !self.0.is_null() {
            // SAFETY: the pointer came from a successful `getaddrinfo` call and is
            // freed exactly once.
            unsafe { libc::freeaddrinfo(self.0) };
        }
    }
}

struct AddrInfoIter<'a> {
    cur: *const libc::addrinfo,
    _list: PhantomData<&'a AddrInfoList>,
}

impl<'a> Iterator for AddrInfoIter<'a> {
    type Item = &'a libc::addrinfo;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur.is_null() {
            return None;
        }
        // SAFETY: non-null nodes of the list stay valid while the owning
        // `AddrInfoList` is borrowed.
        let info = unsafe { &*self.cur };
        self.cur = info.ai_next;
        Some(info)
    }
}

fn gai_error(code: i32, os_error: &std::io::Error) -> ResolveError {
    // SAFETY: `gai_strerror` returns a pointer to a static NUL-terminated string.
    let description = unsafe { CStr::from_ptr(libc::gai_strerror(code)) }
        .to_string_lossy()
        .into_owned();

    if code == libc::EAI_SYSTEM {
        ResolveError::new(code, format!("{description} ({os_error})"))
    } else {
        ResolveError::new(code, description)
    }
}

fn protocol_from_raw(protocol: i32) -> Protocol {
    match protocol {
        0 => Protocol::Raw,
        libc::IPPROTO_ICMP => Protocol::Icmp,
        libc::IPPROTO_TCP => Protocol::Tcp,
        libc::IPPROTO_UDP => Protocol::Udp,
        other => Protocol::Unknown(other),
    }
}

fn to_endpoint(info: &libc::addrinfo, first: bool) -> Endpoint {
    let (family, address) = match info.ai_family {
        libc::AF_INET => (AddressFamily::Ipv4, socket_addr(info)),
        libc::AF_INET6 => (AddressFamily::Ipv6, socket_addr(info)),
        other => (AddressFamily::Other(other), None),
    };

    let canonical_name = if first && !info.ai_canonname.is_null() {
        // SAFETY: a non-null `ai_canonname` points to a NUL-terminated string owned
        // by the list.
        let name = unsafe { CStr::from_ptr(info.ai_canonname) };
        Some(name.to_string_lossy().into_owned())
    } else {
        None
    };

    Endpoint {
        family,
        address,
        protocol: protocol_from_raw(info.ai_protocol),
        canonical_name,
    }
}

/// Copies the entry's socket address out of the list.
fn socket_addr(info: &libc::addrinfo) -> Option<SocketAddr> {
    let len = usize::try_from(info.ai_addrlen).ok()?;
    if info.ai_addr.is_null() || len > mem::size_of::<libc::sockaddr_storage>() {
        return None;
    }

    // SAFETY: all-zero is a valid `sockaddr_storage`.
    let mut storage: libc::sockaddr_storage = unsafe { mem::zeroed() };
    // SAFETY: `ai_addr` points to `len` readable bytes and `storage` is at least
    // that large.
    unsafe {
        ptr::copy_nonoverlapping(
            info.ai_addr.cast::<u8>(),
            ptr::addr_of_mut!(storage).cast::<u8>(),
            len,
        );
    }
    // SAFETY: `storage` holds the resolver's initialized address of `ai_addrlen` bytes.
    let addr = unsafe { SockAddr::new(storage, info.ai_addrlen) };
    addr.as_socket()
}
