use std::io::ErrorKind;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, TcpListener};
use log::{debug, warn};
use crate::tracker::structs::local_port_allocator::LocalPortAllocator;
use crate::tracker::traits::port_allocator::PortAllocator;

/// Ephemeral ports asked from the operating system before giving up.
const EPHEMERAL_ATTEMPTS: usize = 16;

impl LocalPortAllocator {
    /// Whether `port` can be bound on every local IPv4 and IPv6 address.
    ///
    /// Hosts without IPv6 only need the IPv4 bind to succeed.
    pub fn is_port_free(port: u16) -> bool
    {
        if TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).is_err() {
            return false;
        }
        match TcpListener::bind((Ipv6Addr::UNSPECIFIED, port)) {
            Ok(_) => true,
            Err(error) => error.kind() != ErrorKind::AddrInUse && !Self::ipv6_available(),
        }
    }

    fn ipv6_available() -> bool
    {
        TcpListener::bind((IpAddr::V6(Ipv6Addr::LOCALHOST), 0)).is_ok()
    }
}

impl PortAllocator for LocalPortAllocator {
    /// First port at or above `preferred_port` that is free on both address
    /// families, otherwise an ephemeral port chosen by the operating system.
    fn get_free_port(&self, preferred_port: u16) -> u16
    {
        for port in preferred_port.max(1)..=u16::MAX {
            if LocalPortAllocator::is_port_free(port) {
                debug!("[TRACKER] Port {} is free", port);
                return port;
            }
        }

        for _ in 0..EPHEMERAL_ATTEMPTS {
            let ephemeral = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).and_then(|listener| listener.local_addr());
            match ephemeral {
                Ok(address) => {
                    if LocalPortAllocator::is_port_free(address.port()) {
                        return address.port();
                    }
                }
                Err(error) => {
                    warn!("[TRACKER] No ephemeral port available: {}", error);
                    break;
                }
            }
        }

        warn!("[TRACKER] No free port at or above {}", preferred_port);
        preferred_port
    }
}
