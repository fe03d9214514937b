#[cfg_attr(test, mockall::automock)]
pub trait PortAllocator: Send + Sync {
    fn get_free_port(&self, preferred_port: u16) -> u16;
}
