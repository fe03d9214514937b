/// A source consulted while resolving a setting.
///
/// Keys list their tiers in priority order; the compiled-in default is used
/// when none of them yields a value.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ResolutionTier {
    /// Shared parameters of the build currently running on the agent.
    BuildParameter,
    /// The remote configuration authority, when bound.
    RemoteAuthority,
}
