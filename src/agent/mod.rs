//! Agent side torrent settings resolution.
//!
//! Every torrent setting an agent needs (seeding, leeching, timeouts,
//! connection limits) is answered by [`AgentConfiguration`] through an
//! ordered chain of sources:
//!
//! 1. The shared parameters of the build currently running on the agent
//! 2. The remote configuration authority, once bound
//! 3. The compiled-in default of the setting
//!
//! Resolution never fails: a missing build, an unparseable parameter, an
//! unbound channel, a remote error or timeout, or a remote value of the wrong
//! type all fall through to the next source.
//!
//! The remote authority is bound at most once, when the host reports that the
//! agent configuration was loaded with a non-empty server URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrent_artifacts::agent::structs::agent_configuration::AgentConfiguration;
//! use torrent_artifacts::agent::structs::current_build_tracker::CurrentBuildTracker;
//! use torrent_artifacts::agent::structs::json_rpc_channel_factory::JsonRpcChannelFactory;
//!
//! let builds = Arc::new(CurrentBuildTracker::new());
//! let settings = AgentConfiguration::new(builds.clone(), Arc::new(JsonRpcChannelFactory));
//! settings.on_configuration_loaded(Some("http://buildserver:8111"));
//!
//! let seeding = settings.is_seeding_enabled().await;
//! ```
//!
//! [`AgentConfiguration`]: structs::agent_configuration::AgentConfiguration

/// Lifecycle listener wiring host events into the resolver.
#[allow(clippy::module_inception)]
pub mod agent;

/// Enumerations: setting keys, value types, resolution tiers, lifecycle events, errors.
pub mod enums;

/// Data structures: the resolver, build tracker and JSON-RPC transport.
pub mod structs;

/// Implementation blocks for the agent types.
pub mod impls;

/// Collaborator seams: build parameters, remote channel and its factory.
pub mod traits;
