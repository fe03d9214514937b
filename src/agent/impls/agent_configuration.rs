use std::sync::Arc;
use std::time::Duration;
use log::{debug, info, warn};
use once_cell::sync::OnceCell;
use crate::agent::enums::agent_lifecycle_event::AgentLifecycleEvent;
use crate::agent::enums::remote_config_error::RemoteConfigError;
use crate::agent::enums::resolution_tier::ResolutionTier;
use crate::agent::enums::setting_key::SettingKey;
use crate::agent::enums::setting_value::SettingValue;
use crate::agent::structs::agent_configuration::AgentConfiguration;
use crate::agent::structs::resolved_settings::ResolvedSettings;
use crate::agent::traits::build_parameter_source::BuildParameterSource;
use crate::agent::traits::remote_channel_factory::RemoteChannelFactory;
use crate::config::impls::agent_config::{DEFAULT_CLIENT_IDENTIFIER, DEFAULT_RPC_TIMEOUT};
use crate::config::structs::agent_config::AgentConfig;

impl AgentConfiguration {
    pub fn new(build_parameters: Arc<dyn BuildParameterSource>, channel_factory: Arc<dyn RemoteChannelFactory>) -> AgentConfiguration
    {
        AgentConfiguration {
            build_parameters,
            channel_factory,
            remote: OnceCell::new(),
            client_identifier: String::from(DEFAULT_CLIENT_IDENTIFIER),
            connect_timeout: Duration::from_secs(DEFAULT_RPC_TIMEOUT),
            call_timeout: Duration::from_secs(DEFAULT_RPC_TIMEOUT),
        }
    }

    pub fn from_config(config: &AgentConfig, build_parameters: Arc<dyn BuildParameterSource>, channel_factory: Arc<dyn RemoteChannelFactory>) -> AgentConfiguration
    {
        let timeout = Duration::from_secs(config.rpc_timeout);
        AgentConfiguration {
            client_identifier: config.client_identifier.clone(),
            connect_timeout: timeout,
            call_timeout: timeout,
            ..AgentConfiguration::new(build_parameters, channel_factory)
        }
    }

    /// Upper bound for a single remote call, on top of the transport's own timeout.
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> AgentConfiguration
    {
        self.call_timeout = call_timeout;
        self
    }

    pub fn is_bound(&self) -> bool
    {
        self.remote.get().is_some()
    }

    /// Binds the remote authority on the first call with a non-empty `server_url`.
    ///
    /// Later calls never replace an established channel. When the channel
    /// cannot be created the resolver stays unbound and a later notification
    /// may try again. Returns whether a channel is bound after the call.
    pub fn on_configuration_loaded(&self, server_url: Option<&str>) -> bool
    {
        let Some(server_url) = server_url.map(str::trim).filter(|url| !url.is_empty()) else {
            debug!("[AGENT] Configuration loaded without server URL, settings resolve from build parameters and defaults");
            return self.is_bound();
        };

        let mut created = false;
        let bound = self.remote.get_or_try_init(|| {
            created = true;
            self.channel_factory.create(server_url, &self.client_identifier, self.connect_timeout, false)
        });
        match bound {
            Ok(_) => {
                if created {
                    info!("[AGENT] Remote configuration bound to {}", server_url);
                }
                true
            }
            Err(error) => {
                warn!("[AGENT] Unable to bind remote configuration to {}: {}", server_url, error);
                false
            }
        }
    }

    pub fn handle_event(&self, event: &AgentLifecycleEvent)
    {
        if let AgentLifecycleEvent::ConfigurationLoaded { server_url } = event {
            self.on_configuration_loaded(server_url.as_deref());
        }
    }

    /// Effective value of `key`; always the declared type of the key.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn resolve(&self, key: SettingKey) -> SettingValue
    {
        for tier in key.resolution_tiers() {
            let resolved = match tier {
                ResolutionTier::BuildParameter => self.resolve_from_build(key),
                ResolutionTier::RemoteAuthority => self.resolve_from_remote(key).await,
            };
            if let Some(value) = resolved {
                return value;
            }
        }
        key.default_value()
    }

    fn resolve_from_build(&self, key: SettingKey) -> Option<SettingValue>
    {
        let raw = self.build_parameters.shared_parameter(key.parameter_name())?;
        let parsed = key.setting_type().parse(&raw);
        if parsed.is_none() {
            debug!("[AGENT] Build parameter {}='{}' is not a valid {}, falling back", key, raw, key.setting_type());
        }
        parsed
    }

    async fn resolve_from_remote(&self, key: SettingKey) -> Option<SettingValue>
    {
        let channel = self.remote.get()?;
        let method = key.remote_method_path()?;

        let returned = match tokio::time::timeout(self.call_timeout, channel.call(&method)).await {
            Ok(Ok(returned)) => returned?,
            Ok(Err(error)) => {
                debug!("[AGENT] Remote call {} failed: {}", method, error);
                return None;
            }
            Err(_) => {
                debug!("[AGENT] Remote call {} failed: {}", method, RemoteConfigError::Timeout(self.call_timeout));
                return None;
            }
        };

        let validated = key.setting_type().validate_remote(&returned);
        if validated.is_none() {
            debug!("[AGENT] Remote call {} returned {} which is not a valid {}, falling back", method, returned, key.setting_type());
        }
        validated
    }

    async fn resolve_as<T>(&self, key: SettingKey) -> T
    where
        T: TryFrom<SettingValue> + Default,
    {
        match T::try_from(self.resolve(key).await) {
            Ok(value) => value,
            Err(_) => T::try_from(key.default_value()).unwrap_or_default()
        }
    }

    pub async fn is_download_enabled(&self) -> bool
    {
        self.resolve_as(SettingKey::DownloadEnabled).await
    }

    pub async fn is_seeding_enabled(&self) -> bool
    {
        self.resolve_as(SettingKey::SeedingEnabled).await
    }

    pub async fn max_seeded_torrents(&self) -> u32
    {
        self.resolve_as(SettingKey::MaxSeededTorrents).await
    }

    pub async fn min_seeders_for_download(&self) -> u32
    {
        self.resolve_as(SettingKey::MinSeedersForDownload).await
    }

    /// Seconds.
    pub async fn max_piece_download_time(&self) -> u32
    {
        self.resolve_as(SettingKey::MaxPieceDownloadTime).await
    }

    pub async fn file_size_threshold_bytes(&self) -> u64
    {
        self.resolve_as(SettingKey::FileSizeThresholdBytes).await
    }

    /// Seconds.
    pub async fn socket_timeout(&self) -> u32
    {
        self.resolve_as(SettingKey::SocketTimeout).await
    }

    /// Seconds.
    pub async fn cleanup_timeout(&self) -> u32
    {
        self.resolve_as(SettingKey::CleanupTimeout).await
    }

    pub async fn max_connections(&self) -> u32
    {
        self.resolve_as(SettingKey::MaxConnections).await
    }

    pub async fn announce_url(&self) -> String
    {
        self.resolve_as(SettingKey::AnnounceUrl).await
    }

    pub async fn snapshot(&self) -> ResolvedSettings
    {
        ResolvedSettings {
            download_enabled: self.is_download_enabled().await,
            seeding_enabled: self.is_seeding_enabled().await,
            max_seeded_torrents: self.max_seeded_torrents().await,
            min_seeders_for_download: self.min_seeders_for_download().await,
            max_piece_download_time: self.max_piece_download_time().await,
            file_size_threshold_bytes: self.file_size_threshold_bytes().await,
            socket_timeout: self.socket_timeout().await,
            cleanup_timeout: self.cleanup_timeout().await,
            max_connections: self.max_connections().await,
            announce_url: self.announce_url().await,
            remote_bound: self.is_bound(),
        }
    }
}
